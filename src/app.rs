//! Main application orchestration and execution

use crate::{
    cli::Cli,
    config::{display_config_summary, load_config, EnvManager},
    error::{AppError, Result},
    export::{ExportReport, Exporter},
    logging::{ConversionLogger, LoggerFactory},
    models::Config,
    output::{OutputCoordinator, OutputFormatterFactory},
    parser::{JunosParser, ParseOutcome},
};
use std::path::{Path, PathBuf};

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

/// Everything a finished conversion produced
#[derive(Debug)]
pub struct ConversionSummary {
    pub outcome: ParseOutcome,
    pub reports: Vec<ExportReport>,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Result<Self> {
        cli.validate().map_err(AppError::validation)?;
        Ok(Self { cli })
    }

    /// Run the application
    pub fn run(self) -> Result<()> {
        if self.cli.should_show_topic_help() {
            println!("{}", self.cli.display_help());
            return Ok(());
        }

        let config = load_config(self.cli.clone())?;
        let factory = LoggerFactory::new(config.clone());
        let logger = factory.create_conversion_logger();

        logger.logger()
            .debug("Configuration loaded")
            .field("summary", display_config_summary(&config))
            .log();

        for warning in EnvManager::check_env_file(Path::new(".env"))?.unwrap_or_default() {
            logger.logger()
                .warn("Invalid .env entry")
                .field("detail", warning)
                .log();
        }

        let input = self.input_path()?;
        let summary = match convert(&input, &config, &logger) {
            Ok(summary) => summary,
            Err(e) => {
                logger.log_failure(&e);
                return Err(e);
            }
        };

        let coordinator = OutputCoordinator::new(
            OutputFormatterFactory::create_formatter(config.enable_color, config.verbose),
            config.verbose,
        );
        println!("{}", coordinator.display_run(&input, &summary.outcome.stats, &summary.reports)?);

        Ok(())
    }

    fn input_path(&self) -> Result<PathBuf> {
        self.cli
            .file
            .clone()
            .ok_or_else(|| AppError::validation("Must specify an input file via --file"))
    }
}

/// Parse `input` and write every configured format
pub fn convert(input: &Path, config: &Config, logger: &ConversionLogger) -> Result<ConversionSummary> {
    logger.log_start(input);

    let parser = JunosParser::new()?;
    let outcome = parser.parse_file(input)?;
    logger.log_parse_complete(input, &outcome.stats);

    if outcome.is_empty() {
        return Err(AppError::empty_result(format!(
            "no interface records found in {}",
            input.display()
        )));
    }

    let exporter = Exporter::from_config(input, config);
    let reports = exporter.export_all(&outcome.records)?;
    for report in &reports {
        logger.log_export(report);
    }

    Ok(ConversionSummary { outcome, reports })
}
