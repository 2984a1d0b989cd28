//! QFX Convert - Main CLI Application
//!
//! Converts a Junos flat `set` configuration into interface tables.

use clap::Parser;
use qfx_convert::{app::App, cli::Cli, error::ErrorReporter};
use std::process;

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("Please report this issue together with the input that triggered it.");
        process::exit(99);
    }));

    let cli = Cli::parse();
    let reporter = ErrorReporter::new(cli.use_colors(), cli.verbose || cli.debug);

    if let Err(e) = App::new(cli).and_then(App::run) {
        reporter.report_error(&e);
        process::exit(e.exit_code());
    }
}
