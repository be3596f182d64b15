use anyhow::Result;
use clap::CommandFactory;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, CommonArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_tracing(args.common.verbose);

    let inputs = args.input_paths();
    if inputs.is_empty() {
        eprintln!("{} no input files were given", "error:".bold().red());
        eprintln!();
        eprintln!("{}", Arguments::command().render_usage());
        return Ok(ExitStatus::Failure);
    }

    let report = run::run(&args.common, &inputs)?;
    report::print(&report, args.common.quiet);

    if report.has_broken_keys() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` enables debug output.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "i18n_audit=debug" } else { "warn" })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .with_ansi(colored::control::SHOULD_COLORIZE.should_colorize())
        .try_init();
}
