use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use shapelab::cli::{execute_command, output, Cli};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

/// `-d` count to level: none = warn, then info, debug, trace.
fn verbosity_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Logs go to stderr so drawings and tables on stdout stay pipeable.
/// An explicit `RUST_LOG` wins over `-d`.
fn setup_logging(verbosity: u8) {
    if verbosity > 3 {
        eprintln!("-d given {verbosity} times, trace is the maximum");
    }
    let level = verbosity_filter(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    tracing::info!(%level, "logging initialized");
}
