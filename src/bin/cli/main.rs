//! CLI tool for dumping binary ArcGIS archive files.

mod exit_codes;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use arcdump::{
    ContainerKind, Error, SevenZipBackend, detect::has_seven_zip_suffix,
    dump_seven_zip_contents, dump_zip_contents, sniff_path,
};

use exit_codes::{ExitCode, error_to_exit_code};

/// Dump the contents of binary ArcGIS archive files
#[derive(Parser)]
#[command(name = "arcdump")]
#[command(author, version, about = "Dump the contents of binary ArcGIS archive files", long_about = None)]
pub struct Cli {
    /// The file to be dumped to the console
    input_file: PathBuf,

    /// Log level for diagnostics on stderr
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() {
    // Set up Ctrl+C handler
    ctrlc::set_handler(move || {
        eprintln!("\nInterrupted");
        std::process::exit(exit_codes::USER_INTERRUPT);
    })
    .ok();

    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.into())
        .init();

    let exit_code = run(&cli);
    std::process::exit(exit_code.code());
}

fn run(cli: &Cli) -> ExitCode {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let kind = match sniff_path(&cli.input_file) {
        Ok(kind) => kind,
        Err(e) => return report_error(&e),
    };

    let result = match kind {
        ContainerKind::Zip => dump_zip_contents(&cli.input_file, &mut out),
        ContainerKind::SevenZip => {
            dump_seven_zip_contents(&cli.input_file, SevenZipBackend::resolve(), &mut out)
        }
        // A known 7-Zip suffix is enough to try the 7-Zip walker even when
        // the signature did not match (e.g. a service definition that has
        // been re-wrapped); anything else is rejected.
        ContainerKind::Unknown if has_seven_zip_suffix(&cli.input_file) => {
            dump_seven_zip_contents(&cli.input_file, SevenZipBackend::resolve(), &mut out)
        }
        ContainerKind::Unknown => Err(Error::UnsupportedContainer {
            path: cli.input_file.clone(),
        }),
    };

    let flushed = out.flush();

    match result {
        Ok(()) => match flushed {
            Ok(()) => ExitCode::Success,
            Err(e) => report_error(&Error::Io(e)),
        },
        Err(e) => report_error(&e),
    }
}

fn report_error(error: &Error) -> ExitCode {
    eprintln!("Error: {}", error);
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
    error_to_exit_code(error)
}
