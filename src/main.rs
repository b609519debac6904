mod config;
mod driver;
mod error;
mod token;
mod tokenizer;

use std::{env, fs, io, io::BufWriter, path::Path, process};

use log::{debug, info, warn};

use config::{Config, Mode, LANG_NAME};
use driver::ScanDriver;
use error::Error;

/// Driver code.
fn main() {
    // Logging goes to stderr. Default filter is "warn" if RUST_LOG is not set, which keeps the scan path quiet.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let exit_code = match run(env::args()) {
        Ok(code) => code,
        Err(e) => error::report_and_return(&e),
    };

    process::exit(exit_code);
}

/// Runs the front-end on the arguments and returns the exit code.
fn run(args: impl IntoIterator<Item = String>) -> Result<i32, Error> {
    let config = Config::from_args(args)?;
    info!("{} front-end: {:?} mode on {}", LANG_NAME, config.mode, config.path.display());

    // The file is opened in every mode, so a bad path is always reported.
    let source = read_source(&config.path)?;

    match config.mode {
        Mode::Scan => scan(&source),
        Mode::Parse => {
            warn!("parse mode is not implemented yet; {} was read but not parsed", config.path.display());
            Ok(0)
        },
    }
}

/// Reads the whole source file. Invalid UTF-8 is replaced, so it surfaces as a scan error rather than an open failure.
fn read_source(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Prints every token of the source to stdout, stopping at the first invalid one.
fn scan(source: &str) -> Result<i32, Error> {
    let out = BufWriter::new(io::stdout().lock());
    let err = io::stderr().lock();

    let halt = ScanDriver::new(source, out, err).run()?;
    Ok(halt.exit_code())
}
