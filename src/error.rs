use std::{error::Error as _, io, path::PathBuf};

use log::debug;

/// Everything that can stop a run of the front-end.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Command line errors.
    #[error("Usage: {program} -scan|-parse <file>")]
    Usage {
        program: String,
    },
    #[error("Unknown mode `{flag}`.\nUsage: {program} -scan|-parse <file>")]
    UnknownMode {
        flag: String,
        program: String,
    },

    // Input errors.
    #[error("Could not open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Writing the scan output failed, e.g. because the reader closed the pipe.
    #[error("Could not write output: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } | Self::UnknownMode { .. } => 2,
            Self::Open { .. } | Self::Output(..) => 1,
        }
    }
}

/// Prints the error on the channel users expect it on and returns the exit code to use.
/// A file that cannot be opened is reported on stdout, everything else on stderr.
pub fn report_and_return(error: &Error) -> i32 {
    match error {
        Error::Open { .. } => println!("{error}"),
        _ => eprintln!("{error}"),
    }

    if let Some(source) = error.source() {
        debug!("caused by: {source}");
    }

    error.exit_code()
}
