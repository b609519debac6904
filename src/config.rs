//! Command line configuration.

use std::path::PathBuf;

use crate::error::Error;

/// Name of the language this front-end reads.
pub const LANG_NAME: &str = "B-minor";

/// Program name used in the usage line when the OS did not supply one.
pub const DEFAULT_PROGRAM_NAME: &str = "bminor";

/// What the front-end does with the input file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Run the tokenizer and print every token.
    Scan,
    /// Reserved for a parser. Accepted, but does nothing yet.
    Parse,
}

impl Mode {
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "-scan" => Some(Self::Scan),
            "-parse" => Some(Self::Parse),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub path: PathBuf,
}

impl Config {
    /// Builds the configuration from the process arguments, `args[0]` being the program name.
    /// Exactly a mode flag and a file path are expected after it.
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| String::from(DEFAULT_PROGRAM_NAME));
        let rest: Vec<String> = args.collect();

        let [flag, path] = <[String; 2]>::try_from(rest).map_err(|_| Error::Usage { program: program.clone() })?;

        let Some(mode) = Mode::from_flag(&flag) else {
            return Err(Error::UnknownMode { flag, program });
        };

        Ok(Self { mode, path: PathBuf::from(path) })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::error::Error;

    use super::{Config, Mode};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn scan_and_parse_flags() {
        assert_eq!(
            Config { mode: Mode::Scan, path: PathBuf::from("a.bminor") },
            Config::from_args(args(&["bminor", "-scan", "a.bminor"])).unwrap()
        );
        assert_eq!(
            Config { mode: Mode::Parse, path: PathBuf::from("b.bminor") },
            Config::from_args(args(&["bminor", "-parse", "b.bminor"])).unwrap()
        );
    }

    #[test]
    fn wrong_argument_count() {
        let cases: [&[&str]; 3] = [&["bminor"], &["bminor", "-scan"], &["bminor", "-scan", "a", "b"]];
        for list in cases {
            assert!(matches!(Config::from_args(args(list)), Err(Error::Usage { .. })));
        }
    }

    #[test]
    fn unknown_flag_is_rejected() {
        match Config::from_args(args(&["bminor", "-lex", "a.bminor"])) {
            Err(Error::UnknownMode { flag, program }) => {
                assert_eq!("-lex", flag);
                assert_eq!("bminor", program);
            },
            other => panic!("expected an unknown mode error, got {other:?}"),
        }
    }

    #[test]
    fn flags_are_case_sensitive() {
        assert_eq!(None, Mode::from_flag("-SCAN"));
        assert_eq!(None, Mode::from_flag("scan"));
    }

    #[test]
    fn missing_program_name_falls_back() {
        match Config::from_args(Vec::new()) {
            Err(Error::Usage { program }) => assert_eq!("bminor", program),
            other => panic!("expected a usage error, got {other:?}"),
        }
    }
}
