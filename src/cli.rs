// src/cli.rs
//
// Argument handling for the `etl` binary. Environment and `.env` first,
// flags on top.

use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::net::{HttpClient, NetError},
    etl::{self, EtlError},
    progress::ConsoleProgress,
};

pub const HELP: &str = include_str!("etl_help.txt");

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run,
    Help,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}\n\nRun with --help for usage.")]
    Args(String),
    #[error(transparent)]
    Net(#[from] NetError),
    #[error(transparent)]
    Etl(#[from] EtlError),
}

/// Apply flags (program name already skipped) on top of `opts`.
pub fn parse_args<I>(args: I, opts: &mut AppOptions) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--fresh" => opts.etl.fresh = true,
            "--max-pages" => {
                let v = args.next().ok_or_else(|| CliError::Args(s!("Missing value for --max-pages")))?;
                let n: u32 = v
                    .trim()
                    .parse()
                    .map_err(|_| CliError::Args(format!("Invalid page count: {v}")))?;
                if n == 0 {
                    return Err(CliError::Args(s!("--max-pages must be at least 1")));
                }
                opts.etl.max_pages = n;
            }
            "--db" => {
                let v = args.next().ok_or_else(|| CliError::Args(s!("Missing value for --db")))?;
                opts.db.path = PathBuf::from(v);
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(CliError::Args(format!("Unknown arg: {a}"))),
        }
    }
    Ok(Command::Run)
}

pub fn run() -> Result<(), CliError> {
    let mut opts = AppOptions::from_env();
    match parse_args(std::env::args().skip(1), &mut opts)? {
        Command::Help => {
            eprintln!("{HELP}");
            return Ok(());
        }
        Command::Run => {}
    }

    logd!("ETL options: {opts:?}");
    let client = HttpClient::new(opts.etl.http_timeout)?;
    let mut progress = ConsoleProgress::default();
    let report = etl::run(&opts, &client, &mut progress)?;

    println!("{report}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_override_options() {
        let mut opts = AppOptions::default();
        let cmd = parse_args(args(&["--fresh", "--max-pages", "3", "--db", "/tmp/x.db"]), &mut opts).unwrap();
        assert_eq!(cmd, Command::Run);
        assert!(opts.etl.fresh);
        assert_eq!(opts.etl.max_pages, 3);
        assert_eq!(opts.db.path, PathBuf::from("/tmp/x.db"));
    }

    #[test]
    fn no_flags_keeps_defaults() {
        let mut opts = AppOptions::default();
        assert_eq!(parse_args(Vec::new(), &mut opts).unwrap(), Command::Run);
        assert_eq!(opts, AppOptions::default());
    }

    #[test]
    fn help_wins() {
        let mut opts = AppOptions::default();
        assert_eq!(parse_args(args(&["-h"]), &mut opts).unwrap(), Command::Help);
        assert!(HELP.contains("--max-pages"));
    }

    #[test]
    fn bad_args_are_rejected() {
        let mut opts = AppOptions::default();
        for bad in [&["--max-pages"][..], &["--max-pages", "zero"], &["--max-pages", "0"], &["--db"], &["--wat"]] {
            assert!(matches!(parse_args(args(bad), &mut opts), Err(CliError::Args(_))), "{bad:?}");
        }
    }
}
