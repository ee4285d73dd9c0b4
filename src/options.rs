//! Launch options for the `tile-typer` binary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};

use crate::core::Dictionary;

pub const USAGE: &str = "\
usage: tile-typer [--seed <u32>] [--words <path>] [--log <path>]

  --seed <u32>    seed the word and tile generator (default: clock)
  --words <path>  word list, one word per line (default: built-in list)
  --log <path>    write logs to this file (filter with RUST_LOG)
  -h, --help      print this message

controls: click letters in order, HELP shows the next one,
          space adds time, r restarts, q quits";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub seed: Option<u32>,
    pub words: Option<PathBuf>,
    pub log: Option<PathBuf>,
    pub help: bool,
}

impl LaunchOptions {
    /// Explicit seed, or one taken from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
                .unwrap_or(1)
        })
    }

    /// The word list named by `--words`, or the built-in one.
    pub fn load_dictionary(&self) -> Result<Dictionary> {
        match &self.words {
            Some(path) => Dictionary::load(path)
                .with_context(|| format!("failed to load word list {}", path.display())),
            None => Dictionary::builtin().context("built-in word list is unusable"),
        }
    }
}

/// Parse arguments (without the program name).
pub fn parse_launch_args(args: &[String]) -> Result<LaunchOptions> {
    let mut opts = LaunchOptions::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                opts.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--words" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --words"))?;
                opts.words = Some(PathBuf::from(v));
            }
            "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log"))?;
                opts.log = Some(PathBuf::from(v));
            }
            "-h" | "--help" => opts.help = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_launch_args_uses_defaults() {
        let opts = parse_launch_args(&[]).unwrap();
        assert_eq!(opts, LaunchOptions::default());
    }

    #[test]
    fn parse_launch_args_reads_every_flag() {
        let opts = parse_launch_args(&args(&[
            "--seed", "42", "--words", "words.txt", "--log", "game.log", "--help",
        ]))
        .unwrap();
        assert_eq!(
            opts,
            LaunchOptions {
                seed: Some(42),
                words: Some(PathBuf::from("words.txt")),
                log: Some(PathBuf::from("game.log")),
                help: true,
            }
        );
        assert_eq!(opts.seed_or_clock(), 42);
    }

    #[test]
    fn parse_launch_args_rejects_bad_input() {
        assert!(parse_launch_args(&args(&["--seed"])).is_err());
        assert!(parse_launch_args(&args(&["--seed", "-1"])).is_err());
        assert!(parse_launch_args(&args(&["--words"])).is_err());
        assert!(parse_launch_args(&args(&["--fast"])).is_err());
    }

    #[test]
    fn missing_word_list_is_reported_with_path() {
        let opts = LaunchOptions {
            words: Some(PathBuf::from("/no/such/list.txt")),
            ..LaunchOptions::default()
        };
        let err = opts.load_dictionary().unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/list.txt"));
    }

    #[test]
    fn builtin_dictionary_is_default() {
        let dict = LaunchOptions::default().load_dictionary().unwrap();
        assert!(!dict.is_empty());
    }
}
