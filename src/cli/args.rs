use std::path::PathBuf;

use clap::Parser;

/// Play a trivia streak session in the terminal.
#[derive(Debug, Parser)]
#[command(name = "trivia_streak", version)]
pub struct Args {
    /// Seed for the 50/50 option picker
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Amount wagered on the session
    #[arg(long, default_value_t = 1000)]
    pub stake: u64,

    /// Starting lives (defaults to the configured value)
    #[arg(long)]
    pub lives: Option<u32>,

    /// JSON file with the question set (built-in sample questions otherwise)
    #[arg(short, long)]
    pub questions: Option<PathBuf>,

    /// TOML file with engine rules
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Append the settlement as a JSON line to this file
    #[arg(long)]
    pub ledger: Option<PathBuf>,

    /// Log engine events (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["trivia_streak"]);
        assert_eq!(args.stake, 1000);
        assert!(args.seed.is_none());
        assert_eq!(args.log_filter(), "warn");
    }

    #[test]
    fn flags_parse() {
        let args = Args::parse_from([
            "trivia_streak", "--seed", "42", "--stake", "500", "--lives", "3", "-vv",
        ]);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.stake, 500);
        assert_eq!(args.lives, Some(3));
        assert_eq!(args.log_filter(), "debug");
    }
}
