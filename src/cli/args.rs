//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::BranchingMode;

/// Referral matrix calculator: five-level income projection, status tiers and dashboard
#[derive(Parser, Debug)]
#[command(name = "cakematrix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Local config file (overrides the global config)
    #[arg(short, long, global = true, env = "CAKEMATRIX_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Snapshot file (default: configured snapshot or demo data)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project network size and income for a number of direct recruits
    Project {
        /// Direct recruits (parsed leniently: "12abc" is 12, non-numeric is 0)
        #[arg(allow_hyphen_values = true)]
        input: String,
        /// Branching mode (default from config)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Show the status tier for a referral count
    Tier {
        /// Number of referrals
        count: u64,
    },

    /// Show profile, matrix levels, total income and referral status
    Dashboard,

    /// Show one matrix level
    Level {
        /// Level number (1-5)
        level: usize,
    },

    /// List referrals, newest first
    Referrals,

    /// Buy the BAKER slot package (payment stub)
    Buy,

    /// Copy the referral link
    Link,

    /// Show the avatar emoji catalog
    Emojis {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template (at --config, else the global path)
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}

/// Branching mode as typed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Every participant brings three people
    X3,
    /// Every participant brings ten people
    #[value(alias = "xx")]
    X10,
}

impl From<ModeArg> for BranchingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::X3 => BranchingMode::LinearTriple,
            ModeArg::X10 => BranchingMode::LinearTen,
        }
    }
}
