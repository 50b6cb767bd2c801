use clap::{ArgAction, Parser};

use crate::application::dto::PatrolFlags;

/// Keep a Node project's package.json tidy
#[derive(Parser, Debug)]
#[command(name = "patroller")]
#[command(version)]
#[command(disable_version_flag = true)]
#[command(
    about = "Sort, lock, prune and license-check the dependencies of a Node project",
    long_about = None
)]
pub struct Args {
    /// Run every action: sort, lock, unused and license
    #[arg(short, long)]
    pub all: bool,

    /// Remove every unused dependency without asking
    #[arg(short, long)]
    pub force: bool,

    /// Compare dependency licenses with the project license
    #[arg(long)]
    pub license: bool,

    /// Strip `^` from dependency versions and reinstall
    #[arg(short, long)]
    pub lock: bool,

    /// Sort dependencies and devDependencies alphabetically
    #[arg(short, long)]
    pub sort: bool,

    /// Find unused dependencies and uninstall them
    #[arg(short, long)]
    pub unused: bool,

    /// Use yarn instead of npm
    #[arg(long)]
    pub yarn: bool,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Path to a config file (defaults to patroller.config.yml in the project)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The action flags, separated from location options
    pub fn flags(&self) -> PatrolFlags {
        PatrolFlags {
            all: self.all,
            force: self.force,
            license: self.license,
            lock: self.lock,
            sort: self.sort,
            unused: self.unused,
            yarn: self.yarn,
        }
    }
}
