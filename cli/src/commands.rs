pub mod clone;
pub mod find;
pub mod show;

use clap::{ArgAction, Parser, Subcommand};
use rackmap_common::config::Config;

#[derive(Parser)]
#[command(name = "rackmap")]
#[command(about = "Draws a hardware inventory as a tree.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print without colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output; repeat for less
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the whole inventory
    #[command(alias = "s")]
    Show,
    /// Print a single host of the inventory
    #[command(alias = "f")]
    Find { name: String },
    /// Copy the inventory, extend the copy and print both
    #[command(alias = "c")]
    Clone,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_color: self.no_color,
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}
