use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mealplan", version, about = "Command-line client for the meal-planning API")]
pub struct Cli {
    /// Directory holding mealplan.toml
    #[arg(long, global = true, env = "MEALPLAN_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Directory for mealplan.log (defaults to the config directory)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Echo debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(subcommand)]
    Households(HouseholdsCommand),

    #[command(subcommand)]
    ValidIngredients(ValidIngredientsCommand),
}

#[derive(Debug, Subcommand)]
pub enum HouseholdsCommand {
    /// List households visible to the session
    List(PageArgs),
    /// Fetch one household by ID
    Get { id: String },
    /// Fetch the household the session is acting in
    Current,
}

#[derive(Debug, Subcommand)]
pub enum ValidIngredientsCommand {
    /// Full-text search over valid ingredients
    Search {
        query: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Debug, Clone, Copy, Default, Args)]
pub struct PageArgs {
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub page: Option<u16>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=250))]
    pub limit: Option<u8>,
}
