use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "specfilter",
    bin_name = "specfilter",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Filter a product catalog with composable specifications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging (or set SPECFILTER_LOG)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Read configuration from this file first
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the products that satisfy every condition
    #[command(alias = "f")]
    Filter {
        /// Condition as ATTR=VALUE or ATTR!=VALUE (repeatable, joined by AND)
        #[arg(short = 'w', long = "where", value_name = "COND")]
        conditions: Vec<String>,

        /// JSON specification file, joined by AND with the conditions
        #[arg(short, long, value_name = "FILE")]
        spec: Option<PathBuf>,

        /// JSON catalog to filter (defaults to the built-in sample)
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the attributes conditions can test
    Attrs,

    /// Run the sample filters on the sample catalog
    Demo {
        /// Also write the sample catalog to this JSON file
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },
}
