//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;

use crate::domain::BrewInput;

/// Pour-by-pour water schedule for the 4:6 pour-over method
///
/// Pour #1 tunes acidity, pour #2 sweetness, pours #3..#5 strength/body.
#[derive(Parser, Debug)]
#[command(name = "foursix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Coffee to water ratio as denominator (default 15 -> 1:15)
    #[arg(long)]
    pub ratio: Option<u32>,

    /// Amount of coffee in grams
    #[arg(short = 'C', long = "coffee-g")]
    pub coffee_g: Option<Decimal>,

    /// Amount of water in grams
    #[arg(short = 'W', long = "water-g")]
    pub water_g: Option<Decimal>,

    /// Override ratio when both coffee and water amounts are specified
    #[arg(long)]
    pub ratio_override: bool,

    /// Seconds for one pour (depends on grind)
    #[arg(short = 'P', long, required_unless_present = "completion")]
    pub pour_time: Option<u32>,

    /// Acidity/sweetness ratio for 40% stage pours as decimal
    #[arg(short = 'r', long)]
    pub ratio40: Option<Decimal>,

    /// Raw 40% stage split in grams with one placeholder: `40/?` or `?/80`
    #[arg(short = 'R', long = "ratio40-raw", allow_hyphen_values = true)]
    pub ratio40_raw: Option<String>,

    /// Pours count for 60% stage (1-3)
    #[arg(short = 'p', long)]
    pub pours60: Option<u8>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print shell completion script and exit
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Header block and one line per pour
    #[default]
    Text,
    /// Resolved request, 40% split and plan as JSON
    Json,
}

impl Cli {
    /// Brew inputs as declared on the command line.
    pub fn brew_input(&self) -> BrewInput {
        BrewInput {
            ratio: self.ratio,
            coffee_g: self.coffee_g,
            water_g: self.water_g,
            ratio_override: self.ratio_override,
            pour_time: self.pour_time.unwrap_or_default(),
            ratio40: self.ratio40,
            ratio40_raw: self.ratio40_raw.clone(),
            pours60: self.pours60,
        }
    }
}
