use std::str::FromStr;

use anyhow::{Result, anyhow};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Entropy and information gain over the play-tennis weather data"
)]
pub struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format (table, json)
    #[arg(
        short = 'f',
        long,
        global = true,
        default_value = "table",
        value_name = "FORMAT",
        value_parser = parse_format
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the samples and the gain of every attribute (default)
    Gains,
    /// Entropy of the samples where an attribute takes one value
    Entropy(PartitionArgs),
    /// Gain of splitting one partition further on another attribute
    ConditionalGain(ConditionalGainArgs),
    /// Sample and class counts for each value of an attribute
    Partitions(AttributeArgs),
}

#[derive(Debug, Args)]
pub struct AttributeArgs {
    /// Attribute name, or its zero-based position
    #[arg(long, value_name = "ATTRIBUTE")]
    pub attribute: String,
}

#[derive(Debug, Args)]
pub struct PartitionArgs {
    /// Attribute name, or its zero-based position
    #[arg(long, value_name = "ATTRIBUTE")]
    pub attribute: String,

    /// Attribute value selecting the partition
    #[arg(long, value_name = "VALUE")]
    pub value: String,
}

#[derive(Debug, Args)]
pub struct ConditionalGainArgs {
    /// Attribute selecting the partition to split (name or position)
    #[arg(long, value_name = "ATTRIBUTE")]
    pub attribute: String,

    /// Attribute value selecting the partition
    #[arg(long, value_name = "VALUE")]
    pub value: String,

    /// Attribute to split the partition on (name or position)
    #[arg(long, value_name = "ATTRIBUTE")]
    pub by: String,
}

fn parse_format(raw: &str) -> Result<OutputFormat> {
    let candidates = candidate_spellings(raw);
    for cand in candidates {
        if let Ok(parsed) = OutputFormat::from_str(&cand) {
            return Ok(parsed);
        }
    }
    Err(anyhow!("unknown format '{raw}'"))
}

fn candidate_spellings(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return out;
    }

    out.push(trimmed.to_string());
    out.push(trimmed.to_lowercase());
    out.push(trimmed.replace('_', "-").to_lowercase());
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_table() {
        let cli = Cli::try_parse_from(["infogain"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn verbosity_counts_up_to_trace() {
        let cli = Cli::try_parse_from(["infogain", "-vv", "gains"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Debug);
        let cli = Cli::try_parse_from(["infogain", "gains", "-vvvv"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn format_spellings() {
        for raw in ["json", "JSON", " Json "] {
            assert_eq!(parse_format(raw).unwrap(), OutputFormat::Json);
        }
        assert!(parse_format("yaml").is_err());
        assert!(parse_format("").is_err());
        assert_eq!(OutputFormat::Table.to_string(), "table");
    }

    #[test]
    fn conditional_gain_arguments() {
        let cli = Cli::try_parse_from([
            "infogain",
            "conditional-gain",
            "--attribute",
            "outlook",
            "--value",
            "sunny",
            "--by",
            "humidity",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Command::ConditionalGain(args)) => {
                assert_eq!(args.attribute, "outlook");
                assert_eq!(args.value, "sunny");
                assert_eq!(args.by, "humidity");
            }
            other => panic!("expected conditional-gain, got {other:?}"),
        }
    }

    #[test]
    fn conditional_gain_requires_all_three() {
        for argv in [
            vec!["infogain", "conditional-gain", "--attribute", "outlook", "--value", "sunny"],
            vec!["infogain", "conditional-gain", "--value", "sunny", "--by", "wind"],
            vec!["infogain", "conditional-gain", "--attribute", "outlook", "--by", "wind"],
        ] {
            assert!(Cli::try_parse_from(argv).is_err());
        }
    }

    #[test]
    fn entropy_requires_value() {
        assert!(Cli::try_parse_from(["infogain", "entropy", "--attribute", "wind"]).is_err());
    }
}
