use std::io::Write;

use anyhow::{Context, Result};
use chrono::{Local, SecondsFormat};
use log::info;
use serde::Serialize;

use crate::core::{AttributeGain, AttributeId, Partition, SampleSet};
use crate::ui::cli::args::{Cli, Command, OutputFormat};
use crate::ui::table;

#[derive(Debug, Serialize)]
struct GainsReport<'a> {
    samples: usize,
    entropy: f64,
    gains: &'a [AttributeGain],
    best: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct EntropyReport<'a> {
    attribute: &'a str,
    value: &'a str,
    entropy: f64,
}

#[derive(Debug, Serialize)]
struct ConditionalGainReport<'a> {
    attribute: &'a str,
    value: &'a str,
    by: &'a str,
    gain: f64,
}

#[derive(Debug, Serialize)]
struct PartitionsReport<'a> {
    attribute: &'a str,
    classes: &'a [String],
    partitions: &'a [Partition],
}

/// A numeric argument selects an attribute by position.
fn attribute_id(raw: &str) -> AttributeId<'_> {
    match raw.parse::<usize>() {
        Ok(index) => AttributeId::ByIndex(index),
        Err(_) => AttributeId::ByName(raw),
    }
}

fn fmtf(x: f64) -> String {
    format!("{x:.6}")
}

fn timestamp_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn write_header<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "generated {}", timestamp_now())?;
    writeln!(out)?;
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, report: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}

pub fn execute<W: Write>(cli: &Cli, set: &SampleSet, out: &mut W) -> Result<()> {
    match &cli.command {
        None | Some(Command::Gains) => gains(set, cli.format, out),
        Some(Command::Entropy(args)) => {
            let id = attribute_id(&args.attribute);
            let entropy = set
                .attribute_entropy(id.clone(), &args.value)
                .with_context(|| format!("failed to compute entropy of {id} = {}", args.value))?;
            let report = EntropyReport {
                attribute: &args.attribute,
                value: &args.value,
                entropy,
            };
            match cli.format {
                OutputFormat::Table => {
                    write_header(out)?;
                    writeln!(
                        out,
                        "entropy({} = {}) = {}",
                        report.attribute,
                        report.value,
                        fmtf(report.entropy)
                    )?;
                    Ok(())
                }
                OutputFormat::Json => write_json(out, &report),
            }
        }
        Some(Command::ConditionalGain(args)) => {
            let gain = set
                .attribute_gain(
                    attribute_id(&args.attribute),
                    &args.value,
                    attribute_id(&args.by),
                )
                .with_context(|| {
                    format!(
                        "failed to compute gain of {} within {} = {}",
                        args.by, args.attribute, args.value
                    )
                })?;
            let report = ConditionalGainReport {
                attribute: &args.attribute,
                value: &args.value,
                by: &args.by,
                gain,
            };
            match cli.format {
                OutputFormat::Table => {
                    write_header(out)?;
                    writeln!(
                        out,
                        "gain({} = {}, {}) = {}",
                        report.attribute,
                        report.value,
                        report.by,
                        fmtf(report.gain)
                    )?;
                    Ok(())
                }
                OutputFormat::Json => write_json(out, &report),
            }
        }
        Some(Command::Partitions(args)) => {
            let partitions = set
                .partition_counts(attribute_id(&args.attribute))
                .with_context(|| format!("failed to partition on '{}'", args.attribute))?;
            match cli.format {
                OutputFormat::Table => {
                    write_header(out)?;
                    let mut headers = vec![args.attribute.clone(), "count".to_string()];
                    headers.extend(set.classes().iter().cloned());
                    let rows: Vec<Vec<String>> = partitions
                        .iter()
                        .map(|p| {
                            let mut row = vec![p.value.clone(), p.count.to_string()];
                            row.extend(p.class_distribution.iter().map(|c| c.to_string()));
                            row
                        })
                        .collect();
                    writeln!(out, "{}", table::render(&headers, &rows))?;
                    Ok(())
                }
                OutputFormat::Json => write_json(
                    out,
                    &PartitionsReport {
                        attribute: &args.attribute,
                        classes: set.classes(),
                        partitions: &partitions,
                    },
                ),
            }
        }
    }
}

fn gains<W: Write>(set: &SampleSet, format: OutputFormat, out: &mut W) -> Result<()> {
    let entropy = set
        .entropy()
        .context("failed to compute entropy of the sample set")?;
    let gains = set.gains().context("failed to compute attribute gains")?;
    let best = set
        .best_attribute()
        .context("failed to rank attributes")?;
    let best = best.as_ref().map(|g| g.attribute.as_str());
    info!(
        "{} samples, {} attributes, best split: {:?}",
        set.len(),
        set.number_of_attributes(),
        best
    );

    match format {
        OutputFormat::Table => {
            write_header(out)?;
            writeln!(out, "{set}")?;
            writeln!(out)?;
            writeln!(out, "entropy = {}", fmtf(entropy))?;
            writeln!(out)?;
            let rows: Vec<Vec<String>> = gains
                .iter()
                .map(|g| vec![g.attribute.clone(), fmtf(g.gain)])
                .collect();
            writeln!(out, "{}", table::render(&["attribute", "gain"], &rows))?;
            Ok(())
        }
        OutputFormat::Json => write_json(
            out,
            &GainsReport {
                samples: set.len(),
                entropy,
                gains: &gains,
                best,
            },
        ),
    }
}
