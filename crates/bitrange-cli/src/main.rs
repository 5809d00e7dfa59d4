//! BitRange CLI
//!
//! Query wildcard bit-patterns from the command line.

use anyhow::{Context, Result};
use bitrange_core::{BitRange, Word};
use bitrange_pattern::{
    format, format_count, match_count, match_probability, ParsePolicy, PatternParser,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "bitrange")]
#[command(author = "BitRange Team")]
#[command(version = "0.1.0")]
#[command(about = "Match wildcard bit-patterns against values and intervals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word width in bits
    #[arg(short, long, global = true, value_enum, default_value = "8")]
    width: WidthArg,

    /// Skip unrecognized pattern characters instead of rejecting them
    #[arg(long, global = true)]
    lenient: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the base, mask and coverage of a pattern
    Parse {
        /// Pattern text, e.g. "011?'??10"
        pattern: String,
    },

    /// Check whether a value matches a pattern
    Match {
        /// Pattern text
        pattern: String,

        /// Value (decimal, 0b, 0o or 0x)
        value: String,
    },

    /// Check whether any value of [BEGIN, END] matches a pattern
    Intersects {
        /// Pattern text
        pattern: String,

        /// First value of the interval
        begin: String,

        /// Last value of the interval
        end: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WidthArg {
    #[value(name = "8")]
    W8,
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

impl WidthArg {
    fn bits(self) -> u32 {
        match self {
            WidthArg::W8 => 8,
            WidthArg::W16 => 16,
            WidthArg::W32 => 32,
            WidthArg::W64 => 64,
        }
    }
}

/// Settings shared by every subcommand
#[derive(Debug, Clone, Copy, Serialize)]
struct QueryOptions {
    width: u32,
    policy: ParsePolicy,
    json: bool,
}

#[derive(Debug, Serialize)]
struct PatternReport {
    pattern: String,
    base: String,
    mask: String,
    match_count: String,
    match_probability: f64,
}

#[derive(Debug, Serialize)]
struct QueryReport {
    options: QueryOptions,
    pattern: PatternReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    begin: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<bool>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let options = QueryOptions {
        width: cli.width.bits(),
        policy: if cli.lenient {
            ParsePolicy::Lenient
        } else {
            ParsePolicy::Strict
        },
        json: cli.json,
    };

    match cli.width {
        WidthArg::W8 => run::<u8>(&cli.command, options),
        WidthArg::W16 => run::<u16>(&cli.command, options),
        WidthArg::W32 => run::<u32>(&cli.command, options),
        WidthArg::W64 => run::<u64>(&cli.command, options),
    }
}

fn run<W: Word>(command: &Commands, options: QueryOptions) -> Result<()> {
    let parser = PatternParser::new(options.policy);

    let report = match command {
        Commands::Parse { pattern } => {
            let range = parse_pattern::<W>(&parser, pattern)?;
            QueryReport {
                options,
                pattern: describe(&range),
                value: None,
                begin: None,
                end: None,
                result: None,
            }
        }
        Commands::Match { pattern, value } => {
            let range = parse_pattern::<W>(&parser, pattern)?;
            let value = parse_value::<W>(value).context("Invalid value")?;
            let matched = range.matches(value);
            info!(%value, matched, "match");
            QueryReport {
                options,
                pattern: describe(&range),
                value: Some(value.into()),
                begin: None,
                end: None,
                result: Some(matched),
            }
        }
        Commands::Intersects {
            pattern,
            begin,
            end,
        } => {
            let range = parse_pattern::<W>(&parser, pattern)?;
            let begin = parse_value::<W>(begin).context("Invalid interval begin")?;
            let end = parse_value::<W>(end).context("Invalid interval end")?;
            let intersects = range.try_intersects(begin, end)?;
            info!(%begin, %end, intersects, "intersects");
            QueryReport {
                options,
                pattern: describe(&range),
                value: None,
                begin: Some(begin.into()),
                end: Some(end.into()),
                result: Some(intersects),
            }
        }
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn parse_pattern<W: Word>(parser: &PatternParser, text: &str) -> Result<BitRange<W>> {
    let range = parser
        .parse::<W>(text)
        .with_context(|| format!("Invalid pattern: {}", text))?;
    debug!(base = %range.base(), mask = %range.mask(), "parsed pattern");
    Ok(range)
}

/// Parse an unsigned value with an optional radix prefix and `_`/`'`
/// separators. The value must fit in `W`.
fn parse_value<W: Word>(text: &str) -> Result<W> {
    let digits: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '\''))
        .collect();

    let lower = digits.to_ascii_lowercase();
    let (radix, body) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else {
        (10, lower.as_str())
    };

    W::from_str_radix(body, radix)
        .map_err(|_| anyhow::anyhow!("'{}' is not a {}-bit unsigned value", text, W::BITS))
}

fn describe<W: Word>(range: &BitRange<W>) -> PatternReport {
    let width = W::BITS as usize;
    PatternReport {
        pattern: format(range),
        base: format!("{:0width$b}", range.base()),
        mask: format!("{:0width$b}", range.mask()),
        match_count: format_count(match_count(range)),
        match_probability: match_probability(range),
    }
}

fn print_report(report: &QueryReport) {
    let pattern = &report.pattern;
    println!("Pattern:     {}", pattern.pattern);
    println!("Base:        {}", pattern.base);
    println!("Mask:        {}", pattern.mask);
    println!(
        "Matches:     {} values ({:.6}%)",
        pattern.match_count,
        pattern.match_probability * 100.0
    );

    if let Some(value) = report.value {
        println!("{:-<60}", "");
        println!("Value:       {}", value);
    }
    if let (Some(begin), Some(end)) = (report.begin, report.end) {
        println!("{:-<60}", "");
        println!("Interval:    [{}, {}]", begin, end);
    }
    if let Some(result) = report.result {
        println!("Result:      {}", if result { "match" } else { "no match" });
    }
}
