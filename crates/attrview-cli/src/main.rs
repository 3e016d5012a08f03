//! Attrview CLI - render and aggregate attribute view cells

use anyhow::{anyhow, Context, Result};
use attrview::prelude::*;
use attrview::{format_number, format_timestamps, parse_values, read_values};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "attrview")]
#[command(
    author,
    version,
    about = "Render attribute view cells and compute rollups"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rendered string of each value in a JSON document
    Render {
        /// JSON file holding one value or an array of values ("-" for stdin)
        input: PathBuf,
    },

    /// Aggregate a list of rendered cells with a rollup operator
    Rollup {
        /// Operator name, e.g. "sum", "Count unique values", "percent-checked"
        #[arg(short, long)]
        operator: String,

        /// Cell contents (default: one per line from stdin)
        values: Vec<String>,
    },

    /// Format a number
    Number {
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Number format, e.g. "commas", "percent", "usDollar" (default: plain)
        #[arg(short, long, default_value = "")]
        format: String,
    },

    /// Format a timestamp, a range or a duration
    Date {
        /// Start time in milliseconds since the Unix epoch
        #[arg(allow_negative_numbers = true)]
        start: i64,

        /// End time in milliseconds since the Unix epoch
        #[arg(short, long)]
        end: Option<i64>,

        /// Print the humanized span between start and end
        #[arg(short, long)]
        duration: bool,

        /// Include the time of day
        #[arg(short = 't', long)]
        with_time: bool,

        /// Language tag such as en_US or zh_CN (default: $ATTRVIEW_LANG)
        #[arg(short, long)]
        lang: Option<String>,

        /// Render in UTC instead of the local timezone
        #[arg(short, long)]
        utc: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render { input } => render(&input),
        Commands::Rollup { operator, values } => rollup(&operator, values),
        Commands::Number { amount, format } => number(amount, &format),
        Commands::Date {
            start,
            end,
            duration,
            with_time,
            lang,
            utc,
        } => date(start, end, duration, with_time, lang.as_deref(), utc),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn render(input: &Path) -> Result<()> {
    let values = if input.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read stdin")?;
        parse_values(&json).context("Failed to parse values from stdin")?
    } else {
        read_values(input).with_context(|| format!("Failed to load '{}'", input.display()))?
    };
    log::debug!("loaded {} values", values.len());

    let mut out = io::stdout().lock();
    for value in &values {
        if let ValueData::Unsupported(kind) = &value.data {
            log::warn!("value {:?} has unsupported type {:?}", value.id, kind);
        }
        writeln!(out, "{}", value.render()).context("Failed to write to stdout")?;
    }
    Ok(())
}

fn rollup(operator: &str, values: Vec<String>) -> Result<()> {
    let operator: CalcOperator = operator
        .parse()
        .with_context(|| format!("Invalid operator '{operator}'"))?;

    let contents = if values.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read stdin")?
    } else {
        values
    };

    let mut rollup = ValueRollup::new(contents);
    rollup.render_contents(Some(&RollupCalc::new(operator)));

    let mut out = io::stdout().lock();
    for line in &rollup.contents {
        writeln!(out, "{line}").context("Failed to write to stdout")?;
    }
    Ok(())
}

fn number(amount: f64, format: &str) -> Result<()> {
    let format = NumberFormat::parse(format).ok_or_else(|| {
        let known: Vec<_> = NumberFormat::ALL
            .iter()
            .map(|f| f.as_str())
            .filter(|s| !s.is_empty())
            .collect();
        anyhow!("Unknown number format '{format}' (expected one of: {})", known.join(", "))
    })?;
    println!("{}", format_number(amount, format));
    Ok(())
}

fn date(
    start: i64,
    end: Option<i64>,
    duration: bool,
    with_time: bool,
    lang: Option<&str>,
    utc: bool,
) -> Result<()> {
    let mut ctx = FormatContext::default();
    if let Some(tag) = lang {
        let lang: Lang = tag
            .parse()
            .with_context(|| format!("Invalid language tag '{tag}'"))?;
        ctx = ctx.with_lang(lang);
    }
    if utc {
        ctx = ctx.with_tz(TimeZoneSetting::Utc);
    }

    let format = if duration {
        DateFormat::Duration
    } else {
        DateFormat::None
    };
    let end = end.unwrap_or(0);
    if duration && end == 0 {
        return Err(anyhow!("--duration requires --end"));
    }

    println!("{}", format_timestamps(start, end, format, with_time, &ctx));
    Ok(())
}
