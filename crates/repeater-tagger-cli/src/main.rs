use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, ValueEnum};
use repeater_tagger::{scan, Family, Pointer, Repeater, ScanOptions, Span, Symbol, Token, WeekStartDay};
use serde::Serialize;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

const NOW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Parser)]
#[command(name = "reptag")]
#[command(version)]
#[command(about = "Tag English and Polish words with calendar repeaters")]
struct Cli {
    /// Words to classify, one token each
    #[arg(value_name = "WORD", required = true)]
    words: Vec<String>,

    /// Output results as JSON
    #[arg(long, short = 'j')]
    json: bool,

    /// Anchor every tag at this local time and show its spans
    #[arg(long, value_name = "YYYY-MM-DDTHH:MM:SS", value_parser = parse_now)]
    now: Option<NaiveDateTime>,

    /// Read every clock time as a 24-hour time
    #[arg(long)]
    hours24: bool,

    /// First day of the week for week and fortnight units
    #[arg(long, value_enum, default_value_t = WeekStart::Sunday)]
    week_start: WeekStart,

    /// Enable verbose logging (use multiple times for more detail)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum WeekStart {
    Monday,
    Sunday,
}

impl From<WeekStart> for WeekStartDay {
    fn from(value: WeekStart) -> Self {
        match value {
            WeekStart::Monday => WeekStartDay::Monday,
            WeekStart::Sunday => WeekStartDay::Sunday,
        }
    }
}

fn parse_now(value: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, NOW_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM:SS: {e}"))
}

#[derive(Serialize)]
struct TaggedWord {
    word: String,
    tags: Vec<TagReport>,
}

#[derive(Serialize)]
struct TagReport {
    family: Family,
    symbol: Option<Symbol>,
    label: String,
    width: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    this: Option<Span>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next: Option<Span>,
}

impl TagReport {
    fn new(tag: &mut dyn Repeater, now: Option<NaiveDateTime>) -> Result<Self> {
        let (this, next) = match now {
            Some(now) => {
                tag.start(now)?;
                let this = tag
                    .this(Pointer::None)
                    .with_context(|| format!("computing this for {tag}"))?;
                let next = tag
                    .next(Pointer::Future)
                    .with_context(|| format!("computing next for {tag}"))?;
                (Some(this), Some(next))
            }
            None => (None, None),
        };
        Ok(Self {
            family: tag.family(),
            symbol: tag.symbol(),
            label: tag.to_string(),
            width: tag.width(),
            this,
            next,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let options = ScanOptions {
        week_start: cli.week_start.into(),
        hours24: cli.hours24.then_some(true),
    };
    tracing::debug!(words = cli.words.len(), ?options, "Scanning");

    let mut tokens: Vec<Token> = cli.words.iter().map(Token::new).collect();
    scan(&mut tokens, &options).context("scanning words")?;

    let mut report = Vec::with_capacity(tokens.len());
    for token in tokens.iter_mut() {
        let tags = token
            .tags
            .iter_mut()
            .map(|tag| TagReport::new(tag.as_mut(), cli.now))
            .collect::<Result<Vec<_>>>()?;
        report.push(TaggedWord {
            word: token.word.clone(),
            tags,
        });
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

fn print_text(report: &[TaggedWord]) {
    for entry in report {
        println!("{}", entry.word);
        if entry.tags.is_empty() {
            println!("  (no tags)");
        }
        for tag in &entry.tags {
            println!("  {}  ({}, width {})", tag.label, tag.family, tag.width);
            if let Some(this) = tag.this {
                println!("    this {this}");
            }
            if let Some(next) = tag.next {
                println!("    next {next}");
            }
        }
    }
}
