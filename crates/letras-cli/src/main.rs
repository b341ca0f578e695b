//! `letras` CLI — spell numbers, amounts and invoice totals in Spanish.
//!
//! ## Usage
//!
//! ```sh
//! # Plain words
//! letras words 1234567.89
//!
//! # Money with currency and cents labels
//! letras money 1100.50 --currency soles --cents centimos
//!
//! # Any pair of labels
//! letras label 5.2 -d 1 --whole años --fraction meses
//!
//! # Invoice style (fraction as NN/100)
//! letras invoice 123.50 --currency soles
//!
//! # Apocope ("UN" instead of "UNO") and a custom connector
//! letras --apocope --connector y words 201
//!
//! # Settings from a JSON file, JSON output
//! letras --config letras.json --json money 10.10
//!
//! # All four presentations on a sample amount
//! letras demo
//! ```
//!
//! Set `RUST_LOG=debug` to trace each conversion on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letras_core::{Formatter, FormatterConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Amount used by the `demo` subcommand.
const DEMO_AMOUNT: f64 = 1_234_567.89;

#[derive(Parser)]
#[command(
    name = "letras",
    version,
    about = "Spell numbers in Spanish words for invoices, checks and legal text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with formatter settings, e.g. {"connector":"CON","apocope":true}
    #[arg(long, global = true)]
    config: Option<String>,

    /// Spell a trailing one as "UN" instead of "UNO" (`--apocope=false` turns
    /// off a config file's setting)
    #[arg(
        long,
        global = true,
        env = "LETRAS_APOCOPE",
        value_parser = clap::builder::BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    apocope: Option<bool>,

    /// Word joining the whole and fractional parts (default: CON)
    #[arg(long, global = true, env = "LETRAS_CONNECTOR")]
    connector: Option<String>,

    /// Print a JSON object instead of plain text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Spell a number, including its decimals, as words
    Words {
        /// Number to spell (0 to 999999999)
        #[arg(allow_negative_numbers = true)]
        number: f64,
        /// Decimal places to round to
        #[arg(short, long, default_value_t = 2)]
        decimals: u32,
    },
    /// Spell a monetary amount with currency and cents labels
    Money {
        #[arg(allow_negative_numbers = true)]
        number: f64,
        #[arg(short, long, default_value_t = 2)]
        decimals: u32,
        /// Label after the whole part
        #[arg(long, default_value = "PESOS")]
        currency: String,
        /// Label after the cents, omitted when the cents are zero
        #[arg(long, default_value = "CENTAVOS")]
        cents: String,
    },
    /// Spell a quantity with custom labels for the whole and fractional parts
    Label {
        #[arg(allow_negative_numbers = true)]
        number: f64,
        #[arg(short, long, default_value_t = 2)]
        decimals: u32,
        /// Label after the whole part
        #[arg(long)]
        whole: String,
        /// Label after the fractional part
        #[arg(long)]
        fraction: String,
    },
    /// Spell an amount invoice-style: words, then NN/100, then the currency
    Invoice {
        #[arg(allow_negative_numbers = true)]
        number: f64,
        #[arg(short, long, default_value_t = 2)]
        decimals: u32,
        #[arg(long, default_value = "PESOS")]
        currency: String,
    },
    /// Show every presentation for 1234567.89 PESOS/CENTAVOS
    Demo,
}

/// One line of JSON output.
#[derive(Serialize)]
struct Rendered<'a> {
    mode: &'a str,
    input: f64,
    decimals: u32,
    text: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let formatter = build_formatter(&cli)?;
    tracing::debug!(config = ?formatter.config(), "formatter ready");

    match cli.command {
        Commands::Words { number, decimals } => {
            let text = formatter
                .to_words(number, decimals)
                .with_context(|| format!("Failed to spell {}", number))?;
            emit(cli.json, "words", number, decimals, text)?;
        }
        Commands::Money {
            number,
            decimals,
            currency,
            cents,
        } => {
            let text = formatter
                .to_money(number, decimals, &currency, &cents)
                .with_context(|| format!("Failed to spell amount {}", number))?;
            emit(cli.json, "money", number, decimals, text)?;
        }
        Commands::Label {
            number,
            decimals,
            whole,
            fraction,
        } => {
            let text = formatter
                .to_labeled_string(number, decimals, &whole, &fraction)
                .with_context(|| format!("Failed to spell quantity {}", number))?;
            emit(cli.json, "label", number, decimals, text)?;
        }
        Commands::Invoice {
            number,
            decimals,
            currency,
        } => {
            let text = formatter
                .to_invoice_phrase(number, decimals, &currency)
                .with_context(|| format!("Failed to spell invoice total {}", number))?;
            emit(cli.json, "invoice", number, decimals, text)?;
        }
        Commands::Demo => run_demo(&formatter, cli.json)?,
    }

    Ok(())
}

/// Merge settings: defaults, then the `--config` file, then flags and env.
fn build_formatter(cli: &Cli) -> Result<Formatter> {
    let mut config = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => FormatterConfig::default(),
    };
    if let Some(apocope) = cli.apocope {
        config.apocope = apocope;
    }
    if let Some(connector) = &cli.connector {
        config.connector = connector.clone();
    }
    Ok(Formatter::from_config(config))
}

fn load_config(path: &str) -> Result<FormatterConfig> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid config file: {}", path))
}

fn run_demo(formatter: &Formatter, json: bool) -> Result<()> {
    let decimals = 2;
    let runs = [
        ("words", formatter.to_words(DEMO_AMOUNT, decimals)),
        (
            "money",
            formatter.to_money(DEMO_AMOUNT, decimals, "PESOS", "CENTAVOS"),
        ),
        (
            "label",
            formatter.to_labeled_string(DEMO_AMOUNT, decimals, "PESOS", "CENTAVOS"),
        ),
        (
            "invoice",
            formatter.to_invoice_phrase(DEMO_AMOUNT, decimals, "PESOS"),
        ),
    ];
    for (mode, result) in runs {
        let text = result.with_context(|| format!("Demo failed in {} mode", mode))?;
        if json {
            emit(true, mode, DEMO_AMOUNT, decimals, text)?;
        } else {
            println!("{:<8} {}", format!("{}:", mode), text);
        }
    }
    Ok(())
}

fn emit(json: bool, mode: &str, input: f64, decimals: u32, text: String) -> Result<()> {
    if json {
        let rendered = Rendered {
            mode,
            input,
            decimals,
            text,
        };
        println!("{}", serde_json::to_string(&rendered)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}
