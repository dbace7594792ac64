use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tally_budget::{CaloriesFormatter, CashFormatter};
use tally_core::{Ledger, RawValue, infer_layout, time};
use tally_ingest::{parse_record_spec, read_records_csv};
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Daily cash and calorie budget tracker")]
struct Cli {
    /// Config file (default: ~/.tally/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Where a command's records come from.
#[derive(clap::Args, Debug)]
struct RecordArgs {
    /// Daily limit; overrides the config value
    #[arg(long)]
    limit: Option<String>,

    /// CSV file with an `amount,comment,date` header
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Inline record as `amount;comment[;date]` (repeatable)
    #[arg(long = "record", short = 'r')]
    records: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show how much money is left for today
    Cash {
        #[command(flatten)]
        records: RecordArgs,

        /// Currency code to report in (rub, usd, eur, or any configured code)
        #[arg(long)]
        currency: Option<String>,
    },

    /// Show how many calories are left for today
    Calories {
        #[command(flatten)]
        records: RecordArgs,
    },

    /// Show which layout a date string is read with
    Resolve { date: String },

    /// Write the default config file if it does not exist
    InitConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(p) => p,
        None => config::default_config_path()?,
    };

    match cli.command {
        Command::Cash { records, currency } => {
            let cfg = config::load_config(&config_path)?;
            let today = time::today();
            let ledger = build_ledger(&records, cfg.budget.cash_limit, today)?;
            let currency = currency.unwrap_or_else(|| cfg.budget.currency.clone());

            let formatter = CashFormatter::new(cfg.currency_table());
            println!("{}", formatter.remaining(&ledger, &currency, today));
            println!("week total: {:.2}", ledger.week_total(today));
        }

        Command::Calories { records } => {
            let cfg = config::load_config(&config_path)?;
            let today = time::today();
            let ledger = build_ledger(&records, cfg.budget.calories_limit, today)?;

            println!("{}", CaloriesFormatter::remaining(&ledger, today));
            println!("week total: {:.0} kcal", ledger.week_total(today));
        }

        Command::Resolve { date } => {
            let layout = infer_layout(&date)?;
            let resolved = layout.parse(date.trim())?;
            println!("{layout} -> {resolved}");
        }

        Command::InitConfig => {
            config::init_config(&config_path)?;
        }
    }

    Ok(())
}

fn build_ledger(args: &RecordArgs, default_limit: f64, today: chrono::NaiveDate) -> Result<Ledger> {
    let limit = match &args.limit {
        Some(raw) => RawValue::from(raw.as_str()),
        None => RawValue::Float(default_limit),
    };
    let mut ledger = Ledger::new(limit);

    if let Some(path) = &args.csv {
        if !path.exists() {
            bail!("CSV not found: {}", path.display());
        }
        ledger.extend(read_records_csv(path, today)?);
    }
    ledger.extend(args.records.iter().map(|s| parse_record_spec(s).into_record(today)));

    tracing::info!(records = ledger.len(), limit = ledger.limit(), "ledger ready");
    Ok(ledger)
}
