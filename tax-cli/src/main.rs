use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use tax_cli::{RecordInput, app, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal income tax calculator.
///
/// Any detail not given as a flag is asked for on the terminal, so the
/// calculator works both interactively and from scripts.
#[derive(Debug, Parser)]
#[command(name = "income-tax")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Taxpayer name.
    #[arg(long)]
    name: Option<String>,

    /// Annual income in ngultrum; `,` separators are allowed.
    #[arg(long)]
    income: Option<String>,

    /// Whether the taxpayer is a contract employee (yes/no).
    #[arg(long)]
    contract: Option<String>,

    /// Organization type: Government, Private or Corporate.
    #[arg(long)]
    organization: Option<String>,

    /// Number of dependent children.
    #[arg(long)]
    children: Option<String>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn record_input(&self) -> RecordInput {
        RecordInput {
            name: self.name.clone(),
            income: self.income.clone(),
            contract_employee: self.contract.clone(),
            organization_type: self.organization.clone(),
            children: self.children.clone(),
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level, cli.log_file.as_deref())?;

    let input = cli.record_input();
    debug!(interactive = !input.is_complete(), "starting calculation");

    app::run(input, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
