use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::runtime::Handle;

use loancalc::api::HttpLoanApi;
use loancalc::config::Config;
use loancalc::format::{format_currency, format_percentage, format_short_date};
use loancalc::loan::{
    is_period_offered, snap_amount, LoanAction, LoanState, LoanStore, SubmissionResult,
    PERIOD_OPTIONS,
};
use loancalc::logging::init_tracing;
use loancalc::persistence::FileParamsStore;

#[derive(Parser)]
#[command(name = "loancalc")]
#[command(about = "Short-term loan calculator", long_about = None)]
struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the quote for the saved parameters
    Show,

    /// Change the amount and/or period, then print the quote
    Set(EditArgs),

    /// Submit the application and print the outcome
    Submit(EditArgs),
}

#[derive(Args)]
struct EditArgs {
    /// Requested amount, snapped to the slider step
    #[arg(short, long)]
    amount: Option<f64>,

    /// Repayment period in days (7, 14, 21 or 28)
    #[arg(short, long)]
    period: Option<i32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    config.validate()?;

    let api = HttpLoanApi::new(&config.api).context("Failed to build HTTP client")?;
    let params = FileParamsStore::new(config.params_path());
    tracing::debug!(url = %api.url(), params = %params.path().display(), "Store wiring");

    let store = LoanStore::new(Arc::new(api), Arc::new(params), Handle::current());
    store.dispatch(LoanAction::LoadSavedState);

    match cli.command {
        Commands::Show => {
            print_quote(&store.state());
        }
        Commands::Set(edit) => {
            apply_edits(&store, &edit)?;
            print_quote(&store.state());
        }
        Commands::Submit(edit) => {
            apply_edits(&store, &edit)?;
            print_quote(&store.state());

            store.dispatch(LoanAction::SubmitApplication);
            store.wait_idle().await;

            match store.state().submission_result {
                Some(SubmissionResult::Success { response_id }) => {
                    println!();
                    println!("Application submitted (id {})", response_id);
                }
                Some(SubmissionResult::Failure { message }) => {
                    eprintln!("Submission failed: {}", message);
                    std::process::exit(1);
                }
                None => bail!("Submission finished without a result"),
            }
        }
    }

    Ok(())
}

fn apply_edits(store: &LoanStore, edit: &EditArgs) -> Result<()> {
    if let Some(period) = edit.period {
        if !is_period_offered(period) {
            bail!(
                "Period must be one of {:?} days, got {}",
                PERIOD_OPTIONS,
                period
            );
        }
        store.dispatch(LoanAction::SetPeriod(period));
    }
    if let Some(amount) = edit.amount {
        store.dispatch(LoanAction::SetAmount(snap_amount(amount)));
    }
    Ok(())
}

fn print_quote(state: &LoanState) {
    println!("Amount:    {}", format_currency(state.amount));
    println!("Period:    {} days", state.period_days);
    println!("Interest:  {}", format_percentage(state.interest_rate));
    println!("Total:     {}", format_currency(state.total_repayment()));
    println!("Due:       {}", format_short_date(state.repayment_date()));
}
