//! Savings Calculator CLI
//!
//! Command-line interface for comparing TFSA and RRSP projections

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use savings_calculator::{
    comparison::ComparisonRunner,
    inputs::load_scenario_rows,
    plans::build_named_plan,
    report::{csv_out::write_outcomes, render_sweep_table, render_table},
    Comparison, ComparisonReport, SavingsInputs, Settings,
};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "savings-calculator",
    version,
    about = "Compare TFSA and RRSP outcomes for a single deposit"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare both account types for one deposit
    Compare {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Project a single account type (tfsa or rrsp)
    Project {
        /// Account type
        #[arg(long)]
        account: String,

        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Compare every scenario in a CSV file
    Batch {
        /// Scenario CSV file
        #[arg(long)]
        input: PathBuf,

        /// Output CSV file (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Compare one deposit at several nominal growth rates
    Sweep {
        #[command(flatten)]
        inputs: InputArgs,

        /// Nominal annual rates (%) to evaluate, comma separated
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        rates: Vec<f64>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Amount to deposit
    #[arg(long)]
    deposit: f64,

    /// Income tax rate (%) applied to a TFSA contribution
    #[arg(long, allow_negative_numbers = true)]
    marginal_tax_rate: f64,

    /// Average tax rate (%) applied to an RRSP withdrawal
    #[arg(long, allow_negative_numbers = true)]
    withdrawal_tax_rate: f64,

    /// Years invested
    #[arg(long)]
    years: f64,

    /// Nominal annual growth rate (%)
    #[arg(long, allow_negative_numbers = true)]
    nominal_rate: f64,

    /// Annual inflation rate (%)
    #[arg(long, allow_negative_numbers = true)]
    inflation_rate: f64,

    /// Compounding periods per year (default from SAVINGS_PERIODS_PER_YEAR or 12)
    #[arg(long)]
    periods: Option<u32>,

    /// Decimal places on results (default from SAVINGS_DISPLAY_PRECISION or 2)
    #[arg(long)]
    precision: Option<u32>,
}

impl InputArgs {
    fn to_inputs(&self, settings: &Settings) -> SavingsInputs {
        SavingsInputs::new(
            self.deposit,
            self.marginal_tax_rate,
            self.withdrawal_tax_rate,
            self.years,
            self.nominal_rate,
            self.inflation_rate,
        )
        .with_periods_per_year(self.periods.unwrap_or(settings.periods_per_year))
        .with_display_precision(self.precision.unwrap_or(settings.display_precision))
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::from_env();
    let runner = ComparisonRunner::new(settings);

    match cli.command {
        Commands::Compare { inputs, format } => {
            let inputs = inputs.to_inputs(&settings);
            let comparison = Comparison::new(&inputs).context("Unable to compare accounts")?;

            match format {
                OutputFormat::Table => print!("{}", render_table(&inputs, &comparison)),
                OutputFormat::Json => {
                    let report = ComparisonReport::new(&inputs, &comparison);
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
        Commands::Project { account, inputs } => {
            let inputs = inputs.to_inputs(&settings);
            let plan = build_named_plan(&account, &inputs)
                .with_context(|| format!("Unable to project account {:?}", account))?;
            println!("{}", serde_json::to_string_pretty(&plan.result())?);
        }
        Commands::Batch { input, output } => {
            let rows = load_scenario_rows(&input, runner.settings())
                .with_context(|| format!("Unable to load scenarios from {}", input.display()))?;
            let outcomes = runner.run_rows(rows);

            let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
            if failed > 0 {
                log::warn!("{} of {} scenarios were rejected", failed, outcomes.len());
            }

            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Unable to create {}", path.display()))?;
                    write_outcomes(file, &outcomes)?;
                    eprintln!("Results written to: {}", path.display());
                }
                None => write_outcomes(io::stdout().lock(), &outcomes)?,
            }
        }
        Commands::Sweep { inputs, rates } => {
            let inputs = inputs.to_inputs(&settings);
            let points = runner.run_rate_sweep(&inputs, &rates);
            print!("{}", render_sweep_table(&points, inputs.display_precision));
        }
    }

    Ok(())
}
