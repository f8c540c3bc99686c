use anyhow::{Context, Result};
use clap::Parser;
use sortbench::{
    dataset::{DEFAULT_LENGTH, DEFAULT_MAX, DEFAULT_MIN},
    output::{self, RESULTS_PATH},
    validate, DatasetSpec, Harness, Report,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Number of random values to sort
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    size: usize,
    /// Smallest value that may be generated (inclusive)
    #[arg(long, default_value_t = DEFAULT_MIN, allow_hyphen_values = true)]
    min: i64,
    /// Upper end of the generated values (exclusive)
    #[arg(long, default_value_t = DEFAULT_MAX, allow_hyphen_values = true)]
    max: i64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        println!("{err:#}");
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortbench=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let spec = DatasetSpec::new(cli.size, cli.min, cli.max)?;
    let dataset = spec.generate()?;

    println!("Running sorts...");
    let comparison = Harness::new(dataset)
        .run()
        .await
        .context("sort comparison aborted")?;

    let validations = validate::validate_all(comparison.runs());
    output::print_validations(&validations);

    let report = Report::build(comparison, validations)?;
    output::save(RESULTS_PATH, &report);
    output::print_summary(&report);
    Ok(())
}
