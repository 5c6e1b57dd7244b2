use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use xoxo_mockgen as mockgen;
use mockgen::config::{DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_PATH};
use mockgen::{integrity, writer, GeneratorConfig, GeneratorError, Generator};

#[derive(Parser)]
#[command(
    name = "xoxo-mockgen",
    about = "Generate a consistent mock dataset for the xoxo back office",
    version
)]
struct Cli {
    #[arg(default_value = DEFAULT_OUTPUT_PATH, help = "Where to write the JSON document")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    mockgen::config::init_tracing(DEFAULT_LOG_LEVEL);

    match run(&cli.output) {
        Ok(counts) => {
            println!(
                "Mock data generated successfully! Written to {}",
                cli.output.display()
            );
            println!("{}", counts);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let output_failure = err
                .downcast_ref::<GeneratorError>()
                .map_or(false, GeneratorError::is_output_failure);
            if output_failure {
                error!("Could not persist mock data: {:#}", err);
            } else {
                error!("Mock data generation failed: {:#}", err);
            }
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(output: &Path) -> anyhow::Result<mockgen::CollectionCounts> {
    let mut generator = Generator::from_entropy(GeneratorConfig::default())
        .context("invalid generator configuration")?;
    let document = generator.generate().context("failed to generate mock data")?;

    let issues = integrity::check(&document.xoxo);
    if !issues.is_empty() {
        for issue in &issues {
            error!(%issue, "integrity violation");
        }
        return Err(GeneratorError::IntegrityViolation(issues).into());
    }
    info!("Integrity check passed");

    writer::write_document(&document, output).context("failed to write mock data")?;
    Ok(document.xoxo.counts())
}
