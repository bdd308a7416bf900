//! `roadnet compare` - batch static-vs-adaptive comparison runs.

use std::path::Path;

use colored::Colorize;
use tracing::info;

use roadnet_experiment::{ComparisonRecord, ExperimentConfig, ExperimentRunner, GeneratorConfig};

use crate::error::CliResult;

/// Run the comparison experiment and write the results CSV.
pub fn execute(runs: usize, output: &Path, seed: Option<u64>) -> CliResult<()> {
    let config = ExperimentConfig {
        runs,
        generator: GeneratorConfig::default(),
        seed,
    };
    let runner = ExperimentRunner::new(config);
    let records = runner.run()?;

    for record in &records {
        println!(
            "Run {:>3} | ΔCost: {:>6.2}% | ΔTime: {:>6.2}%",
            record.run, record.cost_delta_pct, record.time_delta_pct,
        );
    }

    if let Some(dir) = output.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    ComparisonRecord::write_csv(&records, output)?;
    info!(runs = records.len(), path = %output.display(), "comparison exported");
    println!(
        "{} {} runs written to {}",
        "Done:".green(),
        records.len(),
        output.display().to_string().bright_white()
    );

    Ok(())
}
