use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use diskpack::io::export::{export_attempts, export_diameters, export_disks};
use log::{info, warn};
use rsa::batch::run_batch;
use rsa::config::RSAConfig;
use rsa::io;
use rsa::io::cli::Cli;
use rsa::io::output::{RSAOutput, export_solution};
use rsa::opt::RSASolution;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RSAConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };
    if let Some(n_runs) = args.n_runs {
        config.n_runs = n_runs;
    }

    info!("Successfully parsed RSAConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let solutions = run_batch(&config, config.n_runs)?;

    for (i, sol) in solutions.iter().enumerate() {
        write_run(sol, &config, i, &args.solution_folder)?;
    }

    Ok(())
}

fn write_run(sol: &RSASolution, config: &RSAConfig, run: usize, output_folder: &Path) -> Result<()> {
    io::write_table(
        &export_disks(&sol.disks),
        &output_folder.join(format!("disks_{run}.csv")),
    )?;
    io::write_table(
        &export_attempts(&sol.attempt_histogram),
        &output_folder.join(format!("attempts_{run}.csv")),
    )?;
    io::write_table(
        &export_diameters(&sol.disks, config.diameter_bin_width)?,
        &output_folder.join(format!("diameters_{run}.csv")),
    )?;

    let output = RSAOutput {
        solution: export_solution(sol, config.diameter_bin_width)?,
        config: RSAConfig {
            prng_seed: config.prng_seed.map(|s| s.wrapping_add(run as u64)),
            n_runs: 1,
            ..*config
        },
    };
    io::write_json(&output, &output_folder.join(format!("sol_{run}.json")))?;

    Ok(())
}
