use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use diskpack::io::ext_repr::TableRow;
use itertools::Itertools;
use log::{LevelFilter, info};
use serde::Serialize;

use crate::EPOCH;
use crate::config::RSAConfig;

pub mod cli;
pub mod output;

pub fn read_config(path: &Path) -> Result<RSAConfig> {
    let file = File::open(path).with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("solution written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

/// Writes `rows` as comma separated values, preceded by a header line.
pub fn write_table<R: TableRow>(rows: &[R], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("could not open table file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", R::HEADER.join(","))?;
    for row in rows {
        writeln!(writer, "{}", row.values().iter().join(","))?;
    }
    writer
        .flush()
        .with_context(|| format!("could not write table file: {}", path.display()))?;

    info!("table written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("time: {}", jiff::Timestamp::now());
    Ok(())
}
