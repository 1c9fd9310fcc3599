/*!
CLI entry point: loads a program's config and table-list files by base
name, runs the engine headless (`NullHost`) until it halts or faults, and
reports the outcome.
*/

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use clesh::engine::Engine;
use clesh::host::NullHost;
use clesh::loader::{config::parse_config, table_list::load_table_list_into_memory};
use clesh::registers::Status;
use clesh::EngineConfig;

/// Runs a C-Lesh program headlessly.
#[derive(Parser, Debug)]
#[command(name = "clesh", version, about)]
struct Cli {
    /// Base name of the program: looks for "<name>.txt" and "<name>.clshc".
    program_base_name: String,

    /// Table width, overriding the config file's setting.
    width: usize,

    /// Table height, overriding the config file's setting.
    height: usize,

    /// Wall-clock budget per `execute` call, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    time_budget_ms: u64,

    /// Maximum number of `execute` calls before giving up on a program that
    /// never reaches `Done`.
    #[arg(long, default_value_t = 60)]
    max_slices: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config_path = format!("{}.txt", cli.program_base_name);
    let mut config = match fs::read_to_string(&config_path) {
        Ok(contents) => parse_config(&contents).with_context(|| format!("parsing {config_path}"))?,
        Err(_) => {
            tracing::warn!(config_path, "no config file found, using defaults");
            EngineConfig::default()
        }
    };
    config.table_width = cli.width;
    config.table_height = cli.height;

    let mut engine = Engine::new(config, Box::new(NullHost::default()));

    let program_path = format!("{}.clshc", cli.program_base_name);
    let program_text =
        fs::read_to_string(&program_path).with_context(|| format!("reading program file {program_path}"))?;
    load_table_list_into_memory(&mut engine.memory, config.program_address, &program_text)
        .with_context(|| format!("loading program file {program_path}"))?;

    for slice in 0..cli.max_slices {
        engine.execute(cli.time_budget_ms)?;
        match engine.status() {
            Status::Done => {
                tracing::info!(slices = slice + 1, "program halted");
                return Ok(());
            }
            Status::Error => anyhow::bail!("program faulted"),
            Status::Running | Status::Idle => continue,
        }
    }

    anyhow::bail!(
        "program did not halt within {} slices of {}ms",
        cli.max_slices,
        cli.time_budget_ms
    );
}
