use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use std::fs;
use std::path::PathBuf;

use vermouth::cli::Cli;
use vermouth::config::Config;
use vermouth::git::Git;

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vermouth")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("vermouth.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let work_dir = cli.directory.clone().unwrap_or_else(|| PathBuf::from("."));

    let config = Config::load(cli.config.as_ref(), &work_dir)
        .context("Failed to load configuration")?
        .apply(cli);

    info!("Resolving version in {} with {:?}", work_dir.display(), config);

    let git = Git::new(&work_dir);
    let version =
        vermouth::resolve_version(&git, &config, &chrono::Local::now()).context("Failed to resolve version")?;

    println!("{}", version);
    Ok(())
}

fn main() {
    // A missing log directory must not stop version resolution
    if let Err(e) = setup_logging() {
        env_logger::Builder::from_default_env().init();
        log::warn!("{:#}", e);
    }

    let cli = Cli::parse();

    if cli.version {
        println!("{}", env!("GIT_DESCRIBE"));
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}
