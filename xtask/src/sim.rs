use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;

pub fn run(log: &str) -> Result<()> {
    println!();
    println!("{}", "🖥  Running the board simulator...".cyan().bold());
    println!();

    let status = Command::new("cargo")
        .args([
            "run",
            "-p",
            "supermini-firmware",
            "--example",
            "board_sim",
            "--features",
            "std",
        ])
        .env("RUST_LOG", log)
        .status()
        .context("Failed to start the simulator")?;

    if !status.success() {
        anyhow::bail!("Simulator exited with {status}");
    }

    Ok(())
}
