use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::cmd::{run_step, OnFailure, Step};

/// ESP32-C3 core
const TARGET: &str = "riscv32imc-unknown-none-elf";

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking the board coordinator...".cyan().bold());
    println!();

    let total_start = Instant::now();

    let steps = [
        Step {
            label: "Host build (std, tests, simulator)",
            args: &[
                "check",
                "-p",
                "supermini-firmware",
                "--features",
                "std",
                "--all-targets",
            ],
            on_failure: OnFailure::Fail,
        },
        Step {
            label: "Driver contracts (no_std, riscv32imc)",
            args: &["check", "-p", "platform", "--target", TARGET],
            on_failure: OnFailure::Fail,
        },
        Step {
            label: "Coordinator (no_std + alloc, riscv32imc)",
            args: &["check", "-p", "supermini-firmware", "--target", TARGET],
            on_failure: OnFailure::Fail,
        },
        Step {
            label: "Clippy lints",
            args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
            on_failure: OnFailure::Warn,
        },
        Step {
            label: "Formatting (run 'cargo fmt --all' to fix)",
            args: &["fmt", "--all", "--check"],
            on_failure: OnFailure::Warn,
        },
    ];

    for step in &steps {
        run_step(step)?;
    }

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
