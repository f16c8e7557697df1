use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::cmd::{run_step, OnFailure, Step};

pub fn run(unit_only: bool, integration_only: bool) -> Result<()> {
    println!();
    println!("{}", "🧪 Running tests...".cyan().bold());
    println!();

    let total_start = Instant::now();

    let mut steps = Vec::new();
    if !integration_only {
        steps.push(Step {
            label: "Unit tests",
            args: &["test", "--lib", "--workspace"],
            on_failure: OnFailure::Fail,
        });
    }
    if !unit_only {
        steps.push(Step {
            label: "Driver contract tests",
            args: &["test", "-p", "platform", "--test", "driver_contracts"],
            on_failure: OnFailure::Fail,
        });
        steps.push(Step {
            label: "Board integration tests",
            args: &["test", "-p", "supermini-firmware", "--test", "integration_board"],
            on_failure: OnFailure::Fail,
        });
        steps.push(Step {
            label: "Architecture boundaries",
            args: &["test", "-p", "supermini-firmware", "--test", "arch_boundaries"],
            on_failure: OnFailure::Fail,
        });
    }
    steps.push(Step {
        label: "Doc tests",
        args: &["test", "--doc", "--workspace"],
        on_failure: OnFailure::Warn,
    });

    for step in &steps {
        if let Some(output) = run_step(step)? {
            let summary = extract_test_summary(&String::from_utf8_lossy(&output.stdout));
            println!("{}", format!("    {summary}").dimmed());
        }
    }

    println!(
        "{}",
        format!(
            "✓ All tests completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}

fn extract_test_summary(output: &str) -> String {
    // Look for lines like "test result: ok. 5 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out"
    output
        .lines()
        .filter_map(|line| line.split("test result:").nth(1))
        .map(str::trim)
        .last()
        .map_or_else(|| "(summary not available)".to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_is_extracted() {
        let out = "running 3 tests\ntest result: ok. 3 passed; 0 failed; 0 ignored\n";
        assert_eq!(extract_test_summary(out), "ok. 3 passed; 0 failed; 0 ignored");
        assert_eq!(extract_test_summary(""), "(summary not available)");
    }
}
