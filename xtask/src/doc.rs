use anyhow::Result;
use colored::Colorize;

use crate::cmd::{run_step, OnFailure, Step};

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    let args: &[&str] = if open {
        &["doc", "--workspace", "--no-deps", "--features", "supermini-firmware/std", "--open"]
    } else {
        &["doc", "--workspace", "--no-deps", "--features", "supermini-firmware/std"]
    };

    run_step(&Step {
        label: "Documentation",
        args,
        on_failure: OnFailure::Fail,
    })?;

    if !open {
        println!(
            "   {}",
            "Open target/doc/firmware/index.html in your browser".dimmed()
        );
        println!(
            "   {}",
            "Or run 'cargo run -p xtask -- doc --open'".dimmed()
        );
        println!();
    }

    Ok(())
}
