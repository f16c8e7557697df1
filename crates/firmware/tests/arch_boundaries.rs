//! Architecture boundary tests. Run with `cargo test -p supermini-firmware --test arch_boundaries`
//!
//! Layering rules:
//!   Rule 1: platform (driver contracts) must not depend on the coordinator
//!   Rule 2: desktop-only crates stay out of the coordinator's runtime deps
//!   Rule 3: the coordinator only reaches vendor drivers through platform traits

// Architecture test file: expect/unwrap/panic are intentional test mechanisms.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
)]

/// Return the text of `[dependencies]` in a manifest, up to the next table.
fn runtime_deps(manifest: &str) -> &str {
    let start = manifest
        .find("[dependencies]")
        .expect("manifest has [dependencies]");
    let rest = &manifest[start + "[dependencies]".len()..];
    match rest.find("\n[") {
        Some(end) => &rest[..end],
        None => rest,
    }
}

#[test]
fn platform_does_not_depend_on_coordinator() {
    let manifest = include_str!("../../platform/Cargo.toml");
    assert!(
        !manifest.contains("supermini-firmware") && !manifest.contains("../firmware"),
        "platform must stay below the coordinator"
    );
}

#[test]
fn desktop_crates_are_dev_only() {
    let deps = runtime_deps(include_str!("../Cargo.toml"));
    for desktop_only in ["tokio", "tracing-subscriber", "embedded-hal-mock", "proptest"] {
        assert!(
            !deps.contains(desktop_only),
            "{desktop_only} must not be a runtime dependency of the coordinator"
        );
    }
}

#[test]
fn coordinator_sources_do_not_name_concrete_mocks() {
    let sources = [
        include_str!("../src/board.rs"),
        include_str!("../src/bus.rs"),
        include_str!("../src/display/mod.rs"),
        include_str!("../src/network.rs"),
        include_str!("../src/status.rs"),
        include_str!("../src/led.rs"),
    ];
    for source in sources {
        let production = source.split("#[cfg(test)]").next().unwrap();
        assert!(
            !production.contains("platform::mocks"),
            "production code must depend on platform traits, not mocks"
        );
    }
}

#[test]
fn boot_order_constant_matches_facade() {
    let steps = firmware::BOOT_SEQUENCE_STEPS;
    assert_eq!(steps.len(), 3);
    assert!(steps[0].contains("SPI bus"));
    assert!(steps[1].contains("Display"));
    assert!(steps[2].contains("Input"));
}
