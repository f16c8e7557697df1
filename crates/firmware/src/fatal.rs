//! Deliberate halt for unrecoverable boot errors.

use crate::boot::BootError;

/// Log `error` and stop the firmware. Never returns.
///
/// On host builds the process aborts; on target the core parks in a spin
/// loop until the watchdog resets it.
pub fn halt(error: &BootError) -> ! {
    let reached = error.reached();
    tracing::error!(
        %error,
        ?reached,
        failed_step = reached.next_step().unwrap_or("none"),
        "boot failed"
    );

    #[cfg(feature = "std")]
    std::process::abort();

    #[cfg(not(feature = "std"))]
    loop {
        core::hint::spin_loop();
    }
}
