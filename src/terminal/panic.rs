//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal before reporting.
///
/// Call after `color_eyre::install()` so its report is printed on a usable
/// terminal.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
