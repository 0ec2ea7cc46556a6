//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `geonote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("geonote_core ping={}", geonote_core::ping());
    println!("geonote_core version={}", geonote_core::core_version());
}
