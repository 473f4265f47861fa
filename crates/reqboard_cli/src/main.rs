//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `reqboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("reqboard_core version={}", reqboard_core::core_version());
    println!("reqboard_core storage_key={}", reqboard_core::STORAGE_KEY);
    println!("reqboard_core export_file={}", reqboard_core::EXPORT_FILE_NAME);
}
