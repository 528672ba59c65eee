//! The ambient field in a window, dark theme.
//!
//! Run with: `cargo run --example ambient`
//!
//! Move the pointer to push particles around; press `T` to toggle the
//! theme.

use driftfield::prelude::*;

fn main() {
    let result = Viewer::new()
        .with_title("driftfield - ambient")
        .with_size(1280, 720)
        .with_theme(Theme::Dark)
        .run();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
