//! The typewriter effect in a terminal.
//!
//! Run with: `cargo run --example typing_demo`

use std::io::{self, Write};
use std::thread;

use driftfield::prelude::*;

fn main() {
    let mut typewriter = TypeWriter::new([
        "Systems Programmer",
        "Graphics Tinkerer",
        "Coffee Enthusiast",
    ]);

    loop {
        let frame = typewriter.step();
        print!("\r\x1b[2K> {}", frame.text);
        let _ = io::stdout().flush();
        thread::sleep(frame.delay);
    }
}
