//! Headless walkthrough of the reveal controller.
//!
//! Run with: `cargo run --example reveal_log`
//!
//! Simulates a visitor scrolling a page section by section and prints
//! every reveal and skill fill as it fires.

use driftfield::prelude::*;

fn main() {
    let mut reveals = RevealController::new();
    reveals.observe("about", Category::Card);
    reveals.observe_all(["rust", "python", "typescript"], Category::TechItem);
    reveals.observe_all(["job-2019", "job-2022"], Category::TimelineCard);
    reveals.observe_all(["proj-tracer", "proj-synth"], Category::ProjectCard);

    let mut meters = SkillMeters::new();
    meters.observe("rust", 90.0);
    meters.observe("python", 80.0);
    meters.observe("typescript", 75.0);

    // Each batch is one visibility callback as the page scrolls down.
    let scroll: &[&[&str]] = &[
        &["about"],
        &["rust", "python", "typescript"],
        &["rust", "job-2019"], // "rust" lingers on screen, stays silent
        &["job-2022", "proj-tracer"],
        &["proj-synth", "about"],
    ];

    for (step, batch) in scroll.iter().enumerate() {
        println!("-- scroll step {} --", step + 1);
        for reveal in reveals.on_visible(batch) {
            match reveal.animation {
                Some(animation) => {
                    println!("  reveal {:<12} {:?} + {:?}", reveal.target, reveal.category, animation)
                }
                None => println!("  reveal {:<12} {:?}", reveal.target, reveal.category),
            }
        }
        for fill in meters.on_visible(batch) {
            println!(
                "  fill   {:<12} to {}% after {:?}",
                fill.target, fill.percent, fill.delay
            );
        }
    }

    println!("pending reveals left: {}", reveals.pending_len());
}
