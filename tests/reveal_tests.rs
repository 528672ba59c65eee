//! Reveal controller behavior across realistic observation sequences.

use driftfield::prelude::*;
use driftfield::reveal::SecondaryAnimation;

#[test]
fn a_full_page_reveals_each_section_once() {
    let mut reveals = RevealController::new();
    reveals.observe_all(["about", "contact"], Category::Card);
    reveals.observe_all(["rust", "python", "sql"], Category::TechItem);
    reveals.observe("job-2021", Category::TimelineCard);
    reveals.observe_all(["proj-a", "proj-b"], Category::ProjectCard);
    assert_eq!(reveals.pending_len(), 8);

    // First scroll: hero section comes into view.
    let first = reveals.on_visible(&["about", "rust", "python"]);
    assert_eq!(first.len(), 3);

    // The visibility source keeps reporting them while they stay on
    // screen; nothing fires again.
    assert!(reveals.on_visible(&["about", "rust", "python"]).is_empty());

    // Scrolling further down reveals the rest, mixed with repeats.
    let second = reveals.on_visible(&["sql", "about", "job-2021", "proj-a"]);
    assert_eq!(second.len(), 3);

    let third = reveals.on_visible(&["contact", "proj-b"]);
    assert_eq!(third.len(), 2);

    assert_eq!(reveals.pending_len(), 0);
    for target in ["about", "contact", "rust", "python", "sql", "job-2021", "proj-a", "proj-b"] {
        assert!(reveals.is_revealed(&target));
    }
}

#[test]
fn secondary_animations_follow_the_category() {
    let mut reveals = RevealController::new();
    reveals.observe("card", Category::Card);
    reveals.observe("tech", Category::TechItem);
    reveals.observe("job", Category::TimelineCard);
    reveals.observe("proj", Category::ProjectCard);

    let out = reveals.on_visible(&["card", "tech", "job", "proj"]);
    assert_eq!(out[0].animation, None);
    assert!(matches!(
        out[1].animation,
        Some(SecondaryAnimation::IconSpin { .. })
    ));
    assert!(matches!(
        out[2].animation,
        Some(SecondaryAnimation::FloatLoop { .. })
    ));
    assert!(matches!(
        out[3].animation,
        Some(SecondaryAnimation::OverlayFlash { .. })
    ));
}

#[test]
fn scrolling_away_and_back_never_replays() {
    let mut reveals = RevealController::new();
    reveals.observe(42u32, Category::TimelineCard);

    assert_eq!(reveals.on_visible(&[42]).len(), 1);

    // Leave the viewport, come back, get re-registered by an over-eager
    // host: still silent.
    reveals.observe(42, Category::TimelineCard);
    for _ in 0..5 {
        assert!(reveals.on_visible(&[42]).is_empty());
    }
}

#[test]
fn observer_options_are_exposed_to_the_host() {
    let reveals: RevealController<u32> = RevealController::new();
    assert!((reveals.options().threshold - 0.1).abs() < 1e-6);
    assert_eq!(reveals.options().bottom_margin, -50.0);
}

#[test]
fn skill_meters_fill_once_at_their_registered_percent() {
    let mut meters = SkillMeters::new();
    meters.observe("rust", 90.0);
    meters.observe("go", 70.0);
    meters.observe("bogus", -5.0);

    let fills = meters.on_visible(&["rust", "bogus"]);
    assert_eq!(fills.len(), 2);
    let rust = fills.iter().find(|f| f.target == "rust").unwrap();
    assert_eq!(rust.percent, 90.0);
    let bogus = fills.iter().find(|f| f.target == "bogus").unwrap();
    assert_eq!(bogus.percent, 0.0);

    assert!(meters.on_visible(&["rust", "bogus"]).is_empty());
    assert_eq!(meters.pending_len(), 1);
}

#[test]
fn controllers_work_with_integer_handles() {
    let mut reveals: RevealController<usize> = RevealController::default();
    reveals.observe_all(0..20, Category::Card);

    let batch: Vec<usize> = (0..20).step_by(2).collect();
    assert_eq!(reveals.on_visible(&batch).len(), 10);
    assert_eq!(reveals.pending_len(), 10);
}
