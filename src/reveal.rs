//! One-shot, visibility-triggered reveal animations.
//!
//! A [`RevealController`] watches a set of targets (anything hashable —
//! element ids, indices, handles). The host's visibility source reports
//! batches of targets that entered the viewport; the controller answers
//! with at most one [`Reveal`] per target, ever, and forgets the target
//! immediately so observation stays bounded over the page's lifetime.
//!
//! Targets carry a [`Category`] assigned at registration. Three
//! categories come with a secondary animation and fixed timings; plain
//! cards just settle into place.
//!
//! ```ignore
//! let mut reveals = RevealController::new();
//! reveals.observe("hero-card", Category::Card);
//! reveals.observe("rust-icon", Category::TechItem);
//!
//! // later, from the visibility callback:
//! for reveal in reveals.on_visible(&["rust-icon"]) {
//!     apply(reveal.target, reveal.animation);
//! }
//! ```
//!
//! [`SkillMeters`] is the sibling capability for percentage meters: one
//! fill event per meter on first visibility, same at-most-once contract.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::time::Duration;

/// Delay before a skill meter starts filling.
pub const SKILL_FILL_DELAY: Duration = Duration::from_millis(300);

/// What kind of element a reveal target is.
///
/// Assigned once at registration; the category decides which secondary
/// animation (if any) accompanies the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Generic card. Settles into place, no secondary animation.
    Card,
    /// Technology grid item. Its icon does a spin on reveal.
    TechItem,
    /// Timeline entry. Starts a floating loop after settling.
    TimelineCard,
    /// Project tile. Its overlay flashes once.
    ProjectCard,
}

/// A category-specific follow-up animation with its fixed timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryAnimation {
    /// Scale up and rotate the icon a full turn, then snap back.
    IconSpin {
        delay: Duration,
        duration: Duration,
    },
    /// Gentle vertical bobbing, looping for as long as the element lives.
    FloatLoop {
        delay: Duration,
        start: Duration,
        period: Duration,
    },
    /// Brighten the overlay briefly, then restore it.
    OverlayFlash {
        delay: Duration,
        hold: Duration,
    },
}

impl Category {
    /// The secondary animation for this category, if it has one.
    pub fn secondary_animation(self) -> Option<SecondaryAnimation> {
        match self {
            Category::Card => None,
            Category::TechItem => Some(SecondaryAnimation::IconSpin {
                delay: Duration::from_millis(200),
                duration: Duration::from_millis(500),
            }),
            Category::TimelineCard => Some(SecondaryAnimation::FloatLoop {
                delay: Duration::from_millis(200),
                start: Duration::from_millis(800),
                period: Duration::from_secs(3),
            }),
            Category::ProjectCard => Some(SecondaryAnimation::OverlayFlash {
                delay: Duration::from_millis(400),
                hold: Duration::from_millis(300),
            }),
        }
    }
}

/// Intersection settings the host should configure its visibility
/// source with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target that must be visible to count as entered.
    pub threshold: f32,
    /// Bottom margin of the observation root, in pixels. Negative values
    /// shrink the root so targets reveal slightly before reaching the
    /// viewport edge.
    pub bottom_margin: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: -50.0,
        }
    }
}

/// A reveal event: the target has entered the viewport for the first
/// time and should transition to its settled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal<K> {
    pub target: K,
    pub category: Category,
    /// The category's follow-up animation, `None` for plain cards.
    pub animation: Option<SecondaryAnimation>,
}

/// Watches targets and emits each one's reveal exactly once.
///
/// Per-target state machine: unobserved → pending → revealed (terminal).
/// Revealed targets are dropped from the pending set the instant they
/// fire and are ignored if the visibility source reports them again.
pub struct RevealController<K: Eq + Hash + Copy> {
    pending: HashMap<K, Category>,
    revealed: HashSet<K>,
    options: ObserverOptions,
}

impl<K: Eq + Hash + Copy> RevealController<K> {
    pub fn new() -> Self {
        Self::with_options(ObserverOptions::default())
    }

    pub fn with_options(options: ObserverOptions) -> Self {
        Self {
            pending: HashMap::new(),
            revealed: HashSet::new(),
            options,
        }
    }

    /// Register a target. A target that has already revealed stays
    /// revealed; re-observing it is a no-op.
    pub fn observe(&mut self, target: K, category: Category) {
        if !self.revealed.contains(&target) {
            self.pending.insert(target, category);
        }
    }

    /// Register many targets under one category.
    pub fn observe_all<I: IntoIterator<Item = K>>(&mut self, targets: I, category: Category) {
        for target in targets {
            self.observe(target, category);
        }
    }

    /// Process one visibility callback batch.
    ///
    /// Every pending target in the batch is drained: it produces a
    /// [`Reveal`], moves to the terminal revealed state, and is no
    /// longer observed. Targets that were never registered, or already
    /// revealed, are skipped. Batch order is preserved; no ordering
    /// across batches is promised.
    pub fn on_visible(&mut self, batch: &[K]) -> Vec<Reveal<K>> {
        let mut reveals = Vec::new();
        for &target in batch {
            if let Some(category) = self.pending.remove(&target) {
                self.revealed.insert(target);
                reveals.push(Reveal {
                    target,
                    category,
                    animation: category.secondary_animation(),
                });
            }
        }
        reveals
    }

    /// Whether a target is registered and still awaiting its reveal.
    pub fn is_pending(&self, target: &K) -> bool {
        self.pending.contains_key(target)
    }

    /// Whether a target has already revealed.
    pub fn is_revealed(&self, target: &K) -> bool {
        self.revealed.contains(target)
    }

    /// Number of targets still being observed.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// The intersection settings for the host's visibility source.
    pub fn options(&self) -> ObserverOptions {
        self.options
    }
}

impl<K: Eq + Hash + Copy> Default for RevealController<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// A skill meter fill event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillFill<K> {
    pub target: K,
    /// Width to animate to, in percent.
    pub percent: f32,
    /// Fixed delay before the fill starts.
    pub delay: Duration,
}

/// One-shot fill animations for percentage meters.
///
/// Same contract as [`RevealController`]: each meter fires at most once
/// and is unobserved immediately after.
pub struct SkillMeters<K: Eq + Hash + Copy> {
    pending: HashMap<K, f32>,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Copy> SkillMeters<K> {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            revealed: HashSet::new(),
        }
    }

    /// Register a meter with its target percentage, clamped to
    /// `[0, 100]`.
    pub fn observe(&mut self, target: K, percent: f32) {
        if !self.revealed.contains(&target) {
            self.pending.insert(target, percent.clamp(0.0, 100.0));
        }
    }

    /// Process one visibility batch; each pending meter in it fires
    /// exactly once.
    pub fn on_visible(&mut self, batch: &[K]) -> Vec<SkillFill<K>> {
        let mut fills = Vec::new();
        for &target in batch {
            if let Some(percent) = self.pending.remove(&target) {
                self.revealed.insert(target);
                fills.push(SkillFill {
                    target,
                    percent,
                    delay: SKILL_FILL_DELAY,
                });
            }
        }
        fills
    }

    /// Number of meters still being observed.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl<K: Eq + Hash + Copy> Default for SkillMeters<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_once() {
        let mut reveals = RevealController::new();
        reveals.observe("a", Category::Card);

        assert_eq!(reveals.on_visible(&["a"]).len(), 1);
        assert_eq!(reveals.on_visible(&["a"]).len(), 0);
        assert!(reveals.is_revealed(&"a"));
        assert!(!reveals.is_pending(&"a"));
    }

    #[test]
    fn test_reobserve_after_reveal_is_ignored() {
        let mut reveals = RevealController::new();
        reveals.observe(1u32, Category::TechItem);
        reveals.on_visible(&[1]);

        reveals.observe(1, Category::TechItem);
        assert!(!reveals.is_pending(&1));
        assert_eq!(reveals.on_visible(&[1]).len(), 0);
    }

    #[test]
    fn test_unregistered_targets_are_skipped() {
        let mut reveals: RevealController<&str> = RevealController::new();
        assert!(reveals.on_visible(&["ghost"]).is_empty());
        assert!(!reveals.is_revealed(&"ghost"));
    }

    #[test]
    fn test_batch_drains_every_pending_target() {
        let mut reveals = RevealController::new();
        reveals.observe_all(["a", "b", "c"], Category::Card);
        reveals.observe("d", Category::ProjectCard);

        let out = reveals.on_visible(&["c", "a", "d"]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].target, "c");
        assert_eq!(out[2].category, Category::ProjectCard);
        assert_eq!(reveals.pending_len(), 1);
        assert!(reveals.is_pending(&"b"));
    }

    #[test]
    fn test_category_animation_table() {
        assert_eq!(Category::Card.secondary_animation(), None);
        assert_eq!(
            Category::TechItem.secondary_animation(),
            Some(SecondaryAnimation::IconSpin {
                delay: Duration::from_millis(200),
                duration: Duration::from_millis(500),
            })
        );
        assert_eq!(
            Category::TimelineCard.secondary_animation(),
            Some(SecondaryAnimation::FloatLoop {
                delay: Duration::from_millis(200),
                start: Duration::from_millis(800),
                period: Duration::from_secs(3),
            })
        );
        assert_eq!(
            Category::ProjectCard.secondary_animation(),
            Some(SecondaryAnimation::OverlayFlash {
                delay: Duration::from_millis(400),
                hold: Duration::from_millis(300),
            })
        );
    }

    #[test]
    fn test_skill_meter_fires_once_with_clamped_percent() {
        let mut meters = SkillMeters::new();
        meters.observe("python", 130.0);
        meters.observe("rust", 85.0);

        let fills = meters.on_visible(&["python", "rust"]);
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].percent, 100.0);
        assert_eq!(fills[1].percent, 85.0);
        assert_eq!(fills[1].delay, SKILL_FILL_DELAY);

        assert!(meters.on_visible(&["python", "rust"]).is_empty());
        assert_eq!(meters.pending_len(), 0);
    }

    #[test]
    fn test_observer_options_defaults() {
        let options = ObserverOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.bottom_margin, -50.0);
    }
}
