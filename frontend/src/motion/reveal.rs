//! Staggered one-shot entrance animations.
//!
//! Every element handed to [`RevealSequencer::sequence`] is put into its
//! pre-reveal look immediately, before any watcher can fire, so content never
//! flashes fully visible first. When the element is first seen its reveal is
//! scheduled `index * step` later, `index` being its position in the list.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::clock::Clock;
use super::surface::Surface;
use super::watcher::Viewport;
use crate::config;

pub const PENDING_CLASS: &str = "reveal-pending";
pub const REVEALED_CLASS: &str = "revealed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Pending,
    Scheduled,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub step: Duration,
    /// Vertical offset of the pre-reveal state, in pixels.
    pub offset_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            step: Duration::from_millis(config::REVEAL_STAGGER_MS),
            offset_px: config::REVEAL_OFFSET_PX,
        }
    }
}

/// Delay before the element at `index` is revealed once triggered.
pub fn stagger_offset(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

struct Tracked<N, H> {
    node: N,
    index: usize,
    state: Visibility,
    timer: Option<H>,
}

struct RevealInner<S: Surface, C: Clock> {
    surface: S,
    clock: C,
    config: RevealConfig,
    tracked: RefCell<Vec<Tracked<S::Node, C::Handle>>>,
}

pub struct RevealSequencer<S: Surface, C: Clock> {
    inner: Rc<RevealInner<S, C>>,
}

impl<S, C> RevealSequencer<S, C>
where
    S: Surface + 'static,
    C: Clock + 'static,
{
    pub fn new(surface: S, clock: C, config: RevealConfig) -> Self {
        Self {
            inner: Rc::new(RevealInner {
                surface,
                clock,
                config,
                tracked: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Hides `elements` now and arms one watcher per element.
    ///
    /// Elements that already carry [`REVEALED_CLASS`] are skipped and take
    /// no stagger slot.
    pub fn sequence<V: Viewport<S::Node>>(&self, viewport: &V, elements: Vec<S::Node>) {
        let fresh = elements
            .into_iter()
            .filter(|node| !self.inner.surface.has_class(node, REVEALED_CLASS));
        for (index, node) in fresh.enumerate() {
            self.inner.conceal(&node);

            let slot = {
                let mut tracked = self.inner.tracked.borrow_mut();
                tracked.push(Tracked {
                    node: node.clone(),
                    index,
                    state: Visibility::Pending,
                    timer: None,
                });
                tracked.len() - 1
            };

            let weak = Rc::downgrade(&self.inner);
            viewport.watch(
                &node,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        RevealInner::schedule(&inner, slot);
                    }
                }),
            );
        }
    }

    /// Reveals every tracked element at once, skipping the stagger.
    pub fn reveal_all(&self) {
        let count = self.inner.tracked.borrow().len();
        for slot in 0..count {
            self.inner.reveal(slot);
        }
    }

    pub fn visibility(&self, slot: usize) -> Option<Visibility> {
        self.inner.tracked.borrow().get(slot).map(|t| t.state)
    }

    pub fn len(&self) -> usize {
        self.inner.tracked.borrow().len()
    }
}

impl<S, C> RevealInner<S, C>
where
    S: Surface + 'static,
    C: Clock + 'static,
{
    fn conceal(&self, node: &S::Node) {
        self.surface.remove_class(node, REVEALED_CLASS);
        self.surface.add_class(node, PENDING_CLASS);
        self.surface.set_style(node, "opacity", "0");
        self.surface.set_transform(
            node,
            &format!("translateY({}px)", self.config.offset_px),
        );
    }

    fn schedule(this: &Rc<Self>, slot: usize) {
        let index = {
            let mut tracked = this.tracked.borrow_mut();
            let Some(entry) = tracked.get_mut(slot) else {
                return;
            };
            if entry.state != Visibility::Pending {
                return;
            }
            entry.state = Visibility::Scheduled;
            entry.index
        };

        let delay = stagger_offset(index, this.config.step);
        let weak: Weak<Self> = Rc::downgrade(this);
        let handle = this.clock.after(
            delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.reveal(slot);
                }
            }),
        );

        if let Some(entry) = this.tracked.borrow_mut().get_mut(slot) {
            if entry.state == Visibility::Scheduled {
                entry.timer = Some(handle);
            }
        }
    }

    fn reveal(&self, slot: usize) {
        let (node, timer) = {
            let mut tracked = self.tracked.borrow_mut();
            let Some(entry) = tracked.get_mut(slot) else {
                return;
            };
            if entry.state == Visibility::Revealed {
                return;
            }
            entry.state = Visibility::Revealed;
            (entry.node.clone(), entry.timer.take())
        };
        drop(timer);

        self.surface.remove_style(&node, "opacity");
        self.surface.remove_style(&node, "transform");
        self.surface.remove_class(&node, PENDING_CLASS);
        self.surface.add_class(&node, REVEALED_CLASS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{FakeSurface, VirtualClock};
    use crate::motion::watcher::OnceWatcher;

    fn setup(count: usize) -> (FakeSurface, VirtualClock, OnceWatcher<usize>, RevealSequencer<FakeSurface, VirtualClock>) {
        let surface = FakeSurface::new();
        let clock = VirtualClock::new();
        let watcher = OnceWatcher::new(0.1);
        let sequencer = RevealSequencer::new(
            surface.clone(),
            clock.clone(),
            RevealConfig {
                step: Duration::from_millis(100),
                offset_px: 30.0,
            },
        );
        sequencer.sequence(&watcher, (0..count).collect());
        (surface, clock, watcher, sequencer)
    }

    #[test]
    fn test_pre_reveal_state_applied_on_registration() {
        let (surface, _clock, _watcher, sequencer) = setup(2);

        for node in 0..2 {
            assert!(surface.has_class(node, PENDING_CLASS));
            assert_eq!(surface.style(node, "opacity").as_deref(), Some("0"));
            assert_eq!(
                surface.style(node, "transform").as_deref(),
                Some("translateY(30px)")
            );
            assert_eq!(sequencer.visibility(node), Some(Visibility::Pending));
        }
    }

    #[test]
    fn test_staggered_reveal_follows_list_position() {
        let (surface, clock, watcher, sequencer) = setup(3);

        watcher.notify(&0, 1.0, true);
        watcher.notify(&1, 1.0, true);
        watcher.notify(&2, 1.0, true);

        clock.advance(0);
        assert!(surface.has_class(0, REVEALED_CLASS));
        assert_eq!(sequencer.visibility(1), Some(Visibility::Scheduled));

        clock.advance(100);
        assert!(surface.has_class(1, REVEALED_CLASS));
        assert!(!surface.has_class(2, REVEALED_CLASS));

        clock.advance(100);
        assert!(surface.has_class(2, REVEALED_CLASS));
        assert!(!surface.has_class(2, PENDING_CLASS));
        assert_eq!(surface.style(2, "opacity"), None);
    }

    #[test]
    fn test_unseen_elements_stay_hidden() {
        let (surface, clock, watcher, _sequencer) = setup(2);

        watcher.notify(&0, 1.0, true);
        clock.advance(1000);

        assert!(surface.has_class(0, REVEALED_CLASS));
        assert!(surface.has_class(1, PENDING_CLASS));
        assert!(!surface.has_class(1, REVEALED_CLASS));
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let (surface, clock, watcher, sequencer) = setup(1);

        watcher.notify(&0, 1.0, true);
        clock.advance(0);
        sequencer.reveal_all();

        assert_eq!(sequencer.visibility(0), Some(Visibility::Revealed));
        assert!(surface.has_class(0, REVEALED_CLASS));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_reveal_all_cancels_pending_timers() {
        let (surface, clock, watcher, sequencer) = setup(3);
        watcher.notify(&2, 1.0, true);
        assert_eq!(clock.pending(), 1);

        sequencer.reveal_all();

        assert_eq!(clock.pending(), 0);
        assert!((0..3).all(|n| surface.has_class(n, REVEALED_CLASS)));
    }

    #[test]
    fn test_sequencing_revealed_element_again_leaves_it_visible() {
        let (surface, clock, watcher, _first) = setup(2);
        watcher.notify(&0, 1.0, true);
        clock.advance(0);
        assert!(surface.has_class(0, REVEALED_CLASS));

        let second = RevealSequencer::new(surface.clone(), clock.clone(), RevealConfig::default());
        second.sequence(&watcher, vec![0, 1]);

        assert!(surface.has_class(0, REVEALED_CLASS));
        assert!(!surface.has_class(0, PENDING_CLASS));
        assert_eq!(surface.style(0, "opacity"), None);
        assert_eq!(surface.style(0, "transform"), None);
        assert!(!watcher.is_watching(&0));

        // Only the still hidden element is tracked, and it staggers from zero
        assert_eq!(second.len(), 1);
        watcher.notify(&1, 1.0, true);
        clock.advance(0);
        assert!(surface.has_class(1, REVEALED_CLASS));
    }

    #[test]
    fn test_offsets_are_monotone() {
        let step = Duration::from_millis(120);
        for k in 1..50 {
            assert!(stagger_offset(k, step) >= stagger_offset(k - 1, step));
        }
        assert_eq!(stagger_offset(0, step), Duration::ZERO);
    }
}
