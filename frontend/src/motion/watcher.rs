use std::cell::RefCell;

use crate::config;

// Observers report ratios right at the crossing; allow for float noise.
const RATIO_EPSILON: f64 = 1e-3;

#[derive(Clone, Debug, PartialEq)]
pub struct WatchConfig {
    /// Fraction of the element that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    /// CSS margin applied to the viewport edge. A negative bottom margin
    /// shrinks the observed area, so the element has to be that far inside
    /// the viewport before the watcher fires.
    pub root_margin: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN.to_string(),
        }
    }
}

/// Something that can report when a node first becomes visible.
pub trait Viewport<N> {
    /// Calls `on_visible` once, the first time `node` crosses the threshold.
    fn watch(&self, node: &N, on_visible: Box<dyn FnOnce()>);
}

pub fn crosses_threshold(ratio: f64, intersecting: bool, threshold: f64) -> bool {
    intersecting && ratio + RATIO_EPSILON >= threshold
}

/// Callback bookkeeping for one-shot visibility notifications.
///
/// Whatever produces intersection samples feeds them into [`notify`];
/// the first sample above the threshold fires and forgets every callback
/// registered for that node.
///
/// [`notify`]: OnceWatcher::notify
pub struct OnceWatcher<N> {
    threshold: f64,
    pending: RefCell<Vec<(N, Box<dyn FnOnce()>)>>,
}

impl<N: PartialEq> OnceWatcher<N> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            pending: RefCell::new(Vec::new()),
        }
    }

    /// Feeds one intersection sample. Returns `true` if callbacks fired,
    /// meaning the node no longer needs observing.
    pub fn notify(&self, node: &N, ratio: f64, intersecting: bool) -> bool {
        if !crosses_threshold(ratio, intersecting, self.threshold) {
            return false;
        }

        let fired: Vec<Box<dyn FnOnce()>> = {
            let mut pending = self.pending.borrow_mut();
            let mut fired = Vec::new();
            let mut i = 0;
            while i < pending.len() {
                if pending[i].0 == *node {
                    fired.push(pending.remove(i).1);
                } else {
                    i += 1;
                }
            }
            fired
        };

        // Callbacks may register more nodes, so run them unborrowed.
        let any = !fired.is_empty();
        for callback in fired {
            callback();
        }
        any
    }

    pub fn is_watching(&self, node: &N) -> bool {
        self.pending.borrow().iter().any(|(n, _)| n == node)
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl<N: PartialEq + Clone> Viewport<N> for OnceWatcher<N> {
    fn watch(&self, node: &N, on_visible: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((node.clone(), on_visible));
    }
}
