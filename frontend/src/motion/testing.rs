//! In-memory surface and simulated clock for exercising the motion types
//! without a browser.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::clock::Clock;
use super::surface::{Bounds, Surface};

#[derive(Default)]
struct NodeState {
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    text: String,
    bounds: Bounds,
}

/// Nodes are plain ids; state is shared between clones.
#[derive(Clone, Default)]
pub struct FakeSurface {
    nodes: Rc<RefCell<HashMap<usize, NodeState>>>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, node: usize, class: &str) -> bool {
        self.nodes
            .borrow()
            .get(&node)
            .map(|n| n.classes.contains(class))
            .unwrap_or(false)
    }

    pub fn style(&self, node: usize, property: &str) -> Option<String> {
        self.nodes
            .borrow()
            .get(&node)
            .and_then(|n| n.styles.get(property).cloned())
    }

    pub fn set_bounds(&self, node: usize, bounds: Bounds) {
        self.nodes.borrow_mut().entry(node).or_default().bounds = bounds;
    }

    pub fn put_text(&self, node: usize, text: &str) {
        self.nodes.borrow_mut().entry(node).or_default().text = text.to_string();
    }
}

impl Surface for FakeSurface {
    type Node = usize;

    fn add_class(&self, node: &usize, class: &str) {
        self.nodes
            .borrow_mut()
            .entry(*node)
            .or_default()
            .classes
            .insert(class.to_string());
    }

    fn remove_class(&self, node: &usize, class: &str) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(node) {
            n.classes.remove(class);
        }
    }

    fn has_class(&self, node: &usize, class: &str) -> bool {
        self.nodes
            .borrow()
            .get(node)
            .map(|n| n.classes.contains(class))
            .unwrap_or(false)
    }

    fn set_style(&self, node: &usize, property: &str, value: &str) {
        self.nodes
            .borrow_mut()
            .entry(*node)
            .or_default()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn remove_style(&self, node: &usize, property: &str) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(node) {
            n.styles.remove(property);
        }
    }

    fn set_text(&self, node: &usize, text: &str) {
        self.put_text(*node, text);
    }

    fn text(&self, node: &usize) -> String {
        self.nodes
            .borrow()
            .get(node)
            .map(|n| n.text.clone())
            .unwrap_or_default()
    }

    fn bounds(&self, node: &usize) -> Bounds {
        self.nodes
            .borrow()
            .get(node)
            .map(|n| n.bounds)
            .unwrap_or_default()
    }
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>),
}

struct Timer {
    id: u64,
    due: u64,
    period: Option<u64>,
    // Taken out while the task runs so callbacks can reach the clock.
    task: Option<Task>,
}

#[derive(Default)]
struct ClockState {
    now: u64,
    next_id: u64,
    timers: Vec<Timer>,
}

/// Millisecond clock that only moves when a test advances it.
#[derive(Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
}

pub struct VirtualHandle {
    id: u64,
    state: Weak<RefCell<ClockState>>,
}

impl Drop for VirtualHandle {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let removed = {
            let Ok(mut state) = state.try_borrow_mut() else {
                return;
            };
            state
                .timers
                .iter()
                .position(|t| t.id == self.id)
                .map(|i| state.timers.remove(i))
        };
        drop(removed);
    }
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Moves time forward, firing every due timer in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .timers
                    .iter()
                    .filter(|t| t.task.is_some() && t.due <= target)
                    .min_by_key(|t| (t.due, t.id))
                    .map(|t| (t.id, t.due));
                match due {
                    Some((id, due)) => {
                        state.now = due;
                        let timer = state
                            .timers
                            .iter_mut()
                            .find(|t| t.id == id)
                            .expect("timer present");
                        timer.task.take().map(|task| (id, task))
                    }
                    None => None,
                }
            };

            let Some((id, task)) = next else {
                break;
            };

            match task {
                Task::Once(f) => {
                    let removed = {
                        let mut state = self.state.borrow_mut();
                        state
                            .timers
                            .iter()
                            .position(|t| t.id == id)
                            .map(|i| state.timers.remove(i))
                    };
                    drop(removed);
                    f();
                }
                Task::Repeat(mut f) => {
                    f();
                    let mut state = self.state.borrow_mut();
                    // Gone if the handle was dropped while the task ran.
                    if let Some(timer) = state.timers.iter_mut().find(|t| t.id == id) {
                        timer.due += timer.period.unwrap_or(1).max(1);
                        timer.task = Some(Task::Repeat(f));
                    }
                }
            }
        }
        self.state.borrow_mut().now = target;
    }

    fn schedule(&self, delay: Duration, period: Option<u64>, task: Task) -> VirtualHandle {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay.as_millis() as u64;
        state.timers.push(Timer {
            id,
            due,
            period,
            task: Some(task),
        });
        VirtualHandle {
            id,
            state: Rc::downgrade(&self.state),
        }
    }
}

impl Clock for VirtualClock {
    type Handle = VirtualHandle;

    fn now(&self) -> Duration {
        Duration::from_millis(self.state.borrow().now)
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> VirtualHandle {
        self.schedule(delay, None, Task::Once(task))
    }

    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> VirtualHandle {
        let ms = period.as_millis() as u64;
        self.schedule(period, Some(ms), Task::Repeat(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_interval_fires_each_period() {
        let clock = VirtualClock::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _handle = clock.every(
            Duration::from_millis(100),
            Box::new(move || counter.set(counter.get() + 1)),
        );

        clock.advance(99);
        assert_eq!(hits.get(), 0);
        clock.advance(1);
        assert_eq!(hits.get(), 1);
        clock.advance(250);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_dropped_handle_cancels() {
        let clock = VirtualClock::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let handle = clock.after(
            Duration::from_millis(10),
            Box::new(move || counter.set(counter.get() + 1)),
        );
        drop(handle);

        clock.advance(100);
        assert_eq!(hits.get(), 0);
        assert_eq!(clock.pending(), 0);
    }
}
