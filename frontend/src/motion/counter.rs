//! Count-up animation for statistic figures.
//!
//! The element's own text is the target: `"$1,250+"` counts from `$0+` to
//! `$1,250+`. Text that is not a single whole number with an optional
//! prefix and suffix (e.g. `24/7`, `4.9`) is left alone.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::clock::Clock;
use super::progress::progress;
use super::surface::Surface;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterConfig {
    pub duration: Duration,
    pub steps: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(config::COUNTER_DURATION_MS),
            steps: config::COUNTER_STEPS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterPlan {
    pub prefix: String,
    pub target: u64,
    pub suffix: String,
    /// Whether the source used thousands separators.
    pub grouped: bool,
}

impl CounterPlan {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let (prefix, rest) = text.split_at(start);

        let end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == ','))
            .unwrap_or(rest.len());
        let number = rest[..end].trim_end_matches(',');
        let suffix = &rest[number.len()..];

        if suffix.chars().any(|c| c.is_ascii_digit()) || number.contains(",,") {
            return None;
        }

        let target = number.replace(',', "").parse::<u64>().ok()?;
        Some(Self {
            prefix: prefix.to_string(),
            target,
            suffix: suffix.to_string(),
            grouped: number.contains(','),
        })
    }

    /// Value shown after `step` of `config.steps` frames. The last frame is
    /// exactly the target.
    pub fn value_at(&self, step: u32, config: &CounterConfig) -> u64 {
        if step >= config.steps {
            return self.target;
        }
        let elapsed = config.duration * step / config.steps;
        let fraction = progress(elapsed, config.duration);
        ((self.target as f64 * fraction).floor() as u64).min(self.target)
    }

    pub fn render(&self, value: u64) -> String {
        let digits = if self.grouped {
            group_thousands(value)
        } else {
            value.to_string()
        };
        format!("{}{}{}", self.prefix, digits, self.suffix)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

struct CounterInner<S: Surface, C: Clock> {
    surface: S,
    clock: C,
    node: S::Node,
    config: CounterConfig,
    has_run: Cell<bool>,
    step: Cell<u32>,
    plan: RefCell<Option<CounterPlan>>,
    timer: RefCell<Option<C::Handle>>,
}

/// Counts one element up from zero, at most once.
pub struct CounterAnimator<S: Surface, C: Clock> {
    inner: Rc<CounterInner<S, C>>,
}

impl<S, C> CounterAnimator<S, C>
where
    S: Surface + 'static,
    C: Clock + 'static,
{
    pub fn new(surface: S, clock: C, node: S::Node, config: CounterConfig) -> Self {
        Self {
            inner: Rc::new(CounterInner {
                surface,
                clock,
                node,
                config,
                has_run: Cell::new(false),
                step: Cell::new(0),
                plan: RefCell::new(None),
                timer: RefCell::new(None),
            }),
        }
    }

    /// Starts counting. Returns `false` if it already ran or the text is
    /// not a number.
    pub fn animate(&self) -> bool {
        let inner = &self.inner;
        if inner.has_run.replace(true) {
            return false;
        }
        let Some(plan) = CounterPlan::parse(&inner.surface.text(&inner.node)) else {
            return false;
        };

        let frame = inner.config.duration / inner.config.steps.max(1);
        if inner.config.steps == 0 || frame.is_zero() {
            inner.surface.set_text(&inner.node, &plan.render(plan.target));
            return true;
        }

        inner.surface.set_text(&inner.node, &plan.render(0));
        *inner.plan.borrow_mut() = Some(plan);

        let weak = Rc::downgrade(inner);
        let timer = inner.clock.every(
            frame,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.frame();
                }
            }),
        );
        *inner.timer.borrow_mut() = Some(timer);
        true
    }

    pub fn has_run(&self) -> bool {
        self.inner.has_run.get()
    }

    pub fn is_running(&self) -> bool {
        self.inner.timer.borrow().is_some()
    }
}

impl<S: Surface, C: Clock> CounterInner<S, C> {
    fn frame(&self) {
        let step = self.step.get().saturating_add(1);
        self.step.set(step);

        let text = match self.plan.borrow().as_ref() {
            Some(plan) => plan.render(plan.value_at(step, &self.config)),
            None => return,
        };
        self.surface.set_text(&self.node, &text);

        if step >= self.config.steps {
            let finished = self.timer.borrow_mut().take();
            drop(finished);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{FakeSurface, VirtualClock};

    fn config() -> CounterConfig {
        CounterConfig {
            duration: Duration::from_millis(2000),
            steps: 60,
        }
    }

    #[test]
    fn test_parse_plain_and_decorated() {
        let plan = CounterPlan::parse("250").unwrap();
        assert_eq!(plan.target, 250);
        assert_eq!(plan.render(12), "12");

        let plan = CounterPlan::parse(" $1,250+ ").unwrap();
        assert_eq!(plan.prefix, "$");
        assert_eq!(plan.target, 1250);
        assert_eq!(plan.suffix, "+");
        assert!(plan.grouped);
        assert_eq!(plan.render(1_000_000), "$1,000,000+");

        let plan = CounterPlan::parse("98%").unwrap();
        assert_eq!((plan.target, plan.suffix.as_str()), (98, "%"));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(CounterPlan::parse("24/7"), None);
        assert_eq!(CounterPlan::parse("4.9"), None);
        assert_eq!(CounterPlan::parse("Award winning"), None);
        assert_eq!(CounterPlan::parse(""), None);
    }

    #[test]
    fn test_sequence_is_monotone_and_exact() {
        let plan = CounterPlan::parse("250").unwrap();
        let config = config();
        let values: Vec<u64> = (0..=config.steps).map(|s| plan.value_at(s, &config)).collect();

        assert_eq!(values[0], 0);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v <= 250));
        assert_eq!(*values.last().unwrap(), 250);
    }

    #[test]
    fn test_final_frame_exact_for_awkward_targets() {
        let config = CounterConfig {
            duration: Duration::from_millis(1000),
            steps: 7,
        };
        for target in [1u64, 3, 97, 1001, 123_457] {
            let plan = CounterPlan::parse(&target.to_string()).unwrap();
            assert_eq!(plan.value_at(config.steps, &config), target);
            assert!(plan.value_at(config.steps - 1, &config) < target);
        }
    }

    #[test]
    fn test_animator_counts_to_target_once() {
        let surface = FakeSurface::new();
        let clock = VirtualClock::new();
        surface.put_text(1, "250");
        let counter = CounterAnimator::new(surface.clone(), clock.clone(), 1, config());

        assert!(counter.animate());
        assert_eq!(surface.text(&1), "0");

        let mut last = 0;
        for _ in 0..80 {
            clock.advance(33);
            let shown: u64 = surface.text(&1).parse().unwrap();
            assert!(shown >= last);
            last = shown;
        }

        assert_eq!(surface.text(&1), "250");
        assert!(!counter.is_running());
        assert_eq!(clock.pending(), 0);

        assert!(!counter.animate());
        assert_eq!(surface.text(&1), "250");
    }

    #[test]
    fn test_animator_leaves_non_numeric_text() {
        let surface = FakeSurface::new();
        let clock = VirtualClock::new();
        surface.put_text(1, "24/7");
        let counter = CounterAnimator::new(surface.clone(), clock.clone(), 1, config());

        assert!(!counter.animate());
        assert!(counter.has_run());
        assert_eq!(surface.text(&1), "24/7");
        assert_eq!(clock.pending(), 0);
    }
}
