//! Active-index state machine behind slideshows and carousels.
//!
//! [`RotationState`] is the pure machine: it only ever moves from `Idle` to
//! `Transitioning` through [`RotationState::begin`] and back through
//! [`RotationState::settle`]. Requests that arrive mid-transition are dropped.
//!
//! [`RotationCycle`] owns one state machine plus its timers and applies the
//! visual side of every transition to a [`Surface`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::clock::Clock;
use super::progress::progress;
use super::surface::Surface;
use crate::config;

pub const ACTIVE_CLASS: &str = "active";
pub const LEAVING_CLASS: &str = "leaving";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning { from: usize, to: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    Next,
    Previous,
    Select(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationState {
    len: usize,
    active: usize,
    phase: Phase,
}

impl RotationState {
    /// `None` for an empty collection; there is nothing to rotate.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            active: 0,
            phase: Phase::Idle,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn target(&self, request: Request) -> usize {
        match request {
            Request::Next => (self.active + 1) % self.len,
            Request::Previous => (self.active + self.len - 1) % self.len,
            Request::Select(index) => index,
        }
    }

    /// Starts a transition if idle and the target differs from the current
    /// slide. The new index becomes active immediately.
    pub fn begin(&mut self, request: Request) -> Option<Transition> {
        if self.is_transitioning() {
            return None;
        }
        let to = self.target(request);
        if to == self.active || to >= self.len {
            return None;
        }
        let from = self.active;
        self.active = to;
        self.phase = Phase::Transitioning { from, to };
        Some(Transition { from, to })
    }

    pub fn settle(&mut self) -> Option<Transition> {
        match self.phase {
            Phase::Transitioning { from, to } => {
                self.phase = Phase::Idle;
                Some(Transition { from, to })
            }
            Phase::Idle => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoAdvance {
    Stopped,
    Running,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationConfig {
    pub interval: Duration,
    /// Length of the CSS transition between slides.
    pub settle: Duration,
    pub progress_tick: Duration,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(config::HERO_INTERVAL_MS),
            settle: Duration::from_millis(config::SLIDE_SETTLE_MS),
            progress_tick: Duration::from_millis(config::PROGRESS_TICK_MS),
        }
    }
}

impl RotationConfig {
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }
}

/// Nodes a cycle animates. `indicators` may be empty; when present it is
/// expected to line up with `slides`.
pub struct RotationNodes<N> {
    pub slides: Vec<N>,
    pub indicators: Vec<N>,
    pub progress: Option<N>,
}

struct Timers<H> {
    advance: Option<H>,
    progress: Option<H>,
    settle: Option<H>,
}

struct CycleInner<S: Surface, C: Clock> {
    surface: S,
    clock: C,
    config: RotationConfig,
    nodes: RotationNodes<S::Node>,
    state: Cell<RotationState>,
    auto: Cell<AutoAdvance>,
    timers: RefCell<Timers<C::Handle>>,
    armed_at: Cell<Duration>,
    listener: RefCell<Option<Rc<dyn Fn(usize)>>>,
}

pub struct RotationCycle<S: Surface, C: Clock> {
    inner: Rc<CycleInner<S, C>>,
}

impl<S, C> RotationCycle<S, C>
where
    S: Surface + 'static,
    C: Clock + 'static,
{
    /// Returns `None` when there are no slides.
    pub fn new(surface: S, clock: C, nodes: RotationNodes<S::Node>, config: RotationConfig) -> Option<Self> {
        let state = RotationState::new(nodes.slides.len())?;
        let cycle = Self {
            inner: Rc::new(CycleInner {
                surface,
                clock,
                config,
                nodes,
                state: Cell::new(state),
                auto: Cell::new(AutoAdvance::Stopped),
                timers: RefCell::new(Timers {
                    advance: None,
                    progress: None,
                    settle: None,
                }),
                armed_at: Cell::new(Duration::ZERO),
                listener: RefCell::new(None),
            }),
        };
        cycle.inner.paint_initial();
        Some(cycle)
    }

    /// Registers a callback for every change of the active index.
    pub fn on_change(&self, listener: impl Fn(usize) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn active_index(&self) -> usize {
        self.inner.state.get().active()
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.get().phase()
    }

    pub fn auto_advance(&self) -> AutoAdvance {
        self.inner.auto.get()
    }

    /// Starts auto-advance with a fresh interval.
    pub fn start(&self) {
        self.inner.auto.set(AutoAdvance::Running);
        CycleInner::arm(&self.inner);
    }

    pub fn stop(&self) {
        self.inner.auto.set(AutoAdvance::Stopped);
        self.inner.disarm();
    }

    /// Holds auto-advance without touching the active slide.
    pub fn pause(&self) {
        if self.inner.auto.get() == AutoAdvance::Running {
            self.inner.auto.set(AutoAdvance::Paused);
            self.inner.disarm();
        }
    }

    pub fn resume(&self) {
        if self.inner.auto.get() == AutoAdvance::Paused {
            self.inner.auto.set(AutoAdvance::Running);
            CycleInner::arm(&self.inner);
        }
    }

    pub fn advance(&self) -> bool {
        CycleInner::manual(&self.inner, Request::Next)
    }

    pub fn previous(&self) -> bool {
        CycleInner::manual(&self.inner, Request::Previous)
    }

    pub fn select(&self, index: usize) -> bool {
        CycleInner::manual(&self.inner, Request::Select(index))
    }

    /// Arrow keys step through the slides. Returns whether the key was used.
    pub fn handle_key(&self, key: &str) -> bool {
        match key {
            "ArrowRight" => self.advance(),
            "ArrowLeft" => self.previous(),
            _ => false,
        }
    }
}

impl<S: Surface, C: Clock> Drop for RotationCycle<S, C> {
    fn drop(&mut self) {
        self.inner.auto.set(AutoAdvance::Stopped);
        self.inner.disarm();
        self.inner.timers.borrow_mut().settle.take();
    }
}

impl<S: Surface, C: Clock> CycleInner<S, C> {
    fn paint_initial(&self) {
        let active = self.state.get().active();
        for (i, slide) in self.nodes.slides.iter().enumerate() {
            if i == active {
                self.surface.add_class(slide, ACTIVE_CLASS);
            } else {
                self.surface.remove_class(slide, ACTIVE_CLASS);
            }
        }
        for (i, indicator) in self.nodes.indicators.iter().enumerate() {
            if i == active {
                self.surface.add_class(indicator, ACTIVE_CLASS);
            } else {
                self.surface.remove_class(indicator, ACTIVE_CLASS);
            }
        }
    }

    fn settle(&self) {
        let mut state = self.state.get();
        if let Some(Transition { from, .. }) = state.settle() {
            self.state.set(state);
            self.surface.remove_class(&self.nodes.slides[from], LEAVING_CLASS);
        }
        let done = self.timers.borrow_mut().settle.take();
        drop(done);
    }

    fn disarm(&self) {
        let (advance, progress_timer) = {
            let mut timers = self.timers.borrow_mut();
            (timers.advance.take(), timers.progress.take())
        };
        drop(advance);
        drop(progress_timer);
    }

    fn paint_progress(&self) {
        let Some(bar) = self.nodes.progress.as_ref() else {
            return;
        };
        // Slides change every interval after arming, so the bar wraps with them.
        let interval = self.config.interval.as_millis().max(1);
        let since_armed = self.clock.now().saturating_sub(self.armed_at.get()).as_millis();
        let elapsed = u64::try_from(since_armed % interval).unwrap_or(0);
        let fraction = progress(Duration::from_millis(elapsed), self.config.interval);
        self.surface
            .set_style(bar, "width", &format!("{:.1}%", fraction * 100.0));
    }
}

impl<S, C> CycleInner<S, C>
where
    S: Surface + 'static,
    C: Clock + 'static,
{
    fn manual(this: &Rc<Self>, request: Request) -> bool {
        let started = Self::transition(this, request);
        if started && this.auto.get() == AutoAdvance::Running {
            Self::arm(this);
        }
        started
    }

    fn transition(this: &Rc<Self>, request: Request) -> bool {
        let mut state = this.state.get();
        let Some(Transition { from, to }) = state.begin(request) else {
            return false;
        };
        this.state.set(state);

        let surface = &this.surface;
        surface.remove_class(&this.nodes.slides[from], ACTIVE_CLASS);
        surface.add_class(&this.nodes.slides[from], LEAVING_CLASS);
        surface.add_class(&this.nodes.slides[to], ACTIVE_CLASS);
        if let Some(indicator) = this.nodes.indicators.get(from) {
            surface.remove_class(indicator, ACTIVE_CLASS);
        }
        if let Some(indicator) = this.nodes.indicators.get(to) {
            surface.add_class(indicator, ACTIVE_CLASS);
        }

        let weak = Rc::downgrade(this);
        let settle = this.clock.after(
            this.config.settle,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.settle();
                }
            }),
        );
        let previous = this.timers.borrow_mut().settle.replace(settle);
        drop(previous);

        let listener = this.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(to);
        }
        true
    }

    /// Cancels any running timers, then starts fresh ones.
    fn arm(this: &Rc<Self>) {
        this.disarm();
        this.armed_at.set(this.clock.now());

        let weak: Weak<Self> = Rc::downgrade(this);
        let advance = this.clock.every(
            this.config.interval,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Self::transition(&inner, Request::Next);
                }
            }),
        );

        let progress_timer = this.nodes.progress.as_ref().map(|_| {
            this.paint_progress();
            let weak: Weak<Self> = Rc::downgrade(this);
            this.clock.every(
                this.config.progress_tick,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.paint_progress();
                    }
                }),
            )
        });

        let mut timers = this.timers.borrow_mut();
        timers.advance = Some(advance);
        timers.progress = progress_timer;
    }
}
