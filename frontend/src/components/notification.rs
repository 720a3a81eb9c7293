use std::time::Duration;

use yew::prelude::*;

use crate::config;
use crate::motion::clock::Clock;
use crate::motion::dom::BrowserClock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// A short-lived message about something the user just did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            StatusKind::Success => "status-success",
            StatusKind::Error => "status-error",
        }
    }
}

/// Holds at most one pending dismissal. Scheduling again drops, and so
/// cancels, the previous one.
pub struct AutoDismiss<C: Clock> {
    clock: C,
    delay: Duration,
    pending: Option<C::Handle>,
}

impl<C: Clock> AutoDismiss<C> {
    pub fn new(clock: C, delay: Duration) -> Self {
        Self { clock, delay, pending: None }
    }

    pub fn schedule(&mut self, on_dismiss: impl FnOnce() + 'static) {
        self.pending = None;
        self.pending = Some(self.clock.after(self.delay, Box::new(on_dismiss)));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub status: Option<Status>,
    pub on_dismiss: Callback<()>,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let dismiss = use_mut_ref(|| {
        AutoDismiss::new(
            BrowserClock,
            Duration::from_millis(u64::from(config::STATUS_DISMISS_MS)),
        )
    });
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |status: &Option<Status>| {
                match status {
                    Some(_) => dismiss.borrow_mut().schedule(move || on_dismiss.emit(())),
                    None => dismiss.borrow_mut().cancel(),
                }
                || ()
            },
            props.status.clone(),
        );
    }

    match &props.status {
        Some(status) => html! {
            <div class={classes!("status-banner", status.class())} role="status">
                <style>
                    {r#"
                        .status-banner {
                            position: fixed;
                            bottom: 24px;
                            left: 50%;
                            transform: translateX(-50%);
                            padding: 14px 22px;
                            border-radius: 12px;
                            font-size: 0.95rem;
                            color: #fff;
                            box-shadow: 0 12px 32px rgba(0, 0, 0, 0.25);
                            animation: statusIn 0.3s ease-out;
                            z-index: 50;
                        }
                        .status-success { background: #1f6f5c; }
                        .status-error { background: #a23b3b; }
                        @keyframes statusIn {
                            from { opacity: 0; transform: translate(-50%, 12px); }
                            to { opacity: 1; transform: translate(-50%, 0); }
                        }
                    "#}
                </style>
                {&status.text}
            </div>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::motion::testing::VirtualClock;

    const DISMISS_MS: u64 = config::STATUS_DISMISS_MS as u64;

    fn dismiss_timer(clock: &VirtualClock) -> AutoDismiss<VirtualClock> {
        AutoDismiss::new(clock.clone(), Duration::from_millis(DISMISS_MS))
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let inner = hits.clone();
        (hits, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn test_dismiss_fires_after_delay() {
        let clock = VirtualClock::new();
        let mut dismiss = dismiss_timer(&clock);
        let (hits, on_dismiss) = counter();
        dismiss.schedule(on_dismiss);

        clock.advance(DISMISS_MS - 1);
        assert_eq!(hits.get(), 0);
        clock.advance(1);
        assert_eq!(hits.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_new_status_cancels_earlier_dismissal() {
        let clock = VirtualClock::new();
        let mut dismiss = dismiss_timer(&clock);
        let (first, on_first) = counter();
        let (second, on_second) = counter();

        dismiss.schedule(on_first);
        clock.advance(3000);
        dismiss.schedule(on_second);
        assert_eq!(clock.pending(), 1);

        // The first deadline passes without hiding the newer message
        clock.advance(DISMISS_MS - 3000);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 0);

        clock.advance(3000);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_cancel_and_drop_stop_dismissal() {
        let clock = VirtualClock::new();
        let mut dismiss = dismiss_timer(&clock);
        let (hits, on_dismiss) = counter();
        dismiss.schedule(on_dismiss);
        dismiss.cancel();
        clock.advance(DISMISS_MS * 2);
        assert_eq!(hits.get(), 0);

        let (hits, on_dismiss) = counter();
        dismiss.schedule(on_dismiss);
        drop(dismiss);
        clock.advance(DISMISS_MS * 2);
        assert_eq!(hits.get(), 0);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_status_classes() {
        assert_eq!(Status::success("Sent").class(), "status-success");
        assert_eq!(Status::error("Nope").class(), "status-error");
        assert_eq!(Status::error("Nope").text, "Nope");
    }
}
