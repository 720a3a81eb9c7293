//! Yew hooks attaching the motion components to rendered markup.
//!
//! Each hook looks up its nodes after mount through a [`NodeRef`]. A missing
//! node means the component simply does not start; a failure while attaching
//! is logged and skips only that component.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::counter::{CounterAnimator, CounterConfig};
use super::dom::{query_all, query_one, BrowserClock, DomSurface, DomWatcher};
use super::pointer::{parallax_distance, parallax_transform, PointerDecorator, PointerEffect};
use super::reveal::{RevealConfig, RevealSequencer, REVEALED_CLASS};
use super::rotation::{RotationConfig, RotationCycle, RotationNodes};
use super::surface::Surface;
use super::watcher::{Viewport, WatchConfig};
use crate::error::DomError;

pub const SLIDE_SELECTOR: &str = "[data-slide]";
pub const INDICATOR_SELECTOR: &str = "[data-indicator]";
pub const PROGRESS_SELECTOR: &str = "[data-progress]";

type DomReveal = (DomWatcher, RevealSequencer<DomSurface, BrowserClock>);
type DomCycle = RotationCycle<DomSurface, BrowserClock>;

fn attach_reveal(elements: Vec<HtmlElement>) -> Result<DomReveal, DomError> {
    let watcher = DomWatcher::new(&WatchConfig::default())?;
    let sequencer = RevealSequencer::new(DomSurface, BrowserClock, RevealConfig::default());
    sequencer.sequence(&watcher, elements);
    Ok((watcher, sequencer))
}

/// Staggered reveal for every `selector` match inside `container`.
///
/// Re-attaches whenever `deps` changes, so lists rendered from state pick up
/// their new children. Elements revealed by an earlier run are left alone.
#[hook]
pub fn use_reveal<D>(container: NodeRef, selector: &'static str, deps: D)
where
    D: PartialEq + 'static,
{
    use_effect_with_deps(
        move |_| {
            let attached = container.cast::<Element>().and_then(|root| {
                let fresh = format!("{}:not(.{})", selector, REVEALED_CLASS);
                let elements = query_all(&root, &fresh);
                if elements.is_empty() {
                    debug!("No elements match {}, skipping reveal", selector);
                    return None;
                }
                let count = elements.len();
                match attach_reveal(elements) {
                    Ok(attached) => {
                        debug!("Revealing {} elements for {}", count, selector);
                        Some(attached)
                    }
                    Err(e) => {
                        error!("Failed to attach reveal for {}: {}", selector, e);
                        None
                    }
                }
            });
            move || drop(attached)
        },
        deps,
    );
}

#[derive(Clone, PartialEq)]
pub struct RotationControls {
    pub active: usize,
    pub select: Callback<usize>,
    pub next: Callback<MouseEvent>,
    pub previous: Callback<MouseEvent>,
    pub pause: Callback<MouseEvent>,
    pub resume: Callback<MouseEvent>,
    pub keydown: Callback<KeyboardEvent>,
}

/// Auto-advancing slideshow over the `[data-slide]` children of `container`.
///
/// `[data-indicator]` children become the dots and an optional
/// `[data-progress]` child the progress bar. `active` mirrors the cycle's
/// index for text that depends on it; the classes themselves are owned by
/// the cycle.
#[hook]
pub fn use_rotation(container: NodeRef, config: RotationConfig) -> RotationControls {
    let active = use_state(|| 0usize);
    let cycle = use_mut_ref(|| None::<DomCycle>);

    {
        let cycle = cycle.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(root) = container.cast::<Element>() {
                    let nodes = RotationNodes {
                        slides: query_all(&root, SLIDE_SELECTOR),
                        indicators: query_all(&root, INDICATOR_SELECTOR),
                        progress: query_one(&root, PROGRESS_SELECTOR),
                    };
                    match RotationCycle::new(DomSurface, BrowserClock, nodes, config) {
                        Some(started) => {
                            started.on_change(move |index| active.set(index));
                            started.start();
                            *cycle.borrow_mut() = Some(started);
                        }
                        None => debug!("Slideshow has no slides, not starting"),
                    }
                } else {
                    debug!("Slideshow container not mounted, not starting");
                }
                move || {
                    let stopped = cycle.borrow_mut().take();
                    drop(stopped);
                }
            },
            (),
        );
    }

    RotationControls {
        active: *active,
        select: cycle_callback(&cycle, |c, index: usize| {
            c.select(index);
        }),
        next: cycle_callback(&cycle, |c, _: MouseEvent| {
            c.advance();
        }),
        previous: cycle_callback(&cycle, |c, _: MouseEvent| {
            c.previous();
        }),
        pause: cycle_callback(&cycle, |c, _: MouseEvent| c.pause()),
        resume: cycle_callback(&cycle, |c, _: MouseEvent| c.resume()),
        keydown: cycle_callback(&cycle, |c, e: KeyboardEvent| {
            if c.handle_key(&e.key()) {
                e.prevent_default();
            }
        }),
    }
}

fn cycle_callback<IN: 'static>(
    cycle: &Rc<RefCell<Option<DomCycle>>>,
    action: impl Fn(&DomCycle, IN) + 'static,
) -> Callback<IN> {
    let cycle = cycle.clone();
    Callback::from(move |input: IN| {
        if let Some(cycle) = cycle.borrow().as_ref() {
            action(cycle, input);
        }
    })
}

/// Writes `value` into `node` and counts it up from zero the first time the
/// node scrolls into view.
///
/// The node must be rendered without children; its text belongs to the
/// animator from mount on.
#[hook]
pub fn use_counter(node: NodeRef, value: AttrValue) {
    use_effect_with_deps(
        move |value: &AttrValue| {
            let attached = node.cast::<HtmlElement>().and_then(|element| {
                DomSurface.set_text(&element, value);
                let watcher = match DomWatcher::new(&WatchConfig::default()) {
                    Ok(watcher) => watcher,
                    Err(e) => {
                        error!("Failed to attach counter: {}", e);
                        return None;
                    }
                };
                let animator = Rc::new(CounterAnimator::new(
                    DomSurface,
                    BrowserClock,
                    element.clone(),
                    CounterConfig::default(),
                ));
                let trigger = animator.clone();
                watcher.watch(
                    &element,
                    Box::new(move || {
                        if !trigger.animate() {
                            debug!("Counter text is not numeric, leaving it as is");
                        }
                    }),
                );
                Some((watcher, animator))
            });
            move || drop(attached)
        },
        value,
    );
}

#[derive(Clone, PartialEq)]
pub struct PointerHandlers {
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

/// Pointer tracking for `host`. The transform lands on the first
/// `target_selector` match inside it, or on `host` itself.
#[hook]
pub fn use_pointer_effect(
    host: NodeRef,
    target_selector: Option<&'static str>,
    effect: PointerEffect,
) -> PointerHandlers {
    let decorator = PointerDecorator::new(effect);
    let target = move |host: &HtmlElement| {
        target_selector
            .and_then(|selector| query_one(host, selector))
            .unwrap_or_else(|| host.clone())
    };

    let onmousemove = {
        let host = host.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = host.cast::<HtmlElement>() {
                decorator.on_move(
                    &DomSurface,
                    &element,
                    &target(&element),
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                );
            }
        })
    };
    let onmouseleave = Callback::from(move |_: MouseEvent| {
        if let Some(element) = host.cast::<HtmlElement>() {
            decorator.on_leave(&DomSurface, &target(&element));
        }
    });

    PointerHandlers {
        onmousemove,
        onmouseleave,
    }
}

/// Shifts the `layer_selector` child of `host` as the page scrolls.
#[hook]
pub fn use_parallax(host: NodeRef, layer_selector: &'static str, speed: f64) {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window();
            let layer = host
                .cast::<HtmlElement>()
                .and_then(|element| query_one(&element, layer_selector).map(|layer| (element, layer)));

            let listener = window.zip(layer).map(|(window, (element, layer))| {
                let viewport = window.clone();
                let update = Closure::wrap(Box::new(move || {
                    let height = viewport
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or_default();
                    let distance = parallax_distance(DomSurface.bounds(&element), height);
                    DomSurface.set_transform(&layer, &parallax_transform(distance, speed));
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", update.as_ref().unchecked_ref());
                let _ = update.as_ref().unchecked_ref::<web_sys::js_sys::Function>().call0(&wasm_bindgen::JsValue::NULL);
                (window, update)
            });

            move || {
                if let Some((window, update)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", update.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );
}
