//! Browser implementations of the motion capabilities.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Date};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::clock::{millis, Clock};
use super::surface::{Bounds, Surface};
use super::watcher::{OnceWatcher, Viewport, WatchConfig};
use crate::error::DomError;

#[derive(Clone, Copy, Debug, Default)]
pub struct DomSurface;

impl Surface for DomSurface {
    type Node = HtmlElement;

    fn add_class(&self, node: &HtmlElement, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &HtmlElement, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn has_class(&self, node: &HtmlElement, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_style(&self, node: &HtmlElement, property: &str, value: &str) {
        let _ = node.style().set_property(property, value);
    }

    fn remove_style(&self, node: &HtmlElement, property: &str) {
        let _ = node.style().remove_property(property);
    }

    fn set_text(&self, node: &HtmlElement, text: &str) {
        node.set_text_content(Some(text));
    }

    fn text(&self, node: &HtmlElement) -> String {
        node.text_content().unwrap_or_default()
    }

    fn bounds(&self, node: &HtmlElement) -> Bounds {
        let rect = node.get_bounding_client_rect();
        Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Either kind of gloo timer; both cancel when dropped.
pub enum TimerHandle {
    Timeout(Timeout),
    Interval(Interval),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    type Handle = TimerHandle;

    fn now(&self) -> Duration {
        Duration::from_secs_f64(Date::now().max(0.0) / 1000.0)
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        TimerHandle::Timeout(Timeout::new(millis(delay), task))
    }

    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TimerHandle {
        TimerHandle::Interval(Interval::new(millis(period), task))
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// [`OnceWatcher`] fed by an `IntersectionObserver`.
///
/// Elements are unobserved as soon as they fire. Dropping the watcher
/// disconnects the observer.
pub struct DomWatcher {
    observer: IntersectionObserver,
    watcher: Rc<OnceWatcher<Element>>,
    _callback: ObserverCallback,
}

impl DomWatcher {
    pub fn new(config: &WatchConfig) -> Result<Self, DomError> {
        let watcher = Rc::new(OnceWatcher::new(config.threshold));

        let feed = watcher.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                if feed.notify(&target, entry.intersection_ratio(), entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(DomError::observer)?;

        Ok(Self {
            observer,
            watcher,
            _callback: callback,
        })
    }
}

impl Viewport<HtmlElement> for DomWatcher {
    fn watch(&self, node: &HtmlElement, on_visible: Box<dyn FnOnce()>) {
        let element: &Element = node.as_ref();
        self.watcher.watch(element, on_visible);
        self.observer.observe(element);
    }
}

impl Drop for DomWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Every element under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_one(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}
