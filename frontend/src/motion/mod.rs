//! Scroll, pointer and timer driven motion for the marketing pages.
//!
//! The core types here never touch `web-sys` directly. They are written
//! against two small capabilities:
//!
//! - [`Surface`](surface::Surface): class and style mutation on an opaque node type
//! - [`Clock`](clock::Clock): one-shot and repeating timers whose handles cancel on drop
//!
//! [`dom`] provides the browser implementations and [`hooks`] wires them into
//! Yew components. Tests drive the same types with a fake surface and a
//! virtual clock.

pub mod clock;
pub mod counter;
pub mod dom;
pub mod hooks;
pub mod pointer;
pub mod progress;
pub mod reveal;
pub mod rotation;
pub mod surface;
pub mod watcher;

#[cfg(test)]
pub(crate) mod testing;
