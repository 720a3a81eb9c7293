//! Transforms that follow the pointer or the scroll position.
//!
//! Everything here is a function of the latest sample only. Easing between
//! samples is left to the CSS `transition` on the target.

use super::surface::{Bounds, Surface};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEffect {
    /// 3D tilt towards the pointer, at most `max_degrees` on each axis.
    Tilt { max_degrees: f64 },
    /// Pull the target towards the pointer by `strength` of the offset.
    Magnetic { strength: f64 },
}

/// Pointer offset from the centre of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub dx: f64,
    pub dy: f64,
    pub half_width: f64,
    pub half_height: f64,
}

impl PointerSample {
    /// `None` for a zero-sized element, which cannot be tracked.
    pub fn relative(bounds: Bounds, x: f64, y: f64) -> Option<Self> {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return None;
        }
        let (cx, cy) = bounds.center();
        Some(Self {
            dx: x - cx,
            dy: y - cy,
            half_width: bounds.width / 2.0,
            half_height: bounds.height / 2.0,
        })
    }

    /// Offset scaled to `-1.0..=1.0` on both axes.
    pub fn normalized(&self) -> (f64, f64) {
        (
            (self.dx / self.half_width).clamp(-1.0, 1.0),
            (self.dy / self.half_height).clamp(-1.0, 1.0),
        )
    }
}

impl PointerEffect {
    pub fn transform(&self, sample: &PointerSample) -> String {
        match *self {
            PointerEffect::Tilt { max_degrees } => {
                let (nx, ny) = sample.normalized();
                tilt(-ny * max_degrees, nx * max_degrees)
            }
            PointerEffect::Magnetic { strength } => {
                translate(sample.dx * strength, sample.dy * strength)
            }
        }
    }

    /// Identity transform, spelled like the moving one so CSS can
    /// interpolate back to rest.
    pub fn rest(&self) -> String {
        match self {
            PointerEffect::Tilt { .. } => tilt(0.0, 0.0),
            PointerEffect::Magnetic { .. } => translate(0.0, 0.0),
        }
    }
}

fn tilt(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
        rotate_x + 0.0,
        rotate_y + 0.0
    )
}

fn translate(x: f64, y: f64) -> String {
    format!("translate({:.2}px, {:.2}px)", x + 0.0, y + 0.0)
}

/// Applies a [`PointerEffect`] measured against `host` to `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerDecorator {
    effect: PointerEffect,
}

impl PointerDecorator {
    pub fn new(effect: PointerEffect) -> Self {
        Self { effect }
    }

    pub fn on_move<S: Surface>(&self, surface: &S, host: &S::Node, target: &S::Node, x: f64, y: f64) {
        if let Some(sample) = PointerSample::relative(surface.bounds(host), x, y) {
            surface.set_transform(target, &self.effect.transform(&sample));
        }
    }

    pub fn on_leave<S: Surface>(&self, surface: &S, target: &S::Node) {
        surface.set_transform(target, &self.effect.rest());
    }
}

/// Distance from the viewport centre to the element centre. Positive while
/// the element sits above the middle of the screen.
pub fn parallax_distance(bounds: Bounds, viewport_height: f64) -> f64 {
    viewport_height / 2.0 - bounds.center().1
}

/// Vertical shift of a parallax layer, proportional to its distance.
pub fn parallax_offset(distance: f64, speed: f64) -> f64 {
    distance * speed
}

pub fn parallax_transform(distance: f64, speed: f64) -> String {
    format!("translate3d(0px, {:.1}px, 0px)", parallax_offset(distance, speed) + 0.0)
}

/// Square ripple centred on a click, in coordinates local to the element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

pub fn ripple_geometry(bounds: Bounds, x: f64, y: f64) -> Ripple {
    let size = bounds.width.max(bounds.height);
    Ripple {
        size,
        left: x - bounds.left - size / 2.0,
        top: y - bounds.top - size / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::FakeSurface;

    fn card() -> Bounds {
        Bounds::new(100.0, 200.0, 200.0, 100.0)
    }

    #[test]
    fn test_sample_relative_to_center() {
        let sample = PointerSample::relative(card(), 250.0, 225.0).unwrap();
        assert_eq!(sample.dx, 50.0);
        assert_eq!(sample.dy, -25.0);
        assert_eq!(sample.normalized(), (0.5, -0.5));
    }

    #[test]
    fn test_zero_sized_element_is_ignored() {
        assert!(PointerSample::relative(Bounds::new(0.0, 0.0, 0.0, 10.0), 1.0, 1.0).is_none());
    }

    #[test]
    fn test_tilt_follows_pointer() {
        let effect = PointerEffect::Tilt { max_degrees: 10.0 };
        let sample = PointerSample::relative(card(), 300.0, 200.0).unwrap();
        assert_eq!(
            effect.transform(&sample),
            "perspective(1000px) rotateX(10.00deg) rotateY(10.00deg)"
        );
    }

    #[test]
    fn test_tilt_clamps_outside_element() {
        let effect = PointerEffect::Tilt { max_degrees: 8.0 };
        let sample = PointerSample::relative(card(), 900.0, 250.0).unwrap();
        assert_eq!(
            effect.transform(&sample),
            "perspective(1000px) rotateX(0.00deg) rotateY(8.00deg)"
        );
    }

    #[test]
    fn test_magnetic_is_proportional() {
        let effect = PointerEffect::Magnetic { strength: 0.3 };
        let sample = PointerSample::relative(card(), 300.0, 300.0).unwrap();
        assert_eq!(effect.transform(&sample), "translate(30.00px, 15.00px)");
    }

    #[test]
    fn test_decorator_moves_then_resets_target() {
        let surface = FakeSurface::new();
        surface.set_bounds(1, card());
        let decorator = PointerDecorator::new(PointerEffect::Magnetic { strength: 0.5 });

        decorator.on_move(&surface, &1, &2, 200.0, 250.0);
        assert_eq!(surface.style(2, "transform").as_deref(), Some("translate(0.00px, 0.00px)"));

        decorator.on_move(&surface, &1, &2, 300.0, 250.0);
        assert_eq!(surface.style(2, "transform").as_deref(), Some("translate(50.00px, 0.00px)"));
        assert_eq!(surface.style(1, "transform"), None);

        decorator.on_leave(&surface, &2);
        assert_eq!(surface.style(2, "transform").as_deref(), Some("translate(0.00px, 0.00px)"));
    }

    #[test]
    fn test_parallax_follows_distance_from_centre() {
        let centred = Bounds::new(0.0, 300.0, 800.0, 200.0);
        assert_eq!(parallax_distance(centred, 800.0), 0.0);
        assert_eq!(parallax_transform(0.0, 0.4), "translate3d(0px, 0.0px, 0px)");

        let scrolled_up = Bounds::new(0.0, -100.0, 800.0, 200.0);
        let distance = parallax_distance(scrolled_up, 800.0);
        assert_eq!(distance, 400.0);
        assert_eq!(parallax_offset(distance, 0.25), 100.0);
        assert_eq!(parallax_transform(-200.0, 0.5), "translate3d(0px, -100.0px, 0px)");
    }

    #[test]
    fn test_ripple_centred_on_click() {
        let ripple = ripple_geometry(card(), 150.0, 210.0);
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.left, -50.0);
        assert_eq!(ripple.top, -90.0);
    }
}
