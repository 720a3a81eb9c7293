/// Axis-aligned box of a node in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Presentational mutations the motion components are allowed to make.
///
/// Implementations ignore failures: a node that refuses a style simply keeps
/// its previous look.
pub trait Surface {
    type Node: Clone;

    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    fn remove_style(&self, node: &Self::Node, property: &str);
    fn set_text(&self, node: &Self::Node, text: &str);
    fn text(&self, node: &Self::Node) -> String;
    fn bounds(&self, node: &Self::Node) -> Bounds;

    fn set_transform(&self, node: &Self::Node, transform: &str) {
        self.set_style(node, "transform", transform);
    }
}
