/// Screen-space bounding box of a rendered node, as reported by the
/// rendering layer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// The top/left pair published on a focus change. The rendering layer
/// scrolls these coordinates into view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FocusPoint {
    pub top: f64,
    pub left: f64,
}

/// Opaque handle to a rendered node component.
///
/// The rendering layer registers one of these per node it draws, keyed by
/// the node's synthetic id; the session only ever asks it for geometry.
pub trait NodeComponent {
    fn bounding_box(&self) -> BoundingBox;
}
