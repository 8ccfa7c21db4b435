use crate::foundation::core::{PixelPos, Rgba8};

/// Geometric primitive a shape is drawn as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Disk of radius `size / 2`.
    Circle,
    /// Axis-aligned square with half-extent `size / 2`.
    Square,
    /// Isosceles triangle, apex up, inscribed in the `size` box.
    Triangle,
}

impl ShapeKind {
    /// All kinds, in sampling order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
        }
    }
}

/// One translucent shape in a scene.
///
/// `layer` is the ground-truth depth: 0 is back-most, higher values are closer to the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    /// Center on the canvas.
    pub pos: PixelPos,
    /// Bounding extent in pixels.
    pub size: u32,
    /// Primitive.
    pub kind: ShapeKind,
    /// Fill color (straight alpha).
    pub color: Rgba8,
    /// Depth rank, unique within a scene.
    pub layer: u32,
}

impl Shape {
    /// Half-extent, using integer division.
    pub fn half_extent(&self) -> i32 {
        (self.size / 2) as i32
    }

    /// Copy of this shape centered at `pos`. Identity, color and layer are kept.
    pub fn moved_to(&self, pos: PixelPos) -> Self {
        Self { pos, ..*self }
    }
}

/// Immutable set of shapes with a contiguous `0..n` layer range.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Wrap shapes whose layers are already `0..n` in generation order.
    pub(crate) fn from_generated(shapes: Vec<Shape>) -> Self {
        debug_assert!(
            shapes
                .iter()
                .enumerate()
                .all(|(i, s)| s.layer as usize == i)
        );
        Self { shapes }
    }

    /// Shapes in generation order (which is also back-to-front order).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes sorted by ascending layer: back-most first.
    pub fn back_to_front(&self) -> Vec<Shape> {
        let mut out = self.shapes.clone();
        out.sort_by_key(|s| s.layer);
        out
    }

    /// Shapes sorted by descending layer: front-most first.
    pub fn front_to_back(&self) -> Vec<Shape> {
        let mut out = self.shapes.clone();
        out.sort_by_key(|s| std::cmp::Reverse(s.layer));
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
