use crate::foundation::core::{Canvas, PixelPos};
use crate::scene::model::{Scene, Shape};

/// Default horizontal margin of the separated view, in pixels.
pub const DEFAULT_MARGIN: i32 = 40;

/// One shape's place in the separated view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutSlot {
    /// 1-based rank, 1 being front-most.
    pub rank: u32,
    /// The shape occupying the slot.
    pub layer: u32,
    /// Target center.
    pub pos: PixelPos,
}

/// Separated layout: shapes left to right in front-to-back order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeparatedLayout {
    /// Horizontal distance between neighbouring slots.
    pub spacing: i32,
    /// Slots, front-most first.
    pub slots: Vec<LayoutSlot>,
}

impl SeparatedLayout {
    /// Target center for the shape on `layer`.
    pub fn target_for(&self, layer: u32) -> Option<PixelPos> {
        self.slots.iter().find(|s| s.layer == layer).map(|s| s.pos)
    }

    /// `shapes` moved to their slots, in slot (front-to-back) order.
    ///
    /// Shapes whose layer has no slot are dropped.
    pub fn place(&self, shapes: &[Shape]) -> Vec<Shape> {
        self.slots
            .iter()
            .filter_map(|slot| {
                shapes
                    .iter()
                    .find(|s| s.layer == slot.layer)
                    .map(|s| s.moved_to(slot.pos))
            })
            .collect()
    }
}

/// Horizontal spacing for `n` slots: `(width - 2*margin) / (n + 1)`.
pub fn slot_spacing(n: usize, canvas: Canvas, margin: i32) -> i32 {
    let avail = canvas.width as i32 - 2 * margin;
    avail / (n as i32 + 1)
}

/// Slot centers for `n` shapes; depends only on `n`, the canvas and the margin.
pub fn slot_positions(n: usize, canvas: Canvas, margin: i32) -> Vec<PixelPos> {
    let spacing = slot_spacing(n, canvas, margin);
    let y = (canvas.height / 2) as i32;
    (0..n)
        .map(|i| PixelPos::new(margin + spacing * (i as i32 + 1), y))
        .collect()
}

/// Assign every shape of `scene` a slot: front-most leftmost, back-most rightmost.
pub fn plan_separated_layout(scene: &Scene, canvas: Canvas, margin: i32) -> SeparatedLayout {
    let ordered = scene.front_to_back();
    let positions = slot_positions(ordered.len(), canvas, margin);
    let slots = ordered
        .iter()
        .zip(positions)
        .enumerate()
        .map(|(i, (shape, pos))| LayoutSlot {
            rank: i as u32 + 1,
            layer: shape.layer,
            pos,
        })
        .collect();
    SeparatedLayout {
        spacing: slot_spacing(ordered.len(), canvas, margin),
        slots,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/planner.rs"]
mod tests;
