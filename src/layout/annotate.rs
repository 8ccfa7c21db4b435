use crate::foundation::core::{Canvas, PixelPos, Point, Rgb8};
use crate::foundation::error::LayerDepthResult;
use crate::layout::planner::SeparatedLayout;
use crate::render::composite::{ShapeCanvas, ShapeStyle};
use crate::render::frame::FrameRGBA;
use crate::render::geometry::{polygon, segment};
use crate::render::text::{LabelPainter, LabelStyle, LabelWeight};
use crate::scene::model::Scene;

const HEADER_Y: i32 = 30;
const ARROW_Y: i32 = 45;
const ARROW_INSET: i32 = 50;
const ARROW_HEAD_LEN: i32 = 10;
const ARROW_HEAD_HALF: i32 = 5;
const ARROW_WIDTH: f64 = 2.0;
const BACK_LABEL_WIDTH: i32 = 40;
const HEADER_SIZE_PX: f32 = 14.0;
const RANK_SIZE_PX: f32 = 12.0;
const RANK_GAP: i32 = 10;
const RANK_NUDGE_X: i32 = 5;

/// Colors and placement of the separated view's annotations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationStyle {
    /// Header and rank label color.
    pub label_color: Rgb8,
    /// Direction arrow color.
    pub arrow_color: Rgb8,
    /// Horizontal margin shared with the layout planner.
    pub margin: i32,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            label_color: Rgb8::new(50, 50, 50),
            arrow_color: Rgb8::new(150, 150, 150),
            margin: crate::layout::planner::DEFAULT_MARGIN,
        }
    }
}

/// Render the answer image: a "FRONT → BACK" header, then every shape at its slot in
/// front-to-back order, each followed by its 1-based rank below it.
pub fn render_separated(
    scene: &Scene,
    layout: &SeparatedLayout,
    canvas: Canvas,
    style: &ShapeStyle,
    notes: &AnnotationStyle,
    labels: &mut dyn LabelPainter,
) -> LayerDepthResult<FrameRGBA> {
    let mut target = ShapeCanvas::new(canvas, style)?;
    draw_header(&mut target, notes, labels)?;

    let rank_style = LabelStyle {
        size_px: RANK_SIZE_PX,
        color: notes.label_color.opaque(),
        weight: LabelWeight::Regular,
    };
    for (slot, shape) in layout.slots.iter().zip(layout.place(scene.shapes())) {
        target.draw_shape(&shape);
        let at = PixelPos::new(
            slot.pos.x - RANK_NUDGE_X,
            slot.pos.y + shape.half_extent() + RANK_GAP,
        );
        labels.draw_label(
            target.ctx_mut(),
            &slot.rank.to_string(),
            at.to_point(),
            rank_style,
        )?;
    }
    target.finish()
}

fn draw_header(
    target: &mut ShapeCanvas,
    notes: &AnnotationStyle,
    labels: &mut dyn LabelPainter,
) -> LayerDepthResult<()> {
    let width = target.canvas().width as i32;
    let m = notes.margin;
    let header = LabelStyle {
        size_px: HEADER_SIZE_PX,
        color: notes.label_color.opaque(),
        weight: LabelWeight::Bold,
    };
    labels.draw_label(
        target.ctx_mut(),
        "FRONT",
        Point::new(f64::from(m), f64::from(HEADER_Y)),
        header,
    )?;
    labels.draw_label(
        target.ctx_mut(),
        "BACK",
        Point::new(f64::from(width - m - BACK_LABEL_WIDTH), f64::from(HEADER_Y)),
        header,
    )?;

    let tip = PixelPos::new(width - m - ARROW_INSET, ARROW_Y);
    let arrow = notes.arrow_color.opaque();
    target.stroke_path(
        &segment(PixelPos::new(m + ARROW_INSET, ARROW_Y), tip),
        arrow,
        ARROW_WIDTH,
    );
    target.fill_path(
        &polygon(&[
            tip.to_point(),
            tip.offset(-ARROW_HEAD_LEN, -ARROW_HEAD_HALF).to_point(),
            tip.offset(-ARROW_HEAD_LEN, ARROW_HEAD_HALF).to_point(),
        ]),
        arrow,
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/annotate.rs"]
mod tests;
