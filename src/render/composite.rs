use crate::foundation::core::{BezPath, Canvas, Rgb8, Rgba8};
use crate::foundation::error::{LayerDepthError, LayerDepthResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::frame::FrameRGBA;
use crate::render::geometry::{bezpath_to_cpu, shape_path};
use crate::scene::model::Shape;

/// Order in which shapes are painted; later shapes cover earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOrder {
    /// Ascending layer: back-most painted first, front-most ends up on top.
    BackToFront,
    /// Descending layer: front-most painted first.
    FrontToBack,
}

impl DrawOrder {
    /// Copy of `shapes` sorted into this order.
    pub fn sorted(self, shapes: &[Shape]) -> Vec<Shape> {
        let mut out = shapes.to_vec();
        match self {
            Self::BackToFront => out.sort_by_key(|s| s.layer),
            Self::FrontToBack => out.sort_by_key(|s| std::cmp::Reverse(s.layer)),
        }
        out
    }
}

/// Fixed styling shared by every render of a task.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    /// Opaque canvas background.
    pub background: Rgb8,
    /// Solid outline drawn over each fill.
    pub outline: Rgba8,
    /// Outline width in pixels.
    pub outline_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            background: Rgb8::new(255, 255, 255),
            outline: Rgba8::BLACK,
            outline_width: 2.0,
        }
    }
}

/// Render `shapes` in `order` onto a fresh opaque canvas.
pub fn render_shapes(
    canvas: Canvas,
    style: &ShapeStyle,
    shapes: &[Shape],
    order: DrawOrder,
) -> LayerDepthResult<FrameRGBA> {
    let mut target = ShapeCanvas::new(canvas, style)?;
    for shape in order.sorted(shapes) {
        target.draw_shape(&shape);
    }
    target.finish()
}

/// Single-use drawing surface. Every shape is blended straight into one accumulator;
/// there are no per-shape intermediate layers.
pub(crate) struct ShapeCanvas {
    canvas: Canvas,
    style: ShapeStyle,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl ShapeCanvas {
    pub(crate) fn new(canvas: Canvas, style: &ShapeStyle) -> LayerDepthResult<Self> {
        let (w, h) = canvas.dims_u16()?;
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(style.background.opaque().to_cpu_color());
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));
        Ok(Self {
            canvas,
            style: *style,
            ctx,
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Translucent fill source-over the accumulated image, then the solid outline.
    pub(crate) fn draw_shape(&mut self, shape: &Shape) {
        let path = bezpath_to_cpu(&shape_path(shape));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(shape.color.to_cpu_color());
        self.ctx.fill_path(&path);
        if self.style.outline_width > 0.0 {
            self.ctx
                .set_stroke(vello_cpu::kurbo::Stroke::new(self.style.outline_width));
            self.ctx.set_paint(self.style.outline.to_cpu_color());
            self.ctx.stroke_path(&path);
        }
    }

    pub(crate) fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color.to_cpu_color());
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    pub(crate) fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.set_paint(color.to_cpu_color());
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    pub(crate) fn ctx_mut(&mut self) -> &mut vello_cpu::RenderContext {
        &mut self.ctx
    }

    pub(crate) fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Rasterize and flatten to an opaque frame.
    pub(crate) fn finish(mut self) -> LayerDepthResult<FrameRGBA> {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        let src = self.pixmap.data_as_u8_slice();
        let mut data = vec![0u8; self.canvas.rgba_len()];
        flatten_premul_over_bg(&mut data, src, self.style.background)?;
        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
        })
    }
}

/// Composite premultiplied RGBA8 over an opaque background; output alpha is always 255.
pub fn flatten_premul_over_bg(
    dst: &mut [u8],
    src_premul: &[u8],
    bg: Rgb8,
) -> LayerDepthResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(LayerDepthError::render(
            "flatten_premul_over_bg expects equal-length rgba8 buffers",
        ));
    }

    let bg = [u16::from(bg.r), u16::from(bg.g), u16::from(bg.b)];
    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }
        let inv = 255 - a;
        for i in 0..3 {
            d[i] = (u16::from(s[i]) + mul_div255_u16(bg[i], inv)).min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
