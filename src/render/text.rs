use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{LayerDepthError, LayerDepthResult};

/// Common regular face on Debian-like systems.
pub const DEFAULT_REGULAR_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
/// Common bold face on Debian-like systems.
pub const DEFAULT_BOLD_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Face weight requested for a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelWeight {
    /// Body text.
    Regular,
    /// Headers.
    Bold,
}

/// How a label should look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font size in pixels.
    pub size_px: f32,
    /// Text color.
    pub color: Rgba8,
    /// Face weight.
    pub weight: LabelWeight,
}

/// Capability for painting short text labels onto a canvas.
///
/// `top_left` is the top-left corner of the first line box.
pub trait LabelPainter {
    /// Paint `text` into `ctx`.
    fn draw_label(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        top_left: Point,
        style: LabelStyle,
    ) -> LayerDepthResult<()>;
}

/// Painter used when no font is available: labels are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLabels;

impl LabelPainter for NoLabels {
    fn draw_label(
        &mut self,
        _ctx: &mut vello_cpu::RenderContext,
        _text: &str,
        _top_left: Point,
        _style: LabelStyle,
    ) -> LayerDepthResult<()> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TextBrushRgba8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

struct LoadedFace {
    family: String,
    data: vello_cpu::peniko::FontData,
}

/// Painter that shapes text with Parley and fills glyph runs with `vello_cpu`.
pub struct FontLabelPainter {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    regular: LoadedFace,
    bold: Option<LoadedFace>,
}

impl FontLabelPainter {
    /// Load a regular face and an optional bold face from font files.
    pub fn load(regular: &Path, bold: Option<&Path>) -> LayerDepthResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let regular = load_face(&mut font_ctx, regular)?;
        let bold = match bold {
            Some(p) => match load_face(&mut font_ctx, p) {
                Ok(face) => Some(face),
                Err(e) => {
                    tracing::warn!(
                        path = %p.display(),
                        error = %e,
                        "bold font unavailable, using regular"
                    );
                    None
                }
            },
            None => None,
        };
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            regular,
            bold,
        })
    }

    fn face(&self, weight: LabelWeight) -> &LoadedFace {
        match weight {
            LabelWeight::Bold => self.bold.as_ref().unwrap_or(&self.regular),
            LabelWeight::Regular => &self.regular,
        }
    }
}

impl LabelPainter for FontLabelPainter {
    fn draw_label(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        top_left: Point,
        style: LabelStyle,
    ) -> LayerDepthResult<()> {
        if !style.size_px.is_finite() || style.size_px <= 0.0 {
            return Err(LayerDepthError::validation(
                "label size_px must be finite and > 0",
            ));
        }
        let (family, font) = {
            let face = self.face(style.weight);
            (face.family.clone(), face.data.clone())
        };
        let brush = TextBrushRgba8 {
            r: style.color.r,
            g: style.color.g,
            b: style.color.b,
            a: style.color.a,
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));
        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        ctx.set_transform(vello_cpu::kurbo::Affine::translate((top_left.x, top_left.y)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }
}

fn load_face(font_ctx: &mut parley::FontContext, path: &Path) -> LayerDepthResult<LoadedFace> {
    let bytes = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;

    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
    let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
        LayerDepthError::validation(format!(
            "no font families registered from '{}'",
            path.display()
        ))
    })?;
    let family = font_ctx
        .collection
        .family_name(family_id)
        .ok_or_else(|| LayerDepthError::validation("registered font family has no name"))?
        .to_string();

    let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
    Ok(LoadedFace { family, data })
}

/// Font file locations for [`label_painter_or_fallback`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontPaths {
    /// Regular face.
    pub regular: PathBuf,
    /// Bold face; falls back to `regular` when missing.
    pub bold: Option<PathBuf>,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            regular: PathBuf::from(DEFAULT_REGULAR_FONT),
            bold: Some(PathBuf::from(DEFAULT_BOLD_FONT)),
        }
    }
}

/// Font-backed painter if the fonts load, otherwise [`NoLabels`].
pub fn label_painter_or_fallback(paths: &FontPaths) -> Box<dyn LabelPainter> {
    match FontLabelPainter::load(&paths.regular, paths.bold.as_deref()) {
        Ok(p) => {
            tracing::debug!(family = %p.regular.family, "loaded label font");
            Box::new(p)
        }
        Err(e) => {
            tracing::warn!(
                path = %paths.regular.display(),
                error = %e,
                "label font unavailable, rendering without text labels"
            );
            Box::new(NoLabels)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
