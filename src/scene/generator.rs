use rand::{Rng, seq::SliceRandom};

use crate::foundation::core::{Canvas, Rgba8};
use crate::scene::model::{Scene, Shape, ShapeKind};

/// Default maximum center offset from the canvas center, in pixels.
pub const DEFAULT_SPREAD: i32 = 60;

/// Used only when an unvalidated, empty palette slips through.
const FALLBACK_COLOR: Rgba8 = Rgba8::new(128, 128, 128, 180);

/// Sampling parameters for [`generate_scene`]. Ranges are inclusive and assumed validated.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    /// Canvas the shapes cluster on.
    pub canvas: Canvas,
    /// Minimum number of shapes.
    pub min_shapes: u32,
    /// Maximum number of shapes.
    pub max_shapes: u32,
    /// Minimum shape size.
    pub min_size: u32,
    /// Maximum shape size.
    pub max_size: u32,
    /// Maximum offset from center on each axis.
    pub spread: i32,
    /// Fill colors; shuffled per scene then cycled by layer.
    pub palette: Vec<Rgba8>,
}

/// Sample a fresh scene.
///
/// Shapes cluster around the canvas center so that they overlap. Layers follow generation
/// order: the first shape is back-most. The palette is shuffled into a local copy, so the
/// caller's configuration is never mutated and color-to-layer mapping varies between scenes.
/// When there are more shapes than colors, colors repeat.
pub fn generate_scene<R: Rng + ?Sized>(params: &SceneParams, rng: &mut R) -> Scene {
    let n = rng.random_range(params.min_shapes..=params.max_shapes.max(params.min_shapes));
    let center = params.canvas.center();
    let spread = params.spread.abs();

    let mut palette = params.palette.clone();
    palette.shuffle(rng);

    let shapes: Vec<Shape> = (0..n)
        .map(|i| {
            let dx = rng.random_range(-spread..=spread);
            let dy = rng.random_range(-spread..=spread);
            let size = rng.random_range(params.min_size..=params.max_size.max(params.min_size));
            let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
            let color = if palette.is_empty() {
                FALLBACK_COLOR
            } else {
                palette[i as usize % palette.len()]
            };
            Shape {
                pos: center.offset(dx, dy),
                size,
                kind,
                color,
                layer: i,
            }
        })
        .collect();

    tracing::debug!(
        shapes = shapes.len(),
        kinds = ?shapes.iter().map(|s| s.kind.as_str()).collect::<Vec<_>>(),
        "generated scene"
    );
    Scene::from_generated(shapes)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/generator.rs"]
mod tests;
