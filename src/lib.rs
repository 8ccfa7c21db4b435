//! Layerdepth generates synthetic depth-ordering puzzles.
//!
//! Each task pair holds:
//!
//! - an overlapping view of translucent shapes, painted back to front
//! - a separated view, where the same shapes are laid out left to right from front to back and annotated
//! - an optional ground-truth video of the shapes sliding from the first view into the second
//!
//! The usual entry point is [`TaskGenerator`], built from a [`TaskConfig`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Hold / transition / hold frame synthesis.
pub mod animation;
/// Video encoders.
pub mod encode;
/// Separated-view planning and annotation.
pub mod layout;
/// Shape rasterization and text.
pub mod render;
/// Scene model and random scene generation.
pub mod scene;
/// Task configuration, prompts and dataset output.
pub mod task;

pub use crate::foundation::core::{BezPath, Canvas, PixelPos, Point, Rgb8, Rgba8, Vec2};
pub use crate::foundation::error::{LayerDepthError, LayerDepthResult};

pub use crate::animation::ease::ease_out_quad;
pub use crate::animation::synth::{FrameSequence, Phase, TransitionOpts, synthesize_transition};
pub use crate::encode::ffmpeg::FfmpegVideoEncoder;
pub use crate::encode::sink::{InMemoryEncoder, VideoEncoder};
pub use crate::layout::annotate::{AnnotationStyle, render_separated};
pub use crate::layout::planner::{SeparatedLayout, plan_separated_layout};
pub use crate::render::composite::{DrawOrder, ShapeStyle, render_shapes};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::text::{FontLabelPainter, LabelPainter, NoLabels};
pub use crate::scene::generator::{SceneParams, generate_scene};
pub use crate::scene::model::{Scene, Shape, ShapeKind};
pub use crate::task::config::TaskConfig;
pub use crate::task::generator::{RenderedTask, TaskGenerator};
pub use crate::task::pair::TaskPair;
