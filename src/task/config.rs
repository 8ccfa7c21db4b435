use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::animation::synth::TransitionOpts;
use crate::foundation::core::{Canvas, Rgb8, Rgba8};
use crate::foundation::error::{LayerDepthError, LayerDepthResult};
use crate::layout::annotate::AnnotationStyle;
use crate::layout::planner::DEFAULT_MARGIN;
use crate::render::composite::ShapeStyle;
use crate::render::text::{DEFAULT_BOLD_FONT, DEFAULT_REGULAR_FONT, FontPaths};
use crate::scene::generator::{DEFAULT_SPREAD, SceneParams};

/// Everything a dataset run needs. All fields default, so a partial JSON file is enough.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfig {
    /// Domain tag attached to every task pair.
    pub domain: String,
    /// `(width, height)` of every image and video frame.
    pub image_size: (u32, u32),
    /// Produce a transition video per task when an encoder is available.
    pub generate_videos: bool,
    /// Video frame rate.
    pub video_fps: u32,
    /// Minimum number of overlapping shapes.
    pub min_shapes: u32,
    /// Maximum number of overlapping shapes.
    pub max_shapes: u32,
    /// Minimum shape size.
    pub min_shape_size: u32,
    /// Maximum shape size.
    pub max_shape_size: u32,
    /// Translucent fill palette.
    pub shape_colors: Vec<Rgba8>,
    /// Canvas background.
    pub bg_color: Rgb8,
    /// Annotation text color.
    pub label_color: Rgb8,
    /// Direction arrow color.
    pub arrow_color: Rgb8,
    /// Maximum shape offset from the canvas center in the overlapping view.
    pub spread: i32,
    /// Horizontal margin of the separated view.
    pub margin: i32,
    /// Outline width in pixels.
    pub outline_width: f64,
    /// Frames showing the overlapping view before motion; the end hold is twice this.
    pub hold_frames: u32,
    /// Interpolated frames.
    pub animation_frames: u32,
    /// Regular label font.
    pub font_path: PathBuf,
    /// Bold header font.
    pub bold_font_path: Option<PathBuf>,
    /// Number of task pairs in a dataset run.
    pub num_samples: u32,
    /// Dataset root.
    pub output_dir: PathBuf,
    /// Seed for reproducible datasets; OS entropy when absent.
    pub random_seed: Option<u64>,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            domain: "layer_depth".to_string(),
            image_size: (512, 512),
            generate_videos: true,
            video_fps: 10,
            min_shapes: 3,
            max_shapes: 5,
            min_shape_size: 80,
            max_shape_size: 150,
            shape_colors: vec![
                Rgba8::new(255, 100, 100, 180),
                Rgba8::new(100, 255, 100, 180),
                Rgba8::new(100, 100, 255, 180),
                Rgba8::new(255, 255, 100, 180),
                Rgba8::new(255, 100, 255, 180),
                Rgba8::new(100, 255, 255, 180),
            ],
            bg_color: Rgb8::new(255, 255, 255),
            label_color: Rgb8::new(50, 50, 50),
            arrow_color: Rgb8::new(150, 150, 150),
            spread: DEFAULT_SPREAD,
            margin: DEFAULT_MARGIN,
            outline_width: 2.0,
            hold_frames: 5,
            animation_frames: 25,
            font_path: PathBuf::from(DEFAULT_REGULAR_FONT),
            bold_font_path: Some(PathBuf::from(DEFAULT_BOLD_FONT)),
            num_samples: 10,
            output_dir: PathBuf::from("data/questions"),
            random_seed: None,
        }
    }
}

impl TaskConfig {
    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> LayerDepthResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)?;
        Ok(cfg)
    }

    /// Reject configurations the generator cannot honor.
    pub fn validate(&self) -> LayerDepthResult<()> {
        let (w, h) = self.image_size;
        if w == 0 || h == 0 {
            return Err(LayerDepthError::validation("image_size must be non-zero"));
        }
        if w > u32::from(u16::MAX) || h > u32::from(u16::MAX) {
            return Err(LayerDepthError::validation(format!(
                "image_size must fit in {}x{}",
                u16::MAX,
                u16::MAX
            )));
        }
        if self.min_shapes == 0 {
            return Err(LayerDepthError::validation("min_shapes must be >= 1"));
        }
        if self.min_shapes > self.max_shapes {
            return Err(LayerDepthError::validation(format!(
                "min_shapes ({}) must be <= max_shapes ({})",
                self.min_shapes, self.max_shapes
            )));
        }
        if self.min_shape_size == 0 {
            return Err(LayerDepthError::validation("min_shape_size must be >= 1"));
        }
        if self.min_shape_size > self.max_shape_size {
            return Err(LayerDepthError::validation(format!(
                "min_shape_size ({}) must be <= max_shape_size ({})",
                self.min_shape_size, self.max_shape_size
            )));
        }
        if self.shape_colors.is_empty() {
            return Err(LayerDepthError::validation("shape_colors must not be empty"));
        }
        if self.spread < 0 {
            return Err(LayerDepthError::validation("spread must be >= 0"));
        }
        if self.margin < 0 || 2 * i64::from(self.margin) >= i64::from(w) {
            return Err(LayerDepthError::validation(
                "margin must be >= 0 and leave room for the shapes",
            ));
        }
        let usable = i64::from(w) - 2 * i64::from(self.margin);
        if usable / (i64::from(self.max_shapes) + 1) < 1 {
            return Err(LayerDepthError::validation(format!(
                "max_shapes ({}) leaves no spacing between separated slots in {usable}px",
                self.max_shapes
            )));
        }
        if !self.outline_width.is_finite() || self.outline_width < 0.0 {
            return Err(LayerDepthError::validation(
                "outline_width must be finite and >= 0",
            ));
        }
        if self.video_fps == 0 {
            return Err(LayerDepthError::validation("video_fps must be non-zero"));
        }
        if self.animation_frames < 2 {
            return Err(LayerDepthError::validation("animation_frames must be >= 2"));
        }
        if self.domain.trim().is_empty() {
            return Err(LayerDepthError::validation("domain must not be empty"));
        }
        Ok(())
    }

    /// Canvas of every render.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.image_size.0, self.image_size.1)
    }

    /// Scene sampling parameters.
    pub fn scene_params(&self) -> SceneParams {
        SceneParams {
            canvas: self.canvas(),
            min_shapes: self.min_shapes,
            max_shapes: self.max_shapes,
            min_size: self.min_shape_size,
            max_size: self.max_shape_size,
            spread: self.spread,
            palette: self.shape_colors.clone(),
        }
    }

    /// Fill/outline styling.
    pub fn shape_style(&self) -> ShapeStyle {
        ShapeStyle {
            background: self.bg_color,
            outline: Rgba8::BLACK,
            outline_width: self.outline_width,
        }
    }

    /// Separated-view annotation styling.
    pub fn annotation_style(&self) -> AnnotationStyle {
        AnnotationStyle {
            label_color: self.label_color,
            arrow_color: self.arrow_color,
            margin: self.margin,
        }
    }

    /// Transition frame counts.
    pub fn transition_opts(&self) -> TransitionOpts {
        TransitionOpts::with_hold(self.hold_frames, self.animation_frames)
    }

    /// Label font locations.
    pub fn font_paths(&self) -> FontPaths {
        FontPaths {
            regular: self.font_path.clone(),
            bold: self.bold_font_path.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/task/config.rs"]
mod tests;
