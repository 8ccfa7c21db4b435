use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rand::Rng;

use crate::animation::synth::{FrameSequence, synthesize_transition};
use crate::encode::ffmpeg::FfmpegVideoEncoder;
use crate::encode::sink::VideoEncoder;
use crate::foundation::error::LayerDepthResult;
use crate::layout::annotate::render_separated;
use crate::layout::planner::{SeparatedLayout, plan_separated_layout};
use crate::render::composite::{DrawOrder, render_shapes};
use crate::render::frame::FrameRGBA;
use crate::render::text::{LabelPainter, label_painter_or_fallback};
use crate::scene::generator::generate_scene;
use crate::scene::model::Scene;
use crate::task::config::TaskConfig;
use crate::task::pair::TaskPair;
use crate::task::prompts::{DEFAULT_TASK_TYPE, get_prompt};

/// Both static renders of one scene, plus the layout that produced the second.
#[derive(Clone, Debug)]
pub struct RenderedTask {
    /// Ground truth.
    pub scene: Scene,
    /// Separated-view slots.
    pub layout: SeparatedLayout,
    /// Overlapping view, drawn back to front.
    pub initial: FrameRGBA,
    /// Separated view, drawn front to back with annotations.
    pub separated: FrameRGBA,
}

/// Produces task pairs from a validated [`TaskConfig`].
pub struct TaskGenerator {
    config: TaskConfig,
    labels: Box<dyn LabelPainter>,
    encoder: Option<Box<dyn VideoEncoder>>,
    video_dir: PathBuf,
}

impl std::fmt::Debug for TaskGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskGenerator")
            .field("config", &self.config)
            .field("has_encoder", &self.encoder.is_some())
            .field("video_dir", &self.video_dir)
            .finish_non_exhaustive()
    }
}

impl TaskGenerator {
    /// Validate `config`, load label fonts (falling back to no labels) and probe for `ffmpeg`.
    pub fn new(config: TaskConfig) -> LayerDepthResult<Self> {
        config.validate()?;
        let labels = label_painter_or_fallback(&config.font_paths());
        let encoder: Option<Box<dyn VideoEncoder>> = if !config.generate_videos {
            None
        } else if FfmpegVideoEncoder::is_available() {
            Some(Box::new(FfmpegVideoEncoder {
                bg: config.bg_color,
                ..FfmpegVideoEncoder::default()
            }))
        } else {
            tracing::warn!("ffmpeg not found on PATH, task pairs will have no video");
            None
        };
        let video_dir = std::env::temp_dir().join(format!("{}_videos", config.domain));
        Ok(Self {
            config,
            labels,
            encoder,
            video_dir,
        })
    }

    /// Replace the label painter.
    pub fn with_labels(mut self, labels: Box<dyn LabelPainter>) -> Self {
        self.labels = labels;
        self
    }

    /// Replace (or remove) the video encoder.
    pub fn with_encoder(mut self, encoder: Option<Box<dyn VideoEncoder>>) -> Self {
        self.encoder = encoder;
        self
    }

    /// Directory videos are staged in before being copied into the dataset.
    pub fn with_video_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.video_dir = dir.into();
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    /// Whether task pairs will carry a video.
    pub fn produces_video(&self) -> bool {
        self.config.generate_videos && self.encoder.is_some()
    }

    /// Render the overlapping and separated views of `scene`.
    pub fn render_scene(&mut self, scene: Scene) -> LayerDepthResult<RenderedTask> {
        let cfg = &self.config;
        let canvas = cfg.canvas();
        let style = cfg.shape_style();

        let initial = render_shapes(canvas, &style, scene.shapes(), DrawOrder::BackToFront)?;
        let layout = plan_separated_layout(&scene, canvas, cfg.margin);
        let separated = render_separated(
            &scene,
            &layout,
            canvas,
            &style,
            &cfg.annotation_style(),
            self.labels.as_mut(),
        )?;
        Ok(RenderedTask {
            scene,
            layout,
            initial,
            separated,
        })
    }

    /// Transition frames for an already rendered task.
    pub fn transition_frames(&self, task: &RenderedTask) -> LayerDepthResult<FrameSequence> {
        synthesize_transition(
            &task.initial,
            &task.separated,
            &task.scene,
            &task.layout,
            &self.config.shape_style(),
            &self.config.transition_opts(),
        )
    }

    /// Sample a scene and produce its complete task pair.
    #[tracing::instrument(skip(self, rng))]
    pub fn generate_task_pair<R: Rng + ?Sized>(
        &mut self,
        task_id: &str,
        rng: &mut R,
    ) -> LayerDepthResult<TaskPair> {
        let scene = generate_scene(&self.config.scene_params(), rng);
        let task = self.render_scene(scene)?;

        let ground_truth_video = if self.produces_video() {
            self.encode_video(&task, task_id)?
        } else {
            None
        };

        Ok(TaskPair {
            task_id: task_id.to_string(),
            domain: self.config.domain.clone(),
            prompt: get_prompt(DEFAULT_TASK_TYPE, rng).to_string(),
            first_image: task.initial.to_rgb_image()?,
            final_image: task.separated.to_rgb_image()?,
            ground_truth_video,
        })
    }

    /// Encoder failures degrade to `None`; only rendering errors propagate.
    fn encode_video(
        &mut self,
        task: &RenderedTask,
        task_id: &str,
    ) -> LayerDepthResult<Option<PathBuf>> {
        let sequence = self.transition_frames(task)?;
        let out_path = self.video_dir.join(format!("{task_id}_ground_truth.mp4"));
        let fps = self.config.video_fps;
        let Some(encoder) = self.encoder.as_mut() else {
            return Ok(None);
        };
        match encoder.encode(sequence.frames(), fps, &out_path) {
            Ok(path) => Ok(Some(path)),
            Err(e) => {
                tracing::warn!(
                    task_id,
                    error = %e,
                    "video encoding failed, continuing without video"
                );
                Ok(None)
            }
        }
    }

    /// Generate `num_samples` pairs into `output_dir`; returns the task directories.
    pub fn generate_dataset<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> LayerDepthResult<Vec<PathBuf>> {
        let root = self.config.output_dir.clone();
        let count = self.config.num_samples;
        tracing::info!(count, root = %root.display(), "generating dataset");

        let mut dirs = Vec::with_capacity(count as usize);
        for index in 0..count {
            let id = task_id(&self.config.domain, index);
            let pair = self.generate_task_pair(&id, rng)?;
            let dir = pair.write_to(&root)?;
            tracing::info!(
                task_id = %id,
                dir = %dir.display(),
                video = pair.ground_truth_video.is_some(),
                "wrote task pair"
            );
            dirs.push(dir);
        }
        Ok(dirs)
    }
}

/// Dataset-wide task id: `"{domain}_{index:04}"`.
pub fn task_id(domain: &str, index: u32) -> String {
    format!("{domain}_{index:04}")
}

/// Save both views of a rendered task as PNGs into `dir`.
pub fn write_preview(task: &RenderedTask, dir: &Path) -> LayerDepthResult<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create preview dir '{}'", dir.display()))?;
    let first = dir.join(crate::task::pair::FIRST_FRAME_FILE);
    let last = dir.join(crate::task::pair::FINAL_FRAME_FILE);
    task.initial.save_png(&first)?;
    task.separated.save_png(&last)?;
    Ok((first, last))
}

#[cfg(test)]
#[path = "../../tests/unit/task/generator.rs"]
mod tests;
