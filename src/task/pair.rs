use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::LayerDepthResult;

/// Overlapping view file name.
pub const FIRST_FRAME_FILE: &str = "first_frame.png";
/// Separated view file name.
pub const FINAL_FRAME_FILE: &str = "final_frame.png";
/// Prompt file name.
pub const PROMPT_FILE: &str = "prompt.txt";
/// Transition video file name.
pub const VIDEO_FILE: &str = "ground_truth.mp4";

/// One generated puzzle with its answer.
#[derive(Clone, Debug)]
pub struct TaskPair {
    /// Unique id within the dataset.
    pub task_id: String,
    /// Domain tag.
    pub domain: String,
    /// Instruction shown with the puzzle image.
    pub prompt: String,
    /// Overlapping shapes (the puzzle).
    pub first_image: image::RgbImage,
    /// Separated shapes (the answer).
    pub final_image: image::RgbImage,
    /// Staged transition video, when one was produced.
    pub ground_truth_video: Option<PathBuf>,
}

impl TaskPair {
    /// Directory this pair is written to under `root`.
    pub fn task_dir(&self, root: &Path) -> PathBuf {
        root.join(format!("{}_task", self.domain)).join(&self.task_id)
    }

    /// Write images, prompt and (if present) the video under `root`; returns the task directory.
    pub fn write_to(&self, root: &Path) -> LayerDepthResult<PathBuf> {
        let dir = self.task_dir(root);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create task dir '{}'", dir.display()))?;

        let first = dir.join(FIRST_FRAME_FILE);
        self.first_image
            .save(&first)
            .with_context(|| format!("write png '{}'", first.display()))?;
        let last = dir.join(FINAL_FRAME_FILE);
        self.final_image
            .save(&last)
            .with_context(|| format!("write png '{}'", last.display()))?;
        let prompt = dir.join(PROMPT_FILE);
        std::fs::write(&prompt, &self.prompt)
            .with_context(|| format!("write prompt '{}'", prompt.display()))?;

        if let Some(video) = &self.ground_truth_video {
            let dst = dir.join(VIDEO_FILE);
            if video != &dst {
                std::fs::copy(video, &dst).with_context(|| {
                    format!("copy video '{}' -> '{}'", video.display(), dst.display())
                })?;
            }
        }
        Ok(dir)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/task/pair.rs"]
mod tests;
