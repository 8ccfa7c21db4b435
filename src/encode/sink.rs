use std::path::{Path, PathBuf};

use crate::foundation::error::{LayerDepthError, LayerDepthResult};
use crate::render::frame::FrameRGBA;

/// Turns an ordered frame list into a video file.
pub trait VideoEncoder {
    /// Encode `frames` at `fps` into `out_path`, returning the written path.
    fn encode(
        &mut self,
        frames: &[FrameRGBA],
        fps: u32,
        out_path: &Path,
    ) -> LayerDepthResult<PathBuf>;
}

/// One captured [`VideoEncoder::encode`] call.
#[derive(Clone, Debug)]
pub struct CapturedVideo {
    /// Requested output path.
    pub out_path: PathBuf,
    /// Requested rate.
    pub fps: u32,
    /// Frames in playback order.
    pub frames: Vec<FrameRGBA>,
}

/// Encoder that keeps frames in memory instead of writing a file. Useful for tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryEncoder {
    captured: Vec<CapturedVideo>,
}

impl InMemoryEncoder {
    /// Create an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Videos captured so far.
    pub fn captured(&self) -> &[CapturedVideo] {
        &self.captured
    }
}

impl VideoEncoder for InMemoryEncoder {
    fn encode(
        &mut self,
        frames: &[FrameRGBA],
        fps: u32,
        out_path: &Path,
    ) -> LayerDepthResult<PathBuf> {
        if fps == 0 {
            return Err(LayerDepthError::validation("fps must be non-zero"));
        }
        self.captured.push(CapturedVideo {
            out_path: out_path.to_path_buf(),
            fps,
            frames: frames.to_vec(),
        });
        Ok(out_path.to_path_buf())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
