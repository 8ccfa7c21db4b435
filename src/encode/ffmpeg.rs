use std::io::{Read as _, Write as _};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::encode::sink::VideoEncoder;
use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{LayerDepthError, LayerDepthResult};
use crate::render::composite::flatten_premul_over_bg;
use crate::render::frame::FrameRGBA;

/// Encoder that spawns the system `ffmpeg` and streams raw RGBA frames to its stdin.
///
/// Output is h264 in yuv420p, which requires even, non-zero dimensions.
#[derive(Clone, Debug)]
pub struct FfmpegVideoEncoder {
    /// Overwrite an existing output file.
    pub overwrite: bool,
    /// Background used when a frame is not fully opaque.
    pub bg: Rgb8,
}

impl Default for FfmpegVideoEncoder {
    fn default() -> Self {
        Self {
            overwrite: true,
            bg: Rgb8::new(0, 0, 0),
        }
    }
}

impl FfmpegVideoEncoder {
    /// Whether `ffmpeg` can be invoked from `PATH`.
    pub fn is_available() -> bool {
        is_ffmpeg_on_path()
    }
}

/// Reject sizes and rates the MP4 output cannot represent.
pub fn validate_output(canvas: Canvas, fps: u32) -> LayerDepthResult<()> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(LayerDepthError::validation(
            "encode width/height must be non-zero",
        ));
    }
    if fps == 0 {
        return Err(LayerDepthError::validation("encode fps must be non-zero"));
    }
    if !canvas.width.is_multiple_of(2) || !canvas.height.is_multiple_of(2) {
        return Err(LayerDepthError::validation(
            "encode width/height must be even (required for yuv420p mp4 output)",
        ));
    }
    Ok(())
}

impl VideoEncoder for FfmpegVideoEncoder {
    fn encode(
        &mut self,
        frames: &[FrameRGBA],
        fps: u32,
        out_path: &Path,
    ) -> LayerDepthResult<PathBuf> {
        let first = frames
            .first()
            .ok_or_else(|| LayerDepthError::validation("cannot encode an empty frame sequence"))?;
        let canvas = first.canvas();
        validate_output(canvas, fps)?;

        ensure_parent_dir(out_path)?;
        if !self.overwrite && out_path.exists() {
            return Err(LayerDepthError::validation(format!(
                "output file '{}' already exists",
                out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(LayerDepthError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.arg(if self.overwrite { "-y" } else { "-n" });
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", canvas.width, canvas.height),
            "-r",
            &fps.to_string(),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ])
        .arg(out_path);

        let mut child = cmd.spawn().map_err(|e| {
            LayerDepthError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| LayerDepthError::encode("failed to open ffmpeg stdin (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| LayerDepthError::encode("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut bytes = Vec::new();
            stderr.read_to_end(&mut bytes)?;
            Ok::<_, std::io::Error>(bytes)
        });

        let mut scratch = vec![0u8; canvas.rgba_len()];
        let mut write_result = Ok(());
        for (i, frame) in frames.iter().enumerate() {
            if frame.canvas() != canvas {
                write_result = Err(LayerDepthError::validation(format!(
                    "frame {i} size mismatch: got {}x{}, expected {}x{}",
                    frame.width, frame.height, canvas.width, canvas.height
                )));
                break;
            }
            let bytes: &[u8] = if frame.is_opaque() {
                &frame.data
            } else {
                if let Err(e) = flatten_premul_over_bg(&mut scratch, &frame.data, self.bg) {
                    write_result = Err(e);
                    break;
                }
                &scratch
            };
            if let Err(e) = stdin.write_all(bytes) {
                write_result = Err(LayerDepthError::encode(format!(
                    "failed to write frame {i} to ffmpeg stdin: {e}"
                )));
                break;
            }
        }
        drop(stdin);

        let status = child.wait().map_err(|e| {
            LayerDepthError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr_bytes = stderr_drain
            .join()
            .map_err(|_| LayerDepthError::encode("ffmpeg stderr drain thread panicked"))?
            .map_err(|e| LayerDepthError::encode(format!("ffmpeg stderr read failed: {e}")))?;
        write_result?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(LayerDepthError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        tracing::info!(path = %out_path.display(), frames = frames.len(), fps, "encoded video");
        Ok(out_path.to_path_buf())
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> LayerDepthResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
