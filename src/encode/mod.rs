//! Video encoder collaborators.
//!
//! The core only hands over an ordered frame list; turning it into a file is delegated here.

/// `ffmpeg`-based MP4 encoder.
pub mod ffmpeg;
/// Encoder trait and an in-memory implementation.
pub mod sink;
