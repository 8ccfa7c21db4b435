/// Shape compositing onto an opaque canvas.
pub mod composite;
/// Owned RGBA8 raster output.
pub mod frame;
/// Outline paths for each shape kind.
pub mod geometry;
/// Pluggable text rendering for annotations.
pub mod text;
