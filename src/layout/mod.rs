/// Separated-view annotations (header, arrow, rank labels) and its full render.
pub mod annotate;
/// Front-to-back slot positions for the separated view.
pub mod planner;
