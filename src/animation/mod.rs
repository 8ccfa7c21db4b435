/// Progress remapping curves.
pub mod ease;
/// Hold / transition / hold frame sequence synthesis.
pub mod synth;
