/// Task configuration and validation.
pub mod config;
/// Per-task orchestration and dataset generation.
pub mod generator;
/// Task-pair output record.
pub mod pair;
/// Prompt pool.
pub mod prompts;
