use rand::Rng;

/// Task type every pair in this domain uses.
pub const DEFAULT_TASK_TYPE: &str = "default";

const DEFAULT_PROMPTS: [&str; 3] = [
    "Identify the layer order of these overlapping shapes from front to back, then show them separated.",
    "Determine which shape is in front and which is in back. Separate them to show the depth order.",
    "These shapes overlap. Figure out the layer order based on occlusion and display them front to back.",
];

const POOLS: &[(&str, &[&str])] = &[(DEFAULT_TASK_TYPE, &DEFAULT_PROMPTS)];

/// Prompt pool for `task_type`; unknown types use the default pool.
pub fn all_prompts(task_type: &str) -> &'static [&'static str] {
    POOLS
        .iter()
        .find(|(t, _)| *t == task_type)
        .map(|(_, pool)| *pool)
        .unwrap_or(&DEFAULT_PROMPTS)
}

/// Uniformly chosen prompt for `task_type`.
pub fn get_prompt<R: Rng + ?Sized>(task_type: &str, rng: &mut R) -> &'static str {
    let pool = all_prompts(task_type);
    pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
#[path = "../../tests/unit/task/prompts.rs"]
mod tests;
