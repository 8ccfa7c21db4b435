use rand::{SeedableRng, rngs::StdRng};

use super::*;

#[test]
fn unknown_task_type_uses_default_pool() {
    assert_eq!(all_prompts("nope"), all_prompts(DEFAULT_TASK_TYPE));
    assert_eq!(all_prompts(DEFAULT_TASK_TYPE).len(), 3);
}

#[test]
fn chosen_prompt_comes_from_pool_and_varies() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        let p = get_prompt(DEFAULT_TASK_TYPE, &mut rng);
        assert!(all_prompts(DEFAULT_TASK_TYPE).contains(&p));
        seen.insert(p);
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn prompts_mention_front_and_back_order() {
    for p in all_prompts(DEFAULT_TASK_TYPE) {
        let lower = p.to_lowercase();
        assert!(lower.contains("front") || lower.contains("order"), "{p}");
    }
}
