use std::cell::RefCell;
use std::rc::Rc;

use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::foundation::error::LayerDepthError;
use crate::render::text::NoLabels;

#[derive(Clone, Default)]
struct SharedEncoder {
    calls: Rc<RefCell<Vec<(usize, u32, PathBuf)>>>,
    fail: bool,
}

impl VideoEncoder for SharedEncoder {
    fn encode(
        &mut self,
        frames: &[FrameRGBA],
        fps: u32,
        out_path: &Path,
    ) -> LayerDepthResult<PathBuf> {
        if self.fail {
            return Err(LayerDepthError::encode("simulated failure"));
        }
        self.calls
            .borrow_mut()
            .push((frames.len(), fps, out_path.to_path_buf()));
        Ok(out_path.to_path_buf())
    }
}

fn small_config() -> TaskConfig {
    TaskConfig {
        image_size: (128, 128),
        min_shape_size: 20,
        max_shape_size: 30,
        spread: 10,
        margin: 10,
        generate_videos: true,
        ..TaskConfig::default()
    }
}

fn generator(config: TaskConfig, encoder: Option<SharedEncoder>) -> TaskGenerator {
    TaskGenerator::new(config)
        .unwrap()
        .with_labels(Box::new(NoLabels))
        .with_encoder(encoder.map(|e| Box::new(e) as Box<dyn VideoEncoder>))
        .with_video_dir(PathBuf::from("target").join("generator_unit").join("videos"))
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = TaskConfig {
        min_shapes: 9,
        max_shapes: 2,
        ..TaskConfig::default()
    };
    assert!(TaskGenerator::new(cfg).is_err());
}

#[test]
fn pair_carries_both_views_and_prompt() {
    let mut tg = generator(small_config(), None);
    let mut rng = StdRng::seed_from_u64(1);
    let pair = tg.generate_task_pair("layer_depth_0000", &mut rng).unwrap();
    assert_eq!(pair.task_id, "layer_depth_0000");
    assert_eq!(pair.domain, "layer_depth");
    assert!(crate::task::prompts::all_prompts(DEFAULT_TASK_TYPE).contains(&pair.prompt.as_str()));
    assert_eq!(pair.first_image.dimensions(), (128, 128));
    assert_eq!(pair.final_image.dimensions(), (128, 128));
    assert_ne!(pair.first_image, pair.final_image);
    assert!(pair.ground_truth_video.is_none());
}

#[test]
fn video_receives_full_sequence() {
    let enc = SharedEncoder::default();
    let calls = enc.calls.clone();
    let mut tg = generator(small_config(), Some(enc));
    assert!(tg.produces_video());
    let mut rng = StdRng::seed_from_u64(2);
    let pair = tg.generate_task_pair("t7", &mut rng).unwrap();

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, 40);
    assert_eq!(calls[0].1, 10);
    assert!(calls[0].2.ends_with("t7_ground_truth.mp4"));
    assert_eq!(pair.ground_truth_video.as_deref(), Some(calls[0].2.as_path()));
}

#[test]
fn encoder_failure_degrades_to_no_video() {
    let enc = SharedEncoder {
        fail: true,
        ..SharedEncoder::default()
    };
    let mut tg = generator(small_config(), Some(enc));
    let mut rng = StdRng::seed_from_u64(3);
    let pair = tg.generate_task_pair("t", &mut rng).unwrap();
    assert!(pair.ground_truth_video.is_none());
}

#[test]
fn disabled_videos_skip_encoder() {
    let enc = SharedEncoder::default();
    let calls = enc.calls.clone();
    let cfg = TaskConfig {
        generate_videos: false,
        ..small_config()
    };
    let mut tg = generator(cfg, Some(enc));
    assert!(!tg.produces_video());
    let mut rng = StdRng::seed_from_u64(4);
    tg.generate_task_pair("t", &mut rng).unwrap();
    assert!(calls.borrow().is_empty());
}

#[test]
fn transition_holds_match_static_renders() {
    let mut tg = generator(small_config(), None);
    let mut rng = StdRng::seed_from_u64(5);
    let scene = generate_scene(&tg.config().scene_params(), &mut rng);
    let task = tg.render_scene(scene).unwrap();
    let seq = tg.transition_frames(&task).unwrap();
    assert_eq!(seq.len(), 40);
    assert!(seq.frames()[..5].iter().all(|f| *f == task.initial));
    assert!(seq.frames()[30..].iter().all(|f| *f == task.separated));
}

#[test]
fn dataset_writes_numbered_task_dirs() {
    let root = PathBuf::from("target").join("generator_unit").join("dataset");
    let _ = std::fs::remove_dir_all(&root);
    let cfg = TaskConfig {
        num_samples: 3,
        output_dir: root.clone(),
        generate_videos: false,
        ..small_config()
    };
    let mut tg = generator(cfg, None);
    let mut rng = StdRng::seed_from_u64(6);
    let dirs = tg.generate_dataset(&mut rng).unwrap();
    assert_eq!(dirs.len(), 3);
    assert!(dirs[2].ends_with("layer_depth_task/layer_depth_0002"));
    for d in &dirs {
        assert!(d.join(crate::task::pair::FIRST_FRAME_FILE).exists());
        assert!(d.join(crate::task::pair::FINAL_FRAME_FILE).exists());
        assert!(d.join(crate::task::pair::PROMPT_FILE).exists());
    }
}

#[test]
fn task_ids_are_zero_padded() {
    assert_eq!(task_id("layer_depth", 7), "layer_depth_0007");
    assert_eq!(task_id("x", 12345), "x_12345");
}

#[test]
fn preview_writes_two_pngs() {
    let mut tg = generator(small_config(), None);
    let mut rng = StdRng::seed_from_u64(8);
    let scene = generate_scene(&tg.config().scene_params(), &mut rng);
    let task = tg.render_scene(scene).unwrap();
    let dir = PathBuf::from("target").join("generator_unit").join("preview");
    let (a, b) = write_preview(&task, &dir).unwrap();
    assert!(a.exists() && b.exists());
}
