use super::*;

#[test]
fn endpoints_are_stable() {
    assert_eq!(ease_out_quad(0.0), 0.0);
    assert_eq!(ease_out_quad(1.0), 1.0);
    assert_eq!(ease_out_quad(-0.5), 0.0);
    assert_eq!(ease_out_quad(1.5), 1.0);
}

#[test]
fn monotonic_across_transition_frames() {
    let mut prev = -1.0;
    for k in 0..25 {
        let p = ease_out_quad(frame_progress(k, 25));
        assert!(p >= prev, "not monotonic at {k}");
        prev = p;
    }
}

#[test]
fn out_quad_decelerates() {
    let first_step = ease_out_quad(0.1) - ease_out_quad(0.0);
    let last_step = ease_out_quad(1.0) - ease_out_quad(0.9);
    assert!(first_step > last_step);
    assert!((ease_out_quad(0.5) - 0.75).abs() < 1e-12);
    assert!((ease_out_quad(0.25) - 0.4375).abs() < 1e-12);
}

#[test]
fn frame_progress_spans_unit_interval() {
    assert_eq!(frame_progress(0, 25), 0.0);
    assert_eq!(frame_progress(24, 25), 1.0);
    assert!((frame_progress(12, 25) - 0.5).abs() < 1e-12);
    assert_eq!(frame_progress(0, 1), 1.0);
    assert_eq!(frame_progress(99, 25), 1.0);
}
