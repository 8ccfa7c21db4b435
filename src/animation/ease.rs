/// Ease-out quadratic, `1 - (1 - t)^2`: starts fast and decelerates into the target.
///
/// Input is clamped to `[0, 1]`.
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Linear progress of frame `k` out of `count`, so that the first frame is 0 and the last is 1.
///
/// A single-frame run is treated as already complete.
pub fn frame_progress(k: u32, count: u32) -> f64 {
    if count <= 1 {
        return 1.0;
    }
    f64::from(k.min(count - 1)) / f64::from(count - 1)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
