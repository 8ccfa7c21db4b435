pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Linear interpolation between two integer coordinates, truncated toward zero.
pub(crate) fn lerp_i32(start: i32, end: i32, t: f64) -> i32 {
    (f64::from(start) + f64::from(end - start) * t) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
