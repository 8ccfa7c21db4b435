use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 128), 128);
    assert_eq!(mul_div255_u16(0, 255), 0);
}

#[test]
fn lerp_i32_hits_endpoints_and_truncates() {
    assert_eq!(lerp_i32(10, 110, 0.0), 10);
    assert_eq!(lerp_i32(10, 110, 1.0), 110);
    assert_eq!(lerp_i32(0, 3, 0.5), 1);
    assert_eq!(lerp_i32(0, -3, 0.5), -1);
}
