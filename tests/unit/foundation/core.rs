use super::*;

#[test]
fn canvas_center_uses_integer_division() {
    assert_eq!(Canvas::new(512, 512).center(), PixelPos::new(256, 256));
    assert_eq!(Canvas::new(101, 51).center(), PixelPos::new(50, 25));
}

#[test]
fn canvas_dims_reject_oversized_and_empty() {
    assert!(Canvas::new(70_000, 10).dims_u16().is_err());
    assert!(Canvas::new(0, 10).dims_u16().is_err());
    assert_eq!(Canvas::new(64, 32).dims_u16().unwrap(), (64, 32));
}

#[test]
fn colors_serialize_as_arrays() {
    let c = Rgba8::new(255, 100, 100, 180);
    assert_eq!(serde_json::to_string(&c).unwrap(), "[255,100,100,180]");
    let back: Rgba8 = serde_json::from_str("[1,2,3,4]").unwrap();
    assert_eq!(back, Rgba8::new(1, 2, 3, 4));

    let rgb: Rgb8 = serde_json::from_str("[50,50,50]").unwrap();
    assert_eq!(rgb.opaque(), Rgba8::new(50, 50, 50, 255));
}

#[test]
fn pixel_pos_offsets() {
    let p = PixelPos::new(10, 20).offset(-5, 3);
    assert_eq!(p, PixelPos::new(5, 23));
    assert_eq!(p.to_point(), Point::new(5.0, 23.0));
}
