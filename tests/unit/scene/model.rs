use super::*;

fn shape(layer: u32, x: i32) -> Shape {
    Shape {
        pos: PixelPos::new(x, 0),
        size: 10,
        kind: ShapeKind::Square,
        color: Rgba8::new(1, 2, 3, 180),
        layer,
    }
}

#[test]
fn orderings_are_reverses_of_each_other() {
    let scene = Scene::from_generated(vec![shape(0, 0), shape(1, 1), shape(2, 2)]);
    let b2f: Vec<u32> = scene.back_to_front().iter().map(|s| s.layer).collect();
    let f2b: Vec<u32> = scene.front_to_back().iter().map(|s| s.layer).collect();
    assert_eq!(b2f, vec![0, 1, 2]);
    assert_eq!(f2b, vec![2, 1, 0]);
}

#[test]
fn moved_to_keeps_identity() {
    let s = shape(4, 7);
    let m = s.moved_to(PixelPos::new(100, 200));
    assert_eq!(m.pos, PixelPos::new(100, 200));
    assert_eq!((m.size, m.kind, m.color, m.layer), (s.size, s.kind, s.color, s.layer));
}

#[test]
fn kind_names_are_lowercase() {
    let names: Vec<&str> = ShapeKind::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(names, vec!["circle", "square", "triangle"]);
    assert_eq!(
        serde_json::to_string(&ShapeKind::Triangle).unwrap(),
        "\"triangle\""
    );
}

#[test]
fn half_extent_truncates() {
    let mut s = shape(0, 0);
    s.size = 81;
    assert_eq!(s.half_extent(), 40);
}
