use kurbo::Shape as _;

use super::*;
use crate::foundation::core::Rgba8;

fn shape(kind: ShapeKind) -> Shape {
    Shape {
        pos: PixelPos::new(100, 100),
        size: 41,
        kind,
        color: Rgba8::new(0, 0, 0, 180),
        layer: 0,
    }
}

#[test]
fn bounding_boxes_match_half_extent() {
    for kind in ShapeKind::ALL {
        let bbox = shape_path(&shape(kind)).bounding_box();
        assert!((bbox.x0 - 80.0).abs() < 0.5, "{kind:?} {bbox:?}");
        assert!((bbox.x1 - 120.0).abs() < 0.5, "{kind:?} {bbox:?}");
        assert!((bbox.y0 - 80.0).abs() < 0.5, "{kind:?} {bbox:?}");
        assert!((bbox.y1 - 120.0).abs() < 0.5, "{kind:?} {bbox:?}");
    }
}

#[test]
fn triangle_apex_is_up() {
    let path = shape_path(&shape(ShapeKind::Triangle));
    assert!(path.contains(Point::new(100.0, 85.0)));
    assert!(!path.contains(Point::new(82.0, 85.0)));
    assert!(path.contains(Point::new(82.0, 118.0)));
}

#[test]
fn circle_excludes_square_corners() {
    let circle = shape_path(&shape(ShapeKind::Circle));
    let square = shape_path(&shape(ShapeKind::Square));
    let corner = Point::new(82.0, 82.0);
    assert!(!circle.contains(corner));
    assert!(square.contains(corner));
}

#[test]
fn cpu_conversion_keeps_element_count() {
    let path = shape_path(&shape(ShapeKind::Circle));
    let cpu = bezpath_to_cpu(&path);
    assert_eq!(cpu.elements().len(), path.elements().len());
}

#[test]
fn empty_polygon_is_empty_path() {
    assert!(polygon(&[]).elements().is_empty());
    assert_eq!(segment(PixelPos::new(0, 0), PixelPos::new(5, 0)).elements().len(), 2);
}
