use kurbo::{Circle, Rect, Shape as _};

use crate::foundation::core::{BezPath, PixelPos, Point};
use crate::scene::model::{Shape, ShapeKind};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Closed outline of `shape` centered at its position, half-extent `size / 2`.
pub fn shape_path(shape: &Shape) -> BezPath {
    let c = shape.pos.to_point();
    let h = f64::from(shape.half_extent());
    match shape.kind {
        ShapeKind::Circle => Circle::new(c, h).to_path(CIRCLE_TOLERANCE),
        ShapeKind::Square => Rect::new(c.x - h, c.y - h, c.x + h, c.y + h).to_path(0.0),
        ShapeKind::Triangle => polygon(&[
            Point::new(c.x, c.y - h),
            Point::new(c.x - h, c.y + h),
            Point::new(c.x + h, c.y + h),
        ]),
    }
}

/// Closed polygon through `points`.
pub fn polygon(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        path.move_to(first);
        for &p in iter {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

/// Open two-point path.
pub fn segment(from: PixelPos, to: PixelPos) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(from.to_point());
    path.line_to(to.to_point());
    path
}

pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
