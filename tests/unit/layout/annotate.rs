use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::foundation::core::Rgba8;
use crate::layout::planner::{DEFAULT_MARGIN, plan_separated_layout};
use crate::render::text::NoLabels;
use crate::scene::generator::{SceneParams, generate_scene};

fn scene(n: u32) -> Scene {
    let params = SceneParams {
        canvas: Canvas::new(512, 512),
        min_shapes: n,
        max_shapes: n,
        min_size: 80,
        max_size: 80,
        spread: 60,
        palette: vec![Rgba8::new(255, 0, 0, 180)],
    };
    generate_scene(&params, &mut StdRng::seed_from_u64(21))
}

#[derive(Default)]
struct RecordingLabels {
    calls: Vec<(String, Point, LabelWeight)>,
}

impl LabelPainter for RecordingLabels {
    fn draw_label(
        &mut self,
        _ctx: &mut vello_cpu::RenderContext,
        text: &str,
        top_left: Point,
        style: LabelStyle,
    ) -> LayerDepthResult<()> {
        self.calls.push((text.to_string(), top_left, style.weight));
        Ok(())
    }
}

#[test]
fn separated_render_draws_arrow_and_shapes() {
    let canvas = Canvas::new(512, 512);
    let scene = scene(3);
    let layout = plan_separated_layout(&scene, canvas, DEFAULT_MARGIN);
    let frame = render_separated(
        &scene,
        &layout,
        canvas,
        &ShapeStyle::default(),
        &AnnotationStyle::default(),
        &mut NoLabels,
    )
    .unwrap();

    assert!(frame.is_opaque());
    let [r, g, b, _] = frame.pixel(256, 45).unwrap();
    assert!(r < 200 && r > 100 && r == g && g == b, "arrow pixel {r},{g},{b}");

    for slot in &layout.slots {
        let [r, g, _, _] = frame.pixel(slot.pos.x as u32, slot.pos.y as u32).unwrap();
        assert!(r > 200 && g < 120, "slot {} was not filled", slot.rank);
    }
    // Gaps between slots stay background.
    assert_eq!(frame.pixel(202, 256).unwrap(), [255, 255, 255, 255]);
}

#[test]
fn labels_are_requested_in_reading_order() {
    let canvas = Canvas::new(512, 512);
    let scene = scene(3);
    let layout = plan_separated_layout(&scene, canvas, DEFAULT_MARGIN);
    let mut labels = RecordingLabels::default();
    render_separated(
        &scene,
        &layout,
        canvas,
        &ShapeStyle::default(),
        &AnnotationStyle::default(),
        &mut labels,
    )
    .unwrap();

    let texts: Vec<&str> = labels.calls.iter().map(|(t, _, _)| t.as_str()).collect();
    assert_eq!(texts, vec!["FRONT", "BACK", "1", "2", "3"]);
    assert_eq!(labels.calls[0].1, Point::new(40.0, 30.0));
    assert_eq!(labels.calls[1].1, Point::new(432.0, 30.0));
    assert_eq!(labels.calls[0].2, LabelWeight::Bold);
    // Rank 1 sits under the front-most slot: x - 5, y + size/2 + 10.
    assert_eq!(labels.calls[2].1, Point::new(143.0, 306.0));
    assert_eq!(labels.calls[2].2, LabelWeight::Regular);
}
