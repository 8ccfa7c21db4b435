use super::*;

fn style() -> LabelStyle {
    LabelStyle {
        size_px: 14.0,
        color: Rgba8::new(50, 50, 50, 255),
        weight: LabelWeight::Bold,
    }
}

#[test]
fn no_labels_draws_nothing_and_succeeds() {
    let mut ctx = vello_cpu::RenderContext::new(16, 16);
    let mut painter = NoLabels;
    painter
        .draw_label(&mut ctx, "FRONT", Point::new(1.0, 1.0), style())
        .unwrap();
}

#[test]
fn missing_font_file_is_an_error() {
    let missing = Path::new("target/definitely/missing/font.ttf");
    assert!(FontLabelPainter::load(missing, None).is_err());
}

#[test]
fn fallback_is_used_for_missing_fonts() {
    let paths = FontPaths {
        regular: PathBuf::from("target/definitely/missing/regular.ttf"),
        bold: None,
    };
    let mut painter = label_painter_or_fallback(&paths);
    let mut ctx = vello_cpu::RenderContext::new(16, 16);
    painter
        .draw_label(&mut ctx, "1", Point::new(0.0, 0.0), style())
        .unwrap();
}

#[test]
fn default_paths_point_at_dejavu() {
    let paths = FontPaths::default();
    assert!(paths.regular.ends_with("DejaVuSans.ttf"));
    assert_eq!(
        paths.bold.as_deref(),
        Some(Path::new(DEFAULT_BOLD_FONT))
    );
}

#[test]
fn system_font_renders_when_present() {
    let paths = FontPaths::default();
    if !paths.regular.exists() {
        return;
    }
    let mut painter = FontLabelPainter::load(&paths.regular, paths.bold.as_deref()).unwrap();
    let mut ctx = vello_cpu::RenderContext::new(64, 32);
    painter
        .draw_label(&mut ctx, "FRONT", Point::new(2.0, 2.0), style())
        .unwrap();
    let bad = LabelStyle {
        size_px: 0.0,
        ..style()
    };
    assert!(
        painter
            .draw_label(&mut ctx, "x", Point::new(0.0, 0.0), bad)
            .is_err()
    );
}
