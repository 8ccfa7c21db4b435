use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LayerDepthError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LayerDepthError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        LayerDepthError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        LayerDepthError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LayerDepthError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: LayerDepthError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, LayerDepthError::Serde(_)));
}
