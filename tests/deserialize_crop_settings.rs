#[test]
fn serialize_deserialize_crop_settings() {
    let settings = croppable::CropSettings::default();
    let serialized = serde_json::to_string(&settings).unwrap();
    let deserialized: croppable::CropSettings = serde_json::from_str(&serialized).unwrap();
    assert_eq!(settings, deserialized);
}

#[test]
fn partial_settings_fall_back_to_defaults() {
    let settings: croppable::CropSettings =
        serde_json::from_str(r#"{"corner_margin": [12, 16]}"#).unwrap();
    assert_eq!(settings.corner_margin, (12, 16));
    assert_eq!(
        settings.overlay_tint,
        croppable::CropSettings::default().overlay_tint
    );
}
