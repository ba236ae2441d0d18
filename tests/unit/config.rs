use super::*;
use crate::catalog::category::Category;

#[test]
fn empty_object_yields_defaults() {
    let cfg = AvatarConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, AvatarConfig::default());
    assert_eq!(cfg.export_settings(), ExportSettings::default());
    assert_eq!(cfg.catalog().unwrap(), Catalog::builtin());
    assert_eq!(cfg.resolver().root(), Path::new("assets"));
}

#[test]
fn overrides_are_applied() {
    let cfg = AvatarConfig::from_json_str(
        r##"{
            "canvas_size": 128,
            "fill": "#000000",
            "jpeg_quality": 75,
            "file_name": "me.jpg",
            "catalog": { "hat": ["Crown"] }
        }"##,
    )
    .unwrap();
    let s = cfg.export_settings();
    assert_eq!(s.size, 128);
    assert_eq!(s.fill, Rgba8::opaque(0, 0, 0));
    assert_eq!(s.jpeg_quality, 75);
    assert_eq!(s.file_name, "me.jpg");

    let catalog = cfg.catalog().unwrap();
    assert_eq!(catalog.options(Category::Hat), &["Crown"]);
    assert!(catalog.options(Category::Background).is_empty());
}

#[test]
fn largest_canvas_is_accepted() {
    let cfg = AvatarConfig::from_json_str(r#"{ "canvas_size": 8192 }"#).unwrap();
    assert_eq!(cfg.export_settings().size, MAX_CANVAS_PX);
}

#[test]
fn invalid_values_are_config_errors() {
    for bad in [
        r#"{ "canvas_size": 0 }"#,
        r#"{ "canvas_size": 8193 }"#,
        r#"{ "jpeg_quality": 0 }"#,
        r#"{ "jpeg_quality": 101 }"#,
        r##"{ "fill": "#00000080" }"##,
        r#"{ "asset_ext": ".png" }"#,
        r#"{ "file_name": "../x.jpeg" }"#,
        r#"{ "file_name": "" }"#,
        r#"{ "unknown_key": 1 }"#,
    ] {
        assert!(
            matches!(AvatarConfig::from_json_str(bad), Err(AvatarError::Config(_))),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn inline_catalog_errors_surface_on_use() {
    let cfg = AvatarConfig::from_json_str(r#"{ "catalog": { "shoes": ["x"] } }"#).unwrap();
    assert!(matches!(cfg.catalog(), Err(AvatarError::Validation(_))));
}

#[test]
fn relative_assets_root_resolves_next_to_config_file() {
    let dir = std::env::temp_dir().join(format!("aztec_avatar_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("avatar.json");
    std::fs::write(&path, r#"{ "assets_root": "layers" }"#).unwrap();

    let cfg = AvatarConfig::from_path(&path).unwrap();
    assert_eq!(cfg.assets_root, dir.join("layers"));

    std::fs::remove_dir_all(&dir).ok();
}
