use std::io::Cursor;

use super::*;
use crate::{assets::resolve::MemoryAssetResolver, foundation::core::Rgba8};

fn solid_png(rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn later_categories_occlude_earlier_ones() {
    let resolver = MemoryAssetResolver::new()
        .with(Category::Background, "red", solid_png([255, 0, 0, 255]))
        .with(Category::Hat, "blue", solid_png([0, 0, 255, 255]));

    let mut sel = Selection::empty();
    sel.put(Category::Hat, Some("blue".to_owned()));
    sel.put(Category::Background, Some("red".to_owned()));

    let mut canvas = RasterCanvas::filled(16, 16, Rgba8::EXPORT_FILL).unwrap();
    let outcomes = paint_selection(&sel, &resolver, &mut canvas);

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].category(), Category::Background);
    assert_eq!(outcomes[1].category(), Category::Hat);
    assert!(outcomes.iter().all(LayerOutcome::is_drawn));
    assert_eq!(canvas.pixel(8, 8), Some([0, 0, 255, 255]));
}

#[test]
fn missing_layer_is_skipped_and_others_still_draw() {
    let resolver =
        MemoryAssetResolver::new().with(Category::Base, "green", solid_png([0, 255, 0, 255]));

    let mut sel = Selection::empty();
    sel.put(Category::Base, Some("green".to_owned()));
    sel.put(Category::Hat, Some("ghost".to_owned()));

    let mut canvas = RasterCanvas::filled(8, 8, Rgba8::EXPORT_FILL).unwrap();
    let outcomes = paint_selection(&sel, &resolver, &mut canvas);

    assert!(outcomes[0].is_drawn());
    assert!(matches!(outcomes[1].status, LayerStatus::Skipped(_)));
    assert_eq!(outcomes[1].key, AssetKey::new(Category::Hat, "ghost"));
    assert_eq!(canvas.pixel(0, 0), Some([0, 255, 0, 255]));
}

#[test]
fn empty_selection_leaves_canvas_untouched() {
    let resolver = MemoryAssetResolver::new();
    let mut canvas = RasterCanvas::filled(4, 4, Rgba8::EXPORT_FILL).unwrap();
    let before = canvas.clone();
    assert!(paint_selection(&Selection::empty(), &resolver, &mut canvas).is_empty());
    assert_eq!(canvas, before);
}
