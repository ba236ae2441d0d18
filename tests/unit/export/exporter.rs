use std::io::Cursor;

use super::*;
use crate::{
    assets::resolve::MemoryAssetResolver, catalog::category::Category,
    export::sink::InMemorySink,
};

fn solid_png(rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(8, 8, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn exporter(resolver: MemoryAssetResolver) -> Exporter {
    Exporter::with_defaults(Arc::new(resolver))
}

#[test]
fn defaults_match_stock_export() {
    let s = ExportSettings::default();
    assert_eq!(s.size, 400);
    assert_eq!(s.fill, Rgba8::opaque(0x1f, 0x29, 0x37));
    assert_eq!(s.jpeg_quality, 90);
    assert_eq!(s.file_name, "aztec-avatar.jpeg");
}

#[test]
fn empty_selection_exports_uniform_fill() {
    let out = exporter(MemoryAssetResolver::new())
        .export(&Selection::empty())
        .unwrap();

    assert_eq!(out.file_name, EXPORT_FILE_NAME);
    assert!(out.layers.is_empty());
    assert_eq!(out.pixels.dimensions(), (400, 400));
    assert!(out.pixels.pixels().all(|p| p.0 == [0x1f, 0x29, 0x37]));

    let decoded = image::load_from_memory(&out.bytes).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (400, 400));
}

#[test]
fn translucent_fill_is_rejected() {
    let settings = ExportSettings {
        fill: Rgba8 {
            r: 0,
            g: 0,
            b: 0,
            a: 10,
        },
        ..ExportSettings::default()
    };
    let exp = Exporter::new(Arc::new(MemoryAssetResolver::new()), settings);
    assert!(matches!(
        exp.export(&Selection::empty()),
        Err(AvatarError::Validation(_))
    ));
}

#[test]
fn bad_quality_aborts_without_output() {
    let settings = ExportSettings {
        jpeg_quality: 0,
        ..ExportSettings::default()
    };
    let exp = Exporter::new(Arc::new(MemoryAssetResolver::new()), settings);
    let mut sink = InMemorySink::new();
    assert!(exp.deliver(&Selection::empty(), &mut sink).is_err());
    assert!(sink.artifacts().is_empty());
}

#[test]
fn skipped_layers_are_reported() {
    let resolver =
        MemoryAssetResolver::new().with(Category::Base, "Normal", solid_png([200, 10, 10, 255]));
    let mut sel = Selection::empty();
    sel.put(Category::Base, Some("Normal".to_owned()));
    sel.put(Category::Mouth, Some("Mouth3".to_owned()));

    let out = exporter(resolver).export(&sel).unwrap();
    let skipped: Vec<_> = out.skipped().map(|(l, _)| l.category()).collect();
    assert_eq!(skipped, vec![Category::Mouth]);
    assert_eq!(out.pixels.get_pixel(200, 200).0, [200, 10, 10]);
}

#[test]
fn deliver_hands_artifact_to_sink() {
    let mut sink = InMemorySink::new();
    let out = exporter(MemoryAssetResolver::new())
        .deliver(&Selection::empty(), &mut sink)
        .unwrap();
    assert_eq!(sink.artifacts().len(), 1);
    assert_eq!(sink.artifacts()[0].bytes, out.bytes);
}

#[test]
fn spawned_export_uses_its_snapshot() {
    let resolver = MemoryAssetResolver::new()
        .with(Category::Background, "red", solid_png([255, 0, 0, 255]))
        .with(Category::Background, "blue", solid_png([0, 0, 255, 255]));
    let exp = exporter(resolver);

    let mut live = Selection::empty();
    live.put(Category::Background, Some("red".to_owned()));
    let job = exp.spawn(live.clone());
    live.put(Category::Background, Some("blue".to_owned()));

    let out = job.join().unwrap();
    assert_eq!(out.pixels.get_pixel(10, 10).0, [255, 0, 0]);
}

#[test]
fn spawned_job_reports_completion() {
    let job = exporter(MemoryAssetResolver::new()).spawn(Selection::empty());
    while !job.is_finished() {
        std::thread::yield_now();
    }
    assert!(job.is_finished());
    assert_eq!(job.join().unwrap().pixels.dimensions(), (400, 400));
}

#[test]
fn out_of_range_quality_is_an_export_error() {
    let settings = ExportSettings {
        jpeg_quality: 101,
        ..ExportSettings::default()
    };
    let exp = Exporter::new(Arc::new(MemoryAssetResolver::new()), settings);
    assert!(matches!(
        exp.export(&Selection::empty()),
        Err(AvatarError::Export(_))
    ));
}

#[test]
fn oversized_canvas_is_rejected_before_allocating() {
    let settings = ExportSettings {
        size: crate::foundation::core::MAX_CANVAS_PX + 1,
        ..ExportSettings::default()
    };
    let exp = Exporter::new(Arc::new(MemoryAssetResolver::new()), settings);
    assert!(matches!(
        exp.export(&Selection::empty()),
        Err(AvatarError::Export(_))
    ));
}
