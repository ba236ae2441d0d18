use image::RgbaImage;

use crate::{
    assets::resolve::AssetResolver,
    catalog::{category::Category, label::option_label},
    compose::selection::Selection,
    foundation::core::Rgba8,
    foundation::error::AvatarResult,
    render::{
        canvas::RasterCanvas,
        layers::{LayerOutcome, paint_selection},
    },
};

/// Prompt shown in place of the avatar while nothing is selected.
pub const EMPTY_PREVIEW_PROMPT: &str = "Select traits to build your avatar";

/// One visible-or-hidden entry in the preview stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewLayer {
    /// Layer slot.
    pub category: Category,
    /// Option identifier.
    pub option: String,
    /// Display label for the option.
    pub label: String,
    /// `false` when the asset failed to load and the layer is hidden.
    pub visible: bool,
}

impl PreviewLayer {
    /// Alt text in the form `category: option`.
    pub fn alt_text(&self) -> String {
        format!("{}: {}", self.category, self.option)
    }
}

/// Preview render of a selection.
#[derive(Clone, Debug)]
pub struct PreviewFrame {
    /// Straight-alpha pixels.
    pub image: RgbaImage,
    /// Selected layers in painter's order.
    pub layers: Vec<PreviewLayer>,
}

impl PreviewFrame {
    /// Return `true` when nothing is selected and the prompt should be shown instead.
    pub fn is_empty_state(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Render `selection` as a `size`×`size` preview.
///
/// Uses the same layer painting as export so the two cannot diverge. `base` is painted first when
/// given; otherwise the preview starts transparent. Failed layers are hidden.
#[tracing::instrument(skip(selection, resolver))]
pub fn render_preview(
    selection: &Selection,
    resolver: &dyn AssetResolver,
    size: u32,
    base: Option<Rgba8>,
) -> AvatarResult<PreviewFrame> {
    let mut canvas = RasterCanvas::filled(size, size, base.unwrap_or(Rgba8::TRANSPARENT))?;
    let outcomes = paint_selection(selection, resolver, &mut canvas);
    Ok(PreviewFrame {
        image: canvas.to_rgba_image()?,
        layers: outcomes.into_iter().map(preview_layer).collect(),
    })
}

fn preview_layer(outcome: LayerOutcome) -> PreviewLayer {
    let visible = outcome.is_drawn();
    PreviewLayer {
        category: outcome.key.category,
        label: option_label(&outcome.key.option),
        option: outcome.key.option,
        visible,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
