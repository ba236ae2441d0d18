use crate::{
    assets::resolve::{AssetKey, AssetResolver},
    catalog::category::Category,
    compose::selection::Selection,
    render::canvas::RasterCanvas,
};

/// What happened to one selected layer during a render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerStatus {
    /// The asset loaded and was composited.
    Drawn,
    /// The asset could not be loaded or drawn; the layer was left out.
    Skipped(String),
}

/// Per-layer record of a render, in painter's order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerOutcome {
    /// Which asset this layer addressed.
    pub key: AssetKey,
    /// Whether it made it onto the canvas.
    pub status: LayerStatus,
}

impl LayerOutcome {
    /// Layer slot.
    pub fn category(&self) -> Category {
        self.key.category
    }

    /// Return `true` when the layer was composited.
    pub fn is_drawn(&self) -> bool {
        self.status == LayerStatus::Drawn
    }
}

/// Paint every selected layer onto `canvas`, one at a time in painter's order.
///
/// Each layer is fetched, then drawn, before the next fetch starts. A failed layer is logged and
/// skipped; it never aborts the remaining layers.
pub fn paint_selection(
    selection: &Selection,
    resolver: &dyn AssetResolver,
    canvas: &mut RasterCanvas,
) -> Vec<LayerOutcome> {
    selection
        .composite()
        .map(|(category, option)| {
            let key = AssetKey::new(category, option);
            let status = match resolver.load(&key).and_then(|img| canvas.draw_layer(&img)) {
                Ok(()) => {
                    tracing::debug!(%category, option, "drew layer");
                    LayerStatus::Drawn
                }
                Err(err) => {
                    tracing::warn!(%category, option, error = %err, "failed to load layer, skipping");
                    LayerStatus::Skipped(err.to_string())
                }
            };
            LayerOutcome { key, status }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/layers.rs"]
mod tests;
