// SPDX-License-Identifier: MIT OR Apache-2.0
//! Boundary traits implemented by the embedding application.

use cuepoint_events::StateEventData;
use cuepoint_preview::CameraPose;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a previewable model owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(pub Uuid);

impl ModelId {
    /// Create a new random model ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self::new()
    }
}

/// Host-side storage for the root event data asset.
///
/// Each commit calls the hooks in a fixed order: [`AssetStore::validate`],
/// then [`AssetStore::mark_dirty`], then [`AssetStore::persist`].
pub trait AssetStore {
    /// Optional consistency check over the freshly committed asset.
    /// Fire-and-forget: the editor consumes no result from it.
    fn validate(&mut self, asset: &StateEventData) {
        let _ = asset;
    }

    /// Flag the asset as holding unsaved authoring changes
    fn mark_dirty(&mut self);

    /// Flush the asset to the host's persistent storage
    fn persist(&mut self) -> Result<(), String>;
}

/// Renderer seam for the preview viewport.
///
/// The editor computes the camera pose and decides what to show; producing
/// pixels is the host's business.
pub trait PreviewRenderer {
    /// Draw the model from the given camera pose into an offscreen target.
    ///
    /// Returns the egui texture to blit into the viewport, or `None` when
    /// the host has nothing to show yet (the panel draws a placeholder).
    fn render(
        &mut self,
        pose: &CameraPose,
        model: ModelId,
        size: [f32; 2],
    ) -> Option<egui::TextureId>;
}
