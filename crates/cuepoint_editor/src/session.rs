// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor session: resolves the record under edit and drives the preview.

use crate::host::{AssetStore, ModelId, PreviewRenderer};
use cuepoint_events::{functions, CommitError, EventRecord, StateEventData, StoreError};
use cuepoint_preview::{ClipDescriptor, ClipSampler, OrbitCamera, PlaybackClock, PointerEvent};
use std::time::Instant;
use thiserror::Error;

/// Piece of editor context an operation was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Root event data asset
    Asset,
    /// Animation clip under preview
    Clip,
    /// Model the clip is previewed on
    PreviewModel,
}

impl SelectionKind {
    /// Advisory text shown while this selection is missing
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::Asset => "Assign an event data asset.",
            Self::Clip => "Assign an animation clip.",
            Self::PreviewModel => "Assign a preview model.",
        }
    }
}

/// Errors surfaced by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// An asset, clip or preview model must be assigned first. The caller
    /// skips the dependent half of the refresh and shows an advisory.
    #[error("{}", .0.advisory())]
    MissingSelection(SelectionKind),

    /// Index handed to the sparse store was out of domain
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Record write-back addressed a slot that was never grown
    #[error(transparent)]
    Commit(#[from] CommitError),

    /// Persisting through the host's asset store failed
    #[error("persist failed: {0}")]
    Persist(String),
}

/// Editor session for the event authoring tool.
///
/// One session lives from tool open to tool close and owns every piece of
/// editor-local state: the indices addressing the record under edit, the
/// selected trigger function, the conditions toggle, the playback clock and
/// the preview camera. Asset data stays host-owned and is borrowed per
/// call, so several assets can share one session.
pub struct EditorSession {
    /// Index of the event collection inside the root asset
    pub collection_index: i64,
    /// Index of the record inside that collection
    pub record_index: i64,
    /// Index of the condition under edit while conditions are shown
    pub condition_index: i64,
    /// Selected row of the trigger-function table
    pub selected_function: usize,
    /// Whether guard conditions are shown (and therefore kept)
    pub show_conditions: bool,
    /// Playback clock for the clip preview
    pub clock: PlaybackClock,
    /// Orbit camera for the preview viewport
    pub camera: OrbitCamera,
    /// Clip under preview
    clip: Option<ClipDescriptor>,
    /// Model the clip is previewed on
    preview_model: Option<ModelId>,
}

impl EditorSession {
    /// Create a session with nothing assigned
    pub fn new() -> Self {
        Self {
            collection_index: 0,
            record_index: 0,
            condition_index: 0,
            selected_function: 0,
            show_conditions: false,
            clock: PlaybackClock::new(),
            camera: OrbitCamera::new(),
            clip: None,
            preview_model: None,
        }
    }

    /// Clip currently under preview
    pub fn clip(&self) -> Option<&ClipDescriptor> {
        self.clip.as_ref()
    }

    /// Model the clip is previewed on
    pub fn preview_model(&self) -> Option<ModelId> {
        self.preview_model
    }

    /// Load a clip for preview; playback stops and rewinds
    pub fn load_clip(&mut self, clip: ClipDescriptor) {
        if clip.length <= 0.0 {
            tracing::warn!(
                name = %clip.name,
                length = clip.length,
                "clip has no length; the preview timeline will not advance"
            );
        }
        self.clock.set_clip(clip.length);
        tracing::info!(name = %clip.name, length = clip.length, "clip loaded");
        self.clip = Some(clip);
    }

    /// Set the model the clip is previewed on
    pub fn set_preview_model(&mut self, model: ModelId) {
        self.preview_model = Some(model);
    }

    /// Table row for the currently selected trigger function.
    ///
    /// Falls back to the `"None"` sentinel row if the selection index was
    /// pushed out of range.
    pub fn selected_function_spec(&self) -> &'static functions::FunctionSpec {
        functions::spec_at(self.selected_function).unwrap_or(&functions::FUNCTIONS[0])
    }

    /// Resolve the record under edit, creating structure along the way.
    ///
    /// Grows the asset's collection list and the collection's record list
    /// through the sparse store, then applies the editing protocol for the
    /// current selection: parameter-bearing functions get a payload slot,
    /// parameter-free functions get theirs zeroed, and the conditions list
    /// either grows to the condition index or is cleared, depending on the
    /// toggle. Resolving again without intervening edits changes nothing.
    pub fn resolve_record<'a>(
        &self,
        asset: &'a mut StateEventData,
    ) -> Result<&'a mut EventRecord, SessionError> {
        let collection = asset.collection_at(self.collection_index)?;
        let record = collection.event_at(self.record_index)?;

        if self.selected_function_spec().has_parameter {
            record.ensure_parameter();
        } else {
            record.reset_parameter();
        }

        if self.show_conditions {
            record.condition_at(self.condition_index)?;
        } else {
            record.clear_conditions();
        }

        Ok(record)
    }

    /// Route a pointer sample to the preview camera.
    ///
    /// Gestures only mean something while a clip is loaded, and only apply
    /// while the pointer is inside the viewport region. Returns whether the
    /// gesture was applied.
    pub fn handle_pointer(&mut self, event: &PointerEvent, inside_viewport: bool) -> bool {
        if self.clip.is_none() {
            return false;
        }
        self.camera.handle_pointer(event, inside_viewport)
    }

    /// Start looping playback from the beginning of the clip.
    ///
    /// Returns whether the transition happened (false when already playing).
    pub fn play(&mut self, now: Instant) -> Result<bool, SessionError> {
        self.require_clip()?;
        Ok(self.clock.play(now))
    }

    /// Stop playback, keeping the current time for inspection.
    ///
    /// Returns whether the transition happened (false when already stopped).
    pub fn stop(&mut self) -> Result<bool, SessionError> {
        self.require_clip()?;
        Ok(self.clock.stop())
    }

    /// Start or stop looping playback
    pub fn toggle_playback(&mut self, now: Instant) -> Result<(), SessionError> {
        self.require_clip()?;
        self.clock.toggle(now);
        Ok(())
    }

    /// Scrub the preview to a normalized position.
    ///
    /// Applies only while stopped; the new time is pushed into the sampler
    /// immediately so the viewport updates without waiting for playback.
    /// Returns whether the scrub was accepted.
    pub fn scrub(
        &mut self,
        progress: f32,
        sampler: &mut dyn ClipSampler,
    ) -> Result<bool, SessionError> {
        self.require_clip()?;
        if !self.clock.scrub(progress) {
            return Ok(false);
        }
        sampler.set_time(self.clock.time());
        sampler.evaluate();
        Ok(true)
    }

    /// Drive the preview for one UI refresh.
    ///
    /// Ticks the clock, pushes the new time into the sampler on every
    /// playing tick, and submits the camera pose and preview model to the
    /// renderer. A missing clip or model short-circuits the whole update.
    pub fn refresh(
        &mut self,
        now: Instant,
        sampler: &mut dyn ClipSampler,
        renderer: &mut dyn PreviewRenderer,
        viewport_size: [f32; 2],
    ) -> Result<Option<egui::TextureId>, SessionError> {
        self.require_clip()?;
        let model = self
            .preview_model
            .ok_or(SessionError::MissingSelection(SelectionKind::PreviewModel))?;

        if self.clock.tick(now) {
            sampler.set_time(self.clock.time());
            sampler.evaluate();
        }

        let pose = self.camera.pose();
        Ok(renderer.render(&pose, model, viewport_size))
    }

    /// Commit the record under edit into its collection and persist.
    ///
    /// Stamps the selected function and the normalized playback time onto
    /// the resolved record, writes it back at the record index, then runs
    /// the host's hooks: validate, mark dirty, persist.
    pub fn commit(
        &self,
        asset: &mut StateEventData,
        store: &mut dyn AssetStore,
    ) -> Result<(), SessionError> {
        // normalized time is meaningless without an active clip
        self.require_clip()?;
        let function = self.selected_function_spec().name;
        let progress = self.clock.progress();

        let record = {
            let live = self.resolve_record(asset)?;
            live.set_function_id(function);
            live.set_normalized_time(progress);
            live.clone()
        };
        asset
            .collection_at(self.collection_index)?
            .commit(self.record_index, record)?;

        store.validate(asset);
        store.mark_dirty();
        store.persist().map_err(SessionError::Persist)?;

        tracing::info!(
            collection = self.collection_index,
            record = self.record_index,
            function,
            time = progress,
            "event committed"
        );
        Ok(())
    }

    fn require_clip(&self) -> Result<(), SessionError> {
        if self.clip.is_some() {
            Ok(())
        } else {
            Err(SessionError::MissingSelection(SelectionKind::Clip))
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
