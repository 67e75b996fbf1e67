// SPDX-License-Identifier: MIT OR Apache-2.0
//! Event authoring editor for CuePoint Editor.
//!
//! This crate ties the event data model to the clip preview:
//! - Session state addressing the record under edit
//! - The editing protocol applied on every UI refresh
//! - Commit flow through the host's asset store
//! - An egui panel with authoring fields and the preview viewport
//!
//! ## Architecture
//!
//! The session owns editor-local state (indices, selections, clock,
//! camera) and borrows the host-owned asset per call. Rendering, clip
//! sampling and persistence stay behind the traits in [`host`], so the
//! crate never talks to a GPU or the filesystem itself.

pub mod host;
pub mod panel;
pub mod session;

pub use host::{AssetStore, ModelId, PreviewRenderer};
pub use panel::EventEditorPanel;
pub use session::{EditorSession, SelectionKind, SessionError};
