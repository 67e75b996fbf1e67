// SPDX-License-Identifier: MIT OR Apache-2.0
//! Clip preview state for CuePoint Editor.
//!
//! This crate provides the frame-driven preview machinery:
//! - Playback clock unifying real-time looping and manual scrubbing
//! - Orbit/pan/zoom camera over pointer deltas
//! - Clip identity and the sampling seam to the host's evaluator
//!
//! ## Architecture
//!
//! Everything here is synchronous: the host calls in once per UI refresh
//! with a timestamp and pointer samples, and no state escapes between
//! calls. Rendering and clip evaluation stay behind host-implemented
//! traits.

pub mod camera;
pub mod clip;
pub mod clock;

pub use camera::{CameraPose, OrbitCamera, PointerButton, PointerEvent};
pub use clip::{ClipDescriptor, ClipId, ClipSampler};
pub use clock::{PlaybackClock, PlaybackState};
