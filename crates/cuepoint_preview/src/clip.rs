// SPDX-License-Identifier: MIT OR Apache-2.0
//! Clip identity and the sampling seam to the host's evaluator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an animation clip owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipId(pub Uuid);

impl ClipId {
    /// Create a new random clip ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClipId {
    fn default() -> Self {
        Self::new()
    }
}

/// Descriptive facts about the clip under preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipDescriptor {
    /// Host-side clip identity
    pub id: ClipId,
    /// Display name
    pub name: String,
    /// Clip length in seconds
    pub length: f32,
}

impl ClipDescriptor {
    /// Describe a clip by name and length
    pub fn new(name: impl Into<String>, length: f32) -> Self {
        Self {
            id: ClipId::new(),
            name: name.into(),
            length,
        }
    }
}

/// Time-driven sampler the host binds to the active clip.
///
/// The preview pushes time into it and asks it to evaluate; what a sample
/// does to the scene is entirely the host's business.
pub trait ClipSampler {
    /// Position the sampler at `time` seconds into the clip
    fn set_time(&mut self, time: f32);

    /// Apply the sample at the current time to the preview scene
    fn evaluate(&mut self);
}
