// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback clock for the clip preview.
//!
//! Two writers exist for the current time: the wall-clock loop while
//! playing, and user scrubbing while stopped. The state is the single
//! source of truth for which writer is live; the losing writer's requests
//! are rejected rather than queued, and the UI widgets stay enabled.

use std::time::Instant;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Not advancing; scrubbing is allowed
    #[default]
    Stopped,
    /// Advancing from wall-clock deltas; scrubbing is rejected
    Playing,
}

/// Scrub/loop playback clock over a single clip timeline
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    /// Playback state
    state: PlaybackState,
    /// Current time in seconds
    current_time: f32,
    /// Length of the active clip in seconds
    clip_length: f32,
    /// Timestamp of the last applied tick while playing
    last_tick: Option<Instant>,
}

impl PlaybackClock {
    /// Create a stopped clock with no clip loaded
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Stopped,
            current_time: 0.0,
            clip_length: 0.0,
            last_tick: None,
        }
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// True while time advances from wall-clock deltas
    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing)
    }

    /// Current time in seconds, within `[0, clip_length]`
    pub fn time(&self) -> f32 {
        self.current_time
    }

    /// Length of the active clip in seconds
    pub fn clip_length(&self) -> f32 {
        self.clip_length
    }

    /// Current time as a fraction of clip length.
    ///
    /// Returns 0 when the clip length is not positive, so broken clip data
    /// degrades to a frozen timeline instead of a NaN.
    pub fn progress(&self) -> f32 {
        if self.clip_length > 0.0 {
            self.current_time / self.clip_length
        } else {
            0.0
        }
    }

    /// Adopt a new active clip: stop and rewind
    pub fn set_clip(&mut self, length: f32) {
        self.state = PlaybackState::Stopped;
        self.current_time = 0.0;
        self.clip_length = length;
        self.last_tick = None;
        tracing::debug!(length, "playback clock adopted clip");
    }

    /// Start playing from the beginning of the clip.
    ///
    /// Returns false (and changes nothing) when already playing.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            return false;
        }
        self.state = PlaybackState::Playing;
        self.current_time = 0.0;
        self.last_tick = Some(now);
        tracing::info!("playback started");
        true
    }

    /// Stop advancing; the current time is kept for inspection.
    ///
    /// Returns false (and changes nothing) when already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.state = PlaybackState::Stopped;
        self.last_tick = None;
        tracing::info!(time = self.current_time, "playback stopped");
        true
    }

    /// Play if stopped, stop if playing
    pub fn toggle(&mut self, now: Instant) {
        if self.is_playing() {
            self.stop();
        } else {
            self.play(now);
        }
    }

    /// Advance from the wall clock.
    ///
    /// Elapsed time comes from timestamps rather than a per-call constant,
    /// so an irregular refresh cadence cannot drift the timeline. Crossing
    /// the end of the clip rewinds to zero and discards the overshoot
    /// remainder. Returns true when a playing tick was applied and the new
    /// time should be pushed into the clip sampler.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_playing() {
            return false;
        }
        let last = self.last_tick.unwrap_or(now);
        self.current_time += now.saturating_duration_since(last).as_secs_f32();
        self.last_tick = Some(now);
        if self.current_time > self.clip_length {
            self.current_time = 0.0;
        }
        true
    }

    /// Set the current time from a normalized scrub position.
    ///
    /// Only the user writes time while stopped; while playing the loop owns
    /// the timeline and the request is rejected. Returns whether the scrub
    /// was applied.
    pub fn scrub(&mut self, progress: f32) -> bool {
        if self.is_playing() {
            tracing::debug!(progress, "scrub ignored while playing");
            return false;
        }
        self.current_time = progress.clamp(0.0, 1.0) * self.clip_length;
        true
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}
