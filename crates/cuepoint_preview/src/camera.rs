// SPDX-License-Identifier: MIT OR Apache-2.0
//! Orbit camera for the preview viewport.

/// Scroll units to distance units
const SCROLL_GAIN: f32 = 0.05;
/// Sensitivity factor with the camera at the pivot
const GAIN_SLOW: f32 = 0.1;
/// Sensitivity factor at the far end of the gain range
const GAIN_FAST: f32 = 1.0;
/// Distance at which orbit sensitivity reaches its fast factor
const ORBIT_GAIN_RANGE: f32 = 10.0;
/// Base pan units per pointer unit
const PAN_GAIN: f32 = 0.02;
/// Distance at which pan sensitivity reaches its fast factor
const PAN_GAIN_RANGE: f32 = 75.0;
/// Closest allowed orbit distance
const DISTANCE_MIN: f32 = 0.01;
/// Farthest allowed orbit distance
const DISTANCE_MAX: f32 = 1000.0;

/// Pointer button driving a camera gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Orbit drag
    Primary,
    /// Pan drag
    Secondary,
}

/// One pointer sample delivered by the host UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Wheel scroll; positive pulls the camera back
    Scroll {
        /// Scroll amount in host units
        delta: f32,
    },
    /// Drag with a held button
    Drag {
        /// Which button is held
        button: PointerButton,
        /// Pointer movement since the last sample
        delta: [f32; 2],
    },
}

/// Camera transform handed to the external renderer each refresh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space camera position
    pub position: [f32; 3],
    /// World-space camera rotation, quaternion `[x, y, z, w]`
    pub rotation: [f32; 4],
}

/// Orbit/pan/zoom camera around a pivot point.
///
/// Yaw and pitch are unbounded degrees; distance is kept strictly positive
/// by clamping every update. Gestures apply only while the pointer is
/// inside the viewport region, and samples outside it are dropped rather
/// than buffered.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Heading around the pivot, in degrees
    pub yaw: f32,
    /// Elevation, in degrees
    pub pitch: f32,
    /// Look-at point the camera orbits
    pub pivot: [f32; 3],
    /// Orbit distance from the pivot
    distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 120.0,
            pitch: -20.0,
            pivot: [0.0, 0.0, 0.0],
            distance: 5.0,
        }
    }
}

impl OrbitCamera {
    /// Create a camera at the default framing
    pub fn new() -> Self {
        Self::default()
    }

    /// Orbit distance from the pivot, always positive
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Set the orbit distance, clamped to the supported range
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    /// Apply one pointer sample.
    ///
    /// Returns true when the gesture was applied; samples outside the
    /// viewport region are ignored entirely.
    pub fn handle_pointer(&mut self, event: &PointerEvent, inside_viewport: bool) -> bool {
        if !inside_viewport {
            return false;
        }
        match *event {
            PointerEvent::Scroll { delta } => self.zoom(delta),
            PointerEvent::Drag {
                button: PointerButton::Primary,
                delta,
            } => self.orbit(delta[0], delta[1]),
            PointerEvent::Drag {
                button: PointerButton::Secondary,
                delta,
            } => self.pan(delta[0], delta[1]),
        }
        true
    }

    /// Pull the camera in or out along the view direction
    pub fn zoom(&mut self, scroll_delta: f32) {
        self.set_distance(self.distance + scroll_delta * SCROLL_GAIN);
    }

    /// Rotate around the pivot.
    ///
    /// Sensitivity eases off as the camera closes in, keeping near-subject
    /// framing precise while far framing stays quick.
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        let gain = distance_gain(self.distance, ORBIT_GAIN_RANGE);
        self.yaw += delta_x * gain;
        self.pitch += delta_y * gain;
    }

    /// Slide the pivot along the camera's right/up plane
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let gain = PAN_GAIN * distance_gain(self.distance, PAN_GAIN_RANGE);
        let right = self.right();
        let up = self.up();

        let offset_x = right.map(|v| v * -delta_x * gain);
        let offset_y = up.map(|v| v * delta_y * gain);

        for i in 0..3 {
            self.pivot[i] += offset_x[i] + offset_y[i];
        }
    }

    /// View direction as a unit vector
    pub fn forward(&self) -> [f32; 3] {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        [pitch_cos * yaw_sin, -pitch_sin, pitch_cos * yaw_cos]
    }

    /// Camera-space right axis in world space
    pub fn right(&self) -> [f32; 3] {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        [yaw_cos, 0.0, -yaw_sin]
    }

    /// Camera-space up axis in world space
    pub fn up(&self) -> [f32; 3] {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        [yaw_sin * pitch_sin, pitch_cos, yaw_cos * pitch_sin]
    }

    /// Camera rotation as a quaternion `[x, y, z, w]`: yaw about the world
    /// Y axis, then pitch about the local X axis
    pub fn rotation(&self) -> [f32; 4] {
        let (yaw_sin, yaw_cos) = (self.yaw.to_radians() * 0.5).sin_cos();
        let (pitch_sin, pitch_cos) = (self.pitch.to_radians() * 0.5).sin_cos();
        [
            yaw_cos * pitch_sin,
            yaw_sin * pitch_cos,
            -yaw_sin * pitch_sin,
            yaw_cos * pitch_cos,
        ]
    }

    /// World-space pose for the renderer: the camera sits `distance` behind
    /// the pivot along its own view direction, looking at the pivot
    pub fn pose(&self) -> CameraPose {
        let forward = self.forward();
        let position = [
            self.pivot[0] - forward[0] * self.distance,
            self.pivot[1] - forward[1] * self.distance,
            self.pivot[2] - forward[2] * self.distance,
        ];
        CameraPose {
            position,
            rotation: self.rotation(),
        }
    }
}

/// Distance-dependent sensitivity: the slow factor with the camera at the
/// pivot, ramping linearly to the fast factor at `range` and beyond
fn distance_gain(distance: f32, range: f32) -> f32 {
    let t = (distance / range).clamp(0.0, 1.0);
    GAIN_SLOW + (GAIN_FAST - GAIN_SLOW) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_framing() {
        let camera = OrbitCamera::new();
        assert_eq!(camera.yaw, 120.0);
        assert_eq!(camera.pitch, -20.0);
        assert_eq!(camera.distance(), 5.0);
        assert_eq!(camera.pivot, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_orbit_leaves_pivot_and_distance_alone() {
        let mut camera = OrbitCamera::new();
        camera.orbit(10.0, -4.0);
        assert_ne!(camera.yaw, 120.0);
        assert_ne!(camera.pitch, -20.0);
        assert_eq!(camera.pivot, [0.0, 0.0, 0.0]);
        assert_eq!(camera.distance(), 5.0);
    }

    #[test]
    fn test_pan_leaves_angles_alone() {
        let mut camera = OrbitCamera::new();
        camera.pan(12.0, 3.0);
        assert_eq!(camera.yaw, 120.0);
        assert_eq!(camera.pitch, -20.0);
        assert_eq!(camera.distance(), 5.0);
        assert_ne!(camera.pivot, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_zoom_clamps_to_positive_distance() {
        let mut camera = OrbitCamera::new();
        for _ in 0..1000 {
            camera.zoom(-1.0);
        }
        assert_eq!(camera.distance(), DISTANCE_MIN);

        for _ in 0..100_000 {
            camera.zoom(1.0);
        }
        assert_eq!(camera.distance(), DISTANCE_MAX);
    }

    #[test]
    fn test_pointer_outside_viewport_is_ignored() {
        let mut camera = OrbitCamera::new();
        let before = camera.clone();

        let applied = camera.handle_pointer(
            &PointerEvent::Drag {
                button: PointerButton::Primary,
                delta: [5.0, 5.0],
            },
            false,
        );
        assert!(!applied);
        camera.handle_pointer(&PointerEvent::Scroll { delta: 3.0 }, false);
        assert_eq!(camera, before);
    }

    #[test]
    fn test_pointer_routing_by_button() {
        let mut camera = OrbitCamera::new();
        assert!(camera.handle_pointer(
            &PointerEvent::Drag {
                button: PointerButton::Secondary,
                delta: [4.0, 0.0],
            },
            true,
        ));
        assert_eq!(camera.yaw, 120.0);
        assert_ne!(camera.pivot, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_sensitivity_ramp_endpoints() {
        assert!((distance_gain(0.0, 10.0) - 0.1).abs() < 1e-6);
        assert!((distance_gain(5.0, 10.0) - 0.55).abs() < 1e-6);
        assert!((distance_gain(10.0, 10.0) - 1.0).abs() < 1e-6);
        // past the range the ramp holds at the fast factor
        assert!((distance_gain(50.0, 10.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_is_slower_up_close() {
        let mut near = OrbitCamera::new();
        near.set_distance(0.5);
        let mut far = OrbitCamera::new();
        far.set_distance(20.0);

        near.orbit(10.0, 0.0);
        far.orbit(10.0, 0.0);
        assert!((near.yaw - 120.0).abs() < (far.yaw - 120.0).abs());
    }

    #[test]
    fn test_axes_are_orthonormal() {
        let mut camera = OrbitCamera::new();
        camera.yaw = 73.0;
        camera.pitch = -31.0;

        let f = camera.forward();
        let r = camera.right();
        let u = camera.up();

        let dot = |a: [f32; 3], b: [f32; 3]| a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
        assert!(dot(f, r).abs() < 1e-5);
        assert!(dot(f, u).abs() < 1e-5);
        assert!(dot(r, u).abs() < 1e-5);
        assert!((dot(f, f) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_pose_at_identity_angles() {
        let mut camera = OrbitCamera::new();
        camera.yaw = 0.0;
        camera.pitch = 0.0;
        camera.pivot = [1.0, 2.0, 3.0];
        camera.set_distance(2.0);

        let pose = camera.pose();
        // looking down +Z from two units behind the pivot
        assert!((pose.position[0] - 1.0).abs() < 1e-5);
        assert!((pose.position[1] - 2.0).abs() < 1e-5);
        assert!((pose.position[2] - 1.0).abs() < 1e-5);

        let identity = [0.0, 0.0, 0.0, 1.0];
        for i in 0..4 {
            assert!((pose.rotation[i] - identity[i]).abs() < 1e-5);
        }
    }

    #[test]
    fn test_rotation_matches_forward_axis() {
        // rotating +Z by the pose quaternion must reproduce forward()
        let mut camera = OrbitCamera::new();
        camera.yaw = 200.0;
        camera.pitch = 35.0;

        let [x, y, z, w] = camera.rotation();
        let rotated_z = [
            2.0 * (x * z + w * y),
            2.0 * (y * z - w * x),
            1.0 - 2.0 * (x * x + y * y),
        ];
        let forward = camera.forward();
        for i in 0..3 {
            assert!((rotated_z[i] - forward[i]).abs() < 1e-5);
        }
    }
}
