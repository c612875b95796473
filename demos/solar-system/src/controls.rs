/// Camera focus: overview of the whole system, or locked onto one body.
///
/// Wraps `OrbitControls`. Focusing moves the orbit target to the body and
/// narrows the zoom range around it; resetting restores the overview target,
/// bounds and the camera pose held when the overview was left.

use glam::Vec3;
use orrery_engine::{OrbitControls, PerspectiveCamera};

use crate::config::SolarConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    Overview,
    /// Registry index of the focused body.
    Focused(usize),
}

pub struct CameraFocus {
    controls: OrbitControls,
    state: FocusState,
    overview_target: Vec3,
    overview_bounds: (f32, f32),
    focus_factors: (f32, f32),
}

impl CameraFocus {
    pub fn new(camera: &PerspectiveCamera, config: &SolarConfig) -> Self {
        let controls = OrbitControls::new(camera)
            .with_distance_bounds(config.overview_min_distance, config.overview_max_distance)
            .with_damping(config.damping_factor);
        Self {
            overview_target: controls.target,
            controls,
            state: FocusState::Overview,
            overview_bounds: (config.overview_min_distance, config.overview_max_distance),
            focus_factors: (config.focus_min_factor, config.focus_max_factor),
        }
    }

    /// Take new bounds and damping from a reloaded config. Focused bounds
    /// apply on the next `focus`.
    pub fn apply_config(&mut self, config: &SolarConfig) {
        self.overview_bounds = (config.overview_min_distance, config.overview_max_distance);
        self.focus_factors = (config.focus_min_factor, config.focus_max_factor);
        self.controls.damping_factor = config.damping_factor.clamp(0.0, 1.0);
        if self.state == FocusState::Overview {
            self.set_bounds(self.overview_bounds);
        }
    }

    pub fn focused(&self) -> Option<usize> {
        match self.state {
            FocusState::Focused(index) => Some(index),
            FocusState::Overview => None,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused().is_some()
    }

    /// Lock onto a body at `pos`. Works from either state; the overview
    /// pose is only captured when leaving the overview.
    pub fn focus(&mut self, index: usize, pos: Vec3, radius: f32, camera: &PerspectiveCamera) {
        if self.state == FocusState::Overview {
            self.controls.save_state(camera);
        }
        self.controls.target = pos;
        self.set_bounds((radius * self.focus_factors.0, radius * self.focus_factors.1));
        self.state = FocusState::Focused(index);
    }

    /// Back to the overview. No-op when already there.
    pub fn reset(&mut self, camera: &mut PerspectiveCamera) {
        if self.state == FocusState::Overview {
            return;
        }
        self.controls.reset(camera);
        self.controls.target = self.overview_target;
        self.set_bounds(self.overview_bounds);
        self.state = FocusState::Overview;
    }

    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        self.controls.rotate_by_pixels(dx, dy, viewport_height);
    }

    pub fn dolly(&mut self, wheel_delta: f32) {
        self.controls.dolly(wheel_delta);
    }

    /// Step damping and write the camera pose. Call once per frame.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        self.controls.update(camera);
    }

    fn set_bounds(&mut self, (min, max): (f32, f32)) {
        self.controls.min_distance = min;
        self.controls.max_distance = max;
    }
}

#[cfg(test)]
impl CameraFocus {
    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn target(&self) -> Vec3 {
        self.controls.target
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.controls.min_distance, self.controls.max_distance)
    }
}
