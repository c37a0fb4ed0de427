use super::{AIR_DENSITY, GRAVITY, ROLLING_COEFF};

/// Longitudinal forces acting on the vehicle for one step (N).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadLoad {
    pub drag: f64,
    pub rolling: f64,
    pub inertial: f64,
}

impl RoadLoad {
    /// Net tractive force the powertrain must supply.
    pub fn total(&self) -> f64 {
        self.drag + self.rolling + self.inertial
    }

    /// Mechanical power at the given speed (W). Negative while braking.
    pub fn power(&self, velocity_ms: f64) -> f64 {
        self.total() * velocity_ms
    }
}

/// Quadratic aerodynamic drag, unsigned.
pub fn drag_force(velocity_ms: f64, drag_coeff: f64, frontal_area: f64) -> f64 {
    0.5 * AIR_DENSITY * drag_coeff * frontal_area * velocity_ms * velocity_ms
}

/// Constant rolling resistance, independent of speed (applied even at rest).
pub fn rolling_force(mass: f64) -> f64 {
    ROLLING_COEFF * mass * GRAVITY
}

pub fn inertial_force(mass: f64, accel: f64) -> f64 {
    mass * accel
}

/// Evaluate all three force terms at the current (pre-step) velocity.
pub fn road_load(
    velocity_ms: f64,
    accel: f64,
    mass: f64,
    drag_coeff: f64,
    frontal_area: f64,
) -> RoadLoad {
    RoadLoad {
        drag: drag_force(velocity_ms, drag_coeff, frontal_area),
        rolling: rolling_force(mass),
        inertial: inertial_force(mass, accel),
    }
}
