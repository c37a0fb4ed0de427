// ---------------------------------------------------------------------------
// Longitudinal driver model: bang-bang acceleration towards a target speed
// ---------------------------------------------------------------------------

/// Fixed acceleration magnitude while chasing the target, m/s^2.
pub const DRIVE_ACCEL: f64 = 2.0;

/// Throttle reported while holding speed exactly.
pub const CRUISE_THROTTLE: f64 = 10.0;

const THROTTLE_GAIN: f64 = 10.0; // % per m/s of speed gap
const THROTTLE_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveCommand {
    pub accel: f64,    // m/s^2
    pub throttle: f64, // %
}

impl DriveCommand {
    /// Compare target and current speed (both m/s) and pick the command.
    /// Exact equality holds speed; any gap, however small, accelerates or
    /// brakes at the full fixed rate.
    pub fn toward(target_ms: f64, velocity_ms: f64) -> Self {
        if target_ms > velocity_ms {
            DriveCommand {
                accel: DRIVE_ACCEL,
                throttle: ((target_ms - velocity_ms) * THROTTLE_GAIN).min(THROTTLE_MAX),
            }
        } else if target_ms < velocity_ms {
            DriveCommand { accel: -DRIVE_ACCEL, throttle: 0.0 }
        } else {
            DriveCommand { accel: 0.0, throttle: CRUISE_THROTTLE }
        }
    }
}

/// Vehicle speed and distance travelled.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kinematics {
    pub velocity_ms: f64,
    pub odometer_km: f64,
}

impl Kinematics {
    /// Explicit Euler step. Velocity never goes negative; the odometer uses
    /// the post-update velocity.
    pub fn advance(&mut self, accel: f64, dt: f64) {
        self.velocity_ms += accel * dt;
        if self.velocity_ms < 0.0 {
            self.velocity_ms = 0.0;
        }
        self.odometer_km += self.velocity_ms * dt / 1000.0;
    }

    pub fn speed_kmh(&self) -> f64 {
        self.velocity_ms * crate::physics::KMH_PER_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn launch_from_rest() {
        let cmd = DriveCommand::toward(30.0 / 3.6, 0.0);
        assert_eq!(cmd.accel, 2.0);
        assert_abs_diff_eq!(cmd.throttle, 30.0 / 3.6 * 10.0, epsilon = 1e-12);
    }

    #[test]
    fn throttle_saturates() {
        let cmd = DriveCommand::toward(100.0 / 3.6, 0.0);
        assert_eq!(cmd.throttle, 100.0);
    }

    #[test]
    fn braking_releases_throttle() {
        let cmd = DriveCommand::toward(0.0, 12.0);
        assert_eq!(cmd, DriveCommand { accel: -2.0, throttle: 0.0 });
    }

    #[test]
    fn exact_match_holds() {
        let cmd = DriveCommand::toward(0.0, 0.0);
        assert_eq!(cmd, DriveCommand { accel: 0.0, throttle: 10.0 });
    }

    #[test]
    fn velocity_clamped_at_zero() {
        let mut k = Kinematics { velocity_ms: 1.0, odometer_km: 0.5 };
        k.advance(-2.0, 1.0);
        assert_eq!(k.velocity_ms, 0.0);
        assert_eq!(k.odometer_km, 0.5);
    }

    #[test]
    fn odometer_uses_updated_velocity() {
        let mut k = Kinematics::default();
        k.advance(2.0, 1.0);
        assert_abs_diff_eq!(k.odometer_km, 0.002);
        assert_abs_diff_eq!(k.speed_kmh(), 7.2, epsilon = 1e-12);
    }
}
