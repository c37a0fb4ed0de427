use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::record::StepRecord;
use super::schedule::{SpeedSchedule, StandardCycle};
use crate::vehicle::{ElectricVehicle, VehicleParams};

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub dt: f64,      // s per step
    pub steps: usize, // fixed iteration count, no early exit
    pub seed: u64,    // seeds cell spread and insulation noise
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 1.0,
            steps: StandardCycle::STEPS,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Default config sized to the schedule's natural length. Open-ended
    /// schedules (closures) keep the standard cycle's step count.
    pub fn for_schedule<S: SpeedSchedule + ?Sized>(schedule: &S) -> Self {
        Self {
            steps: schedule.len().unwrap_or(StandardCycle::STEPS),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation loop
// ---------------------------------------------------------------------------

/// Drive an existing vehicle through `config.steps` steps of `schedule`.
/// Steps run strictly in order; each one sees the full state left by the
/// previous one. `config.seed` is not used here, the caller owns `rng`.
pub fn simulate_with<S, R>(
    vehicle: &mut ElectricVehicle,
    schedule: &S,
    config: &SimConfig,
    rng: &mut R,
) -> Vec<StepRecord>
where
    S: SpeedSchedule + ?Sized,
    R: Rng + ?Sized,
{
    info!(
        "simulating {} steps of '{}' (dt = {} s) on {}",
        config.steps,
        schedule.name(),
        config.dt,
        vehicle.params.name
    );

    let mut trace = Vec::with_capacity(config.steps);
    let mut warned_empty = false;

    for t in 0..config.steps {
        let target = schedule.target_speed_kmh(t);
        let mut record = vehicle.update(target, config.dt, rng);
        record.step = t;

        if record.soc < 0.0 && !warned_empty {
            warn!("step {}: pack SoC is negative ({:.2} %), cells over-discharged", t, record.soc);
            warned_empty = true;
        }
        trace.push(record);
    }

    if let Some(last) = trace.last() {
        info!(
            "done: SoC {:.2} %, odometer {:.3} km, {:.4} kWh used, {:.4} kWh regenerated",
            last.soc,
            vehicle.odometer_km(),
            vehicle.energy.consumed_kwh,
            vehicle.energy.regen_kwh
        );
    }
    trace
}

/// Run the standard cycle on a fresh default vehicle seeded from
/// `config.seed`. Returns the trace and the final vehicle state.
pub fn simulate(config: &SimConfig) -> (Vec<StepRecord>, ElectricVehicle) {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut vehicle = ElectricVehicle::new(VehicleParams::default(), &mut rng);
    info!("seed {}", config.seed);
    let trace = simulate_with(&mut vehicle, &StandardCycle, config, &mut rng);
    (trace, vehicle)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
