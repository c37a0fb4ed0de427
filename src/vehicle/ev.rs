use log::debug;
use rand::Rng;

use super::params::VehicleParams;
use crate::battery::diagnostics::{
    internal_resistance_estimate, sample_insulation_resistance, stress_index, INSULATION_NOMINAL,
};
use crate::battery::{EnergyMeter, Pack};
use crate::dynamics::{DriveCommand, Kinematics};
use crate::physics::{road_load, CoolingMode, ThermalState, KMH_PER_MS};
use crate::sim::record::StepRecord;

// ---------------------------------------------------------------------------
// Electric vehicle: longitudinal dynamics + series pack + lumped thermal
// ---------------------------------------------------------------------------

/// The full electro-mechanical-thermal state, advanced one step at a time.
#[derive(Debug, Clone)]
pub struct ElectricVehicle {
    pub params: VehicleParams,
    pack: Pack,

    pub pack_voltage: f64,
    pub pack_current: f64,
    pub pack_soc: f64,

    pub thermal: ThermalState,
    pub energy: EnergyMeter,
    pub insulation_resistance: f64, // MΩ

    pub kinematics: Kinematics,
    pub throttle_pos: f64,

    cooling: CoolingMode,
    steps: usize,
}

impl ElectricVehicle {
    /// Assemble the vehicle, drawing every cell's parameters from `rng`.
    pub fn new<R: Rng + ?Sized>(params: VehicleParams, rng: &mut R) -> Self {
        let pack = Pack::sample(
            params.cells_in_series,
            params.cell_capacity_ah,
            params.cell_resistance_mohm,
            params.cell_nominal_voltage,
            rng,
        );
        Self::with_pack(params, pack)
    }

    pub fn with_pack(params: VehicleParams, pack: Pack) -> Self {
        let thermal = ThermalState::new(params.initial_pack_temp, params.initial_inverter_temp);
        Self {
            params,
            pack,
            pack_voltage: 0.0,
            pack_current: 0.0,
            pack_soc: 90.0,
            thermal,
            energy: EnergyMeter::default(),
            insulation_resistance: INSULATION_NOMINAL,
            kinematics: Kinematics::default(),
            throttle_pos: 0.0,
            cooling: CoolingMode::Passive,
            steps: 0,
        }
    }

    pub fn pack(&self) -> &Pack {
        &self.pack
    }

    pub fn velocity_ms(&self) -> f64 {
        self.kinematics.velocity_ms
    }

    pub fn odometer_km(&self) -> f64 {
        self.kinematics.odometer_km
    }

    pub fn pack_temp(&self) -> f64 {
        self.thermal.pack_temp
    }

    pub fn coolant_flow(&self) -> f64 {
        self.thermal.coolant_flow
    }

    /// Number of completed `update` calls.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Advance the whole vehicle by `dt` seconds chasing `target_speed_kmh`.
    ///
    /// Power is evaluated at the velocity from *before* this step's
    /// acceleration is applied, so the electrical response lags the drive
    /// command by one step. Nothing here rejects input: negative SoC,
    /// negative cell voltage and runaway temperature all pass through.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        target_speed_kmh: f64,
        dt: f64,
        rng: &mut R,
    ) -> StepRecord {
        let target_ms = target_speed_kmh / KMH_PER_MS;
        let velocity = self.kinematics.velocity_ms;

        // Longitudinal dynamics
        let cmd = DriveCommand::toward(target_ms, velocity);
        self.throttle_pos = cmd.throttle;

        let load = road_load(
            velocity,
            cmd.accel,
            self.params.mass,
            self.params.drag_coeff,
            self.params.frontal_area,
        );
        let power_watts = load.power(velocity);

        // Electrical
        self.pack_current = power_watts / self.params.nominal_pack_voltage;
        let sample = self.pack.update(self.pack_current, dt);
        self.pack_voltage = sample.voltage;
        self.pack_soc = sample.soc;

        let power_kw = self.pack_voltage * self.pack_current / 1000.0;
        self.energy.record(power_kw, dt);

        // Thermal
        let mode = self.thermal.step(self.pack_current, dt);
        if mode != self.cooling {
            debug!(
                "step {}: cooling {:?} -> {:?} at {:.3} °C",
                self.steps, self.cooling, mode, self.thermal.pack_temp
            );
            self.cooling = mode;
        }

        self.insulation_resistance = sample_insulation_resistance(rng);
        let stress = stress_index(self.pack_current, self.thermal.pack_temp);

        self.kinematics.advance(cmd.accel, dt);

        let record = StepRecord {
            step: self.steps,
            pack_voltage: self.pack_voltage,
            pack_current: self.pack_current,
            instant_power: power_kw,
            soc: self.pack_soc,
            cell_max: sample.cell_max(),
            cell_min: sample.cell_min(),
            cell_imbalance: sample.imbalance(),
            internal_resistance: internal_resistance_estimate(self.pack_soc),
            pack_temp: self.thermal.pack_temp,
            inverter_temp: self.thermal.inverter_temp,
            speed_kmh: self.kinematics.speed_kmh(),
            stress_index: stress,
        };
        self.steps += 1;
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn vehicle(seed: u64) -> (ElectricVehicle, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let ev = ElectricVehicle::new(VehicleParams::default(), &mut rng);
        (ev, rng)
    }

    #[test]
    fn first_step_from_rest() {
        let (mut ev, mut rng) = vehicle(1);
        let r = ev.update(30.0, 1.0, &mut rng);

        assert_eq!(r.step, 0);
        assert_abs_diff_eq!(ev.throttle_pos, 30.0 / 3.6 * 10.0, epsilon = 1e-9);
        // Standing start: no power drawn yet despite the 3600 N inertial demand.
        assert_eq!(r.pack_current, 0.0);
        assert_eq!(r.instant_power, 0.0);
        assert_abs_diff_eq!(r.pack_voltage, 96.0 * 4.08, epsilon = 1e-9);
        assert_abs_diff_eq!(r.soc, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.speed_kmh, 7.2, epsilon = 1e-12);
        assert_abs_diff_eq!(ev.odometer_km(), 0.002, epsilon = 1e-15);
        assert_eq!(r.stress_index, 0.0);
        assert_eq!(ev.coolant_flow(), 0.0);
    }

    #[test]
    fn second_step_draws_power_from_previous_velocity() {
        let (mut ev, mut rng) = vehicle(2);
        ev.update(30.0, 1.0, &mut rng);
        let r = ev.update(30.0, 1.0, &mut rng);

        // v = 2.0 m/s going into step 1
        let force = 0.5 * 1.225 * 0.24 * 2.3 * 4.0 + 0.015 * 1800.0 * 9.81 + 1800.0 * 2.0;
        assert_abs_diff_eq!(r.pack_current, force * 2.0 / 350.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.instant_power, r.pack_voltage * r.pack_current / 1000.0, epsilon = 1e-12);
        assert!(ev.energy.consumed_kwh > 0.0);
        assert_eq!(ev.energy.regen_kwh, 0.0);
    }

    #[test]
    fn pack_voltage_matches_cells_every_step() {
        let (mut ev, mut rng) = vehicle(3);
        for t in 0..120 {
            let target = if t < 60 { 100.0 } else { 0.0 };
            let r = ev.update(target, 1.0, &mut rng);
            let sum: f64 = ev.pack().cells().iter().map(|c| c.voltage).sum();
            assert_abs_diff_eq!(r.pack_voltage, sum, epsilon = 1e-9);
            assert_eq!(ev.pack().cell_count(), 96);
        }
    }

    #[test]
    fn velocity_never_negative() {
        let (mut ev, mut rng) = vehicle(4);
        let targets = [120.0, 120.0, 120.0, -500.0, -1e6, 0.0, -30.0, 50.0, -1e9, -1e9, -1e9];
        for &t in targets.iter().cycle().take(200) {
            ev.update(t, 1.0, &mut rng);
            assert!(ev.velocity_ms() >= 0.0);
        }
    }

    #[test]
    fn braking_only_feeds_regen() {
        let (mut ev, mut rng) = vehicle(5);
        for _ in 0..10 {
            ev.update(100.0, 1.0, &mut rng);
        }
        let consumed = ev.energy.consumed_kwh;
        let mut regen = ev.energy.regen_kwh;
        while ev.velocity_ms() > 0.0 {
            let r = ev.update(0.0, 1.0, &mut rng);
            assert!(r.pack_current <= 0.0);
            assert!(ev.energy.regen_kwh >= regen);
            regen = ev.energy.regen_kwh;
        }
        assert_eq!(ev.energy.consumed_kwh, consumed);
        assert!(regen > 0.0);
    }

    #[test]
    fn hot_pack_turns_on_coolant() {
        let (mut ev, mut rng) = vehicle(6);
        ev.thermal.pack_temp = 35.000001;
        ev.update(0.0, 1.0, &mut rng);
        assert_eq!(ev.coolant_flow(), 10.0);

        let (mut ev, mut rng) = vehicle(6);
        ev.thermal.pack_temp = 34.999999;
        ev.update(0.0, 1.0, &mut rng);
        assert_eq!(ev.coolant_flow(), 0.0);
    }

    #[test]
    fn insulation_is_resampled() {
        let (mut ev, mut rng) = vehicle(7);
        let readings: Vec<f64> = (0..20)
            .map(|_| {
                ev.update(50.0, 1.0, &mut rng);
                ev.insulation_resistance
            })
            .collect();
        assert!(readings.iter().all(|r| (49.9..=50.1).contains(r)));
        assert!(readings.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn reported_resistance_tracks_soc() {
        let (mut ev, mut rng) = vehicle(8);
        let r = ev.update(60.0, 1.0, &mut rng);
        assert_abs_diff_eq!(
            r.internal_resistance,
            0.05 + 0.001 * (100.0 - r.soc) / 100.0,
            epsilon = 1e-15
        );
    }
}
