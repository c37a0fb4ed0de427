// ---------------------------------------------------------------------------
// Lumped pack thermal model with threshold cooling
// ---------------------------------------------------------------------------

/// Pack temperature above which the active cooling loop runs, °C.
pub const COOLING_THRESHOLD_C: f64 = 35.0;

const ACTIVE_COOLANT_FLOW: f64 = 10.0;
const ACTIVE_COOLING_W: f64 = 2000.0;
const PASSIVE_LOSS_W: f64 = 50.0;

/// Lumped pack resistance used for ohmic heating, Ω.
pub const PACK_HEAT_RESISTANCE: f64 = 0.05;
/// Lumped mass × specific heat of the pack, J/K.
pub const PACK_HEAT_CAPACITY: f64 = 450.0 * 795.0;
/// Inverter temperature moves this many times the pack delta.
pub const INVERTER_COUPLING: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoolingMode {
    Passive,
    Active,
}

impl CoolingMode {
    /// Threshold policy, evaluated fresh every step (no hysteresis).
    pub fn for_temperature(pack_temp: f64) -> Self {
        if pack_temp > COOLING_THRESHOLD_C {
            CoolingMode::Active
        } else {
            CoolingMode::Passive
        }
    }

    pub fn coolant_flow(self) -> f64 {
        match self {
            CoolingMode::Active => ACTIVE_COOLANT_FLOW,
            CoolingMode::Passive => 0.0,
        }
    }

    /// Heat removed per second, W.
    pub fn cooling_power(self) -> f64 {
        match self {
            CoolingMode::Active => ACTIVE_COOLING_W,
            CoolingMode::Passive => PASSIVE_LOSS_W,
        }
    }
}

pub fn ohmic_heat(pack_current: f64) -> f64 {
    pack_current * pack_current * PACK_HEAT_RESISTANCE
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalState {
    pub pack_temp: f64,     // °C
    pub inverter_temp: f64, // °C
    pub coolant_flow: f64,
}

impl ThermalState {
    pub fn new(pack_temp: f64, inverter_temp: f64) -> Self {
        Self { pack_temp, inverter_temp, coolant_flow: 0.0 }
    }

    pub fn cooling_mode(&self) -> CoolingMode {
        CoolingMode::for_temperature(self.pack_temp)
    }

    /// Advance one step. The cooling decision uses the temperature at the
    /// start of the step. Temperatures are unbounded in both directions.
    pub fn step(&mut self, pack_current: f64, dt: f64) -> CoolingMode {
        let heat = ohmic_heat(pack_current);
        let mode = self.cooling_mode();
        self.coolant_flow = mode.coolant_flow();

        let delta = (heat - mode.cooling_power()) * dt / PACK_HEAT_CAPACITY;
        self.pack_temp += delta;
        self.inverter_temp += delta * INVERTER_COUPLING;
        mode
    }
}

impl Default for ThermalState {
    fn default() -> Self {
        Self::new(25.0, 30.0)
    }
}
