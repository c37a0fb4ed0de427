use rand::Rng;

// ---------------------------------------------------------------------------
// Derived health indicators reported alongside the electrical state
// ---------------------------------------------------------------------------

pub const STRESS_MAX: f64 = 10.0;

/// Current at which the C-rate stress term reaches 1.0, A.
const STRESS_REFERENCE_CURRENT: f64 = 200.0;
/// Temperature where thermal stress starts, °C.
const STRESS_REFERENCE_TEMP: f64 = 25.0;
/// Temperature rise over the reference that counts as 1.0 thermal stress, K.
const STRESS_TEMP_SPAN: f64 = 20.0;

/// Combined C-rate and temperature stress on a 0..=10 scale.
///
/// Charging and discharging stress the pack equally; cold packs add nothing.
pub fn stress_index(pack_current: f64, pack_temp: f64) -> f64 {
    let c_rate_stress = pack_current.abs() / STRESS_REFERENCE_CURRENT;
    let temp_stress = ((pack_temp - STRESS_REFERENCE_TEMP) / STRESS_TEMP_SPAN).max(0.0);
    (c_rate_stress * 5.0 + temp_stress * 5.0).clamp(0.0, STRESS_MAX)
}

/// Empirical pack resistance estimate reported to the dashboard, Ω.
/// Not derived from the simulated cells.
pub fn internal_resistance_estimate(soc_percent: f64) -> f64 {
    0.05 + 0.001 * (100.0 - soc_percent) / 100.0
}

pub const INSULATION_NOMINAL: f64 = 50.0; // MΩ
const INSULATION_NOISE: f64 = 0.1;

/// Insulation monitor reading: nominal plus measurement noise.
pub fn sample_insulation_resistance<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    INSULATION_NOMINAL + rng.gen_range(-INSULATION_NOISE..=INSULATION_NOISE)
}
