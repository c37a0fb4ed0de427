use rand::Rng;

// ---------------------------------------------------------------------------
// Single series cell: coulomb counting + linear OCV + ohmic drop
// ---------------------------------------------------------------------------

/// OCV at zero state of charge, V.
pub const OCV_EMPTY: f64 = 3.0;
/// OCV rise from empty to full, V.
pub const OCV_SPAN: f64 = 1.2;

/// Cells start at this fraction of their own capacity.
pub const INITIAL_FILL: f64 = 0.9;

const CAPACITY_SPREAD: f64 = 0.01;
const RESISTANCE_SPREAD: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub max_capacity: f64,        // Ah
    pub current_capacity: f64,    // Ah, may go negative
    pub internal_resistance: f64, // mΩ
    pub voltage: f64,             // V, terminal voltage after the last update
}

impl Cell {
    /// Draw a cell with manufacturing spread around the nominal values:
    /// capacity within ±1 %, resistance within ±5 %. Capacity is drawn
    /// first, then resistance.
    pub fn sample<R: Rng + ?Sized>(
        nominal_capacity_ah: f64,
        nominal_resistance_mohm: f64,
        nominal_voltage: f64,
        rng: &mut R,
    ) -> Self {
        let max_capacity =
            nominal_capacity_ah * rng.gen_range(1.0 - CAPACITY_SPREAD..=1.0 + CAPACITY_SPREAD);
        let internal_resistance = nominal_resistance_mohm
            * rng.gen_range(1.0 - RESISTANCE_SPREAD..=1.0 + RESISTANCE_SPREAD);
        Self::with_parameters(max_capacity, internal_resistance, nominal_voltage)
    }

    /// Cell with exact parameters, filled to 90 %.
    pub fn with_parameters(max_capacity: f64, internal_resistance: f64, voltage: f64) -> Self {
        Self {
            max_capacity,
            current_capacity: max_capacity * INITIAL_FILL,
            internal_resistance,
            voltage,
        }
    }

    /// State of charge as a fraction. Unclamped: negative once the cell is
    /// over-discharged, above 1.0 if over-charged.
    pub fn soc(&self) -> f64 {
        self.current_capacity / self.max_capacity
    }

    pub fn open_circuit_voltage(&self) -> f64 {
        OCV_EMPTY + OCV_SPAN * self.soc()
    }

    /// Draw `current_amps` (positive = discharge, negative = charge) for
    /// `dt` seconds and return the new terminal voltage.
    ///
    /// Nothing is guarded: capacity, SoC and voltage are free to go negative.
    pub fn update(&mut self, current_amps: f64, dt: f64) -> f64 {
        let removed_ah = current_amps * dt / 3600.0;
        self.current_capacity -= removed_ah;

        let ocv = self.open_circuit_voltage();
        let v_drop = current_amps * (self.internal_resistance / 1000.0);

        self.voltage = ocv - v_drop;
        self.voltage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn reference_cell() -> Cell {
        Cell::with_parameters(50.0, 2.0, 3.7)
    }

    #[test]
    fn starts_at_ninety_percent() {
        let c = reference_cell();
        assert_abs_diff_eq!(c.current_capacity, 45.0);
        assert_abs_diff_eq!(c.soc(), 0.9, epsilon = 1e-12);
        assert_abs_diff_eq!(c.open_circuit_voltage(), 4.08, epsilon = 1e-12);
    }

    #[test]
    fn discharge_depletes_exactly() {
        for &(i, dt) in &[(100.0, 1.0), (3.7, 0.25), (250.0, 10.0), (0.0, 1.0)] {
            let mut c = reference_cell();
            let before = c.current_capacity;
            c.update(i, dt);
            assert_abs_diff_eq!(c.current_capacity - before, -i * dt / 3600.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn regen_restores_capacity() {
        let mut c = reference_cell();
        let before = c.current_capacity;
        c.update(-72.0, 1.0);
        assert_abs_diff_eq!(c.current_capacity - before, 0.02, epsilon = 1e-12);
        // Charging raises terminal voltage above OCV.
        assert!(c.voltage > c.open_circuit_voltage());
    }

    #[test]
    fn terminal_voltage_includes_ohmic_drop() {
        let mut c = reference_cell();
        let v = c.update(100.0, 1.0);
        let soc = (45.0 - 100.0 / 3600.0) / 50.0;
        assert_abs_diff_eq!(v, 3.0 + 1.2 * soc - 100.0 * 0.002, epsilon = 1e-12);
        assert_eq!(v, c.voltage);
    }

    #[test]
    fn over_discharge_is_not_clamped() {
        let mut c = reference_cell();
        // 50 Ah * 3600 s = 180_000 As; pull more than the remaining 45 Ah.
        c.update(200_000.0, 1.0);
        assert!(c.current_capacity < 0.0);
        assert!(c.soc() < 0.0);
        assert!(c.voltage < 0.0);
    }

    #[test]
    fn sampled_parameters_within_spread() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = Cell::sample(50.0, 2.0, 3.7, &mut rng);
            assert!((49.5..=50.5).contains(&c.max_capacity));
            assert!((1.9..=2.1).contains(&c.internal_resistance));
            assert_abs_diff_eq!(c.soc(), 0.9, epsilon = 1e-12);
        }
    }

    #[test]
    fn same_seed_same_cell() {
        let a = Cell::sample(50.0, 2.0, 3.7, &mut StdRng::seed_from_u64(3));
        let b = Cell::sample(50.0, 2.0, 3.7, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
