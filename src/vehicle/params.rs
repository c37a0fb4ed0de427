// ---------------------------------------------------------------------------
// Fixed vehicle and pack parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleParams {
    pub name: String,
    pub mass: f64,         // kg
    pub drag_coeff: f64,   // dimensionless
    pub frontal_area: f64, // m^2

    pub cells_in_series: usize,
    pub cell_capacity_ah: f64,      // nominal, before manufacturing spread
    pub cell_resistance_mohm: f64,  // nominal, before manufacturing spread
    pub cell_nominal_voltage: f64,  // V, reported before the first update

    /// Fixed divisor converting mechanical power to pack current, V.
    /// Deliberately not the live pack voltage.
    pub nominal_pack_voltage: f64,

    pub initial_pack_temp: f64,     // °C
    pub initial_inverter_temp: f64, // °C
}

impl VehicleParams {
    /// Nominal pack capacity, kWh.
    pub fn nominal_energy_kwh(&self) -> f64 {
        self.cells_in_series as f64 * self.cell_nominal_voltage * self.cell_capacity_ah / 1000.0
    }
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            name: "Compact EV".into(),
            mass: 1800.0,
            drag_coeff: 0.24,
            frontal_area: 2.3,
            cells_in_series: 96,
            cell_capacity_ah: 50.0,
            cell_resistance_mohm: 2.0,
            cell_nominal_voltage: 3.7,
            nominal_pack_voltage: 350.0,
            initial_pack_temp: 25.0,
            initial_inverter_temp: 30.0,
        }
    }
}
