pub mod road_load;
pub mod thermal;

pub use road_load::{RoadLoad, road_load};
pub use thermal::{CoolingMode, ThermalState};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const AIR_DENSITY: f64 = 1.225; // kg/m^3, sea level
pub const GRAVITY: f64 = 9.81; // m/s^2
pub const ROLLING_COEFF: f64 = 0.015; // tyre rolling resistance coefficient

/// km/h per m/s.
pub const KMH_PER_MS: f64 = 3.6;
