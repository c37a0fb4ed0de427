pub mod battery;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod physics;
pub mod sim;
pub mod vehicle;

pub use error::{Result, SimError};

// Flat re-exports of the types most callers need
pub mod types {
    pub use crate::battery::{Cell, EnergyMeter, Pack, PackSample};
    pub use crate::sim::record::{Metric, StepRecord};
    pub use crate::sim::runner::SimConfig;
    pub use crate::vehicle::{ElectricVehicle, VehicleParams};
}
