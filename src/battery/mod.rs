pub mod cell;
pub mod diagnostics;
pub mod energy;
pub mod pack;

pub use cell::Cell;
pub use energy::EnergyMeter;
pub use pack::{Pack, PackSample};
