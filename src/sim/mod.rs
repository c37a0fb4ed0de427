pub mod event;
pub mod record;
pub mod runner;
pub mod schedule;

pub use record::{Metric, StepRecord};
pub use runner::{simulate, simulate_with, SimConfig};
pub use schedule::{SpeedSchedule, SpeedTable, StandardCycle};
