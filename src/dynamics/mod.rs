pub mod longitudinal;

pub use longitudinal::{DriveCommand, Kinematics};
