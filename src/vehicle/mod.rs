pub mod ev;
pub mod params;

pub use ev::ElectricVehicle;
pub use params::VehicleParams;
