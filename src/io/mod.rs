pub mod csv;
pub mod json;

pub use self::json::TraceSummary;
