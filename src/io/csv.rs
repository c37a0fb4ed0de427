use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::sim::record::StepRecord;

/// Write the trace as CSV, one row per step.
///
/// Columns: Time, Pack_Voltage, Pack_Current, Instant_Power, SoC, Cell_Max,
///          Cell_Min, Cell_Imbalance, Internal_Resistance, Pack_Temp,
///          Inverter_Temp, Speed_kmh, Stress_Index
pub fn write_trace<W: Write>(writer: W, trace: &[StepRecord]) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    for record in trace {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the trace to a CSV file at the given path.
pub fn write_trace_file<P: AsRef<Path>>(path: P, trace: &[StepRecord]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_trace(file, trace)
}
