use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SimError};
use crate::sim::record::StepRecord;
use crate::vehicle::{ElectricVehicle, VehicleParams};

/// Summary statistics computed from a drive trace and the final vehicle.
#[derive(Debug, Clone, Serialize)]
pub struct TraceSummary {
    pub steps: usize,
    pub final_soc: f64,
    pub min_pack_voltage: f64,
    pub max_pack_voltage: f64,
    pub peak_discharge_current: f64,
    pub peak_regen_current: f64,
    pub peak_power_kw: f64,
    pub peak_pack_temp: f64,
    pub peak_inverter_temp: f64,
    pub peak_stress: f64,
    pub max_cell_imbalance: f64,
    pub max_speed_kmh: f64,
    pub odometer_km: f64,
    pub energy_consumed_kwh: f64,
    pub regen_energy_kwh: f64,
    /// Net pack energy per distance; `None` if the vehicle never moved.
    pub consumption_wh_per_km: Option<f64>,
}

fn peak<F: Fn(&StepRecord) -> f64>(trace: &[StepRecord], f: F) -> f64 {
    trace.iter().map(f).fold(f64::NEG_INFINITY, f64::max)
}

fn trough<F: Fn(&StepRecord) -> f64>(trace: &[StepRecord], f: F) -> f64 {
    trace.iter().map(f).fold(f64::INFINITY, f64::min)
}

impl TraceSummary {
    /// Compute summary from trace data. Fails on an empty trace.
    pub fn from_trace(trace: &[StepRecord], vehicle: &ElectricVehicle) -> Result<Self> {
        let last = trace.last().ok_or(SimError::EmptyTrace)?;

        let odometer_km = vehicle.odometer_km();
        let consumption_wh_per_km =
            (odometer_km > 0.0).then(|| vehicle.energy.net_kwh() * 1000.0 / odometer_km);

        Ok(TraceSummary {
            steps: trace.len(),
            final_soc: last.soc,
            min_pack_voltage: trough(trace, |r| r.pack_voltage),
            max_pack_voltage: peak(trace, |r| r.pack_voltage),
            peak_discharge_current: peak(trace, |r| r.pack_current).max(0.0),
            peak_regen_current: trough(trace, |r| r.pack_current).min(0.0),
            peak_power_kw: peak(trace, |r| r.instant_power),
            peak_pack_temp: peak(trace, |r| r.pack_temp),
            peak_inverter_temp: peak(trace, |r| r.inverter_temp),
            peak_stress: peak(trace, |r| r.stress_index),
            max_cell_imbalance: peak(trace, |r| r.cell_imbalance),
            max_speed_kmh: peak(trace, |r| r.speed_kmh),
            odometer_km,
            energy_consumed_kwh: vehicle.energy.consumed_kwh,
            regen_energy_kwh: vehicle.energy.regen_kwh,
            consumption_wh_per_km,
        })
    }
}

#[derive(Serialize)]
struct VehicleInfo<'a> {
    name: &'a str,
    mass_kg: f64,
    cells_in_series: usize,
    nominal_energy_kwh: f64,
}

#[derive(Serialize)]
struct SummaryDoc<'a> {
    vehicle: VehicleInfo<'a>,
    performance: &'a TraceSummary,
}

/// Write the run summary as pretty-printed JSON.
pub fn write_summary<W: Write>(
    writer: W,
    params: &VehicleParams,
    summary: &TraceSummary,
) -> Result<()> {
    let doc = SummaryDoc {
        vehicle: VehicleInfo {
            name: &params.name,
            mass_kg: params.mass,
            cells_in_series: params.cells_in_series,
            nominal_energy_kwh: params.nominal_energy_kwh(),
        },
        performance: summary,
    };
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

/// Write the run summary JSON to a file.
pub fn write_summary_file<P: AsRef<Path>>(
    path: P,
    params: &VehicleParams,
    summary: &TraceSummary,
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_summary(file, params, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{simulate, SimConfig};
    use approx::assert_abs_diff_eq;

    #[test]
    fn summary_matches_trace() {
        let (trace, vehicle) = simulate(&SimConfig::default());
        let s = TraceSummary::from_trace(&trace, &vehicle).unwrap();

        assert_eq!(s.steps, 600);
        assert_eq!(s.final_soc, trace[599].soc);
        assert!(s.min_pack_voltage <= s.max_pack_voltage);
        assert!(s.peak_discharge_current > 0.0);
        assert!(s.peak_regen_current < 0.0);
        assert!((0.0..=10.0).contains(&s.peak_stress));
        assert_abs_diff_eq!(s.odometer_km, vehicle.odometer_km());
        // Net figure: negative here, regen outweighs draw on this cycle.
        let wh_km = s.consumption_wh_per_km.unwrap();
        let net_wh = (s.energy_consumed_kwh - s.regen_energy_kwh) * 1000.0;
        assert_abs_diff_eq!(wh_km, net_wh / s.odometer_km, epsilon = 1e-9);
    }

    #[test]
    fn empty_trace_is_an_error() {
        let (_, vehicle) = simulate(&SimConfig { steps: 0, ..SimConfig::default() });
        assert!(matches!(
            TraceSummary::from_trace(&[], &vehicle),
            Err(SimError::EmptyTrace)
        ));
    }

    #[test]
    fn json_output_is_valid() {
        let (trace, vehicle) = simulate(&SimConfig { steps: 50, ..SimConfig::default() });
        let summary = TraceSummary::from_trace(&trace, &vehicle).unwrap();

        let mut buf = Vec::new();
        write_summary(&mut buf, &vehicle.params, &summary).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["vehicle"]["name"], "Compact EV");
        assert_eq!(value["vehicle"]["cells_in_series"], 96);
        assert_eq!(value["performance"]["steps"], 50);
        assert!(value["performance"]["odometer_km"].as_f64().unwrap() > 0.0);
    }
}
