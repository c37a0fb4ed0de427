use ev_powertrain_sim::io::{csv, json, TraceSummary};
use ev_powertrain_sim::sim::{self, SimConfig};

fn main() -> ev_powertrain_sim::Result<()> {
    let config = SimConfig { seed: 7, ..SimConfig::default() };

    println!("Simulating {} steps (seed {}) ...", config.steps, config.seed);
    let (trace, vehicle) = sim::simulate(&config);

    let summary = TraceSummary::from_trace(&trace, &vehicle)?;
    println!("Distance: {:.2} km", summary.odometer_km);
    println!("Final SoC: {:.2} %", summary.final_soc);
    println!(
        "Energy: {:.3} kWh used, {:.3} kWh regenerated",
        summary.energy_consumed_kwh, summary.regen_energy_kwh
    );

    csv::write_trace_file("ev_trace.csv", &trace)?;
    json::write_summary_file("ev_summary.json", &vehicle.params, &summary)?;

    println!("Exported: ev_trace.csv, ev_summary.json");
    Ok(())
}
