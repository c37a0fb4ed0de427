use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use ev_powertrain_sim::io::TraceSummary;
use ev_powertrain_sim::sim::event::{self, EventDetector, RegenDetector, ThresholdDetector};
use ev_powertrain_sim::sim::{self as simulation, Metric, SimConfig, StepRecord};
use ev_powertrain_sim::{Result, SimError};

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>().map_err(|_| SimError::InvalidSeed(arg))?,
        None => rand::random(),
    };
    info!("using seed {} (pass it as the first argument to reproduce)", seed);

    let config = SimConfig { seed, ..SimConfig::default() };

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let (trace, vehicle) = simulation::simulate(&config);
    let summary = TraceSummary::from_trace(&trace, &vehicle)?;
    let params = &vehicle.params;

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  EV POWERTRAIN SIMULATION — {}", params.name);
    println!("====================================================================");
    println!();
    println!("  Vehicle Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>8.0} kg    Cd:           {:>8.2}",
        params.mass, params.drag_coeff
    );
    println!(
        "  Frontal area:  {:>8.2} m^2   Cells:        {:>5}s",
        params.frontal_area,
        vehicle.pack().cell_count()
    );
    println!(
        "  Cell:          {:>8.1} Ah    Pack energy:  {:>8.2} kWh",
        params.cell_capacity_ah,
        params.nominal_energy_kwh()
    );
    println!();

    println!("  Drive Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    let mut detectors: Vec<Box<dyn EventDetector>> = vec![
        Box::new(RegenDetector),
        Box::new(ThresholdDetector::new(Metric::StressIndex, 5.0, true)),
        Box::new(ThresholdDetector::new(Metric::PackTemp, 30.0, true)),
        Box::new(ThresholdDetector::new(Metric::Soc, 80.0, false)),
    ];
    let events = event::scan(&trace, &mut detectors);
    // Regen toggles every other step while cruising; only show the first few.
    for ev in events.iter().take(12) {
        println!(
            "  t={:>4}s   {:<28} v={:>6.1} km/h   I={:>7.1} A",
            ev.step,
            ev.kind.describe(),
            ev.record.speed_kmh,
            ev.record.pack_current
        );
    }
    if events.len() > 12 {
        println!("  ... {} more", events.len() - 12);
    }
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Distance:      {:>8.2} km    Max speed:    {:>8.1} km/h",
        summary.odometer_km, summary.max_speed_kmh
    );
    println!(
        "  Energy used:   {:>8.3} kWh   Regen:        {:>8.3} kWh",
        summary.energy_consumed_kwh, summary.regen_energy_kwh
    );
    match summary.consumption_wh_per_km {
        Some(wh) => println!("  Consumption:   {:>8.1} Wh/km", wh),
        None => println!("  Consumption:        n/a"),
    }
    println!(
        "  Final SoC:     {:>8.2} %     Peak power:   {:>8.1} kW",
        summary.final_soc, summary.peak_power_kw
    );
    println!(
        "  Peak current:  {:>8.1} A     Peak regen:   {:>8.1} A",
        summary.peak_discharge_current, summary.peak_regen_current
    );
    println!(
        "  Peak temp:     {:>8.2} °C    Inverter:     {:>8.2} °C",
        summary.peak_pack_temp, summary.peak_inverter_temp
    );
    println!(
        "  Peak stress:   {:>8.2}       Imbalance:    {:>8.1} mV",
        summary.peak_stress,
        summary.max_cell_imbalance * 1000.0
    );
    println!();

    // -----------------------------------------------------------------------
    // Trace table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trace");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>5}  {:>7}  {:>8}  {:>8}  {:>6}  {:>7}  {:>6}",
        "t (s)", "km/h", "V pack", "I (A)", "SoC %", "T (°C)", "stress"
    );
    println!("  {}", "─".repeat(60));

    let sample_interval = (trace.len() / 30).max(1);
    for (i, r) in trace.iter().enumerate() {
        if i % sample_interval == 0 || i == trace.len() - 1 {
            print_row(r);
        }
    }

    println!();
    println!("  Simulation: {} steps, dt={} s, seed={}", trace.len(), config.dt, seed);
    println!("====================================================================");
    println!();
    Ok(())
}

fn print_row(r: &StepRecord) {
    println!(
        "  {:>5}  {:>7.1}  {:>8.2}  {:>8.1}  {:>6.2}  {:>7.3}  {:>6.2}",
        r.step, r.speed_kmh, r.pack_voltage, r.pack_current, r.soc, r.pack_temp, r.stress_index
    );
}
