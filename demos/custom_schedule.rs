use rand::{rngs::StdRng, SeedableRng};

use ev_powertrain_sim::sim::{self, SimConfig, SpeedTable};
use ev_powertrain_sim::vehicle::{ElectricVehicle, VehicleParams};

fn main() {
    // Stop-and-go: 20 s bursts to 50 km/h separated by 10 s stops, sampled
    // into a 300-step table so the run length follows the profile.
    let stop_and_go =
        SpeedTable::from_schedule(&|t: usize| if t % 30 < 20 { 50.0 } else { 0.0 }, 300);
    let config = SimConfig::for_schedule(&stop_and_go);
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut ev = ElectricVehicle::new(VehicleParams::default(), &mut rng);
    let trace = sim::simulate_with(&mut ev, &stop_and_go, &config, &mut rng);
    println!(
        "Stop-and-go: {:.2} km, {:.3} kWh used, {:.3} kWh regen, SoC {:.2} %",
        ev.odometer_km(),
        ev.energy.consumed_kwh,
        ev.energy.regen_kwh,
        trace.last().map_or(0.0, |r| r.soc)
    );

    // Highway ramp as an explicit table.
    let ramp = SpeedTable::new("ramp", (0..300).map(|t| (t as f64 * 0.5).min(130.0)).collect());
    let config = SimConfig::for_schedule(&ramp);
    let mut ev = ElectricVehicle::new(VehicleParams::default(), &mut rng);
    let trace = sim::simulate_with(&mut ev, &ramp, &config, &mut rng);
    let peak_stress = trace.iter().map(|r| r.stress_index).fold(0.0_f64, f64::max);
    println!(
        "Ramp: {:.2} km, peak stress {:.2}, pack {:.2} °C",
        ev.odometer_km(),
        peak_stress,
        ev.pack_temp()
    );
}
