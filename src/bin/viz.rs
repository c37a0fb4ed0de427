use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use ev_powertrain_sim::io::TraceSummary;
use ev_powertrain_sim::sim::{self, Metric, SimConfig, SpeedTable, StandardCycle, StepRecord};

/// Dashboard layout, two panels per row: `(plot id, title, metrics)`.
const PANELS: [(&str, &str, &[Metric]); 6] = [
    ("speed", "Speed (km/h)", &[Metric::SpeedKmh]),
    (
        "electrical",
        "Pack voltage (V) / current (A) / power (kW)",
        &[Metric::PackVoltage, Metric::PackCurrent, Metric::InstantPower],
    ),
    ("soc", "State of charge (%)", &[Metric::Soc]),
    (
        "thermal",
        "Temperatures (°C) / stress",
        &[Metric::PackTemp, Metric::InverterTemp, Metric::StressIndex],
    ),
    ("cells", "Cell voltage max / min (V)", &[Metric::CellMax, Metric::CellMin]),
    (
        "health",
        "Cell imbalance (V) / resistance estimate (Ω)",
        &[Metric::CellImbalance, Metric::InternalResistance],
    ),
];

fn main() -> eframe::Result {
    let config = SimConfig::default();
    let (trace, vehicle) = sim::simulate(&config);
    let summary = TraceSummary::from_trace(&trace, &vehicle).ok();
    let target = SpeedTable::from_schedule(&StandardCycle, config.steps);

    let app = TraceViz {
        trace,
        target,
        summary,
        name: vehicle.params.name.clone(),
        seed: config.seed,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("EV Powertrain Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct TraceViz {
    trace: Vec<StepRecord>,
    target: SpeedTable,
    summary: Option<TraceSummary>,
    name: String,
    seed: u64,
}

impl TraceViz {
    fn series(&self, metric: Metric) -> PlotPoints<'static> {
        self.trace.iter().map(|r| [r.step as f64, r.get(metric)]).collect()
    }

    fn panel(&self, ui: &mut egui::Ui, id: &str, title: &str, metrics: &[Metric], w: f32, h: f32) {
        ui.vertical(|ui| {
            ui.label(title);
            Plot::new(id)
                .width(w)
                .height(h)
                .x_axis_label("Time (s)")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    if metrics.contains(&Metric::SpeedKmh) {
                        let target: PlotPoints<'static> = self
                            .target
                            .speeds_kmh
                            .iter()
                            .enumerate()
                            .map(|(t, &v)| [t as f64, v])
                            .collect();
                        plot_ui.line(Line::new("Target", target));
                    }
                    for &m in metrics {
                        plot_ui.line(Line::new(m.name(), self.series(m)));
                    }
                });
        });
    }
}

impl eframe::App for TraceViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Vehicle: {}  (seed {})", self.name, self.seed));
            if let Some(s) = &self.summary {
                ui.label(format!(
                    "Distance: {:.2} km  |  Used: {:.3} kWh  |  Regen: {:.3} kWh  |  Final SoC: {:.2} %  |  Peak stress: {:.2}",
                    s.odometer_km, s.energy_consumed_kwh, s.regen_energy_kwh, s.final_soc, s.peak_stress,
                ));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let rows = PANELS.len().div_ceil(2) as f32;
            let half_w = available.x / 2.0 - 8.0;
            let row_h = available.y / rows - 24.0;

            for row in PANELS.chunks(2) {
                ui.horizontal(|ui| {
                    for &(id, title, metrics) in row {
                        self.panel(ui, id, title, metrics, half_w, row_h);
                    }
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_metric_has_a_panel() {
        for m in Metric::ALL {
            assert!(
                PANELS.iter().any(|(_, _, metrics)| metrics.contains(&m)),
                "{} not plotted",
                m.name()
            );
        }
    }

    #[test]
    fn panel_ids_are_unique() {
        for (i, (id, _, _)) in PANELS.iter().enumerate() {
            assert!(PANELS[i + 1..].iter().all(|(other, _, _)| other != id));
        }
    }
}
