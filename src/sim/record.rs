use serde::Serialize;

// ---------------------------------------------------------------------------
// Per-step output record
// ---------------------------------------------------------------------------

/// One simulated step as seen by downstream collectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepRecord {
    #[serde(rename = "Time")]
    pub step: usize,
    #[serde(rename = "Pack_Voltage")]
    pub pack_voltage: f64, // V
    #[serde(rename = "Pack_Current")]
    pub pack_current: f64, // A, positive = discharge
    #[serde(rename = "Instant_Power")]
    pub instant_power: f64, // kW
    #[serde(rename = "SoC")]
    pub soc: f64, // %
    #[serde(rename = "Cell_Max")]
    pub cell_max: f64, // V
    #[serde(rename = "Cell_Min")]
    pub cell_min: f64, // V
    #[serde(rename = "Cell_Imbalance")]
    pub cell_imbalance: f64, // V
    #[serde(rename = "Internal_Resistance")]
    pub internal_resistance: f64, // Ω, empirical estimate
    #[serde(rename = "Pack_Temp")]
    pub pack_temp: f64, // °C
    #[serde(rename = "Inverter_Temp")]
    pub inverter_temp: f64, // °C
    #[serde(rename = "Speed_kmh")]
    pub speed_kmh: f64,
    #[serde(rename = "Stress_Index")]
    pub stress_index: f64, // 0..=10
}

/// Named numeric fields of a [`StepRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    PackVoltage,
    PackCurrent,
    InstantPower,
    Soc,
    CellMax,
    CellMin,
    CellImbalance,
    InternalResistance,
    PackTemp,
    InverterTemp,
    SpeedKmh,
    StressIndex,
}

impl Metric {
    pub const ALL: [Metric; 12] = [
        Metric::PackVoltage,
        Metric::PackCurrent,
        Metric::InstantPower,
        Metric::Soc,
        Metric::CellMax,
        Metric::CellMin,
        Metric::CellImbalance,
        Metric::InternalResistance,
        Metric::PackTemp,
        Metric::InverterTemp,
        Metric::SpeedKmh,
        Metric::StressIndex,
    ];

    /// Column name, matching the serialized CSV header.
    pub fn name(self) -> &'static str {
        match self {
            Metric::PackVoltage => "Pack_Voltage",
            Metric::PackCurrent => "Pack_Current",
            Metric::InstantPower => "Instant_Power",
            Metric::Soc => "SoC",
            Metric::CellMax => "Cell_Max",
            Metric::CellMin => "Cell_Min",
            Metric::CellImbalance => "Cell_Imbalance",
            Metric::InternalResistance => "Internal_Resistance",
            Metric::PackTemp => "Pack_Temp",
            Metric::InverterTemp => "Inverter_Temp",
            Metric::SpeedKmh => "Speed_kmh",
            Metric::StressIndex => "Stress_Index",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::PackVoltage | Metric::CellMax | Metric::CellMin | Metric::CellImbalance => "V",
            Metric::PackCurrent => "A",
            Metric::InstantPower => "kW",
            Metric::Soc => "%",
            Metric::InternalResistance => "Ω",
            Metric::PackTemp | Metric::InverterTemp => "°C",
            Metric::SpeedKmh => "km/h",
            Metric::StressIndex => "",
        }
    }
}

impl StepRecord {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PackVoltage => self.pack_voltage,
            Metric::PackCurrent => self.pack_current,
            Metric::InstantPower => self.instant_power,
            Metric::Soc => self.soc,
            Metric::CellMax => self.cell_max,
            Metric::CellMin => self.cell_min,
            Metric::CellImbalance => self.cell_imbalance,
            Metric::InternalResistance => self.internal_resistance,
            Metric::PackTemp => self.pack_temp,
            Metric::InverterTemp => self.inverter_temp,
            Metric::SpeedKmh => self.speed_kmh,
            Metric::StressIndex => self.stress_index,
        }
    }

    /// Flat name → value view, in column order.
    pub fn fields(&self) -> [(&'static str, f64); 12] {
        Metric::ALL.map(|m| (m.name(), self.get(m)))
    }
}
