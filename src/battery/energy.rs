/// Running totals of energy drawn from and returned to the pack.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyMeter {
    pub consumed_kwh: f64,
    pub regen_kwh: f64,
}

impl EnergyMeter {
    /// Book `power_kw` held for `dt` seconds. Positive power counts as
    /// consumption; zero or negative power is credited to regen, so both
    /// totals only ever grow.
    pub fn record(&mut self, power_kw: f64, dt: f64) {
        let energy_step = power_kw * dt / 3600.0;
        if power_kw > 0.0 {
            self.consumed_kwh += energy_step;
        } else {
            self.regen_kwh -= energy_step;
        }
    }

    pub fn net_kwh(&self) -> f64 {
        self.consumed_kwh - self.regen_kwh
    }
}
