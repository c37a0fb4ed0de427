// ---------------------------------------------------------------------------
// Driving schedules: step index → target speed
// ---------------------------------------------------------------------------

/// Source of target speeds for the simulation loop.
///
/// Implement this to drive the vehicle with a custom profile. Plain
/// closures `Fn(usize) -> f64` work too.
pub trait SpeedSchedule {
    /// Target speed in km/h for the given step.
    fn target_speed_kmh(&self, step: usize) -> f64;

    /// Natural length of the profile, if it has one.
    fn len(&self) -> Option<usize> {
        None
    }

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F: Fn(usize) -> f64> SpeedSchedule for F {
    fn target_speed_kmh(&self, step: usize) -> f64 {
        self(step)
    }
}

/// The fixed 600 s urban/highway cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCycle;

impl StandardCycle {
    pub const STEPS: usize = 600;

    /// `(first step past the segment, target km/h)`, in order.
    const SEGMENTS: [(usize, f64); 6] = [
        (50, 30.0),
        (150, 60.0),
        (200, 0.0),
        (400, 100.0),
        (450, 0.0),
        (600, 40.0),
    ];
}

impl SpeedSchedule for StandardCycle {
    /// Steps past the end of the cycle keep the last segment's speed.
    fn target_speed_kmh(&self, step: usize) -> f64 {
        Self::SEGMENTS
            .iter()
            .find(|&&(end, _)| step < end)
            .map_or(Self::SEGMENTS[Self::SEGMENTS.len() - 1].1, |&(_, speed)| speed)
    }

    fn len(&self) -> Option<usize> {
        Some(Self::STEPS)
    }

    fn name(&self) -> &str {
        "Standard cycle"
    }
}

/// Explicit per-step target speeds. Holds the last entry once exhausted;
/// an empty table commands standstill.
#[derive(Debug, Clone, Default)]
pub struct SpeedTable {
    pub name: String,
    pub speeds_kmh: Vec<f64>,
}

impl SpeedTable {
    pub fn new(name: impl Into<String>, speeds_kmh: Vec<f64>) -> Self {
        Self { name: name.into(), speeds_kmh }
    }

    /// Sample any schedule into a table.
    pub fn from_schedule<S: SpeedSchedule + ?Sized>(schedule: &S, steps: usize) -> Self {
        Self {
            name: schedule.name().to_string(),
            speeds_kmh: (0..steps).map(|t| schedule.target_speed_kmh(t)).collect(),
        }
    }
}

impl SpeedSchedule for SpeedTable {
    fn target_speed_kmh(&self, step: usize) -> f64 {
        self.speeds_kmh
            .get(step)
            .or_else(|| self.speeds_kmh.last())
            .copied()
            .unwrap_or(0.0)
    }

    fn len(&self) -> Option<usize> {
        Some(self.speeds_kmh.len())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_cycle_segment_boundaries() {
        let c = StandardCycle;
        let expect = [
            (0, 30.0),
            (49, 30.0),
            (50, 60.0),
            (149, 60.0),
            (150, 0.0),
            (199, 0.0),
            (200, 100.0),
            (399, 100.0),
            (400, 0.0),
            (449, 0.0),
            (450, 40.0),
            (599, 40.0),
        ];
        for (step, speed) in expect {
            assert_eq!(c.target_speed_kmh(step), speed, "step {}", step);
        }
        assert_eq!(c.len(), Some(600));
    }

    #[test]
    fn standard_cycle_holds_after_end() {
        assert_eq!(StandardCycle.target_speed_kmh(600), 40.0);
        assert_eq!(StandardCycle.target_speed_kmh(10_000), 40.0);
    }

    #[test]
    fn table_holds_last_value() {
        let t = SpeedTable::new("ramp", vec![10.0, 20.0, 30.0]);
        assert_eq!(t.target_speed_kmh(1), 20.0);
        assert_eq!(t.target_speed_kmh(7), 30.0);
        assert_eq!(SpeedTable::default().target_speed_kmh(0), 0.0);
    }

    #[test]
    fn closure_is_a_schedule() {
        let s = |t: usize| if t % 2 == 0 { 50.0 } else { 0.0 };
        assert_eq!(s.target_speed_kmh(4), 50.0);
        assert_eq!(s.target_speed_kmh(5), 0.0);
        assert_eq!(SpeedSchedule::name(&s), "custom");
    }

    #[test]
    fn sampled_table_matches_source() {
        let t = SpeedTable::from_schedule(&StandardCycle, 600);
        assert_eq!(t.speeds_kmh.len(), 600);
        assert!((0..600).all(|i| t.target_speed_kmh(i) == StandardCycle.target_speed_kmh(i)));
    }
}
