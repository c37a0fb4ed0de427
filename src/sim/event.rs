use super::record::{Metric, StepRecord};

// ---------------------------------------------------------------------------
// Drive events
// ---------------------------------------------------------------------------

/// Kinds of events found in a trace.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    RegenStart,
    RegenEnd,
    Threshold { metric: Metric, level: f64, ascending: bool },
}

/// A discrete event at a given step.
#[derive(Debug, Clone)]
pub struct DriveEvent {
    pub step: usize,
    pub kind: EventKind,
    pub record: StepRecord,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive records and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &StepRecord, current: &StepRecord) -> Option<EventKind>;
}

/// Detects the pack current changing sign: braking energy flowing back in,
/// and the return to discharge.
#[derive(Debug, Default)]
pub struct RegenDetector;

impl EventDetector for RegenDetector {
    fn check(&mut self, prev: &StepRecord, current: &StepRecord) -> Option<EventKind> {
        if prev.pack_current >= 0.0 && current.pack_current < 0.0 {
            Some(EventKind::RegenStart)
        } else if prev.pack_current < 0.0 && current.pack_current >= 0.0 {
            Some(EventKind::RegenEnd)
        } else {
            None
        }
    }
}

/// Fires once when a metric crosses a level in the given direction.
#[derive(Debug)]
pub struct ThresholdDetector {
    pub metric: Metric,
    pub level: f64,
    pub ascending: bool,
    fired: bool,
}

impl ThresholdDetector {
    pub fn new(metric: Metric, level: f64, ascending: bool) -> Self {
        Self { metric, level, ascending, fired: false }
    }
}

impl EventDetector for ThresholdDetector {
    fn check(&mut self, prev: &StepRecord, current: &StepRecord) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let (a, b) = (prev.get(self.metric), current.get(self.metric));
        let crossed = if self.ascending {
            a < self.level && b >= self.level
        } else {
            a > self.level && b <= self.level
        };
        if crossed {
            self.fired = true;
            Some(EventKind::Threshold {
                metric: self.metric,
                level: self.level,
                ascending: self.ascending,
            })
        } else {
            None
        }
    }
}

impl EventKind {
    pub fn describe(&self) -> String {
        match self {
            EventKind::RegenStart => "regen start".into(),
            EventKind::RegenEnd => "regen end".into(),
            EventKind::Threshold { metric, level, ascending } => format!(
                "{} {} {}{}",
                metric.name(),
                if *ascending { "above" } else { "below" },
                level,
                metric.unit()
            ),
        }
    }
}

/// Run every detector over consecutive record pairs, in step order.
pub fn scan(trace: &[StepRecord], detectors: &mut [Box<dyn EventDetector>]) -> Vec<DriveEvent> {
    let mut events = Vec::new();
    for pair in trace.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(DriveEvent { step: pair[1].step, kind, record: pair[1] });
            }
        }
    }
    events
}
