use serde::{
    Serialize,
    Deserialize
};

/// One observation of a signal: `value` measured at `time`.
///
/// Equality is exact on both fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    time: f64,
    value: f64
}

impl Sample {
    pub fn new(time: f64, value: f64) -> Sample {
        Sample { time, value }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl From<(f64, f64)> for Sample {
    fn from((time, value): (f64, f64)) -> Sample {
        Sample::new(time, value)
    }
}
