use std::fmt;
use std::str::FromStr;

use serde::{
    Serialize,
    Deserialize
};

use crate::distance::areadistance::area_distance_between_columns;
use crate::distance::distanceerror::DistanceError;
use crate::distance::pointwisedistance::{
    geometric,
    l2,
    normalized_l2
};

/// `(times, observed, simulated) -> distance`
pub type DistanceFunction = fn(&[f64], &[f64], &[f64]) -> Result<f64, DistanceError>;

/// Distances that can score a simulated column against an observed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistanceKind {
    #[default]
    #[serde(rename = "L2")]
    L2,
    #[serde(rename = "normalizedL2")]
    NormalizedL2,
    #[serde(rename = "geometric")]
    Geometric,
    #[serde(rename = "area")]
    Area
}

impl DistanceKind {
    pub const ALL: [DistanceKind; 4] = [
        DistanceKind::L2,
        DistanceKind::NormalizedL2,
        DistanceKind::Geometric,
        DistanceKind::Area
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DistanceKind::L2 => "L2",
            DistanceKind::NormalizedL2 => "normalizedL2",
            DistanceKind::Geometric => "geometric",
            DistanceKind::Area => "area"
        }
    }

    pub fn function(&self) -> DistanceFunction {
        match self {
            DistanceKind::L2 => l2_at_times,
            DistanceKind::NormalizedL2 => normalized_l2_at_times,
            DistanceKind::Geometric => geometric_at_times,
            DistanceKind::Area => area_distance_between_columns
        }
    }

    pub fn distance(
        &self,
        times: &[f64],
        observed: &[f64],
        simulated: &[f64],
    ) -> Result<f64, DistanceError> {
        (self.function())(times, observed, simulated)
    }
}

fn l2_at_times(_times: &[f64], observed: &[f64], simulated: &[f64]) -> Result<f64, DistanceError> {
    l2(observed, simulated)
}

fn normalized_l2_at_times(_times: &[f64], observed: &[f64], simulated: &[f64]) -> Result<f64, DistanceError> {
    normalized_l2(observed, simulated)
}

fn geometric_at_times(_times: &[f64], observed: &[f64], simulated: &[f64]) -> Result<f64, DistanceError> {
    geometric(observed, simulated)
}

impl fmt::Display for DistanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DistanceKind {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistanceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DistanceError::UnknownDistanceKind(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for kind in DistanceKind::ALL {
            assert_eq!(kind.name().parse::<DistanceKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "dissim".parse::<DistanceKind>(),
            Err(DistanceError::UnknownDistanceKind("dissim".to_owned()))
        );
        assert!("l2".parse::<DistanceKind>().is_err());
    }

    #[test]
    fn test_serde_uses_names() {
        for kind in DistanceKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            assert_eq!(serde_json::from_str::<DistanceKind>(&json).unwrap(), kind);
        }
        assert!(serde_json::from_str::<DistanceKind>("\"dissim\"").is_err());
    }

    #[test]
    fn test_default_is_l2() {
        assert_eq!(DistanceKind::default(), DistanceKind::L2);
    }

    #[test]
    fn test_dispatch() {
        let times = [0.0, 1.0];
        let observed = [1.0, 5.0];
        let simulated = [5.0, 1.0];
        assert_eq!(DistanceKind::L2.distance(&times, &observed, &simulated), Ok(32.0));
        assert_eq!(DistanceKind::NormalizedL2.distance(&times, &observed, &simulated), Ok(16.0 + 16.0 / 5.0));
        assert_eq!(DistanceKind::Area.distance(&times, &observed, &simulated), Ok(2.0));
        assert!(DistanceKind::Geometric.distance(&times, &observed, &simulated).is_ok());
    }
}
