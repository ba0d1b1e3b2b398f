use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::dataset::dataset::Dataset;
use crate::dataset::dataseterror::DatasetError;
use crate::distance::distancekind::DistanceKind;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error)
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    distance: DistanceKind
}

/// Which distance scores a simulation against the observed data.
///
/// ```json
/// { "distance": "area" }
/// ```
///
/// A missing `distance` selects `L2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Configuration {
    distance_kind: DistanceKind
}

impl Configuration {
    pub fn new(distance_kind: DistanceKind) -> Configuration {
        Configuration { distance_kind }
    }

    pub fn distance_kind(&self) -> DistanceKind {
        self.distance_kind
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let distance = json_prop.distance;
        debug!(%distance, "loaded distance configuration");
        Ok(Configuration::new(distance))
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        Self::from_json_reader(json.as_bytes())
    }

    /// Scores `simulated` against `observed` with the configured distance.
    pub fn distance(&self, observed: &Dataset, simulated: &Dataset) -> Result<f64, DatasetError> {
        Dataset::distance(observed, simulated, self.distance_kind)
    }
}
