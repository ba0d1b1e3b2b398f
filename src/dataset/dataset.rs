use std::collections::BTreeMap;
use std::fs::File;
use std::io::{
    BufRead,
    BufReader
};
use std::path::Path;

use tracing::debug;

use crate::dataset::dataseterror::DatasetError;
use crate::distance::distancekind::DistanceKind;
use crate::timeseries::sampleseries::SampleSeries;

pub const TIME_COLUMN: &str = "Time";

/// Named value columns sampled on one shared time column.
///
/// Text input is whitespace-delimited: a header line naming the columns,
/// one of which is `Time`, then one row of numbers per sampling time.
///
/// ```text
/// Time   Prey   Predator
/// 0      10     2
/// 0.5    12.5   2.25
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    times: Option<Vec<f64>>,
    columns: BTreeMap<String, Vec<f64>>
}

impl Dataset {
    pub fn new(times: Vec<f64>) -> Dataset {
        Dataset {
            times: Some(times),
            columns: BTreeMap::new()
        }
    }

    pub fn with_column(mut self, name: &str, values: Vec<f64>) -> Result<Dataset, DatasetError> {
        self.insert_column(name, values)?;
        Ok(self)
    }

    pub fn insert_column(&mut self, name: &str, values: Vec<f64>) -> Result<(), DatasetError> {
        if name == TIME_COLUMN || self.columns.contains_key(name) {
            return Err(DatasetError::DuplicateColumn(name.to_owned()));
        }
        let expected = self.times().len();
        if values.len() != expected {
            return Err(DatasetError::ColumnLength {
                name: name.to_owned(),
                expected,
                found: values.len()
            });
        }
        self.columns.insert(name.to_owned(), values);
        Ok(())
    }

    pub fn times(&self) -> &[f64] {
        self.times.as_deref().unwrap_or_default()
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(|values| values.as_slice())
    }

    /// Value column names in ascending order, `Time` excluded.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|name| name.as_str())
    }

    /// `(time, value)` samples of one column.
    pub fn series(&self, name: &str) -> Result<SampleSeries, DatasetError> {
        let values = self
            .column(name)
            .ok_or_else(|| DatasetError::ColumnNotFound(name.to_owned()))?;
        Ok(SampleSeries::from_columns(self.times(), values)?)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Dataset, DatasetError> {
        let mut lines = reader.lines().enumerate();

        let mut headers: Vec<String> = Vec::new();
        for (_, line) in lines.by_ref() {
            let line = line?;
            if !line.trim().is_empty() {
                headers = line.split_whitespace().map(|h| h.to_owned()).collect();
                break;
            }
        }
        let time_index = headers
            .iter()
            .position(|h| h == TIME_COLUMN)
            .ok_or(DatasetError::MissingTimeColumn(TIME_COLUMN))?;

        let mut values: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
        for (index, line) in lines {
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            if tokens.len() != headers.len() {
                return Err(DatasetError::RowLength {
                    line: index + 1,
                    expected: headers.len(),
                    found: tokens.len()
                });
            }
            for (column, token) in values.iter_mut().zip(tokens) {
                let value = token.parse::<f64>().map_err(|source| DatasetError::ParseValue {
                    line: index + 1,
                    token: token.to_owned(),
                    source
                })?;
                column.push(value);
            }
        }

        let times = std::mem::take(&mut values[time_index]);
        let mut dataset = Dataset::new(times);
        for (index, (name, column)) in headers.iter().zip(values).enumerate() {
            if index != time_index {
                dataset.insert_column(name, column)?;
            }
        }
        debug!(
            columns = dataset.columns.len(),
            rows = dataset.times().len(),
            "parsed dataset"
        );
        Ok(dataset)
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Dataset, DatasetError> {
        let file = File::open(file_path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads every file and merges them into one dataset.
    pub fn from_files<I, P>(file_paths: I) -> Result<Dataset, DatasetError>
        where I: IntoIterator<Item = P>, P: AsRef<Path> {
        let mut dataset = Dataset::default();
        for file_path in file_paths {
            dataset.merge(Self::from_file(file_path)?)?;
        }
        Ok(dataset)
    }

    /// Adds the columns of `other`.
    ///
    /// A dataset without a time column adopts the times of `other`;
    /// otherwise both time columns must be exactly equal. Column names must
    /// not collide, and every column must be as long as the resulting time
    /// column. Nothing is changed when an error is returned.
    pub fn merge(&mut self, other: Dataset) -> Result<(), DatasetError> {
        let Dataset { times, columns } = other;
        if let (Some(own), Some(incoming)) = (&self.times, &times) {
            if own != incoming {
                return Err(DatasetError::TimeMismatch);
            }
        }
        if let Some(name) = columns.keys().find(|name| self.columns.contains_key(*name)) {
            return Err(DatasetError::DuplicateColumn(name.to_string()));
        }

        // times in force after the merge
        let expected = self.times.as_ref().or(times.as_ref()).map_or(0, |t| t.len());
        if let Some((name, values)) = self
            .columns
            .iter()
            .chain(columns.iter())
            .find(|(_, values)| values.len() != expected) {
            return Err(DatasetError::ColumnLength {
                name: name.to_owned(),
                expected,
                found: values.len()
            });
        }

        if self.times.is_none() {
            self.times = times;
        }
        debug!(columns = columns.len(), "merging dataset columns");
        self.columns.extend(columns);
        Ok(())
    }

    /// Sum over columns of the `kind` distance between matching columns.
    ///
    /// Both datasets must name the same columns and share exactly the same
    /// times.
    pub fn distance(
        observed: &Dataset,
        simulated: &Dataset,
        kind: DistanceKind,
    ) -> Result<f64, DatasetError> {
        if !observed.column_names().eq(simulated.column_names()) {
            return Err(DatasetError::ColumnMismatch {
                observed: observed.column_names().map(|n| n.to_owned()).collect(),
                simulated: simulated.column_names().map(|n| n.to_owned()).collect()
            });
        }
        if observed.times() != simulated.times() {
            return Err(DatasetError::TimeMismatch);
        }

        let mut total = 0.0;
        for (name, obs) in &observed.columns {
            let sim = &simulated.columns[name];
            total += kind.distance(observed.times(), obs, sim)?;
        }
        debug!(kind = %kind, columns = observed.columns.len(), distance = total, "computed dataset distance");
        Ok(total)
    }
}
