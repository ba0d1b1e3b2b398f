use std::ops::Index;
use std::slice::Iter;

use crate::timeseries::sample::Sample;
use crate::timeseries::sampleserieserror::SampleSeriesError;

/// Time-ordered samples of one signal.
///
/// Times are strictly increasing. The series owns a sorted copy of the
/// samples it was built from and offers no way to change them afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    samples: Vec<Sample>
}

impl SampleSeries {
    /// Sorts a copy of `samples` by time.
    ///
    /// Fails with [`SampleSeriesError::DuplicateTime`] when two samples share
    /// exactly the same time.
    pub fn new(samples: &[Sample]) -> Result<SampleSeries, SampleSeriesError> {
        let mut sorted = samples.to_vec();
        sorted.sort_by(|lhs, rhs| lhs.time().total_cmp(&rhs.time()));

        // after sorting, equal times can only be neighbours
        if let Some(pair) = sorted
            .windows(2)
            .find(|pair| pair[0].time() == pair[1].time()) {
            return Err(SampleSeriesError::DuplicateTime(pair[0].time()));
        }

        Ok(SampleSeries { samples: sorted })
    }

    /// Pairs `times[i]` with `values[i]`.
    pub fn from_columns(times: &[f64], values: &[f64]) -> Result<SampleSeries, SampleSeriesError> {
        if times.len() != values.len() {
            return Err(SampleSeriesError::LengthMismatch {
                times: times.len(),
                values: values.len()
            });
        }
        let samples: Vec<Sample> = times
            .iter()
            .zip(values)
            .map(|(&time, &value)| Sample::new(time, value))
            .collect();
        Self::new(&samples)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn at(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value()).collect()
    }
}

impl Index<usize> for SampleSeries {
    type Output = Sample;

    fn index(&self, index: usize) -> &Sample {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a SampleSeries {
    type Item = &'a Sample;
    type IntoIter = Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
