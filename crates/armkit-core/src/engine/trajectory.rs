use super::error::EngineError;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::io;
use std::path::Path;
use tracing::debug;

pub const TIME_COLUMN: &str = "time";

/// Species amounts sampled over time, one named column per species.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    columns: IndexMap<String, Vec<f64>>,
}

impl Trajectory {
    /// Every column must have one value per time point.
    pub fn new(times: Vec<f64>, columns: IndexMap<String, Vec<f64>>) -> Result<Self, EngineError> {
        for (name, values) in &columns {
            if values.len() != times.len() {
                return Err(EngineError::TrajectoryShape {
                    column: name.clone(),
                    expected: times.len(),
                    found: values.len(),
                });
            }
        }
        Ok(Self { times, columns })
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of time points.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Keeps the columns whose name contains `pattern`, in their original order.
    pub fn filter_like(&self, pattern: &str) -> Trajectory {
        Trajectory {
            times: self.times.clone(),
            columns: self
                .columns
                .iter()
                .filter(|(name, _)| name.contains(pattern))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Writes a header row (`time` then species names) followed by one row per time point.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(std::iter::once(TIME_COLUMN).chain(self.column_names()))?;
        for (i, t) in self.times.iter().enumerate() {
            let row: Vec<String> = std::iter::once(*t)
                .chain(self.columns.values().map(|c| c[i]))
                .map(|v| v.to_string())
                .collect();
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn write_csv_path(&self, path: &Path) -> Result<(), EngineError> {
        let to_error = |source: csv::Error| EngineError::Csv {
            path: path.display().to_string(),
            source,
        };
        let file = std::fs::File::create(path).map_err(|e| to_error(e.into()))?;
        self.write_csv(file).map_err(to_error)?;
        debug!("Wrote {} time points to '{}'.", self.len(), path.display());
        Ok(())
    }

    /// Reads a trajectory whose first column holds the time points.
    ///
    /// Header names must be unique.
    pub fn read_csv<R: io::Read>(reader: R) -> Result<Self, EngineError> {
        Self::read_labelled(reader, "<reader>")
    }

    pub fn read_csv_path(path: &Path) -> Result<Self, EngineError> {
        let label = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|e| EngineError::Csv {
            path: label.clone(),
            source: e.into(),
        })?;
        let trajectory = Self::read_labelled(file, &label)?;
        debug!(
            "Read {} columns over {} time points from '{}'.",
            trajectory.column_count(),
            trajectory.len(),
            label
        );
        Ok(trajectory)
    }

    fn read_labelled<R: io::Read>(reader: R, label: &str) -> Result<Self, EngineError> {
        let to_error = |source: csv::Error| EngineError::Csv {
            path: label.to_string(),
            source,
        };
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers().map_err(to_error)?.clone();

        let mut seen = HashSet::new();
        for name in headers.iter() {
            if !seen.insert(name) {
                return Err(EngineError::DuplicateColumn {
                    column: name.to_string(),
                });
            }
        }
        let names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

        let mut times = Vec::new();
        let mut values: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
        for record in rdr.records() {
            let row: Vec<f64> = record
                .and_then(|r| r.deserialize(None))
                .map_err(to_error)?;
            let mut row = row.into_iter();
            if let Some(t) = row.next() {
                times.push(t);
            }
            for (column, v) in values.iter_mut().zip(row) {
                column.push(v);
            }
        }

        Self::new(times, names.into_iter().zip(values).collect())
    }
}
