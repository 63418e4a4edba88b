//! Best known solution costs.
//!
//! TSPLIB ships a `solutions` file listing one `name : cost` pair per line.

use crate::error::SolutionsError;
use crate::record::UNKNOWN_BEST_COST;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// File name of the best known costs inside the source directory.
pub const SOLUTIONS_FILE: &str = "solutions";

/// Instance name -> best known cost.
#[derive(Debug, Clone, Default)]
pub struct BestKnownCosts {
    costs: HashMap<String, f64>,
}

impl BestKnownCosts {
    /// Load `<dir>/solutions`.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, SolutionsError> {
        let path = dir.as_ref().join(SOLUTIONS_FILE);
        if !path.is_file() {
            return Err(SolutionsError::Missing(path));
        }
        Self::from_reader(std::fs::File::open(&path)?)
    }

    /// Parse colon separated `name : cost` records. A repeated name keeps its last cost.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SolutionsError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b':')
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut costs = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let name = record.get(0).unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            let value = record.get(1).unwrap_or_default();
            let cost: f64 = value.parse().map_err(|_| SolutionsError::InvalidCost {
                name: name.to_string(),
                value: value.to_string(),
            })?;
            costs.insert(name.to_string(), cost);
        }

        Ok(BestKnownCosts { costs })
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.costs.get(name.trim()).copied()
    }

    /// Best known cost, or [`UNKNOWN_BEST_COST`] for unlisted instances.
    pub fn best_known_cost(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(UNKNOWN_BEST_COST)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
