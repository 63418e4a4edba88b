//! Upper-triangular distances matrix.
//!
//! Row `k` holds the distances from the `k`-th node to every node with a greater
//! index, in ascending order. The diagonal is never stored and the last node,
//! which has no greater neighbor, has no row: an instance of dimension `d` yields
//! `d - 1` rows of lengths `d - 1, d - 2, ..., 1`.

use crate::error::ExtractError;
use crate::instance::ProblemInstance;
use crate::record::json_number;
use indicatif::ProgressBar;
use serde::ser::{Serialize, SerializeSeq, Serializer};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistanceTable {
    rows: Vec<Vec<f64>>,
}

impl DistanceTable {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        DistanceTable { rows }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}

struct Row<'a>(&'a [f64]);

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for &d in self.0 {
            seq.serialize_element(&json_number(d))?;
        }
        seq.end()
    }
}

impl Serialize for DistanceTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&Row(row))?;
        }
        seq.end()
    }
}

/// Collect the distances matrix of an instance.
pub fn extract<P: ProblemInstance + ?Sized>(problem: &P) -> Result<DistanceTable, ExtractError> {
    extract_with_progress(problem, &ProgressBar::hidden())
}

/// Same as [`extract`], advancing `progress` once per row.
pub fn extract_with_progress<P: ProblemInstance + ?Sized>(
    problem: &P,
    progress: &ProgressBar,
) -> Result<DistanceTable, ExtractError> {
    let dimension = problem.dimension();
    // Node indexes start at 0 for some instances and at 1 for others
    let origin = match problem.first_node() {
        None => return Ok(DistanceTable::default()),
        Some(first) if first <= 1 => first,
        Some(first) => return Err(ExtractError::UnsupportedOrigin(first)),
    };
    let end = origin + dimension;

    progress.set_length(dimension.saturating_sub(1) as u64);
    // Nothing is reserved from DIMENSION, rows only grow as costs resolve
    let mut rows = Vec::new();
    for i in origin..end.saturating_sub(1) {
        let mut row = Vec::new();
        for j in i + 1..end {
            let cost = problem
                .cost(i, j)
                .map_err(|source| ExtractError::Cost { i, j, source })?;
            row.push(cost);
        }
        rows.push(row);
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(DistanceTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::EdgeWeightType;
    use crate::error::CostError;
    use serde_json::{json, Value};

    /// Points on a line, so that cost(i, j) = |i - j| * 10
    struct LineInstance {
        origin: usize,
        dimension: usize,
        broken_pair: Option<(usize, usize)>,
    }

    impl LineInstance {
        fn new(origin: usize, dimension: usize) -> Self {
            LineInstance {
                origin,
                dimension,
                broken_pair: None,
            }
        }
    }

    impl ProblemInstance for LineInstance {
        fn name(&self) -> &str {
            "line"
        }

        fn metadata(&self) -> &[(String, Value)] {
            &[]
        }

        fn nodes(&self) -> Vec<usize> {
            (self.origin..self.origin + self.dimension).collect()
        }

        fn dimension(&self) -> usize {
            self.dimension
        }

        fn edge_weight_type(&self) -> Option<EdgeWeightType> {
            Some(EdgeWeightType::Euc2d)
        }

        fn cost(&self, i: usize, j: usize) -> Result<f64, CostError> {
            let valid = self.origin..self.origin + self.dimension;
            if !valid.contains(&i) || !valid.contains(&j) || self.broken_pair == Some((i, j)) {
                return Err(CostError::MissingCoordinates(j));
            }
            Ok((i.abs_diff(j) * 10) as f64)
        }
    }

    fn row_lengths(table: &DistanceTable) -> Vec<usize> {
        table.rows().iter().map(Vec::len).collect()
    }

    #[test]
    fn test_zero_based_rows() {
        let table = extract(&LineInstance::new(0, 5)).unwrap();
        assert_eq!(table.num_rows(), 4);
        assert_eq!(row_lengths(&table), vec![4, 3, 2, 1]);
        assert_eq!(table.rows()[0], vec![10.0, 20.0, 30.0, 40.0]);
        assert_eq!(table.rows()[3], vec![10.0]);
    }

    #[test]
    fn test_one_based_rows_reach_last_node() {
        let table = extract(&LineInstance::new(1, 5)).unwrap();
        assert_eq!(row_lengths(&table), vec![4, 3, 2, 1]);
        assert_eq!(table.rows()[0], vec![10.0, 20.0, 30.0, 40.0]);
        assert_eq!(table.rows()[3], vec![10.0]);
    }

    #[test]
    fn test_degenerate_dimensions() {
        assert_eq!(extract(&LineInstance::new(1, 1)).unwrap().num_rows(), 0);
        assert_eq!(extract(&LineInstance::new(0, 0)).unwrap(), DistanceTable::default());
    }

    #[test]
    fn test_unsupported_origin() {
        let err = extract(&LineInstance::new(2, 3)).unwrap_err();
        assert_eq!(err, ExtractError::UnsupportedOrigin(2));
    }

    #[test]
    fn test_cost_failure_propagates() {
        let mut instance = LineInstance::new(1, 4);
        instance.broken_pair = Some((2, 4));
        let err = extract(&instance).unwrap_err();
        assert_eq!(
            err,
            ExtractError::Cost {
                i: 2,
                j: 4,
                source: CostError::MissingCoordinates(4)
            }
        );
    }

    #[test]
    fn test_huge_dimension_fails_on_first_missing_weight() {
        // only nodes 1 and 2 exist, the declared dimension is absurd
        struct Bogus;

        impl ProblemInstance for Bogus {
            fn name(&self) -> &str {
                "bogus"
            }

            fn metadata(&self) -> &[(String, Value)] {
                &[]
            }

            fn nodes(&self) -> Vec<usize> {
                vec![1, 2]
            }

            fn dimension(&self) -> usize {
                usize::MAX / 4
            }

            fn edge_weight_type(&self) -> Option<EdgeWeightType> {
                Some(EdgeWeightType::Explicit)
            }

            fn cost(&self, i: usize, j: usize) -> Result<f64, CostError> {
                if j <= 2 {
                    Ok(1.0)
                } else {
                    Err(CostError::MissingWeight(i, j))
                }
            }
        }

        let err = extract(&Bogus).unwrap_err();
        assert_eq!(
            err,
            ExtractError::Cost {
                i: 1,
                j: 3,
                source: CostError::MissingWeight(1, 3)
            }
        );
    }

    #[test]
    fn test_serializes_integral_distances_as_integers() {
        let table = DistanceTable::from_rows(vec![vec![1.0, 2.5], vec![3.0]]);
        assert_eq!(serde_json::to_value(&table).unwrap(), json!([[1, 2.5], [3]]));
    }
}
