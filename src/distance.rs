//! TSPLIB edge weight functions.
//!
//! Coordinate based weights follow the TSPLIB conventions (nearest integer
//! rounding, GEO and ATT pseudo distances). Explicit weights are looked up in the
//! flattened `EDGE_WEIGHT_SECTION` according to its `EDGE_WEIGHT_FORMAT`.

use crate::error::CostError;
use std::fmt;

/// PI as truncated by the TSPLIB reference implementation of GEO distances.
const GEO_PI: f64 = 3.141592;
/// Earth radius (km) used by GEO distances.
const GEO_RADIUS: f64 = 6378.388;

/// Kind of edge weight declared by `EDGE_WEIGHT_TYPE`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum EdgeWeightType {
    Explicit,
    Euc2d,
    Euc3d,
    Max2d,
    Max3d,
    Man2d,
    Man3d,
    Ceil2d,
    Geo,
    Att,
    Xray1,
    Xray2,
    Special,
}

impl EdgeWeightType {
    pub fn from_keyword(value: &str) -> Option<Self> {
        let kind = match value.trim().to_ascii_uppercase().as_str() {
            "EXPLICIT" => EdgeWeightType::Explicit,
            "EUC_2D" => EdgeWeightType::Euc2d,
            "EUC_3D" => EdgeWeightType::Euc3d,
            "MAX_2D" => EdgeWeightType::Max2d,
            "MAX_3D" => EdgeWeightType::Max3d,
            "MAN_2D" => EdgeWeightType::Man2d,
            "MAN_3D" => EdgeWeightType::Man3d,
            "CEIL_2D" => EdgeWeightType::Ceil2d,
            "GEO" => EdgeWeightType::Geo,
            "ATT" => EdgeWeightType::Att,
            "XRAY1" => EdgeWeightType::Xray1,
            "XRAY2" => EdgeWeightType::Xray2,
            "SPECIAL" => EdgeWeightType::Special,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeWeightType::Explicit => "EXPLICIT",
            EdgeWeightType::Euc2d => "EUC_2D",
            EdgeWeightType::Euc3d => "EUC_3D",
            EdgeWeightType::Max2d => "MAX_2D",
            EdgeWeightType::Max3d => "MAX_3D",
            EdgeWeightType::Man2d => "MAN_2D",
            EdgeWeightType::Man3d => "MAN_3D",
            EdgeWeightType::Ceil2d => "CEIL_2D",
            EdgeWeightType::Geo => "GEO",
            EdgeWeightType::Att => "ATT",
            EdgeWeightType::Xray1 => "XRAY1",
            EdgeWeightType::Xray2 => "XRAY2",
            EdgeWeightType::Special => "SPECIAL",
        }
    }

    /// Number of coordinates the weight function reads per node, `None` when the
    /// weight is not derived from coordinates.
    pub fn coordinate_arity(&self) -> Option<usize> {
        match self {
            EdgeWeightType::Euc2d
            | EdgeWeightType::Max2d
            | EdgeWeightType::Man2d
            | EdgeWeightType::Ceil2d
            | EdgeWeightType::Geo
            | EdgeWeightType::Att => Some(2),
            EdgeWeightType::Euc3d | EdgeWeightType::Max3d | EdgeWeightType::Man3d => Some(3),
            _ => None,
        }
    }
}

impl fmt::Display for EdgeWeightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout of an explicit `EDGE_WEIGHT_SECTION`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum EdgeWeightFormat {
    Function,
    FullMatrix,
    UpperRow,
    LowerRow,
    UpperDiagRow,
    LowerDiagRow,
    UpperCol,
    LowerCol,
    UpperDiagCol,
    LowerDiagCol,
}

impl EdgeWeightFormat {
    pub fn from_keyword(value: &str) -> Option<Self> {
        let format = match value.trim().to_ascii_uppercase().as_str() {
            "FUNCTION" => EdgeWeightFormat::Function,
            "FULL_MATRIX" => EdgeWeightFormat::FullMatrix,
            "UPPER_ROW" => EdgeWeightFormat::UpperRow,
            "LOWER_ROW" => EdgeWeightFormat::LowerRow,
            "UPPER_DIAG_ROW" => EdgeWeightFormat::UpperDiagRow,
            "LOWER_DIAG_ROW" => EdgeWeightFormat::LowerDiagRow,
            "UPPER_COL" => EdgeWeightFormat::UpperCol,
            "LOWER_COL" => EdgeWeightFormat::LowerCol,
            "UPPER_DIAG_COL" => EdgeWeightFormat::UpperDiagCol,
            "LOWER_DIAG_COL" => EdgeWeightFormat::LowerDiagCol,
            _ => return None,
        };
        Some(format)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeWeightFormat::Function => "FUNCTION",
            EdgeWeightFormat::FullMatrix => "FULL_MATRIX",
            EdgeWeightFormat::UpperRow => "UPPER_ROW",
            EdgeWeightFormat::LowerRow => "LOWER_ROW",
            EdgeWeightFormat::UpperDiagRow => "UPPER_DIAG_ROW",
            EdgeWeightFormat::LowerDiagRow => "LOWER_DIAG_ROW",
            EdgeWeightFormat::UpperCol => "UPPER_COL",
            EdgeWeightFormat::LowerCol => "LOWER_COL",
            EdgeWeightFormat::UpperDiagCol => "UPPER_DIAG_COL",
            EdgeWeightFormat::LowerDiagCol => "LOWER_DIAG_COL",
        }
    }

    /// Number of weights the section holds for `dimension` nodes, `None` for
    /// `FUNCTION` or when the count overflows.
    pub fn weight_count(&self, dimension: usize) -> Option<usize> {
        let triangle = dimension.checked_mul(dimension.saturating_sub(1))? / 2;
        match self {
            EdgeWeightFormat::Function => None,
            EdgeWeightFormat::FullMatrix => dimension.checked_mul(dimension),
            EdgeWeightFormat::UpperRow
            | EdgeWeightFormat::LowerRow
            | EdgeWeightFormat::UpperCol
            | EdgeWeightFormat::LowerCol => Some(triangle),
            EdgeWeightFormat::UpperDiagRow
            | EdgeWeightFormat::LowerDiagRow
            | EdgeWeightFormat::UpperDiagCol
            | EdgeWeightFormat::LowerDiagCol => triangle.checked_add(dimension),
        }
    }

    /// Whether the diagonal is stored in the weight section
    fn has_diagonal(&self) -> bool {
        matches!(
            self,
            EdgeWeightFormat::FullMatrix
                | EdgeWeightFormat::UpperDiagRow
                | EdgeWeightFormat::LowerDiagRow
                | EdgeWeightFormat::UpperDiagCol
                | EdgeWeightFormat::LowerDiagCol
        )
    }
}

/// Nearest integer as defined by TSPLIB: `(int)(x + 0.5)`.
#[inline]
pub fn nint(x: f64) -> f64 {
    (x + 0.5).trunc()
}

fn deltas<'a>(a: &'a [f64], b: &'a [f64], arity: usize) -> impl Iterator<Item = f64> + 'a {
    a.iter().zip(b.iter()).take(arity).map(|(x, y)| x - y)
}

fn euclidean(a: &[f64], b: &[f64], arity: usize) -> f64 {
    deltas(a, b, arity).map(|d| d * d).sum::<f64>().sqrt()
}

/// Convert a DDD.MM coordinate to radians.
fn geo_radians(x: f64) -> f64 {
    let degrees = x.trunc();
    let minutes = x - degrees;
    GEO_PI * (degrees + 5.0 * minutes / 3.0) / 180.0
}

fn geo_distance(a: &[f64], b: &[f64]) -> f64 {
    let (lat_a, lon_a) = (geo_radians(a[0]), geo_radians(a[1]));
    let (lat_b, lon_b) = (geo_radians(b[0]), geo_radians(b[1]));
    let q1 = (lon_a - lon_b).cos();
    let q2 = (lat_a - lat_b).cos();
    let q3 = (lat_a + lat_b).cos();
    (GEO_RADIUS * (0.5 * ((1.0 + q1) * q2 - (1.0 - q1) * q3)).acos() + 1.0).trunc()
}

fn att_distance(a: &[f64], b: &[f64]) -> f64 {
    let r = (deltas(a, b, 2).map(|d| d * d).sum::<f64>() / 10.0).sqrt();
    let t = nint(r);
    if t < r {
        t + 1.0
    } else {
        t
    }
}

/// Weight between two nodes given their coordinates.
///
/// Callers must pass at least [`EdgeWeightType::coordinate_arity`] coordinates
/// per node.
pub fn coordinate_weight(kind: EdgeWeightType, a: &[f64], b: &[f64]) -> Result<f64, CostError> {
    let weight = match kind {
        EdgeWeightType::Euc2d => nint(euclidean(a, b, 2)),
        EdgeWeightType::Euc3d => nint(euclidean(a, b, 3)),
        EdgeWeightType::Ceil2d => euclidean(a, b, 2).ceil(),
        EdgeWeightType::Man2d => nint(deltas(a, b, 2).map(f64::abs).sum()),
        EdgeWeightType::Man3d => nint(deltas(a, b, 3).map(f64::abs).sum()),
        EdgeWeightType::Max2d => deltas(a, b, 2).map(|d| nint(d.abs())).fold(0.0, f64::max),
        EdgeWeightType::Max3d => deltas(a, b, 3).map(|d| nint(d.abs())).fold(0.0, f64::max),
        EdgeWeightType::Geo => geo_distance(a, b),
        EdgeWeightType::Att => att_distance(a, b),
        other => return Err(CostError::UnsupportedWeightType(other.to_string())),
    };
    Ok(weight)
}

/// Explicit weights, indexed from 0.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    format: EdgeWeightFormat,
    dimension: usize,
    weights: Vec<f64>,
}

impl WeightMatrix {
    pub fn new(format: EdgeWeightFormat, dimension: usize, weights: Vec<f64>) -> Self {
        WeightMatrix { format, dimension, weights }
    }

    /// Position of the weight of `(i, j)` in the flattened section.
    fn position(&self, i: usize, j: usize) -> Option<usize> {
        let n = self.dimension;
        let (lo, hi) = (i.min(j), i.max(j));
        let position = match self.format {
            EdgeWeightFormat::Function => return None,
            EdgeWeightFormat::FullMatrix => i * n + j,
            EdgeWeightFormat::UpperRow | EdgeWeightFormat::LowerCol => {
                lo * n - lo * (lo + 1) / 2 + (hi - lo - 1)
            }
            EdgeWeightFormat::UpperDiagRow | EdgeWeightFormat::LowerDiagCol => {
                lo * n - (lo * lo.saturating_sub(1)) / 2 + (hi - lo)
            }
            EdgeWeightFormat::LowerRow | EdgeWeightFormat::UpperCol => {
                (hi * hi.saturating_sub(1)) / 2 + lo
            }
            EdgeWeightFormat::LowerDiagRow | EdgeWeightFormat::UpperDiagCol => {
                hi * (hi + 1) / 2 + lo
            }
        };
        Some(position)
    }

    pub fn get(&self, i: usize, j: usize) -> Result<f64, CostError> {
        if self.format == EdgeWeightFormat::Function {
            return Err(CostError::UnsupportedWeightFormat(Some(
                self.format.as_str().to_string(),
            )));
        }
        if i >= self.dimension || j >= self.dimension {
            return Err(CostError::MissingWeight(i, j));
        }
        if i == j && !self.format.has_diagonal() {
            return Ok(0.0);
        }
        self.position(i, j)
            .and_then(|p| self.weights.get(p).copied())
            .ok_or(CostError::MissingWeight(i, j))
    }
}
