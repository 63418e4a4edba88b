//! Error types for every stage of the conversion.
//!
//! Each layer fails loudly with its own error; recovery only happens at the
//! per-instance boundary in [`crate::convert`].

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading the best known solutions file.
#[derive(Debug, Error)]
pub enum SolutionsError {
    #[error("Solutions file {0:?} does not exist!")]
    Missing(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Malformed solutions file: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid best known cost {value:?} for instance {name:?}")]
    InvalidCost { name: String, value: String },
}

/// Failure while reading or parsing a TSPLIB instance.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("Cannot read instance: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing required field {0}")]
    MissingField(&'static str),
    #[error("Invalid value {value:?} for {keyword}")]
    InvalidValue { keyword: String, value: String },
    #[error("Malformed line {line} in {section}: {content:?}")]
    MalformedSection {
        section: String,
        line: usize,
        content: String,
    },
    #[error("Unknown section {0}")]
    UnknownSection(String),
    #[error("{section} holds {found} entries, which does not fit DIMENSION {dimension}")]
    DimensionMismatch {
        section: &'static str,
        dimension: usize,
        found: usize,
    },
}

/// Failure of the edge weight function for a pair of nodes.
#[derive(Debug, Error, PartialEq)]
pub enum CostError {
    #[error("Instance has no EDGE_WEIGHT_TYPE")]
    MissingWeightType,
    #[error("Unsupported edge weight type {0}")]
    UnsupportedWeightType(String),
    #[error("Unsupported edge weight format {0:?}")]
    UnsupportedWeightFormat(Option<String>),
    #[error("No coordinates for node {0}")]
    MissingCoordinates(usize),
    #[error("Node {node} has {found} coordinates, {expected} required")]
    CoordinateArity {
        node: usize,
        expected: usize,
        found: usize,
    },
    #[error("No edge weight for nodes ({0}, {1})")]
    MissingWeight(usize, usize),
}

/// Failure while collecting the distances matrix.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("Node indexes must start at 0 or 1, found {0}")]
    UnsupportedOrigin(usize),
    #[error("Failed to compute distance between nodes {i} and {j}: {source}")]
    Cost {
        i: usize,
        j: usize,
        #[source]
        source: CostError,
    },
}

/// Failure converting one instance, or the whole batch.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Solutions(#[from] SolutionsError),
    #[error("File {0:?} does not exist!")]
    MissingInstance(PathBuf),
    #[error(transparent)]
    Instance(#[from] InstanceError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot serialize record: {0}")]
    Json(#[from] serde_json::Error),
}
