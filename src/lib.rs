//! TSPLIB to JSON converter library.
//!
//! Converts TSPLIB instances into compact, self-contained JSON records that
//! downstream tools can load without a TSPLIB parser.
//!
//! # Features
//!
//! - TSPLIB 95 parser (coordinates, explicit weight matrices, demands, depots, tours)
//! - All coordinate based edge weight functions (EUC, MAN, MAX, CEIL, GEO, ATT)
//! - Upper-triangular distances matrix, with 0- and 1-based node numbering
//! - Best known costs read from the TSPLIB `solutions` file
//! - camelCase field names
//!
//! # Example
//!
//! ```no_run
//! use tsplib_json::config::ConvertConfig;
//! use tsplib_json::convert::convert_all;
//!
//! let config = ConvertConfig {
//!     src_dir: "benchmarks/original".into(),
//!     out_dir: "benchmarks/json".into(),
//!     ..Default::default()
//! };
//! let summary = convert_all(&config).unwrap();
//! println!("{} instances converted", summary.converted.len());
//! ```

pub mod config;
pub mod convert;
pub mod distance;
pub mod error;
pub mod instance;
pub mod matrix;
pub mod policy;
pub mod record;
pub mod solutions;

pub use instance::{ProblemInstance, TsplibProblem};
pub use matrix::DistanceTable;
pub use record::Record;
