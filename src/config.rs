//! Conversion settings.

use std::path::PathBuf;

/// Instances with more nodes than this get no distances matrix unless they are explicit.
pub const INCLUDE_DIST_THRESHOLD: usize = 15000;
/// Directory holding the original `.tsp` files and the `solutions` file.
pub const TSP_SRC_DIR: &str = "./benchmarks/original";
/// Directory receiving the converted instances.
pub const TSP_OUT_DIR: &str = "./benchmarks/json";

/// Settings of a conversion run
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub src_dir: PathBuf,
    pub out_dir: PathBuf,
    /// Collect distances for non explicit instances
    pub include_distances: bool,
    pub inc_dist_threshold: usize,
    /// Extension of the instance files to convert
    pub extension: String,
    /// Extension of the written records
    pub output_extension: String,
    /// Indent the written JSON
    pub pretty: bool,
    /// Show a progress bar while collecting distances of large instances
    pub show_progress: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            src_dir: PathBuf::from(TSP_SRC_DIR),
            out_dir: PathBuf::from(TSP_OUT_DIR),
            include_distances: true,
            inc_dist_threshold: INCLUDE_DIST_THRESHOLD,
            extension: "tsp".to_string(),
            output_extension: "json".to_string(),
            pretty: false,
            show_progress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConvertConfig::default();
        assert_eq!(config.inc_dist_threshold, 15000);
        assert!(config.include_distances);
        assert_eq!(config.src_dir, PathBuf::from("./benchmarks/original"));
        assert_eq!(config.output_extension, "json");
    }
}
