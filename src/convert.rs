//! Batch conversion of a directory of TSPLIB instances to JSON.
//!
//! The best known costs are loaded once; a missing `solutions` file aborts the
//! run. Every instance is then converted on its own: a failure is logged and the
//! batch moves on to the next file.

use crate::config::ConvertConfig;
use crate::error::{ConvertError, ExtractError};
use crate::instance::{ProblemInstance, TsplibProblem};
use crate::matrix::extract_with_progress;
use crate::policy::should_include;
use crate::record::{normalize, Record};
use crate::solutions::BestKnownCosts;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// Instances smaller than this are collected without a progress bar.
const PROGRESS_MIN_DIMENSION: usize = 1000;

/// Outcome of a batch conversion
#[derive(Debug, Clone, Default)]
pub struct ConversionSummary {
    /// Written output files
    pub converted: Vec<PathBuf>,
    /// Instance files that failed, with the error message
    pub failed: Vec<(PathBuf, String)>,
}

/// Instance files of `dir` with the given extension, sorted by file name.
pub fn collect_instance_files<P: AsRef<Path>>(
    dir: P,
    extension: &str,
) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map(|e| e == extension).unwrap_or(false) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn progress_bar(problem: &dyn ProblemInstance, config: &ConvertConfig) -> ProgressBar {
    if !config.show_progress || problem.dimension() < PROGRESS_MIN_DIMENSION {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(problem.dimension().saturating_sub(1) as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{msg}\n{bar:40.cyan/blue} {pos}/{len} ({eta})")
    {
        pb.set_style(style.progress_chars("##-"));
    }
    pb.set_message(format!("Collecting distances for {}", problem.name()));
    pb
}

/// Build the normalized record of an instance.
pub fn convert_problem<P: ProblemInstance>(
    problem: &P,
    best_known_cost: f64,
    config: &ConvertConfig,
) -> Result<Record, ExtractError> {
    let include = should_include(
        problem.dimension(),
        problem.edge_weight_type(),
        config.include_distances,
        config.inc_dist_threshold,
    );
    log::debug!(
        "Instance {}: dimension={}, edge weight type={}, distances included={}",
        problem.name(),
        problem.dimension(),
        problem
            .edge_weight_type()
            .map(|k| k.as_str())
            .unwrap_or("none"),
        include
    );

    let distances = if include {
        let table = extract_with_progress(problem, &progress_bar(problem, config))?;
        log::debug!("Collected {} distance rows for {}", table.num_rows(), problem.name());
        Some(table)
    } else {
        None
    };

    Ok(normalize(problem.metadata(), best_known_cost, distances))
}

/// Convert one instance file and write `<out_dir>/<file stem>.<output_extension>`.
pub fn convert_instance(
    path: &Path,
    solutions: &BestKnownCosts,
    config: &ConvertConfig,
) -> Result<PathBuf, ConvertError> {
    if !path.is_file() {
        return Err(ConvertError::MissingInstance(path.to_path_buf()));
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    log::debug!("Converting TSP instance {} to JSON format...", stem);

    let problem = TsplibProblem::from_file(path)?;
    log::debug!("Loaded instance {}", problem.name());

    let record = convert_problem(&problem, solutions.best_known_cost(problem.name()), config)?;
    let json = if config.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };

    let out_path = config
        .out_dir
        .join(format!("{}.{}", stem, config.output_extension));
    fs::write(&out_path, json)?;
    Ok(out_path)
}

/// Convert every instance of `config.src_dir` into `config.out_dir`.
///
/// Fails only when the best known costs or the source directory cannot be read,
/// or the output directory cannot be created.
pub fn convert_all(config: &ConvertConfig) -> Result<ConversionSummary, ConvertError> {
    log::info!(
        "Started converting TSP instances in {:?} to JSON...",
        config.src_dir
    );

    let solutions = BestKnownCosts::load(&config.src_dir)?;
    log::info!("Loaded solutions file ({} best known costs)", solutions.len());

    let files = collect_instance_files(&config.src_dir, &config.extension)?;
    log::info!("Found {} TSP instances", files.len());

    fs::create_dir_all(&config.out_dir)?;

    let mut summary = ConversionSummary::default();
    for path in files {
        match convert_instance(&path, &solutions, config) {
            Ok(out_path) => {
                log::info!("Converted {:?} -> {:?}", path, out_path);
                summary.converted.push(out_path);
            }
            Err(e) => {
                log::error!("Failed to convert TSP instance {:?} with error {}", path, e);
                summary.failed.push((path, e.to_string()));
            }
        }
    }

    log::info!(
        "Done converting TSP instances in {:?} ({} converted, {} failed), results written in {:?}",
        config.src_dir,
        summary.converted.len(),
        summary.failed.len(),
        config.out_dir
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_instance_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.tsp", "a.tsp", "solutions", "c.atsp", "notes.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("d.tsp")).unwrap();

        let files = collect_instance_files(dir.path(), "tsp").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.tsp", "b.tsp"]);
    }

    #[test]
    fn test_convert_missing_instance() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConvertConfig {
            out_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let err = convert_instance(
            &dir.path().join("ghost.tsp"),
            &BestKnownCosts::default(),
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::MissingInstance(_)));
    }
}
