//! Decides whether a converted record carries its distances matrix.

use crate::distance::EdgeWeightType;

/// Whether the distances matrix should be collected for an instance.
///
/// Explicit instances always keep their distances since the raw weight section
/// is dropped from the output. Other instances get one only when the user asked
/// for it and the instance has at most `threshold` nodes.
pub fn should_include(
    dimension: usize,
    edge_weight_type: Option<EdgeWeightType>,
    include_distances: bool,
    threshold: usize,
) -> bool {
    edge_weight_type == Some(EdgeWeightType::Explicit)
        || (include_distances && dimension <= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_always_included() {
        for include in [true, false] {
            for dimension in [0, 10, 15_000, 1_000_000] {
                assert!(should_include(
                    dimension,
                    Some(EdgeWeightType::Explicit),
                    include,
                    15_000
                ));
            }
        }
    }

    #[test]
    fn test_user_opt_out() {
        for dimension in [1, 52, 20_000] {
            assert!(!should_include(dimension, Some(EdgeWeightType::Euc2d), false, 15_000));
        }
        assert!(!should_include(52, None, false, 15_000));
    }

    #[test]
    fn test_threshold() {
        let kind = Some(EdgeWeightType::Geo);
        assert!(should_include(15_000, kind, true, 15_000));
        assert!(!should_include(15_001, kind, true, 15_000));
        assert!(!should_include(20_000, Some(EdgeWeightType::Euc2d), true, 15_000));
    }
}
