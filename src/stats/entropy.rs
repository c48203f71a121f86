//! Shannon entropy of a topic distribution.

use crate::config::EntropyPolicy;
use crate::{Error, Result};

/// H = −Σ p_k·ln(p_k) over all K components.
///
/// Negative or non-finite components are always rejected. Zero components
/// follow `policy`: `ZeroConvention` takes 0·ln(0) = 0, `Reject` fails.
pub fn entropy(p: &[f64], policy: EntropyPolicy) -> Result<f64> {
    let mut h = 0.0;
    for (index, &value) in p.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidDistribution { index, value });
        }
        if value == 0.0 {
            match policy {
                EntropyPolicy::ZeroConvention => continue,
                EntropyPolicy::Reject => {
                    return Err(Error::InvalidDistribution { index, value });
                }
            }
        }
        h -= value * value.ln();
    }
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_uniform_is_ln_k() {
        for k in [2usize, 5, 100] {
            let p = vec![1.0 / k as f64; k];
            let h = entropy(&p, EntropyPolicy::ZeroConvention).unwrap();
            assert!((h - (k as f64).ln()).abs() < 1e-9, "k={k}: {h}");
        }
    }

    #[test]
    fn test_one_hot_is_zero_under_convention() {
        let h = entropy(&[0.0, 1.0, 0.0, 0.0], EntropyPolicy::ZeroConvention).unwrap();
        assert!(h.abs() < EPS);
    }

    #[test]
    fn test_zero_component_rejected_under_reject() {
        let err = entropy(&[0.0, 1.0], EntropyPolicy::Reject).unwrap_err();
        assert!(matches!(err, Error::InvalidDistribution { index: 0, .. }));
    }

    #[test]
    fn test_negative_component_always_rejected() {
        for policy in [EntropyPolicy::ZeroConvention, EntropyPolicy::Reject] {
            let err = entropy(&[0.5, -0.1, 0.6], policy).unwrap_err();
            assert!(matches!(err, Error::InvalidDistribution { index: 1, .. }));
        }
    }

    #[test]
    fn test_nan_rejected() {
        assert!(entropy(&[f64::NAN, 1.0], EntropyPolicy::ZeroConvention).is_err());
    }

    #[test]
    fn test_strictly_positive_same_under_both_policies() {
        let p = [0.1, 0.2, 0.3, 0.4];
        let a = entropy(&p, EntropyPolicy::ZeroConvention).unwrap();
        let b = entropy(&p, EntropyPolicy::Reject).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_entropy_bounded_for_distributions(
            raw in prop::collection::vec(0.0f64..1.0, 2..64)
        ) {
            let total: f64 = raw.iter().sum();
            prop_assume!(total > 1e-6);
            let p: Vec<f64> = raw.iter().map(|x| x / total).collect();
            let h = entropy(&p, EntropyPolicy::ZeroConvention).unwrap();
            prop_assert!(h >= -EPS);
            prop_assert!(h <= (p.len() as f64).ln() + 1e-9);
        }
    }
}
