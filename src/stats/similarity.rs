//! Topic-vector similarity (Pearson correlation).

use crate::{Error, Result};

/// Pearson correlation coefficient between two equal-length vectors.
///
/// Requires `a.len() == b.len() > 1`. A constant vector has zero variance
/// and yields `DegenerateVariance` instead of NaN.
pub fn similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() || a.len() < 2 {
        return Err(Error::DimensionMismatch {
            left: a.len(),
            right: b.len(),
            context: "similarity needs two equal-length vectors of at least 2 topics".into(),
        });
    }

    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    if var_a == 0.0 || var_b == 0.0 {
        return Err(Error::DegenerateVariance);
    }

    // Rounding can push |r| a hair past 1.
    Ok((cov / (var_a * var_b).sqrt()).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_perfect_correlation() {
        let r = similarity(&[0.1, 0.2, 0.7], &[0.2, 0.4, 1.4]).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_anticorrelation() {
        let r = similarity(&[0.1, 0.9], &[0.9, 0.1]).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch() {
        let err = similarity(&[0.5, 0.5], &[0.2, 0.3, 0.5]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { left: 2, right: 3, .. }));
    }

    #[test]
    fn test_single_topic_rejected() {
        assert!(matches!(
            similarity(&[1.0], &[1.0]),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_constant_vector_is_degenerate() {
        let err = similarity(&[0.25; 4], &[0.1, 0.2, 0.3, 0.4]).unwrap_err();
        assert!(matches!(err, Error::DegenerateVariance));
    }

    proptest! {
        #[test]
        fn prop_symmetric(
            pairs in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 2..32)
        ) {
            let (a, b): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            match (similarity(&a, &b), similarity(&b, &a)) {
                (Ok(x), Ok(y)) => {
                    prop_assert_eq!(x, y);
                    prop_assert!((-1.0..=1.0).contains(&x));
                }
                (Err(_), Err(_)) => {}
                other => {
                    prop_assert!(false, "asymmetric outcome: {:?}", other);
                }
            }
        }

        #[test]
        fn prop_self_similarity_is_one(
            v in prop::collection::vec(0.0f64..1.0, 2..32)
        ) {
            let mean = v.iter().sum::<f64>() / v.len() as f64;
            prop_assume!(v.iter().any(|x| (x - mean).abs() > 1e-6));
            let r = similarity(&v, &v).unwrap();
            prop_assert!((r - 1.0).abs() < 1e-9);
        }
    }
}
