use crate::error::{EntropyError, Result};

/// Shannon information, in bits, of a discrete frequency distribution.
///
/// `I(v) = -Σ (v_i / total) * log2(v_i / total)`. Zero entries contribute
/// nothing. Fails with [`EntropyError::SchemaViolation`] on a negative or
/// non-finite frequency and with [`EntropyError::EmptyPopulation`] when the
/// distribution sums to zero.
pub fn information(values: &[f64]) -> Result<f64> {
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(EntropyError::schema_violation(format!(
            "frequency {bad} is not a finite non-negative number"
        )));
    }

    let total: f64 = values.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return Err(EntropyError::empty_population(
            "information of a distribution with no mass",
        ));
    }

    let mut info = 0.0;
    for &v in values {
        let frac = v / total;
        if frac > 0.0 {
            info -= frac * frac.log2();
        }
    }
    Ok(info)
}

pub fn information_from_counts(counts: &[usize]) -> Result<f64> {
    let values: Vec<f64> = counts.iter().map(|&c| c as f64).collect();
    information(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn zero_fraction_contributes_nothing() {
        for n in [1.0, 3.0, 1000.0] {
            let i = information(&[0.0, n]).unwrap();
            assert!(!i.is_nan());
            assert!(approx_eq(i, 0.0, EPS));
        }
    }

    #[test]
    fn uniform_distribution_is_log2_k() {
        for k in 1..=8usize {
            let i = information(&vec![5.0; k]).unwrap();
            assert!(approx_eq(i, (k as f64).log2(), EPS));
        }
    }

    #[test]
    fn textbook_nine_five_split() {
        let i = information_from_counts(&[9, 5]).unwrap();
        assert!(approx_eq(i, 0.940286, 1e-6));
    }

    #[test]
    fn frequencies_and_counts_agree() {
        let a = information(&[0.25, 0.75]).unwrap();
        let b = information_from_counts(&[1, 3]).unwrap();
        assert!(approx_eq(a, b, EPS));
        assert!(approx_eq(a, 0.811278, 1e-6));
    }

    #[test]
    fn order_does_not_matter() {
        let a = information(&[1.0, 2.0, 7.0, 0.0]).unwrap();
        let b = information(&[0.0, 7.0, 1.0, 2.0]).unwrap();
        assert!(approx_eq(a, b, 1e-12));
    }

    #[test]
    fn no_mass_is_empty_population() {
        assert!(matches!(
            information(&[]),
            Err(EntropyError::EmptyPopulation { .. })
        ));
        assert!(matches!(
            information(&[0.0, 0.0]),
            Err(EntropyError::EmptyPopulation { .. })
        ));
    }

    #[test]
    fn invalid_frequencies_are_rejected() {
        for dist in [
            vec![-1.0, 2.0],
            vec![f64::INFINITY, 1.0],
            vec![f64::NAN],
            vec![3.0, f64::NEG_INFINITY],
        ] {
            assert!(matches!(
                information(&dist),
                Err(EntropyError::SchemaViolation { .. })
            ));
        }
    }

    #[test]
    fn never_negative() {
        for dist in [vec![1.0], vec![1.0, 1.0], vec![3.0, 0.0, 9.0, 2.0]] {
            assert!(information(&dist).unwrap() >= 0.0);
        }
    }
}
