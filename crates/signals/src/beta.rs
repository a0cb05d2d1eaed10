//! Beta of an instrument against a benchmark.
//!
//! `beta = cov(target, benchmark) / var(benchmark)` over simple daily
//! returns, both moments using the population (divide by `n`) convention.

use gammabot_core::{BrokerGateway, FetchError, FetchResult, PriceSeries, Uic};
use tracing::debug;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population covariance. `None` for mismatched or empty inputs.
pub fn population_covariance(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.is_empty() || a.len() != b.len() {
        return None;
    }
    let (mean_a, mean_b) = (mean(a), mean(b));
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum();
    Some(sum / a.len() as f64)
}

/// Population variance. `None` for empty input.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    population_covariance(values, values)
}

/// Beta from two aligned return series.
///
/// # Errors
/// `LengthMismatch` for unequal lengths, `InsufficientData` when empty,
/// `Degenerate` when the benchmark variance is zero or not finite.
pub fn beta_from_returns(target: &[f64], benchmark: &[f64]) -> FetchResult<f64> {
    if target.len() != benchmark.len() {
        return Err(FetchError::LengthMismatch {
            target: target.len(),
            benchmark: benchmark.len(),
        });
    }
    let insufficient = FetchError::InsufficientData {
        expected: 1,
        actual: 0,
    };
    let covariance = population_covariance(target, benchmark).ok_or(insufficient.clone())?;
    let variance = population_variance(benchmark).ok_or(insufficient)?;

    if variance == 0.0 || !variance.is_finite() {
        return Err(FetchError::Degenerate(format!(
            "benchmark return variance is {variance}"
        )));
    }

    let beta = covariance / variance;
    if !beta.is_finite() {
        return Err(FetchError::Degenerate(format!("beta is {beta}")));
    }
    Ok(beta)
}

/// Beta from two close series. No alignment is attempted: the series must
/// already have the same length.
///
/// # Errors
/// As [`beta_from_returns`]; the length check is made on the closes.
pub fn beta_from_closes(target: &PriceSeries, benchmark: &PriceSeries) -> FetchResult<f64> {
    if target.len() != benchmark.len() {
        return Err(FetchError::LengthMismatch {
            target: target.len(),
            benchmark: benchmark.len(),
        });
    }
    beta_from_returns(&target.returns(), &benchmark.returns())
}

/// Fetch `lookback` daily closes for both instruments and estimate beta.
///
/// # Errors
/// Any fetch failure, or the failures of [`beta_from_closes`].
pub async fn estimate_beta<G>(
    gateway: &G,
    target: Uic,
    benchmark: Uic,
    lookback: usize,
) -> FetchResult<f64>
where
    G: BrokerGateway + ?Sized,
{
    let target_closes = gateway.daily_closes(target, lookback).await?;
    let benchmark_closes = gateway.daily_closes(benchmark, lookback).await?;

    let beta = beta_from_closes(&target_closes, &benchmark_closes)?;
    debug!(%target, %benchmark, points = target_closes.len(), beta, "Estimated beta");
    Ok(beta)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_reference_beta() {
        let target = [0.01, -0.02, 0.03];
        let benchmark = [0.02, -0.01, 0.015];

        // Deviations from the means, in units of 1/600:
        // target    [2, -16, 14], benchmark [7, -11, 4]
        // cov = (14 + 176 + 56) / 3 / 600^2, var = (49 + 121 + 16) / 3 / 600^2
        let expected = 246.0 / 186.0;

        let beta = beta_from_returns(&target, &benchmark).unwrap();
        assert!((beta - expected).abs() < EPS, "beta {beta} != {expected}");
        assert!((beta - 1.322_580_645_161_290_3).abs() < 1e-9);
    }

    #[test]
    fn test_population_moments() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((population_variance(&values).unwrap() - 1.25).abs() < EPS);
        let doubled = [2.0, 4.0, 6.0, 8.0];
        assert!((population_covariance(&values, &doubled).unwrap() - 2.5).abs() < EPS);
    }

    #[test]
    fn test_moments_reject_bad_input() {
        assert!(population_variance(&[]).is_none());
        assert!(population_covariance(&[1.0], &[1.0, 2.0]).is_none());
    }

    #[test]
    fn test_scaled_returns_give_scale_as_beta() {
        let benchmark = [0.01, -0.005, 0.02, -0.01, 0.003];
        let target: Vec<f64> = benchmark.iter().map(|r| r * 2.0).collect();
        let beta = beta_from_returns(&target, &benchmark).unwrap();
        assert!((beta - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_length_mismatch() {
        let err = beta_from_returns(&[0.01, 0.02], &[0.01]).unwrap_err();
        assert_eq!(
            err,
            FetchError::LengthMismatch {
                target: 2,
                benchmark: 1
            }
        );

        let err = beta_from_closes(
            &PriceSeries::new(vec![100.0, 101.0, 102.0]),
            &PriceSeries::new(vec![400.0, 401.0]),
        )
        .unwrap_err();
        assert!(matches!(err, FetchError::LengthMismatch { .. }));
    }

    #[test]
    fn test_flat_benchmark_is_degenerate() {
        let err = beta_from_returns(&[0.01, 0.02], &[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, FetchError::Degenerate(_)));
    }

    #[test]
    fn test_too_few_closes() {
        let err = beta_from_closes(
            &PriceSeries::new(vec![100.0]),
            &PriceSeries::new(vec![400.0]),
        )
        .unwrap_err();
        assert!(matches!(err, FetchError::InsufficientData { .. }));
    }

    #[test]
    fn test_beta_from_closes() {
        // Benchmark returns +1%, -1%, +2%; target moves twice as much.
        let benchmark = PriceSeries::new(vec![100.0, 101.0, 99.99, 101.9898]);
        let target = PriceSeries::new(vec![50.0, 51.0, 49.98, 51.9792]);
        let beta = beta_from_closes(&target, &benchmark).unwrap();
        assert!((beta - 2.0).abs() < 1e-9);
    }
}
