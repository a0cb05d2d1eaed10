//! Short-term momentum: change of the current price against the older of the
//! most recent closes.

use gammabot_core::{FetchError, FetchResult, PriceSeries};

/// `(current_price - older_close) / older_close`, where `older_close` is the
/// first (oldest) close of `closes`.
///
/// # Errors
/// `InsufficientData` for an empty series, `Degenerate` for a zero or
/// non-finite reference close.
pub fn momentum(current_price: f64, closes: &PriceSeries) -> FetchResult<f64> {
    let older_close = closes.first().ok_or(FetchError::InsufficientData {
        expected: 1,
        actual: 0,
    })?;
    if older_close == 0.0 || !older_close.is_finite() {
        return Err(FetchError::Degenerate(format!(
            "reference close is {older_close}"
        )));
    }
    Ok((current_price - older_close) / older_close)
}
