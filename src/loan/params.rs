//! Loan parameter bounds and slider value helpers.
//!
//! Shells render their own sliders; these helpers keep the value math
//! (stepping, clamping, period index mapping) identical on every platform.

use serde::{Deserialize, Serialize};

/// Smallest amount a loan may be requested for.
pub const AMOUNT_MIN: f64 = 5_000.0;

/// Largest amount a loan may be requested for.
pub const AMOUNT_MAX: f64 = 50_000.0;

/// Granularity of the amount slider.
pub const AMOUNT_STEP: f64 = 1_000.0;

/// Repayment terms offered, in days. Ordered as the period slider shows them.
pub const PERIOD_OPTIONS: [i32; 4] = [7, 14, 21, 28];

/// Term used when nothing else is known.
pub const DEFAULT_PERIOD_DAYS: i32 = 14;

/// Fixed interest rate applied to every loan.
pub const INTEREST_RATE: f64 = 0.15;

/// The pair of values persisted between sessions.
///
/// Serialized key names are shared with the platform shells' own
/// preference stores; once published, do not rename. Missing keys read as
/// zero, which loaders treat as "nothing saved" / "default period".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParams {
    #[serde(rename = "loan_amount", default)]
    pub amount: f64,
    #[serde(rename = "loan_period", default)]
    pub period_days: i32,
}

impl LoanParams {
    pub fn new(amount: f64, period_days: i32) -> Self {
        Self {
            amount,
            period_days,
        }
    }
}

/// Round a raw slider value to the nearest step and clamp it into range.
pub fn snap_amount(raw: f64) -> f64 {
    if raw.is_nan() {
        return AMOUNT_MIN;
    }
    let stepped = (raw / AMOUNT_STEP).round() * AMOUNT_STEP;
    stepped.clamp(AMOUNT_MIN, AMOUNT_MAX)
}

/// Position of `period_days` on the period slider (0 when it is not an option).
pub fn period_index(period_days: i32) -> usize {
    PERIOD_OPTIONS
        .iter()
        .position(|&p| p == period_days)
        .unwrap_or(0)
}

/// Period at a slider position, clamping out-of-range positions.
pub fn period_at(index: usize) -> i32 {
    PERIOD_OPTIONS[index.min(PERIOD_OPTIONS.len() - 1)]
}

/// Whether `period_days` is one of the offered terms.
pub fn is_period_offered(period_days: i32) -> bool {
    PERIOD_OPTIONS.contains(&period_days)
}

/// Whether `amount` lies inside the closed allowed range.
pub fn is_amount_in_range(amount: f64) -> bool {
    (AMOUNT_MIN..=AMOUNT_MAX).contains(&amount)
}
