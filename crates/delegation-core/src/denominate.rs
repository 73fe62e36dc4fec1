//! Denomination of raw on-chain integers.
//!
//! Balances travel as integers scaled by `10^denomination`. `denominate`
//! turns them into display strings such as `1,234.56`; `nominate` goes
//! the other way for amounts typed by the owner.

use crate::error::{DashboardError, DashboardResult};
use crate::stats::PLACEHOLDER;

/// Formatting options for [`denominate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DenominateOptions {
    /// Decimal places of the raw integer (18 for EGLD)
    pub denomination: u32,
    /// Decimal places to show
    pub decimals: u32,
    /// Keep fraction digits past `decimals` up to the last non-zero one
    pub show_last_non_zero_decimal: bool,
    /// Group the integer part by thousands
    pub add_commas: bool,
}

impl DenominateOptions {
    pub fn new(denomination: u32, decimals: u32) -> Self {
        Self {
            denomination,
            decimals,
            show_last_non_zero_decimal: false,
            add_commas: true,
        }
    }

    pub fn show_last_non_zero_decimal(mut self, show: bool) -> Self {
        self.show_last_non_zero_decimal = show;
        self
    }

    pub fn add_commas(mut self, add: bool) -> Self {
        self.add_commas = add;
        self
    }
}

/// Format a raw integer string for display.
///
/// The `"..."` placeholder passes through untouched and an empty input
/// counts as zero.
///
/// ```
/// use delegation_core::denominate::{denominate, DenominateOptions};
///
/// let opts = DenominateOptions::new(18, 2);
/// assert_eq!(denominate("1234560000000000000000", &opts).unwrap(), "1,234.56");
/// ```
pub fn denominate(input: &str, options: &DenominateOptions) -> DashboardResult<String> {
    if input == PLACEHOLDER {
        return Ok(input.to_string());
    }

    let digits = if input.is_empty() { "0" } else { input };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DashboardError::InvalidAmount(input.to_string()));
    }

    let denomination = options.denomination as usize;
    let decimals = options.decimals as usize;

    let padded = format!("{:0>width$}", digits, width = denomination + 1);
    let (integer, fraction) = padded.split_at(padded.len() - denomination);

    let integer = match integer.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    let keep = if options.show_last_non_zero_decimal {
        let last_non_zero = fraction.rfind(|c| c != '0').map(|i| i + 1).unwrap_or(0);
        decimals.max(last_non_zero)
    } else {
        decimals
    };

    let mut fraction = fraction[..keep.min(fraction.len())].to_string();
    while fraction.len() < decimals {
        fraction.push('0');
    }

    let integer = if options.add_commas {
        group_thousands(integer)
    } else {
        integer.to_string()
    };

    if fraction.bytes().all(|b| b == b'0') {
        Ok(integer)
    } else {
        Ok(format!("{}.{}", integer, fraction))
    }
}

/// Denominate an amount already held as an integer.
pub fn denominate_amount(amount: u128, options: &DenominateOptions) -> String {
    // Digits only, so this cannot fail.
    denominate(&amount.to_string(), options).unwrap_or_else(|_| amount.to_string())
}

/// Parse a human amount such as `1,000.5` into its raw integer.
pub fn nominate(amount: &str, denomination: u32) -> DashboardResult<u128> {
    let cleaned: String = amount.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || cleaned == "." {
        return Err(DashboardError::InvalidAmount(amount.to_string()));
    }

    let (integer, fraction) = cleaned.split_once('.').unwrap_or((&cleaned, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || !all_digits(fraction) {
        return Err(DashboardError::InvalidAmount(amount.to_string()));
    }
    if fraction.len() > denomination as usize {
        return Err(DashboardError::InvalidAmount(format!(
            "{}: more than {} decimals",
            amount, denomination
        )));
    }

    let overflow = || DashboardError::AmountOverflow(amount.to_string());

    let scale = 10u128.checked_pow(denomination).ok_or_else(overflow)?;
    let integer: u128 = if integer.is_empty() {
        0
    } else {
        integer.parse().map_err(|_| overflow())?
    };
    let fraction_value: u128 = if fraction.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", fraction, width = denomination as usize);
        padded.parse().map_err(|_| overflow())?
    };

    integer
        .checked_mul(scale)
        .and_then(|v| v.checked_add(fraction_value))
        .ok_or_else(overflow)
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
