//! 13th-salary (annual bonus) accrual.
//!
//! Lei 4.090/62 pays one twelfth of the December remuneration per month
//! worked, where a month counts if it has 15 or more worked days. The
//! engine also supports an exact-days variant used for informal settlement:
//! every day counts proportionally over a 360-day commercial year, with no
//! 15-day threshold.
//!
//! Both methods accrue only the base-salary-proportional component.
//! Folding a year's average variable remuneration into the bonus base would
//! require twelve months of payroll history, which a single-period input
//! does not carry; callers wanting that pre-fold the average into
//! `base_salary`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::ThirteenthAccrual;

/// Days worked in a month for it to count as one avo (Lei 4.090/62 art. 1).
pub const AVO_QUALIFYING_DAYS: u32 = 15;

/// Twelfths in a full annual bonus.
pub const AVOS_PER_YEAR: u32 = 12;

/// Days in the commercial year used by the exact-days method.
pub const COMMERCIAL_YEAR_DAYS: u32 = 360;

/// The result of the 13th-salary accrual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThirteenthResult {
    /// Qualifying twelfths (CLT method; 0 under daily-exact).
    pub total_avos: u32,
    /// Total days counted (daily-exact method; 0 under CLT).
    pub total_days: u32,
    /// The accrued bonus amount, at full precision.
    pub gross: Decimal,
}

/// Accrues the 13th salary from the per-month worked-day map.
///
/// Only months 1 through 12 are considered; other keys are ignored. Under
/// the CLT method the avo count is capped at twelve.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use payroll_engine::calculation::calculate_thirteenth;
/// use payroll_engine::models::ThirteenthAccrual;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut days = BTreeMap::new();
/// for month in 1..=6 {
///     days.insert(month, 30);
/// }
///
/// let result = calculate_thirteenth(
///     Decimal::from_str("2400.00").unwrap(),
///     &days,
///     ThirteenthAccrual::Clt,
/// );
/// assert_eq!(result.total_avos, 6);
/// assert_eq!(result.gross, Decimal::from_str("1200").unwrap());
/// ```
pub fn calculate_thirteenth(
    base_salary: Decimal,
    detailed_days: &BTreeMap<u8, u32>,
    accrual: ThirteenthAccrual,
) -> ThirteenthResult {
    let months = detailed_days
        .iter()
        .filter(|(month, _)| (1..=12).contains(*month));

    match accrual {
        ThirteenthAccrual::Clt => {
            let total_avos = months
                .filter(|(_, days)| **days >= AVO_QUALIFYING_DAYS)
                .count()
                .min(AVOS_PER_YEAR as usize) as u32;
            let gross =
                base_salary * Decimal::from(total_avos) / Decimal::from(AVOS_PER_YEAR);
            ThirteenthResult {
                total_avos,
                total_days: 0,
                gross,
            }
        }
        ThirteenthAccrual::DailyExact => {
            let total_days: u32 = months.map(|(_, days)| *days).sum();
            let gross =
                base_salary * Decimal::from(total_days) / Decimal::from(COMMERCIAL_YEAR_DAYS);
            ThirteenthResult {
                total_avos: 0,
                total_days,
                gross,
            }
        }
    }
}
