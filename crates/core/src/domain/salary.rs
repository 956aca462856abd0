// Salary arithmetic (exact decimal, half-up at two places)

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for money values
pub const MONEY_SCALE: u32 = 2;

/// Round to two decimal places, ties away from zero (half-up).
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// `salary + salary * percent / 100`, rounded half-up.
///
/// `None` when the result does not fit in a `Decimal`.
pub fn apply_percentage(salary: Decimal, percent: Decimal) -> Option<Decimal> {
    let factor = percent.checked_div(Decimal::ONE_HUNDRED)?;
    let delta = salary.checked_mul(factor)?;
    salary.checked_add(delta).map(round_half_up)
}

/// Exact sum of `amounts`. `None` on overflow.
pub fn checked_total(amounts: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
}

/// `salary / base`, rounded half-up. `None` when `base` is zero or the
/// quotient overflows.
pub fn ratio(salary: Decimal, base: Decimal) -> Option<Decimal> {
    salary.checked_div(base).map(round_half_up)
}
