//! pt-BR presentation helpers (numbers and dates)

use chrono::NaiveDate;
use roster_core::domain::salary::round_half_up;
use rust_decimal::Decimal;

/// Two-decimal number in pt-BR style: `.` groups thousands, `,` separates decimals
pub fn format_pt_br(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{},{}", sign, grouped, frac_part)
}

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
