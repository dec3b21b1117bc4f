//! Decimal formatting for display prices.

/// Format with thousands separators and exactly two fraction digits.
///
/// Rounds half-up (away from zero) at the second decimal place.
///
/// ```
/// use dashboard_server::pricing::format_amount;
///
/// assert_eq!(format_amount(335.5256), "335.53");
/// assert_eq!(format_amount(10823.4068), "10,823.41");
/// assert_eq!(format_amount(0.5), "0.50");
/// ```
pub fn format_amount(value: f64) -> String {
    let cents = (value.abs() * 100.0).round();

    // Past 2^53 cents an f64 has no fractional digits left to round, so the
    // exact decimal expansion is used instead of integer cents.
    let (whole, frac) = if cents < MAX_EXACT_CENTS {
        let cents = cents as u64;
        ((cents / 100).to_string(), format!("{:02}", cents % 100))
    } else {
        let fixed = format!("{:.2}", value.abs());
        match fixed.split_once('.') {
            Some((whole, frac)) => (whole.to_string(), frac.to_string()),
            None => (fixed, "00".to_string()),
        }
    };

    let sign = if value.is_sign_negative() && cents > 0.0 {
        "-"
    } else {
        ""
    };

    format!("{sign}{}.{frac}", group_thousands(&whole))
}

/// 2^53: every integer below this is exactly representable.
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
