//! Fixed-width scientific literal format.
//!
//! The calculator shows every number as `+d.dddddd E±dd` without the space
//! (the C `%+.6E` conversion): an explicit sign, one integer digit, six
//! fraction digits, and a signed exponent of at least two digits. Editing
//! those digits is the UI's business; this module only converts between the
//! display string and `f64`.

use thiserror::Error;

/// Width in characters of a finite literal in display form.
pub const LITERAL_WIDTH: usize = 13;

/// The display form of `0.0`, which seeds a fresh literal entry.
pub const LITERAL_TEMPLATE: &str = "+0.000000E+00";

/// Error returned when text does not describe a number.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("empty literal")]
    Empty,
    #[error("malformed literal `{text}`")]
    Malformed { text: String },
}

/// Render `value` in the fixed-width display format.
///
/// Non-finite values render as `+INF`, `-INF`, `+NAN` or `-NAN`.
pub fn format_literal(value: f64) -> String {
    render(value, true)
}

/// Render `value` like C's `%.6E`: the display format without a forced
/// `+` on non-negative values (`1.000000E+00`, `-2.500000E-01`, `INF`).
pub fn format_scientific(value: f64) -> String {
    render(value, false)
}

fn render(value: f64, force_sign: bool) -> String {
    let sign = match (value.is_sign_negative(), force_sign) {
        (true, _) => "-",
        (false, true) => "+",
        (false, false) => "",
    };
    if value.is_nan() {
        return format!("{sign}NAN");
    }
    if value.is_infinite() {
        return format!("{sign}INF");
    }

    // `{:e}` yields e.g. `3.141593e0`; only the exponent needs reshaping.
    let scientific = format!("{:.6e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!("{sign}{mantissa}E{exponent_sign}{:02}", exponent.unsigned_abs())
}

/// Parse a literal in display form (or any plain decimal/scientific text).
///
/// Whitespace anywhere in the text is ignored, so `+1.000000 E+02` is
/// accepted as well.
pub fn parse_literal(text: &str) -> Result<f64, LiteralError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(LiteralError::Empty);
    }
    compact.parse::<f64>().map_err(|_| LiteralError::Malformed {
        text: text.to_owned(),
    })
}
