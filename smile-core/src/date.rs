use chrono::NaiveDate;

use crate::resolver::PriceError;

/// Accepted date input, e.g. `Jun 01 2004`. Month names match case-insensitively.
pub const DATE_INPUT_FORMAT: &str = "%b %d %Y";

/// Parse `MMM DD YYYY`.
///
/// chrono alone accepts short or signed years and a missing space after the
/// month, so the three parts are checked for shape before handing over.
pub fn parse_price_date(input: &str) -> Result<NaiveDate, PriceError> {
    let invalid = || PriceError::InvalidDate(input.to_string());

    let parts: Vec<&str> = input.split_whitespace().collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(invalid());
    };

    let well_formed = month.len() == 3
        && month.chars().all(|c| c.is_ascii_alphabetic())
        && (1..=2).contains(&day.len())
        && day.chars().all(|c| c.is_ascii_digit())
        && year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit());

    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(&format!("{month} {day} {year}"), DATE_INPUT_FORMAT)
        .map_err(|_| invalid())
}
