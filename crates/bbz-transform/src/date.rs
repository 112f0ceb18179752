//! Conversion between ISO 8601 date strings and editor date parts.
//!
//! Release dates may be partial. Dates are written in the extended format
//! with right truncation: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`. Years outside
//! `0000..=9999` use the expanded representation with an explicit sign and
//! six digits (`-000044-03-15`).

use bbz_model::DateParts;
use chrono::NaiveDate;

/// Split an ISO 8601 date string into editor date parts.
///
/// Any time component is ignored. A blank string yields empty parts. Parts
/// are kept as written apart from the year, which loses its `+` sign and
/// leading zeros.
pub fn iso_date_to_parts(value: &str) -> DateParts {
    let trimmed = value.trim();
    let date = trimmed.split('T').next().unwrap_or_default();
    if date.is_empty() {
        return DateParts::default();
    }

    let (negative, unsigned) = match date.as_bytes()[0] {
        b'-' => (true, &date[1..]),
        b'+' => (false, &date[1..]),
        _ => (false, date),
    };

    let mut parts = unsigned.splitn(3, '-');
    let year = parts.next().map(|year| normalize_year(year, negative));
    let month = parts.next().map(str::to_string);
    let day = parts.next().map(str::to_string);

    DateParts {
        day: day.unwrap_or_default(),
        month: month.unwrap_or_default(),
        year: year.unwrap_or_default(),
    }
}

/// Render editor date parts as an ISO 8601 date string.
///
/// Returns `None` when no year was entered. A blank month drops both month
/// and day. Parts that are not numbers are emitted verbatim; rejecting them
/// is left to the persistence layer.
pub fn date_parts_to_iso(parts: &DateParts) -> Option<String> {
    if !parts.has_year() {
        return None;
    }

    let mut iso = match parts.year.trim().parse::<i64>() {
        Ok(value) if (0..=9999).contains(&value) => format!("{value:04}"),
        Ok(value) if value < 0 => format!("-{:06}", value.unsigned_abs()),
        Ok(value) => format!("+{value:06}"),
        Err(_) => parts.year.clone(),
    };

    let month = parts.month.trim();
    if month.is_empty() {
        return Some(iso);
    }
    iso.push('-');
    iso.push_str(&pad_two(month));

    let day = parts.day.trim();
    if !day.is_empty() {
        iso.push('-');
        iso.push_str(&pad_two(day));
    }
    Some(iso)
}

/// Calendar date for complete, numeric date parts.
pub fn date_parts_to_naive_date(parts: &DateParts) -> Option<NaiveDate> {
    let year = parts.year.trim().parse().ok()?;
    let month = parts.month.trim().parse().ok()?;
    let day = parts.day.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// True when all three parts were entered.
pub fn is_complete(parts: &DateParts) -> bool {
    parts.has_year() && !parts.month.is_empty() && !parts.day.is_empty()
}

fn normalize_year(year: &str, negative: bool) -> String {
    match year.parse::<i64>() {
        Ok(value) if negative => (-value).to_string(),
        Ok(value) => value.to_string(),
        Err(_) if negative => format!("-{year}"),
        Err(_) => year.to_string(),
    }
}

fn pad_two(value: &str) -> String {
    match value.parse::<u32>() {
        Ok(number) => format!("{number:02}"),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_date() {
        assert_eq!(iso_date_to_parts("2020-05-01"), DateParts::new("2020", "05", "01"));
    }

    #[test]
    fn parses_partial_dates() {
        assert_eq!(iso_date_to_parts("2020-05"), DateParts::new("2020", "05", ""));
        assert_eq!(iso_date_to_parts("2020"), DateParts::new("2020", "", ""));
        assert_eq!(iso_date_to_parts(""), DateParts::default());
    }

    #[test]
    fn parses_signed_years() {
        assert_eq!(iso_date_to_parts("+002020-05-01"), DateParts::new("2020", "05", "01"));
        assert_eq!(iso_date_to_parts("-000044-03-15"), DateParts::new("-44", "03", "15"));
    }

    #[test]
    fn ignores_time_component() {
        assert_eq!(
            iso_date_to_parts("2020-05-01T12:30:00Z"),
            DateParts::new("2020", "05", "01")
        );
    }

    #[test]
    fn formats_truncated_dates() {
        assert_eq!(date_parts_to_iso(&DateParts::new("2020", "", "")).as_deref(), Some("2020"));
        assert_eq!(date_parts_to_iso(&DateParts::new("2020", "5", "")).as_deref(), Some("2020-05"));
        assert_eq!(
            date_parts_to_iso(&DateParts::new("2020", "5", "1")).as_deref(),
            Some("2020-05-01")
        );
        assert_eq!(date_parts_to_iso(&DateParts::new("", "5", "1")), None);
    }

    #[test]
    fn whitespace_year_counts_as_entered() {
        assert_eq!(date_parts_to_iso(&DateParts::new(" ", "", "")).as_deref(), Some(" "));
        assert_eq!(
            date_parts_to_iso(&DateParts::new(" 1965 ", "8", "")).as_deref(),
            Some("1965-08")
        );
    }

    #[test]
    fn day_without_month_is_dropped() {
        assert_eq!(date_parts_to_iso(&DateParts::new("2020", "", "12")).as_deref(), Some("2020"));
    }

    #[test]
    fn formats_expanded_years() {
        assert_eq!(date_parts_to_iso(&DateParts::new("44", "", "")).as_deref(), Some("0044"));
        assert_eq!(
            date_parts_to_iso(&DateParts::new("-44", "3", "15")).as_deref(),
            Some("-000044-03-15")
        );
        assert_eq!(date_parts_to_iso(&DateParts::new("12000", "", "")).as_deref(), Some("+012000"));
    }

    #[test]
    fn naive_date_requires_valid_calendar_date() {
        assert_eq!(
            date_parts_to_naive_date(&DateParts::new("2020", "02", "29")),
            NaiveDate::from_ymd_opt(2020, 2, 29)
        );
        assert_eq!(date_parts_to_naive_date(&DateParts::new("2021", "02", "29")), None);
        assert_eq!(date_parts_to_naive_date(&DateParts::new("2021", "02", "")), None);
    }
}
