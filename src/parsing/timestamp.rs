//! Bracketed timestamp parsing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Two-digit years are always read as `2000 + YY`.
pub const CENTURY: i32 = 2000;

const DELIMITERS: [char; 6] = ['.', ':', '(', ',', ' ', ')'];

/// Parses `[DD.MM.YY, HH:MM:SS]` into a naive datetime.
///
/// The inner text is split on `. : ( , space )`, which yields seven tokens:
/// day, month, year, an empty token between `,` and the space, hours,
/// minutes and seconds.
///
/// Fields past their range roll over into the next unit, so `30.02.23`
/// is the 2nd of March and `24:00:00` is midnight of the following day.
/// Returns `None` when the shape is off, a token isn't a number, or the
/// result falls outside the representable range.
///
/// # Example
///
/// ```rust
/// use wagroup::parsing::parse_timestamp;
///
/// let date = parse_timestamp("[01.02.23, 14:05:00]").unwrap();
/// assert_eq!(date.to_string(), "2023-02-01 14:05:00");
///
/// let date = parse_timestamp("[30.02.23, 14:05:00]").unwrap();
/// assert_eq!(date.to_string(), "2023-03-02 14:05:00");
/// ```
pub fn parse_timestamp(bracketed: &str) -> Option<NaiveDateTime> {
    let inner = bracketed.strip_prefix('[')?.strip_suffix(']')?;
    let tokens: Vec<&str> = inner.split(DELIMITERS).collect();

    let [day, month, year, _, hours, minutes, seconds] = tokens.as_slice() else {
        return None;
    };

    let year = CENTURY.checked_add(year.parse().ok()?)?;
    let month: i64 = month.parse().ok()?;
    let day: i64 = day.parse().ok()?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    let seconds: i64 = seconds.parse().ok()?;

    // Months count from zero here so that month 13 is January of next year.
    let months = i64::from(year).checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let first_of_month = NaiveDate::from_ymd_opt(
        i32::try_from(months.div_euclid(12)).ok()?,
        u32::try_from(months.rem_euclid(12)).ok()? + 1,
        1,
    )?;

    let time_of_day = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;

    first_of_month
        .and_time(NaiveTime::MIN)
        .checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)?
        .checked_add_signed(TimeDelta::try_seconds(time_of_day)?)
}
