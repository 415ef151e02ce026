use chrono::{Datelike, NaiveDate};
use uuid::Uuid;
use validator::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 8;
const MAX_PASSWORD_LEN: usize = 128;

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();

    if len < MIN_PASSWORD_LEN {
        return Err(error("password_too_short", "Enter a strong password"));
    }

    if len > MAX_PASSWORD_LEN {
        return Err(error("password_too_long", "Password is too long"));
    }

    Ok(())
}

/// Slot dates travel as `D_M_YYYY` (no zero padding), e.g. `5_6_2025`.
/// Parts must be plain digits; padded parts still parse.
pub fn parse_slot_date(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split('_');
    let day = digits(parts.next()?)?;
    let month = digits(parts.next()?)?;
    let year = digits(parts.next()?)?;

    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// The one key a calendar date is booked under.
pub fn canonical_slot_date(input: &str) -> Option<String> {
    parse_slot_date(input).map(|d| format!("{}_{}_{}", d.day(), d.month(), d.year()))
}

fn digits(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

pub fn validate_slot_date(input: &str) -> Result<(), ValidationError> {
    parse_slot_date(input)
        .map(|_| ())
        .ok_or_else(|| error("invalid_slot_date", "Invalid slot date"))
}

pub fn validate_not_blank(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(error("blank", "Missing Details"));
    }
    Ok(())
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Client ids arrive as plain strings; anything that is not a UUID cannot
/// name a stored row.
pub fn parse_id(input: &str) -> Option<Uuid> {
    Uuid::parse_str(input.trim()).ok()
}

pub fn is_blank(input: Option<&str>) -> bool {
    input.map(|s| s.trim().is_empty()).unwrap_or(true)
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}
