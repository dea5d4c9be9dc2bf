//! Input masks applied on every keystroke.

/// Maximum digits kept in the CRM field.
pub const CRM_MAX_LEN: usize = 5;
/// Maximum digits kept in the matrícula field.
pub const MATRICULA_MAX_LEN: usize = 7;
/// `DDMMYYYY`.
pub const BIRTH_DATE_MAX_DIGITS: usize = 8;

/// Accept `raw` only if it is made of ASCII digits, keeping at most `max_len`
/// of them. Returns `None` when the edit must be rejected.
pub fn digits_capped(raw: &str, max_len: usize) -> Option<String> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(raw[..raw.len().min(max_len)].to_string())
}

/// Progressive `DD/MM/YYYY` mask.
///
/// Every non-digit is dropped, the remaining digits are capped at eight and a
/// separator is only emitted once the group before it is complete, so the
/// result is always one of `D`, `DD/`, `DD/M`, `DD/MM/`, `DD/MM/Y..YYYY`.
/// Dates are not checked against the calendar.
pub fn mask_birth_date(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(BIRTH_DATE_MAX_DIGITS)
        .collect();

    let day = &digits[..digits.len().min(2)];
    let month = &digits[day.len()..digits.len().min(4)];
    let year = &digits[day.len() + month.len()..];

    let mut masked = String::with_capacity(10);
    masked.push_str(day);
    if day.len() == 2 {
        masked.push('/');
    }
    masked.push_str(month);
    if month.len() == 2 {
        masked.push('/');
    }
    masked.push_str(year);
    masked
}
