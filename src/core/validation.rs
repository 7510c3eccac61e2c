//! Field validators shared by the stores and entity builders.

/// Validates email format: local part, one `@`, a domain with at least one
/// dot and a 2+ letter final label.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'));
    if !local_ok {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validates course code format: 2-4 uppercase letters followed by 3-4
/// digits (e.g. `CS101`, `MATH1001`).
#[must_use]
pub fn is_valid_course_code(code: &str) -> bool {
    let letters = code
        .chars()
        .take_while(char::is_ascii_uppercase)
        .count();
    let digits = code.chars().skip(letters).count();

    (2..=4).contains(&letters)
        && (3..=4).contains(&digits)
        && code.chars().skip(letters).all(|c| c.is_ascii_digit())
}

/// Validates that a string is neither empty nor whitespace-only.
#[must_use]
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validates a marks value (0-100 inclusive).
#[must_use]
pub fn is_valid_marks(marks: f64) -> bool {
    (0.0..=100.0).contains(&marks)
}
