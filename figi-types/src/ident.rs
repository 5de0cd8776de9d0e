//! Format checks for common identifier values.
//!
//! These are offered to callers who want to reject obviously malformed input
//! before spending a request on it. The encoder itself never rejects a job.

/// ISO 6166 ISIN: two upper-case letters, nine upper-case alphanumerics and
/// a check digit that satisfies the Luhn algorithm over the expanded digits.
#[must_use]
pub fn is_valid_isin(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != 12 {
        return false;
    }
    if !b[..2].iter().all(u8::is_ascii_uppercase) {
        return false;
    }
    if !b[2..11]
        .iter()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    {
        return false;
    }
    if !b[11].is_ascii_digit() {
        return false;
    }

    // Letters expand to two digits (A=10 .. Z=35).
    let mut digits: Vec<u8> = Vec::with_capacity(24);
    for &c in b {
        if c.is_ascii_digit() {
            digits.push(c - b'0');
        } else {
            let v = c - b'A' + 10;
            digits.push(v / 10);
            digits.push(v % 10);
        }
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                let x = d * 2;
                if x > 9 { x - 9 } else { x }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// FIGI shape: `BBG` followed by nine upper-case alphanumerics.
#[must_use]
pub fn is_valid_figi(s: &str) -> bool {
    s.len() == 12
        && s.starts_with("BBG")
        && s.bytes()
            .skip(3)
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
}

/// Three upper-case ASCII letters, e.g. `USD`.
#[must_use]
pub fn is_valid_currency_code(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|c| c.is_ascii_uppercase())
}
