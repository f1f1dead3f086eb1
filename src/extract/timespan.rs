//! Parser for `[d.]hh:mm:ss[.fffffff]` time spans

/// Convert a time span to seconds.
///
/// The day and fractional second segments are optional. Returns `None` when
/// the text does not have that shape.
pub fn parse_seconds(text: &str) -> Option<f64> {
    let text = text.trim();
    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let mut parts = text.split(':');
    let (head, minutes, seconds) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let (days, hours) = match head.split_once('.') {
        Some((days, hours)) => (whole(days)?, whole(hours)?),
        None => (0, whole(head)?),
    };
    let minutes = whole(minutes)?;

    let (seconds, fraction) = match seconds.split_once('.') {
        Some((seconds, fraction)) => (whole(seconds)?, fractional(fraction)?),
        None => (whole(seconds)?, 0.0),
    };

    let total = days as f64 * 86_400.0
        + hours as f64 * 3_600.0
        + minutes as f64 * 60.0
        + seconds as f64
        + fraction;
    Some(if negative { -total } else { total })
}

fn whole(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn fractional(digits: &str) -> Option<f64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    format!("0.{}", digits).parse().ok()
}
