/// Parse a transcript timestamp into seconds.
///
/// Accepts clock form `HH:MM:SS.fff` (a comma decimal separator, as written
/// by whisper, is treated as a dot). Anything else falls back to
/// [`parse_duration`]. Empty or unparsable input yields `0.0`.
pub fn parse_time(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let dotted = trimmed.replace(',', ".");
    parse_clock(&dotted)
        .or_else(|| parse_duration(&dotted))
        .filter(|secs| secs.is_finite())
        .unwrap_or(0.0)
}

/// Same as [`parse_time`] for an optional timestamp; `None` yields `0.0`.
pub fn parse_optional_time(raw: Option<&str>) -> f64 {
    raw.map(parse_time).unwrap_or(0.0)
}

/// Strict `HH:MM:SS[.fff]`.
fn parse_clock(s: &str) -> Option<f64> {
    let mut parts = s.split(':');
    let (h, m, sec) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if !is_integer(h) || !is_integer(m) || !is_decimal(sec) {
        return None;
    }
    let h: f64 = h.parse().ok()?;
    let m: f64 = m.parse().ok()?;
    let sec: f64 = sec.parse().ok()?;
    Some(h * 3600.0 + m * 60.0 + sec)
}

/// Looser duration forms: `D.HH:MM:SS[.fff]`, `MM:SS[.fff]`, or plain
/// seconds such as `62.345`.
pub fn parse_duration(s: &str) -> Option<f64> {
    let s = s.trim();
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [secs] if is_decimal(secs) => secs.parse().ok(),
        [m, secs] if is_integer(m) && is_decimal(secs) => {
            let m: f64 = m.parse().ok()?;
            let secs: f64 = secs.parse().ok()?;
            Some(m * 60.0 + secs)
        }
        [days_hours, m, secs] => {
            let (days, hours) = days_hours.split_once('.')?;
            if !is_integer(days) || !is_integer(hours) {
                return None;
            }
            let days: f64 = days.parse().ok()?;
            let clock = parse_clock(&format!("{hours}:{m}:{secs}"))?;
            Some(days * 86_400.0 + clock)
        }
        _ => None,
    }
}

fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(s: &str) -> bool {
    match s.split_once('.') {
        Some((whole, frac)) => is_integer(whole) && (frac.is_empty() || is_integer(frac)),
        None => is_integer(s),
    }
}
