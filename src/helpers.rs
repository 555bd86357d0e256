use chrono::{Datelike, Duration, NaiveDate};

/// Relative change from `before` to `after` in percent. `None` when `before`
/// is zero.
pub fn percent_change(before: u32, after: u32) -> Option<f64> {
    if before == 0 {
        return None;
    }
    Some((after as f64 - before as f64) / before as f64 * 100.0)
}

/// `+12`, `-3`, `+0`.
pub fn signed(delta: i64) -> String {
    format!("{:+}", delta)
}

pub fn signed_pct(change: Option<f64>) -> String {
    match change {
        Some(p) => format!("{:+.1}%", p),
        None => "n/a".to_string(),
    }
}

pub fn delta(before: u32, after: u32) -> i64 {
    after as i64 - before as i64
}

/// Last `n` characters of a node name, used as chart labels.
pub fn tail(name: &str, n: usize) -> &str {
    let start = name
        .char_indices()
        .rev()
        .nth(n.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    &name[start..]
}

/// One decimal, without a trailing `.0`.
pub fn compact(v: f64) -> String {
    let s = format!("{:.1}", v);
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}

/// Weekly (Sunday) dates from `start` to `end` inclusive.
pub fn weekly_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let offset = (7 - start.weekday().num_days_from_sunday()) % 7;
    let mut d = start + Duration::days(offset as i64);
    let mut out = Vec::new();
    while d <= end {
        out.push(d);
        d += Duration::weeks(1);
    }
    out
}

/// Deterministic wobble in `[-spread, spread]` for point `i`, so trend lines
/// look measured while rendering stays reproducible.
pub fn wobble(i: usize, spread: f64) -> f64 {
    const PATTERN: [f64; 8] = [0.2, -0.5, 0.7, -0.1, 0.4, -0.8, 0.1, -0.3];
    PATTERN[i % PATTERN.len()] * spread
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_guards_zero_denominator() {
        assert_eq!(percent_change(0, 10), None);
        let p = percent_change(11342, 8567).unwrap();
        assert!((p - -24.466).abs() < 0.01, "{}", p);
        assert_eq!(signed_pct(Some(p)), "-24.5%");
        assert_eq!(signed_pct(None), "n/a");
    }

    #[test]
    fn signed_formatting() {
        assert_eq!(signed(-2775), "-2775");
        assert_eq!(signed(3), "+3");
        assert_eq!(signed(0), "+0");
        assert_eq!(delta(15, 18), 3);
    }

    #[test]
    fn tail_takes_trailing_chars() {
        assert_eq!(tail("aks-easv4serina-28315746-vmss0000bm", 8), "ss0000bm");
        assert_eq!(tail("aks-easv4serina-28315746-vmss0000bm", 2), "bm");
        assert_eq!(tail("ab", 8), "ab");
    }

    #[test]
    fn compact_drops_trailing_zero() {
        assert_eq!(compact(2.0), "2");
        assert_eq!(compact(1.2), "1.2");
        assert_eq!(compact(3.7), "3.7");
    }

    #[test]
    fn weekly_dates_cover_2024_sundays() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let dates = weekly_dates(start, end);
        assert_eq!(dates.len(), 52);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
        assert_eq!(dates[51], NaiveDate::from_ymd_opt(2024, 12, 29).unwrap());
    }

    #[test]
    fn wobble_is_bounded_and_repeatable() {
        for i in 0..52 {
            assert!(wobble(i, 20.0).abs() <= 20.0);
            assert_eq!(wobble(i, 20.0), wobble(i, 20.0));
        }
    }
}
