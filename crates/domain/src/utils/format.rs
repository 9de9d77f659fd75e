//! Human-readable number formatting

/// Format a follower count compactly: `999`, `1.2K`, `3M`, `1.5B`.
///
/// One decimal place, with a trailing `.0` dropped.
pub fn format_count(count: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for (scale, suffix) in UNITS {
        if count >= scale {
            let scaled = format!("{:.1}", count as f64 / scale as f64);
            let trimmed = scaled.strip_suffix(".0").unwrap_or(&scaled);
            return format!("{trimmed}{suffix}");
        }
    }
    count.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_are_verbatim() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn thousands_and_millions() {
        assert_eq!(format_count(1_000), "1K");
        assert_eq!(format_count(1_234), "1.2K");
        assert_eq!(format_count(45_200), "45.2K");
        assert_eq!(format_count(1_500_000), "1.5M");
        assert_eq!(format_count(3_000_000), "3M");
    }

    #[test]
    fn billions() {
        assert_eq!(format_count(2_000_000_000), "2B");
        assert_eq!(format_count(1_100_000_000), "1.1B");
    }
}
