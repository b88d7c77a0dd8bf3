//! Formatting utilities for display values.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a file size with decimal (base-1000) units.
///
/// Zero renders as `-`, bytes as an integer, larger units with two decimals.
/// The largest unit is TB, so anything beyond stays in TB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "-".to_string();
    }
    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "-");
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(999), "999 B");
        assert_eq!(format_size(1000), "1.00 KB");
        assert_eq!(format_size(1500), "1.50 KB");
        assert_eq!(format_size(2_345_678), "2.35 MB");
        assert_eq!(format_size(7_000_000_000), "7.00 GB");
        assert_eq!(format_size(3_210_000_000_000), "3.21 TB");
        assert_eq!(format_size(5_000_000_000_000_000), "5000.00 TB");
    }
}
