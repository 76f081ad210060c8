//! Month key helpers.
//!
//! Contributions are dated with `"YYYY-MM"` strings. Filtering is a plain
//! prefix match so a year key (`"2024"`) also selects a whole year.

use chrono::{Datelike, Utc};

use crate::star::Contribution;

/// Returns the contributions whose month starts with the given prefix.
pub fn contributions_for_month<'a>(
    contributions: &'a [Contribution],
    prefix: &str,
) -> Vec<&'a Contribution> {
    contributions
        .iter()
        .filter(|c| c.month.starts_with(prefix))
        .collect()
}

/// The current UTC month as a `"YYYY-MM"` key.
pub fn current_month() -> String {
    Utc::now().format("%Y-%m").to_string()
}

/// The previous UTC month as a `"YYYY-MM"` key.
pub fn previous_month() -> String {
    let now = Utc::now();
    let (year, month) = if now.month() == 1 {
        (now.year() - 1, 12)
    } else {
        (now.year(), now.month() - 1)
    };
    format!("{:04}-{:02}", year, month)
}

/// Best-effort shape check for a `"YYYY-MM"` key.
///
/// The store never enforces this; the CLI uses it to warn on typos.
pub fn looks_like_month_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    if !bytes[..4].iter().all(u8::is_ascii_digit) || !bytes[5..].iter().all(u8::is_ascii_digit) {
        return false;
    }
    matches!(&s[5..7], "01" | "02" | "03" | "04" | "05" | "06" | "07" | "08" | "09" | "10" | "11" | "12")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::ContributionKind;

    fn contribution(month: &str) -> Contribution {
        Contribution {
            kind: ContributionKind::Other,
            title: "t".into(),
            url: "https://example.com".into(),
            month: month.into(),
            description: String::new(),
        }
    }

    #[test]
    fn filter_by_exact_month() {
        let contributions = vec![
            contribution("2024-05"),
            contribution("2024-06"),
            contribution("2024-05"),
        ];
        let hits = contributions_for_month(&contributions, "2024-05");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|c| c.month == "2024-05"));
    }

    #[test]
    fn filter_by_year_prefix() {
        let contributions = vec![
            contribution("2023-12"),
            contribution("2024-01"),
            contribution("2024-11"),
        ];
        assert_eq!(contributions_for_month(&contributions, "2024").len(), 2);
    }

    #[test]
    fn empty_prefix_matches_everything() {
        let contributions = vec![contribution("2024-05"), contribution("2023-01")];
        assert_eq!(contributions_for_month(&contributions, "").len(), 2);
    }

    #[test]
    fn month_keys_are_well_formed() {
        assert!(looks_like_month_key("2024-05"));
        assert!(looks_like_month_key("1999-12"));
        assert!(!looks_like_month_key("2024-13"));
        assert!(!looks_like_month_key("2024-5"));
        assert!(!looks_like_month_key("24-05"));
        assert!(!looks_like_month_key("2024/05"));
    }

    #[test]
    fn current_and_previous_are_valid_keys() {
        assert!(looks_like_month_key(&current_month()));
        assert!(looks_like_month_key(&previous_month()));
        assert_ne!(current_month(), previous_month());
    }
}
