/// Number of selectable years: the current one and the five before it.
pub const PERIOD_WINDOW_YEARS: i32 = 6;

/// One entry of the period dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodOption {
    /// The 4-digit year string sent back on selection.
    pub value: String,
    /// What the dropdown shows: "This Year" for the current year, the
    /// literal year text for the rest.
    pub label: String,
}

/// The fixed selection window, newest first. A pure function of the injected
/// current year; callers regenerate it per render pass instead of keeping it
/// as state.
pub fn period_options(current_year: i32) -> Vec<PeriodOption> {
    (0..PERIOD_WINDOW_YEARS)
        .map(|offset| {
            let year = current_year - offset;
            PeriodOption {
                value: year.to_string(),
                label: if offset == 0 {
                    "This Year".to_string()
                } else {
                    year.to_string()
                },
            }
        })
        .collect()
}

/// Whether `value` is a 4-digit year inside the selection window.
pub fn is_selectable_period(value: &str, current_year: i32) -> bool {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match value.parse::<i32>() {
        Ok(year) => year <= current_year && year > current_year - PERIOD_WINDOW_YEARS,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_six_years_newest_first() {
        let options = period_options(2025);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["2025", "2024", "2023", "2022", "2021", "2020"]);
    }

    #[test]
    fn test_current_year_is_labeled_this_year() {
        let options = period_options(2025);
        assert_eq!(options[0].label, "This Year");
        assert_eq!(options[1].label, "2024");
        assert_eq!(options[5].label, "2020");
    }

    #[test]
    fn test_selectable_period_bounds() {
        assert!(is_selectable_period("2025", 2025));
        assert!(is_selectable_period("2020", 2025));
        assert!(!is_selectable_period("2019", 2025));
        assert!(!is_selectable_period("2026", 2025));
    }

    #[test]
    fn test_selectable_period_rejects_non_years() {
        for value in ["", "25", "20255", "two thousand", "20a5", "-125"] {
            assert!(!is_selectable_period(value, 2025), "value: {value:?}");
        }
    }
}
