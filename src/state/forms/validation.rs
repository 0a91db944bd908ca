//! Per-field validation rules for the job posting form
//!
//! Each function returns the inline message for the first rule the value
//! breaks, or `None` when the value passes. Rules never look at other
//! fields except where the contract requires it (max vs min salary).

use chrono::NaiveDate;

/// Format accepted by the deadline field
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

fn is_letters_and_whitespace(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_title(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Job title is required".to_string());
    }
    if value.chars().count() < 3 {
        return Some("Min 3 characters".to_string());
    }
    if !is_letters_and_whitespace(value) {
        return Some("Only letters allowed".to_string());
    }
    None
}

pub fn validate_company_name(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Company name is required".to_string());
    }
    if value.chars().count() < 2 {
        return Some("Min 2 characters".to_string());
    }
    None
}

pub fn validate_location(value: &str, options: &[String]) -> Option<String> {
    if value.is_empty() || !options.iter().any(|o| o == value) {
        return Some("Location is required".to_string());
    }
    None
}

pub fn validate_job_type(value: &str, options: &[String]) -> Option<String> {
    if value.is_empty() || !options.iter().any(|o| o == value) {
        return Some("Job type is required".to_string());
    }
    None
}

pub fn validate_min_salary(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Min salary is required".to_string());
    }
    if !is_digits(value) {
        return Some("Only numbers allowed".to_string());
    }
    None
}

/// Max salary must be digits and strictly greater than the min salary.
/// The comparison only applies once both values parse; a broken min
/// salary carries its own message.
pub fn validate_max_salary(value: &str, min_salary: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Max salary is required".to_string());
    }
    if !is_digits(value) {
        return Some("Only numbers allowed".to_string());
    }
    if let (Ok(max), Ok(min)) = (value.parse::<u64>(), min_salary.parse::<u64>()) {
        if max <= min {
            return Some("Max salary must be greater than min salary".to_string());
        }
    }
    None
}

pub fn validate_deadline(value: &str, today: NaiveDate) -> Option<String> {
    if value.is_empty() {
        return Some("Application deadline is required".to_string());
    }
    match NaiveDate::parse_from_str(value, DEADLINE_FORMAT) {
        Ok(date) if date < today => Some("Deadline cannot be in the past".to_string()),
        Ok(_) => None,
        Err(_) => Some("Enter a valid date (YYYY-MM-DD)".to_string()),
    }
}

pub fn validate_description(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Job description is required".to_string());
    }
    if value.chars().count() < 10 {
        return Some("Min 10 characters required".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["Remote".to_string(), "Chennai".to_string()]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
    }

    mod title {
        use super::*;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(validate_title(""), Some("Job title is required".to_string()));
        }

        #[test]
        fn test_too_short() {
            assert_eq!(validate_title("Go"), Some("Min 3 characters".to_string()));
        }

        #[test]
        fn test_digits_rejected() {
            assert_eq!(
                validate_title("Dev 2"),
                Some("Only letters allowed".to_string())
            );
        }

        #[test]
        fn test_punctuation_rejected() {
            assert_eq!(
                validate_title("C++ Developer"),
                Some("Only letters allowed".to_string())
            );
        }

        #[test]
        fn test_letters_and_spaces_pass() {
            assert_eq!(validate_title("Full Stack Developer"), None);
        }
    }

    mod company_name {
        use super::*;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(
                validate_company_name(""),
                Some("Company name is required".to_string())
            );
        }

        #[test]
        fn test_single_char_too_short() {
            assert_eq!(
                validate_company_name("A"),
                Some("Min 2 characters".to_string())
            );
        }

        #[test]
        fn test_two_chars_pass() {
            assert_eq!(validate_company_name("GE"), None);
        }
    }

    mod option_sets {
        use super::*;

        #[test]
        fn test_empty_location_is_required() {
            assert_eq!(
                validate_location("", &options()),
                Some("Location is required".to_string())
            );
        }

        #[test]
        fn test_unknown_location_rejected() {
            assert_eq!(
                validate_location("Atlantis", &options()),
                Some("Location is required".to_string())
            );
        }

        #[test]
        fn test_member_location_passes() {
            assert_eq!(validate_location("Chennai", &options()), None);
        }

        #[test]
        fn test_job_type_mirrors_location_rules() {
            assert_eq!(
                validate_job_type("", &options()),
                Some("Job type is required".to_string())
            );
            assert_eq!(validate_job_type("Remote", &options()), None);
        }
    }

    mod salaries {
        use super::*;

        #[test]
        fn test_min_empty_is_required() {
            assert_eq!(
                validate_min_salary(""),
                Some("Min salary is required".to_string())
            );
        }

        #[test]
        fn test_min_non_digits_rejected() {
            assert_eq!(
                validate_min_salary("50k"),
                Some("Only numbers allowed".to_string())
            );
        }

        #[test]
        fn test_min_digits_pass() {
            assert_eq!(validate_min_salary("50000"), None);
        }

        #[test]
        fn test_max_equal_to_min_rejected() {
            assert_eq!(
                validate_max_salary("50000", "50000"),
                Some("Max salary must be greater than min salary".to_string())
            );
        }

        #[test]
        fn test_max_one_above_min_passes() {
            assert_eq!(validate_max_salary("50001", "50000"), None);
        }

        #[test]
        fn test_max_below_min_rejected() {
            assert_eq!(
                validate_max_salary("40000", "50000"),
                Some("Max salary must be greater than min salary".to_string())
            );
        }

        #[test]
        fn test_max_with_unparseable_min_keeps_own_rules_only() {
            assert_eq!(validate_max_salary("40000", "fifty"), None);
        }
    }

    mod deadline {
        use super::*;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(
                validate_deadline("", today()),
                Some("Application deadline is required".to_string())
            );
        }

        #[test]
        fn test_garbage_is_invalid() {
            assert_eq!(
                validate_deadline("next tuesday", today()),
                Some("Enter a valid date (YYYY-MM-DD)".to_string())
            );
        }

        #[test]
        fn test_partial_date_is_invalid() {
            assert_eq!(
                validate_deadline("2026-09", today()),
                Some("Enter a valid date (YYYY-MM-DD)".to_string())
            );
        }

        #[test]
        fn test_yesterday_rejected() {
            assert_eq!(
                validate_deadline("2026-08-03", today()),
                Some("Deadline cannot be in the past".to_string())
            );
        }

        #[test]
        fn test_today_passes() {
            assert_eq!(validate_deadline("2026-08-04", today()), None);
        }

        #[test]
        fn test_future_passes() {
            assert_eq!(validate_deadline("2026-12-31", today()), None);
        }
    }

    mod description {
        use super::*;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(
                validate_description(""),
                Some("Job description is required".to_string())
            );
        }

        #[test]
        fn test_nine_chars_too_short() {
            assert_eq!(
                validate_description("Too short"),
                Some("Min 10 characters required".to_string())
            );
        }

        #[test]
        fn test_ten_chars_pass() {
            assert_eq!(validate_description("Just right"), None);
        }
    }
}
