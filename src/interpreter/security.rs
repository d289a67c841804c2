//! Input deny-list
//!
//! Cosmetic "secure system" flavor, not real sandboxing: the filter looks
//! at the literal text typed, nothing more. Rejected lines get a fixed
//! admin-style warning and change no state.

/// Warning printed for any rejected line
pub const INTEGRITY_WARNING: &str = "Nice try... but this system is secured by LawithanX.";

/// Markup/script-injection fragments that get a line rejected, matched
/// case-insensitively as substrings
const DENY_LIST: &[&str] = &[
    "<script>",
    "</script>",
    "onerror",
    "onload",
    "eval(",
    "alert(",
    "document.",
    "window.",
];

/// Returns true when the line passes the filter
pub fn check_integrity(input: &str) -> bool {
    let lowered = input.to_lowercase();
    !DENY_LIST.iter().any(|pattern| lowered.contains(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_commands_pass() {
        assert!(check_integrity("list"));
        assert!(check_integrity("1"));
        assert!(check_integrity("back"));
        assert!(check_integrity("hello world"));
    }

    #[test]
    fn script_tags_are_rejected_case_insensitively() {
        assert!(!check_integrity("<script>hack()</script>"));
        assert!(!check_integrity("<SCRIPT>"));
        assert!(!check_integrity("</ScRiPt>"));
    }

    #[test]
    fn handler_attributes_and_calls_are_rejected() {
        assert!(!check_integrity("img onerror=x"));
        assert!(!check_integrity("body ONLOAD=y"));
        assert!(!check_integrity("eval(payload)"));
        assert!(!check_integrity("alert(1)"));
    }

    #[test]
    fn global_object_references_are_rejected() {
        assert!(!check_integrity("document.cookie"));
        assert!(!check_integrity("window.location"));
    }
}
