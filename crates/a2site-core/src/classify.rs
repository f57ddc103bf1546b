//! Interpretation of a2ensite/a2dissite output
//!
//! The tools signal "nothing to do" only through free text such as
//! `Site 000-default already enabled`. All knowledge of that phrasing lives
//! here.

use crate::error::{Result, SiteError};
use crate::models::{CommandOutcome, SiteAction, ToggleResult};
use regex::{Regex, RegexBuilder};

/// Compiled size limit for the already-state pattern
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

fn already_pattern(action: SiteAction, name: &str) -> Result<Regex> {
    let pattern = format!(r"\b{} {}", regex::escape(name), action.already_phrase());

    Ok(RegexBuilder::new(&pattern)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()?)
}

/// Whether `stdout` reports that `name` is already in the state `action`
/// would bring it to.
///
/// The name must start at a word boundary; the phrase may appear on any line.
pub fn is_already_in_state(action: SiteAction, name: &str, stdout: &str) -> Result<bool> {
    Ok(already_pattern(action, name)?.is_match(stdout))
}

/// Classify the outcome of running the management binary for `action`.
///
/// An "already" message wins over the exit code. Otherwise a non-zero exit is
/// a failure and a zero exit is a change.
pub fn classify(action: SiteAction, name: &str, outcome: &CommandOutcome) -> Result<ToggleResult> {
    if is_already_in_state(action, name, &outcome.stdout)? {
        return Ok(ToggleResult::unchanged());
    }

    if !outcome.success() {
        return Err(SiteError::CommandFailed {
            action,
            name: name.to_string(),
            stdout: outcome.stdout.clone(),
        });
    }

    Ok(ToggleResult::changed(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ToggleStatus;

    #[test]
    fn test_zero_exit_empty_output_is_change() {
        let outcome = CommandOutcome::new(0, "", "");
        let result = classify(SiteAction::Enable, "000-default", &outcome).unwrap();
        assert_eq!(result, ToggleResult { changed: true, result: ToggleStatus::Enabled });

        let result = classify(SiteAction::Disable, "000-default", &outcome).unwrap();
        assert_eq!(result, ToggleResult { changed: true, result: ToggleStatus::Disabled });
    }

    #[test]
    fn test_already_enabled_is_unchanged() {
        let outcome = CommandOutcome::new(0, "Site 000-default already enabled\n", "");
        let result = classify(SiteAction::Enable, "000-default", &outcome).unwrap();
        assert_eq!(result, ToggleResult::unchanged());
    }

    #[test]
    fn test_already_state_wins_over_exit_code() {
        let outcome = CommandOutcome::new(1, "Site mysite already disabled", "");
        let result = classify(SiteAction::Disable, "mysite", &outcome).unwrap();
        assert!(!result.changed);
        assert_eq!(result.result, ToggleStatus::Success);
    }

    #[test]
    fn test_already_phrase_on_later_line() {
        let stdout = "Considering dependency setenvif for ssl:\nSite example.com already enabled\n";
        assert!(is_already_in_state(SiteAction::Enable, "example.com", stdout).unwrap());
    }

    #[test]
    fn test_already_phrase_must_match_direction() {
        let stdout = "Site mysite already disabled";
        assert!(!is_already_in_state(SiteAction::Enable, "mysite", stdout).unwrap());
        assert!(is_already_in_state(SiteAction::Disable, "mysite", stdout).unwrap());
    }

    #[test]
    fn test_name_needs_word_boundary() {
        assert!(!is_already_in_state(
            SiteAction::Enable,
            "site",
            "Site mysite already enabled"
        )
        .unwrap());
    }

    #[test]
    fn test_name_is_matched_literally() {
        assert!(!is_already_in_state(
            SiteAction::Enable,
            "a.b",
            "Site axb already enabled"
        )
        .unwrap());
        assert!(is_already_in_state(
            SiteAction::Enable,
            "a.b",
            "Site a.b already enabled"
        )
        .unwrap());
    }

    #[test]
    fn test_nonzero_exit_is_failure_with_stdout() {
        let outcome = CommandOutcome::new(1, "ERROR: site mysite does not exist", "");
        let err = classify(SiteAction::Disable, "mysite", &outcome).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("Failed to disable site mysite"));
        assert!(msg.contains("ERROR: site mysite does not exist"));
        assert!(matches!(
            err,
            SiteError::CommandFailed { action: SiteAction::Disable, .. }
        ));
    }

    #[test]
    fn test_oversized_name_fails_instead_of_loose_match() {
        let name = "a".repeat(PATTERN_SIZE_LIMIT * 2);
        let stdout = format!("Site x{} already enabled", name);

        let err = classify(SiteAction::Enable, &name, &CommandOutcome::new(0, stdout, ""))
            .unwrap_err();
        assert!(matches!(err, SiteError::Pattern(_)));
    }
}
