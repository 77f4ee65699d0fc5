use crate::git::{self, CommitRecord, GitError};
use std::collections::HashSet;

/// Canonicalize a commit subject for content-equivalence comparison:
/// trim, drop non-printable code points, collapse whitespace runs
/// (including tabs and newlines) to one space.
///
/// Rebased or cherry-picked commits keep their subject but change their
/// hash, so normalized subjects are the second signal for "same commit".
pub fn normalize_subject(subject: &str) -> String {
    // Whitespace must survive the non-printable strip so that tab- or
    // newline-separated words collapse to single spaces instead of fusing
    let cleaned: String = subject
        .chars()
        .filter(|&c| c.is_whitespace() || !(c.is_control() || is_format_char(c)))
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Unicode format characters (category Cf): zero-width and directional
/// marks that never render on their own
fn is_format_char(c: char) -> bool {
    matches!(
        u32::from(c),
        0x00AD
            | 0x0600..=0x0605
            | 0x061C
            | 0x06DD
            | 0x070F
            | 0x0890..=0x0891
            | 0x08E2
            | 0x180E
            | 0x200B..=0x200F
            | 0x202A..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
    )
}

/// Second filter stage: drop divergent commits whose normalized subject
/// already occurs in the target branch (cherry-picked under a new hash).
pub fn filter_missing(
    divergent: Vec<CommitRecord>,
    target_subjects: &HashSet<String>,
) -> Vec<CommitRecord> {
    divergent
        .into_iter()
        .filter(|c| !target_subjects.contains(&normalize_subject(&c.subject)))
        .collect()
}

/// Oldest first, so cherry-picking in result order avoids conflicts.
/// sort_by is stable: date ties keep the original query order.
pub fn sort_by_date(commits: &mut [CommitRecord]) {
    commits.sort_by(|a, b| a.date.cmp(&b.date));
}

/// Commits reachable from `branch_a` that are missing from `branch_b`
/// both by hash and by normalized subject, oldest first.
///
/// Any gateway error aborts the whole reconciliation; no partial result
/// is ever returned.
pub fn reconcile(branch_a: &str, branch_b: &str) -> Result<Vec<CommitRecord>, GitError> {
    let divergent = git::divergent_commits(branch_a, branch_b)?;
    if divergent.is_empty() {
        // Nothing differs by hash, skip the subject query entirely
        return Ok(Vec::new());
    }

    let target_subjects: HashSet<String> = git::all_subjects(branch_b)?
        .iter()
        .map(|s| normalize_subject(s))
        .collect();

    let mut missing = filter_missing(divergent, &target_subjects);
    sort_by_date(&mut missing);
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(hash: &str, subject: &str, date: &str) -> CommitRecord {
        CommitRecord {
            hash: hash.to_string(),
            subject: subject.to_string(),
            author: "Test Author".to_string(),
            date: date.to_string(),
        }
    }

    // ── normalize_subject ──

    #[test]
    fn normalize_trims_and_collapses() {
        assert_eq!(normalize_subject("  a\tb\n\x01c  "), "a b c");
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = ["  Fix   bug ", "a\tb", "", "  \x07beep  ", "déjà\u{a0}vu"];
        for s in inputs {
            let once = normalize_subject(s);
            assert_eq!(normalize_subject(&once), once, "input {:?}", s);
        }
    }

    #[test]
    fn normalize_empty_maps_to_empty() {
        assert_eq!(normalize_subject(""), "");
        assert_eq!(normalize_subject("   \t\n  "), "");
    }

    #[test]
    fn normalize_collapses_interior_tab_and_newline_runs() {
        // Tabs and newlines are control characters but must collapse to
        // spaces, not vanish and fuse the words around them
        assert_eq!(normalize_subject("a\t\tb"), "a b");
        assert_eq!(normalize_subject("a\nb\r\nc"), "a b c");
        assert_eq!(
            normalize_subject("Fix\tthe widget"),
            normalize_subject("Fix the widget")
        );
    }

    #[test]
    fn normalize_strips_format_characters() {
        // Zero-width and directional marks don't render, so a subject
        // differing only by them is the same subject
        assert_eq!(normalize_subject("Fix\u{200d} bug"), "Fix bug");
        assert_eq!(normalize_subject("\u{feff}Fix bug"), "Fix bug");
        assert_eq!(
            normalize_subject("Fix\u{200b} bug"),
            normalize_subject("Fix bug")
        );
    }

    #[test]
    fn normalize_collapses_unicode_whitespace() {
        // U+00A0 is whitespace but not a control character
        assert_eq!(normalize_subject("a\u{a0}\u{a0}b"), "a b");
    }

    #[test]
    fn normalize_keeps_printable_unicode() {
        assert_eq!(normalize_subject("Fix café 🎉"), "Fix café 🎉");
    }

    // ── filter_missing ──

    fn subject_set(subjects: &[&str]) -> HashSet<String> {
        subjects.iter().map(|s| normalize_subject(s)).collect()
    }

    #[test]
    fn cherry_picked_subject_is_filtered_out() {
        // Same subject lives in the target under a different hash
        let divergent = vec![commit("aaaa1111", "Fix bug", "2024-01-01")];
        let target = subject_set(&["Fix bug"]);
        assert!(filter_missing(divergent, &target).is_empty());
    }

    #[test]
    fn subject_match_is_normalized_on_both_sides() {
        let divergent = vec![commit("aaaa1111", "  Fix\t bug ", "2024-01-01")];
        let target = subject_set(&["Fix bug"]);
        assert!(filter_missing(divergent, &target).is_empty());
    }

    #[test]
    fn commit_absent_by_both_signals_survives() {
        let divergent = vec![
            commit("aaaa1111", "Fix bug", "2024-01-01"),
            commit("bbbb2222", "Add feature", "2024-01-02"),
        ];
        let target = subject_set(&["Fix bug"]);
        let missing = filter_missing(divergent, &target);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].hash, "bbbb2222");
    }

    #[test]
    fn empty_divergence_stays_empty() {
        let target = subject_set(&["anything"]);
        assert!(filter_missing(Vec::new(), &target).is_empty());
    }

    #[test]
    fn empty_subjects_compare_by_the_empty_key() {
        // An empty-subject commit is filtered when the target also has one
        let divergent = vec![commit("aaaa1111", "   ", "2024-01-01")];
        let with_empty = subject_set(&[""]);
        assert!(filter_missing(divergent.clone(), &with_empty).is_empty());

        let without_empty = subject_set(&["Fix bug"]);
        assert_eq!(filter_missing(divergent, &without_empty).len(), 1);
    }

    // ── sort_by_date ──

    #[test]
    fn sorts_ascending_by_date() {
        let mut commits = vec![
            commit("c1", "third", "2024-03-01"),
            commit("c2", "first", "2024-01-15"),
            commit("c3", "second", "2024-02-10"),
        ];
        sort_by_date(&mut commits);
        let dates: Vec<&str> = commits.iter().map(|c| c.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-15", "2024-02-10", "2024-03-01"]);
    }

    #[test]
    fn date_ties_keep_query_order() {
        let mut commits = vec![
            commit("c1", "later date", "2024-02-01"),
            commit("c2", "tie a", "2024-01-01"),
            commit("c3", "tie b", "2024-01-01"),
        ];
        sort_by_date(&mut commits);
        let hashes: Vec<&str> = commits.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, ["c2", "c3", "c1"]);
    }
}
