use crate::config::GtConfig;
use crate::git::CommitRecord;

// ANSI color codes for the non-interactive report
const RESET: &str = "\x1b[0m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color, text, RESET)
    } else {
        text.to_string()
    }
}

fn hash_prefix(hash: &str, len: usize) -> &str {
    &hash[..hash.len().min(len)]
}

/// Build the plain-text report for a reconciled commit list
pub fn render_report(
    commits: &[CommitRecord],
    branch_a: &str,
    branch_b: &str,
    config: &GtConfig,
) -> String {
    let mut out = String::new();
    let color = config.display.color;

    out.push_str(&format!(
        "Finding commits in '{}' that are missing from '{}'...\n\n",
        branch_a, branch_b
    ));

    if commits.is_empty() {
        out.push_str(&format!(
            "No missing commits found. Branch '{}' is up to date with '{}'.\n",
            branch_b, branch_a
        ));
        return out;
    }

    out.push_str(&format!("Found {} missing commit(s):\n\n", commits.len()));

    for commit in commits {
        out.push_str(&format!(
            "{} {} ({}, {})\n",
            paint(
                hash_prefix(&commit.hash, config.display.hash_length),
                YELLOW,
                color
            ),
            commit.subject,
            paint(&commit.author, GREEN, color),
            paint(&commit.date, CYAN, color),
        ));
    }

    // Full hashes in the command, and oldest first, so the user can paste
    // it as-is without cherry-pick conflicts
    let hashes: Vec<&str> = commits.iter().map(|c| c.hash.as_str()).collect();
    out.push_str(&format!(
        "\nTo apply these commits to branch '{}', you can (in order!):\n",
        branch_b
    ));
    out.push_str(&format!(
        "1. Checkout '{}': git checkout {}\n",
        branch_b, branch_b
    ));
    out.push_str(&format!(
        "2. Cherry-pick commits in order (to avoid conflicts): git cherry-pick {}\n",
        hashes.join(" ")
    ));
    out.push_str(&format!(
        "3. Or merge '{}' into '{}': git merge {}\n",
        branch_a, branch_b, branch_a
    ));
    out
}

pub fn print_report(commits: &[CommitRecord], branch_a: &str, branch_b: &str, config: &GtConfig) {
    print!("{}", render_report(commits, branch_a, branch_b, config));
}
