use std::process::Command;
use thiserror::Error;

/// ASCII unit separator — a delimiter that cannot appear in git log fields
const LOG_DELIMITER: char = '\x1f';

/// Errors from read-only queries against the git binary
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Not in a git repository")]
    RepositoryNotFound,
    #[error("Branch '{0}' does not exist")]
    BranchNotFound(String),
    #[error("git query failed: {0}")]
    QueryFailed(String),
}

/// One commit as reported by `git log`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full hex commit id
    pub hash: String,
    /// One-line summary, arbitrary Unicode
    pub subject: String,
    /// Author display name
    pub author: String,
    /// ISO-8601 date, day precision (`--date=short`)
    pub date: String,
}

/// One `git log --grep` hit: hash, subject, and the raw `%D` ref list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrepHit {
    pub hash: String,
    pub subject: String,
    pub refs: String,
}

/// Run a git command and return its stdout on success
fn run_git(args: &[&str]) -> Result<String, GitError> {
    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|e| GitError::QueryFailed(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::QueryFailed(stderr.trim().to_string()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a git command only for its exit status
fn git_succeeds(args: &[&str]) -> bool {
    Command::new("git")
        .args(args)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Check whether the working directory is inside a git repository
pub fn is_git_repo() -> bool {
    git_succeeds(&["rev-parse", "--git-dir"])
}

/// Check whether a branch exists: local heads first, then origin
/// remote-tracking branches, then any raw revision
pub fn branch_exists(name: &str) -> bool {
    git_succeeds(&["show-ref", "--verify", "--quiet", &format!("refs/heads/{}", name)])
        || git_succeeds(&[
            "show-ref",
            "--verify",
            "--quiet",
            &format!("refs/remotes/origin/{}", name),
        ])
        || git_succeeds(&["rev-parse", "--verify", "--quiet", name])
}

/// Validate the working directory and both branch names before any query
pub fn resolve_branches(branch_a: &str, branch_b: &str) -> Result<(), GitError> {
    if !is_git_repo() {
        return Err(GitError::RepositoryNotFound);
    }
    for name in [branch_a, branch_b] {
        if !branch_exists(name) {
            return Err(GitError::BranchNotFound(name.to_string()));
        }
    }
    Ok(())
}

/// Commits reachable from `branch_a` but not from `branch_b`, by hash
pub fn divergent_commits(branch_a: &str, branch_b: &str) -> Result<Vec<CommitRecord>, GitError> {
    let format = format!(
        "--pretty=format:%H{d}%s{d}%an{d}%ad",
        d = LOG_DELIMITER
    );
    let exclude = format!("^{}", branch_b);
    let out = run_git(&["log", &format, "--date=short", branch_a, &exclude])?;
    Ok(out.lines().filter_map(parse_log_line).collect())
}

fn parse_log_line(line: &str) -> Option<CommitRecord> {
    let mut parts = line.splitn(4, LOG_DELIMITER);
    Some(CommitRecord {
        hash: parts.next()?.to_string(),
        subject: parts.next()?.to_string(),
        author: parts.next()?.to_string(),
        date: parts.next()?.to_string(),
    })
}

/// Raw subject line of every commit reachable from the branch
pub fn all_subjects(branch: &str) -> Result<Vec<String>, GitError> {
    let out = run_git(&["log", "--pretty=format:%s", branch])?;
    Ok(out.lines().map(str::to_string).collect())
}

/// Full patch for one commit: diff plus stat, like `git show`
pub fn full_patch(hash: &str) -> Result<String, GitError> {
    run_git(&["show", "--stat", "--patch", hash])
}

/// Full commit message body
pub fn full_message(hash: &str) -> Result<String, GitError> {
    let out = run_git(&["show", "--no-patch", "--format=%B", hash])?;
    Ok(out.trim_end().to_string())
}

/// Commits across branches (or all refs) whose message matches `text`
pub fn grep_messages(search_all: bool, text: &str) -> Result<Vec<GrepHit>, GitError> {
    let scope = if search_all { "--all" } else { "--branches" };
    let format = format!("--pretty=format:%H{d}%s{d}%D", d = LOG_DELIMITER);
    let out = run_git(&["log", scope, "--grep", text, &format])?;

    Ok(out
        .lines()
        .filter_map(|line| {
            let mut parts = line.splitn(3, LOG_DELIMITER);
            Some(GrepHit {
                hash: parts.next()?.to_string(),
                subject: parts.next()?.to_string(),
                refs: parts.next()?.to_string(),
            })
        })
        .collect())
}
