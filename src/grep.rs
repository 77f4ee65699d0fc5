use crate::config::GtConfig;
use crate::git::{self, GitError, GrepHit};
use anyhow::Result;
use std::collections::HashSet;

/// List branch/commit pairs whose commit message matches `text`
pub fn run(search_all: bool, text: &str, config: &GtConfig) -> Result<()> {
    if !git::is_git_repo() {
        return Err(GitError::RepositoryNotFound.into());
    }
    let hits = git::grep_messages(search_all, text)?;
    for line in format_hits(&hits, config) {
        println!("{}", line);
    }
    Ok(())
}

/// One output line per distinct (ref, hash) pair, tags skipped
fn format_hits(hits: &[GrepHit], config: &GtConfig) -> Vec<String> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut out = Vec::new();
    let color = config.display.color;

    for hit in hits {
        let prefix = &hit.hash[..hit.hash.len().min(config.display.hash_length)];
        for raw in hit.refs.split(',') {
            let Some(branch) = clean_ref(raw) else {
                continue;
            };
            if !seen.insert((branch.clone(), hit.hash.clone())) {
                continue;
            }
            if color {
                out.push(format!(
                    "\x1b[33m{}\x1b[0m {} \x1b[32m{}\x1b[0m",
                    prefix, branch, hit.subject
                ));
            } else {
                out.push(format!("{} {} {}", prefix, branch, hit.subject));
            }
        }
    }
    out
}

/// Clean one entry of a `%D` ref list: drop tags, resolve `HEAD -> branch`
fn clean_ref(raw: &str) -> Option<String> {
    let entry = raw.trim();
    if entry.is_empty() || entry.starts_with("tag: ") {
        return None;
    }
    match entry.find("->") {
        Some(idx) => Some(entry[idx + 2..].trim().to_string()),
        None => Some(entry.to_string()),
    }
}
