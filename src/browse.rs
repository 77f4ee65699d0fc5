use crate::config::GtConfig;
use crate::git::{self, CommitRecord};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Step-through browsing on plain stdin/stdout: one commit at a time with
/// its full message, patch on request. No raw mode, works over pipes.
pub fn run(
    commits: &[CommitRecord],
    branch_a: &str,
    branch_b: &str,
    config: &GtConfig,
) -> Result<()> {
    if commits.is_empty() {
        println!(
            "No missing commits found. Branch '{}' is up to date with '{}'.",
            branch_b, branch_a
        );
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut index = 0usize;

    loop {
        let commit = &commits[index];
        print_commit(commit, index, commits.len(), config);

        print!("[Enter] next  [p] patch  [b] back  [q] quit > ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // stdin closed (piped input ran out)
            return Ok(());
        };
        match line?.trim() {
            "" | "n" => {
                if index + 1 >= commits.len() {
                    println!("\nDone. {} commit(s) reviewed.", commits.len());
                    return Ok(());
                }
                index += 1;
            }
            "b" => index = index.saturating_sub(1),
            "p" => match git::full_patch(&commit.hash) {
                Ok(patch) => println!("\n{}", patch),
                Err(err) => println!("\nError getting patch: {}", err),
            },
            "q" => return Ok(()),
            _ => {}
        }
    }
}

fn print_commit(commit: &CommitRecord, index: usize, total: usize, config: &GtConfig) {
    let prefix = &commit.hash[..commit.hash.len().min(config.display.hash_length)];
    println!("\n{}", "─".repeat(60));
    println!(
        "Commit {}/{}: {} ({}, {})",
        index + 1,
        total,
        prefix,
        commit.author,
        commit.date
    );
    println!("{}", "─".repeat(60));

    match git::full_message(&commit.hash) {
        Ok(message) => println!("{}\n", message),
        Err(_) => println!("{}\n", commit.subject),
    }
    println!("Apply with: git cherry-pick {}", commit.hash);
}
