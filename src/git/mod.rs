mod query;

pub use query::{
    all_subjects, divergent_commits, full_message, full_patch, grep_messages, is_git_repo,
    resolve_branches, CommitRecord, GitError, GrepHit,
};
