//! Git subprocess boundary.
//!
//! Every invocation runs with stdin detached and a hard timeout, so a
//! credential prompt or an unresponsive remote can never stall a batch run.
//! Timed-out processes are killed rather than orphaned.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tokio::process::Command;
use tokio::time::timeout;

/// Ceiling for `git submodule add`, which talks to the network.
const ADD_TIMEOUT: Duration = Duration::from_secs(30);
/// Ceiling for local metadata queries.
const QUERY_TIMEOUT: Duration = Duration::from_secs(5);
/// Longest stderr excerpt carried into an error message.
const STDERR_LIMIT: usize = 200;

/// Register `url` as a submodule at `path`, relative to `repo_root`.
///
/// On failure the error carries git's stderr, truncated so one noisy
/// clone cannot flood the batch summary.
pub async fn add_submodule(repo_root: &Path, url: &str, path: &Path) -> Result<()> {
    let mut command = Command::new("git");
    command
        .args(["submodule", "add", url])
        .arg(path)
        .current_dir(repo_root)
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let output = match timeout(ADD_TIMEOUT, command.output()).await {
        Ok(result) => result.map_err(|e| anyhow!("failed to run git: {}", e))?,
        Err(_) => {
            return Err(anyhow!(
                "timed out after {} seconds",
                ADD_TIMEOUT.as_secs()
            ))
        }
    };

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        Err(anyhow!("git submodule add exited with {}", output.status))
    } else {
        Err(anyhow!("{}", excerpt(stderr)))
    }
}

/// Ask the checkout at `dir` for the URL of its `origin` remote.
///
/// Every failure mode collapses to `None`: not a repository, no origin
/// remote, git missing from PATH, or the query timing out.
pub async fn remote_url(dir: &Path) -> Option<String> {
    let mut command = Command::new("git");
    command
        .args(["remote", "get-url", "origin"])
        .current_dir(dir)
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let output = match timeout(QUERY_TIMEOUT, command.output()).await {
        Ok(Ok(output)) if output.status.success() => output,
        _ => return None,
    };

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if url.is_empty() {
        None
    } else {
        Some(url)
    }
}

fn excerpt(text: &str) -> String {
    text.chars().take(STDERR_LIMIT).collect()
}
