//! Post-generation shell-outs: git init and dependency installation.
//!
//! Both are best-effort. The project files already exist by the time these
//! run, so a failure here warns and prints the manual command instead of
//! tearing anything down.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Package manager resolved from the project's lockfiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// The full install command, for display and for execution
    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Yarn => "yarn install",
            PackageManager::Pnpm => "pnpm install",
            PackageManager::Bun => "bun install",
        }
    }

    /// Detect the package manager from lockfiles in the project directory.
    /// Freshly generated projects have none and fall back to npm.
    pub fn detect(project_dir: &Path) -> PackageManager {
        if project_dir.join("bun.lockb").exists() {
            PackageManager::Bun
        } else if project_dir.join("pnpm-lock.yaml").exists() {
            PackageManager::Pnpm
        } else if project_dir.join("yarn.lock").exists() {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Initialize a git repository in the project directory
pub async fn init_git(project_dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("init")
        .current_dir(project_dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .context("Failed to run git")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git init failed: {}", stderr.trim());
    }

    Ok(())
}

/// Run the package manager's install command in the project directory.
///
/// Output is captured rather than streamed so the caller can keep a spinner
/// on screen; on failure the stderr tail is included in the error.
pub async fn install_dependencies(project_dir: &Path, manager: PackageManager) -> Result<()> {
    let mut parts = manager.install_command().split_whitespace();
    let program = parts.next().unwrap_or("npm");
    let args: Vec<&str> = parts.collect();

    let output = Command::new(program)
        .args(&args)
        .current_dir(project_dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .with_context(|| format!("Failed to run {}", manager.name()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let tail: Vec<&str> = stderr.lines().rev().take(5).collect();
        let tail: Vec<&str> = tail.into_iter().rev().collect();
        anyhow::bail!(
            "{} exited with {}:\n{}",
            manager.install_command(),
            output.status,
            tail.join("\n")
        );
    }

    Ok(())
}
