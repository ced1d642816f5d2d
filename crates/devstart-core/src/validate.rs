//! Project name and target path validation.
//!
//! Name rules follow npm's requirements for new packages, since the name
//! goes straight into the generated package.json.

use std::path::Path;
use thiserror::Error;

/// Names npm refuses outright
const RESERVED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid project name: {0}")]
    InvalidName(String),

    #[error("Directory \"{0}\" already exists. Please choose a different name.")]
    PathExists(String),

    #[error("Parent directory does not exist: {0}")]
    ParentMissing(String),
}

/// Validate a project name against npm package-name rules
pub fn validate_project_name(name: &str) -> Result<(), ValidationError> {
    let mut problems: Vec<&str> = Vec::new();

    if name.is_empty() {
        problems.push("name cannot be empty");
    }
    if name.len() > 214 {
        problems.push("name cannot contain more than 214 characters");
    }
    if name.starts_with('.') {
        problems.push("name cannot start with a period");
    }
    if name.starts_with('_') {
        problems.push("name cannot start with an underscore");
    }
    if name != name.trim() {
        problems.push("name cannot contain leading or trailing spaces");
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        problems.push("name cannot contain capital letters");
    }
    if name.contains(' ') {
        problems.push("name cannot contain spaces");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
    {
        problems.push("name can only contain URL-friendly characters");
    }
    if RESERVED_NAMES.contains(&name) {
        problems.push("name is reserved");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidName(problems.join(", ")))
    }
}

/// Validate the target project path: it must not exist yet, and its parent
/// directory must exist
pub fn validate_project_path(path: &Path) -> Result<(), ValidationError> {
    if path.exists() {
        return Err(ValidationError::PathExists(path.display().to_string()));
    }

    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() || parent.exists() => Ok(()),
        Some(parent) => Err(ValidationError::ParentMissing(parent.display().to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_names() {
        assert!(validate_project_name("my-awesome-app").is_ok());
        assert!(validate_project_name("app2").is_ok());
        assert!(validate_project_name("a.b~c_d").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_long() {
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name(&"a".repeat(215)).is_err());
        assert!(validate_project_name(&"a".repeat(214)).is_ok());
    }

    #[test]
    fn test_rejects_bad_prefixes_and_case() {
        assert!(validate_project_name(".hidden").is_err());
        assert!(validate_project_name("_private").is_err());
        assert!(validate_project_name("MyApp").is_err());
        assert!(validate_project_name("my app").is_err());
    }

    #[test]
    fn test_rejects_non_url_safe() {
        assert!(validate_project_name("app!").is_err());
        assert!(validate_project_name("app/sub").is_err());
    }

    #[test]
    fn test_rejects_reserved() {
        assert!(validate_project_name("node_modules").is_err());
    }

    #[test]
    fn test_error_lists_every_problem() {
        let err = validate_project_name(".Bad Name!").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("period"));
        assert!(msg.contains("capital"));
        assert!(msg.contains("spaces"));
    }

    #[test]
    fn test_path_must_not_exist() {
        let dir = tempdir().unwrap();
        assert_eq!(
            validate_project_path(dir.path()),
            Err(ValidationError::PathExists(
                dir.path().display().to_string()
            ))
        );
        assert!(validate_project_path(&dir.path().join("new-app")).is_ok());
    }

    #[test]
    fn test_parent_must_exist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("new-app");
        assert!(matches!(
            validate_project_path(&path),
            Err(ValidationError::ParentMissing(_))
        ));
    }
}
