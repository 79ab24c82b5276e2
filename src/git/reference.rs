//! The family of git reference kinds that share a common shape.

use serde::{Deserialize, Serialize};

/// Discriminator identifying which kind of reference a value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefType {
    Branch,
    Revision,
    Stash,
    Tag,
}

impl RefType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefType::Branch => "branch",
            RefType::Revision => "revision",
            RefType::Stash => "stash",
            RefType::Tag => "tag",
        }
    }
}

/// Common view over anything that names a point in a repository's history.
pub trait Reference {
    fn ref_type(&self) -> RefType;
    fn repo_path(&self) -> &str;
    fn name(&self) -> &str;

    /// The string handed to git to resolve this reference
    fn reference(&self) -> &str;
}

/// Lightweight reference value, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ref-type", rename_all = "lowercase")]
pub enum GitReference {
    Branch {
        #[serde(rename = "repo-path")]
        repo_path: String,
        name: String,
        #[serde(default)]
        remote: bool,
    },
    Revision {
        #[serde(rename = "repo-path")]
        repo_path: String,
        sha: String,
    },
    Stash {
        #[serde(rename = "repo-path")]
        repo_path: String,
        sha: String,
        name: String,
    },
    Tag {
        #[serde(rename = "repo-path")]
        repo_path: String,
        name: String,
    },
}

impl Reference for GitReference {
    fn ref_type(&self) -> RefType {
        match self {
            GitReference::Branch { .. } => RefType::Branch,
            GitReference::Revision { .. } => RefType::Revision,
            GitReference::Stash { .. } => RefType::Stash,
            GitReference::Tag { .. } => RefType::Tag,
        }
    }

    fn repo_path(&self) -> &str {
        match self {
            GitReference::Branch { repo_path, .. }
            | GitReference::Revision { repo_path, .. }
            | GitReference::Stash { repo_path, .. }
            | GitReference::Tag { repo_path, .. } => repo_path,
        }
    }

    fn name(&self) -> &str {
        match self {
            GitReference::Revision { sha, .. } => sha,
            GitReference::Branch { name, .. }
            | GitReference::Stash { name, .. }
            | GitReference::Tag { name, .. } => name,
        }
    }

    fn reference(&self) -> &str {
        match self {
            GitReference::Stash { sha, .. } | GitReference::Revision { sha, .. } => sha,
            GitReference::Branch { name, .. } | GitReference::Tag { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_type_strings() {
        assert_eq!(RefType::Branch.as_str(), "branch");
        assert_eq!(RefType::Tag.as_str(), "tag");
    }

    #[test]
    fn test_branch_reference() {
        let branch = GitReference::Branch {
            repo_path: "/repo".to_string(),
            name: "main".to_string(),
            remote: false,
        };
        assert_eq!(branch.ref_type(), RefType::Branch);
        assert_eq!(branch.name(), "main");
        assert_eq!(branch.reference(), "main");
        assert_eq!(branch.repo_path(), "/repo");
    }

    #[test]
    fn test_stash_resolves_by_sha() {
        let stash = GitReference::Stash {
            repo_path: "/repo".to_string(),
            sha: "abc123".to_string(),
            name: "stash@{0}".to_string(),
        };
        assert_eq!(stash.name(), "stash@{0}");
        assert_eq!(stash.reference(), "abc123");
    }

    #[test]
    fn test_tagged_deserialize() {
        let json = r#"{"ref-type":"tag","repo-path":"/repo","name":"v1.0"}"#;
        let reference: GitReference = serde_json::from_str(json).unwrap();
        assert_eq!(reference.ref_type(), RefType::Tag);
        assert_eq!(reference.name(), "v1.0");
    }
}
