//! Minimal Jira entity shapes and the identifier traits the clause
//! builders accept.
//!
//! Builders only need one identifying string from an entity: an issue key,
//! a project key, a user name, or an issue type id. Each category gets its
//! own trait so an issue cannot be passed where a user is expected, while
//! plain strings work everywhere.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// An issue, as far as JQL is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue key, e.g. `"BUG-42"`.
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// A project, as far as JQL is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project key, e.g. `"BUG"`.
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A Jira user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name used in JQL.
    pub name: String,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// An issue type; JQL refers to it by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueType {
    pub id: u64,
    pub name: String,
}

/// Something that identifies an issue by key.
pub trait IssueKey {
    fn issue_key(&self) -> &str;
}

/// Something that identifies a project by key.
pub trait ProjectKey {
    fn project_key(&self) -> &str;
}

/// Something that identifies a user by login name.
pub trait UserName {
    fn user_name(&self) -> &str;
}

/// Something that identifies an issue type, by name or id.
pub trait IssueTypeRef {
    fn issue_type_ref(&self) -> Cow<'_, str>;
}

impl IssueKey for str {
    fn issue_key(&self) -> &str {
        self
    }
}

impl IssueKey for String {
    fn issue_key(&self) -> &str {
        self
    }
}

impl IssueKey for Issue {
    fn issue_key(&self) -> &str {
        &self.key
    }
}

impl<T: IssueKey + ?Sized> IssueKey for &T {
    fn issue_key(&self) -> &str {
        (**self).issue_key()
    }
}

impl ProjectKey for str {
    fn project_key(&self) -> &str {
        self
    }
}

impl ProjectKey for String {
    fn project_key(&self) -> &str {
        self
    }
}

impl ProjectKey for Project {
    fn project_key(&self) -> &str {
        &self.key
    }
}

impl<T: ProjectKey + ?Sized> ProjectKey for &T {
    fn project_key(&self) -> &str {
        (**self).project_key()
    }
}

impl UserName for str {
    fn user_name(&self) -> &str {
        self
    }
}

impl UserName for String {
    fn user_name(&self) -> &str {
        self
    }
}

impl UserName for User {
    fn user_name(&self) -> &str {
        &self.name
    }
}

impl<T: UserName + ?Sized> UserName for &T {
    fn user_name(&self) -> &str {
        (**self).user_name()
    }
}

impl IssueTypeRef for str {
    fn issue_type_ref(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl IssueTypeRef for String {
    fn issue_type_ref(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl IssueTypeRef for u64 {
    fn issue_type_ref(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl IssueTypeRef for IssueType {
    fn issue_type_ref(&self) -> Cow<'_, str> {
        Cow::Owned(self.id.to_string())
    }
}

impl<T: IssueTypeRef + ?Sized> IssueTypeRef for &T {
    fn issue_type_ref(&self) -> Cow<'_, str> {
        (**self).issue_type_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_type_resolves_to_id() {
        let bug = IssueType {
            id: 10004,
            name: "Bug".to_string(),
        };
        assert_eq!(bug.issue_type_ref(), "10004");
        assert_eq!(7u64.issue_type_ref(), "7");
        assert_eq!("Story".issue_type_ref(), "Story");
    }

    #[test]
    fn entities_resolve_to_their_keys() {
        let issue = Issue {
            key: "BUG-1".to_string(),
            summary: None,
        };
        let project = Project {
            key: "BUG".to_string(),
            name: Some("Bug tracker".to_string()),
        };
        let user = User {
            name: "jdoe".to_string(),
            display_name: Some("Jane Doe".to_string()),
        };
        assert_eq!((&issue).issue_key(), "BUG-1");
        assert_eq!(project.project_key(), "BUG");
        assert_eq!(user.user_name(), "jdoe");
    }

    #[test]
    fn user_yaml_uses_display_name_key() {
        let user = User {
            name: "jdoe".to_string(),
            display_name: Some("Jane Doe".to_string()),
        };
        let yaml = serde_yaml::to_string(&user).expect("serialize");
        assert!(yaml.contains("displayName: Jane Doe"));
        let back: User = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(back, user);
    }
}
