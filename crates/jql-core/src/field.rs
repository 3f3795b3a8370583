//! Jira field vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JqlError;

/// A Jira field that can appear on the left of a JQL predicate or in an
/// `order by` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    AffectedVersion,
    Approvals,
    Assignee,
    Category,
    Comment,
    Component,
    Created,
    Creator,
    Description,
    Due,
    Environment,
    Filter,
    FixVersion,
    IssueKey,
    Labels,
    LastViewed,
    OriginalEstimate,
    Parent,
    Priority,
    Project,
    RemainingEstimate,
    Reporter,
    Resolution,
    Resolved,
    Sprint,
    Status,
    Summary,
    Text,
    TimeSpent,
    Type,
    Updated,
    Voter,
    Votes,
    Watcher,
    Watchers,
    #[serde(rename = "worklogAuthor")]
    WorkLogAuthor,
    #[serde(rename = "worklogComment")]
    WorkLogComment,
    #[serde(rename = "worklogDate")]
    WorkLogDate,
}

impl Field {
    /// Every known field, in declaration order.
    pub const ALL: [Field; 38] = [
        Self::AffectedVersion,
        Self::Approvals,
        Self::Assignee,
        Self::Category,
        Self::Comment,
        Self::Component,
        Self::Created,
        Self::Creator,
        Self::Description,
        Self::Due,
        Self::Environment,
        Self::Filter,
        Self::FixVersion,
        Self::IssueKey,
        Self::Labels,
        Self::LastViewed,
        Self::OriginalEstimate,
        Self::Parent,
        Self::Priority,
        Self::Project,
        Self::RemainingEstimate,
        Self::Reporter,
        Self::Resolution,
        Self::Resolved,
        Self::Sprint,
        Self::Status,
        Self::Summary,
        Self::Text,
        Self::TimeSpent,
        Self::Type,
        Self::Updated,
        Self::Voter,
        Self::Votes,
        Self::Watcher,
        Self::Watchers,
        Self::WorkLogAuthor,
        Self::WorkLogComment,
        Self::WorkLogDate,
    ];

    /// The literal JQL token for this field.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::AffectedVersion => "affectedVersion",
            Self::Approvals => "approvals",
            Self::Assignee => "assignee",
            Self::Category => "category",
            Self::Comment => "comment",
            Self::Component => "component",
            Self::Created => "created",
            Self::Creator => "creator",
            Self::Description => "description",
            Self::Due => "due",
            Self::Environment => "environment",
            Self::Filter => "filter",
            Self::FixVersion => "fixVersion",
            Self::IssueKey => "issueKey",
            Self::Labels => "labels",
            Self::LastViewed => "lastViewed",
            Self::OriginalEstimate => "originalEstimate",
            Self::Parent => "parent",
            Self::Priority => "priority",
            Self::Project => "project",
            Self::RemainingEstimate => "remainingEstimate",
            Self::Reporter => "reporter",
            Self::Resolution => "resolution",
            Self::Resolved => "resolved",
            Self::Sprint => "sprint",
            Self::Status => "status",
            Self::Summary => "summary",
            Self::Text => "text",
            Self::TimeSpent => "timeSpent",
            Self::Type => "type",
            Self::Updated => "updated",
            Self::Voter => "voter",
            Self::Votes => "votes",
            Self::Watcher => "watcher",
            Self::Watchers => "watchers",
            Self::WorkLogAuthor => "worklogAuthor",
            Self::WorkLogComment => "worklogComment",
            Self::WorkLogDate => "worklogDate",
        }
    }

    /// Fields that hold several values at once cannot be sorted on.
    #[must_use]
    pub fn is_multi_value(self) -> bool {
        matches!(self, Self::Labels)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Field {
    type Err = JqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.token().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| JqlError::invalid_argument(format!("unknown field '{s}'")))
    }
}
