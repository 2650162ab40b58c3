use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Priority {
    #[default]
    NoPriority,
    Low,
    Medium,
    High,
    Urgent,
}

/// Display order for the priority partition, most urgent first.
pub const PRIORITY_ORDER: [Priority; 5] = [
    Priority::Urgent,
    Priority::High,
    Priority::Medium,
    Priority::Low,
    Priority::NoPriority,
];

impl Priority {
    pub fn as_num(&self) -> u8 {
        match self {
            Priority::NoPriority => 0,
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Urgent => 4,
        }
    }

    /// Map a raw wire value onto the known table. Anything outside 0-4 is
    /// a data anomaly and returns `None`.
    pub fn from_num(n: i64) -> Option<Priority> {
        match n {
            0 => Some(Priority::NoPriority),
            1 => Some(Priority::Low),
            2 => Some(Priority::Medium),
            3 => Some(Priority::High),
            4 => Some(Priority::Urgent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::NoPriority => "No Priority",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    /// Icon reference for group headers; presentation decides the glyph.
    pub fn icon(&self) -> &'static str {
        match self {
            Priority::NoPriority => "priority-none",
            Priority::Low => "priority-low",
            Priority::Medium => "priority-medium",
            Priority::High => "priority-high",
            Priority::Urgent => "priority-urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Priority {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Priority::NoPriority),
            "1" => Ok(Priority::Low),
            "2" => Ok(Priority::Medium),
            "3" => Ok(Priority::High),
            "4" => Ok(Priority::Urgent),
            _ => Err(BoardError::InvalidPriority(s.to_string())),
        }
    }
}

pub const VALID_PRIORITIES: &[&str] = &["0", "1", "2", "3", "4"];

/// Dimension used to partition tickets into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    #[default]
    Status,
    Assignee,
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Status => write!(f, "status"),
            GroupKey::Assignee => write!(f, "assignee"),
        }
    }
}

impl FromStr for GroupKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(GroupKey::Status),
            "assignee" | "user" => Ok(GroupKey::Assignee),
            _ => Err(BoardError::InvalidGroupKey(s.to_string())),
        }
    }
}

pub const VALID_GROUP_KEYS: &[&str] = &["status", "assignee"];

/// Dimension used to order tickets within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Priority,
    Title,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Priority => write!(f, "priority"),
            SortKey::Title => write!(f, "title"),
        }
    }
}

impl FromStr for SortKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(SortKey::Priority),
            "title" => Ok(SortKey::Title),
            _ => Err(BoardError::InvalidSortKey(s.to_string())),
        }
    }
}

pub const VALID_SORT_KEYS: &[&str] = &["priority", "title"];

/// Which partition the board presents.
///
/// The group and sort selections are not orthogonal: ordering by priority
/// presents the fixed priority partition no matter which group key is
/// active. Modeling the coupling as an explicit mapping keeps it out of
/// the render path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    StatusColumns,
    AssigneeColumns,
    PriorityLanes,
}

pub fn view_mode(group: GroupKey, sort: SortKey) -> ViewMode {
    match (sort, group) {
        (SortKey::Priority, _) => ViewMode::PriorityLanes,
        (SortKey::Title, GroupKey::Status) => ViewMode::StatusColumns,
        (SortKey::Title, GroupKey::Assignee) => ViewMode::AssigneeColumns,
    }
}

/// Status labels known to the feed, in workflow order. The status set is
/// open: anything else observed in the feed is used verbatim.
pub const KNOWN_STATUSES: [&str; 5] = ["Backlog", "Todo", "In progress", "Done", "Cancelled"];

/// Icon reference for a status column header.
pub fn status_icon(status: &str) -> &'static str {
    match status {
        "Backlog" => "status-backlog",
        "Todo" => "status-todo",
        "In progress" => "status-in-progress",
        "Done" => "status-done",
        "Cancelled" => "status-cancelled",
        _ => "status-unknown",
    }
}
