//! Mock data builders for creating test tickets and snapshots.
//!
//! This module provides builder patterns for creating test data without
//! touching the network.

use kanri::ticket::{BoardSnapshot, Ticket, UsersById};
use kanri::types::Priority;

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Create a new ticket builder with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: id.to_string(),
                title: format!("Ticket {id}"),
                status: "Todo".to_string(),
                priority: 2,
                user_id: None,
                tag: Vec::new(),
            },
        }
    }

    /// Set the ticket title
    pub fn title(mut self, title: &str) -> Self {
        self.ticket.title = title.to_string();
        self
    }

    /// Set the ticket status
    pub fn status(mut self, status: &str) -> Self {
        self.ticket.status = status.to_string();
        self
    }

    /// Set the ticket priority from the known table
    pub fn priority(mut self, priority: Priority) -> Self {
        self.ticket.priority = i64::from(priority.as_num());
        self
    }

    /// Set a raw wire priority, including values outside the known table
    pub fn raw_priority(mut self, priority: i64) -> Self {
        self.ticket.priority = priority;
        self
    }

    /// Set the assignee user id
    pub fn assignee(mut self, user_id: &str) -> Self {
        self.ticket.user_id = Some(user_id.to_string());
        self
    }

    /// Add a feed tag
    pub fn tag(mut self, tag: &str) -> Self {
        self.ticket.tag.push(tag.to_string());
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// User registry matching the mock snapshot
pub fn mock_users() -> UsersById {
    UsersById::from([
        ("usr-1".to_string(), "Anoop sharma".to_string()),
        ("usr-2".to_string(), "Yogesh".to_string()),
        ("usr-3".to_string(), "Shankar Kumar".to_string()),
    ])
}

/// A feed-shaped snapshot: three users, six tickets across three
/// statuses and four priorities, one unassigned, one dangling assignee
pub fn mock_snapshot() -> BoardSnapshot {
    BoardSnapshot {
        tickets: vec![
            TicketBuilder::new("CAM-1")
                .title("Update User Profile Page UI")
                .status("Todo")
                .priority(Priority::Urgent)
                .assignee("usr-1")
                .tag("Feature Request")
                .build(),
            TicketBuilder::new("CAM-2")
                .title("Add Multi-Language Support")
                .status("In progress")
                .priority(Priority::High)
                .assignee("usr-2")
                .build(),
            TicketBuilder::new("CAM-3")
                .title("Optimize Database Queries")
                .status("Backlog")
                .priority(Priority::Medium)
                .assignee("usr-3")
                .build(),
            TicketBuilder::new("CAM-4")
                .title("Implement Email Notification System")
                .status("Todo")
                .priority(Priority::NoPriority)
                .build(),
            TicketBuilder::new("CAM-5")
                .title("Conduct Security Vulnerability Assessment")
                .status("Backlog")
                .priority(Priority::Low)
                .assignee("usr-gone")
                .build(),
            TicketBuilder::new("CAM-6")
                .title("ap bug fix")
                .status("Todo")
                .priority(Priority::Urgent)
                .assignee("usr-2")
                .build(),
        ],
        users_by_id: mock_users(),
    }
}
