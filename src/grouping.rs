//! Ticket partitioning.
//!
//! Two partitions exist: the active group key's columns (status or
//! assignee, keys in encounter order) and the fixed-order priority
//! partition. Both are pure functions of their inputs; ordering within a
//! group is the input order, sorting is a separate later step.

use crate::ticket::{Ticket, UsersById};
use crate::types::{GroupKey, PRIORITY_ORDER, Priority, status_icon};

/// Group key for tickets with no resolvable assignee.
pub const UNASSIGNED_GROUP: &str = "Unassigned";

/// Bucket label for tickets whose priority is outside the known table.
pub const UNKNOWN_PRIORITY_GROUP: &str = "Unknown";

/// One named column of tickets plus its header metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketGroup {
    /// Status label, user display name, `"Unassigned"`, a priority label,
    /// or `"Unknown"`.
    pub key: String,
    /// Icon reference for the group header.
    pub icon: &'static str,
    pub tickets: Vec<Ticket>,
}

impl TicketGroup {
    pub fn count(&self) -> usize {
        self.tickets.len()
    }
}

/// An ordered partition of a ticket collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedView {
    pub groups: Vec<TicketGroup>,
}

impl GroupedView {
    pub fn get(&self, key: &str) -> Option<&TicketGroup> {
        self.groups.iter().find(|g| g.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.tickets.is_empty())
    }

    /// Total ticket count across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.tickets.len()).sum()
    }
}

/// Partition tickets by the given key.
///
/// Group keys appear in encounter order within `tickets`, and tickets
/// keep their input order within each group. For [`GroupKey::Assignee`],
/// a `None` or dangling `user_id` falls back to [`UNASSIGNED_GROUP`]; a
/// real user literally named "Unassigned" merges into the same bucket,
/// since the keys are used verbatim.
pub fn group_tickets(tickets: &[Ticket], key: GroupKey, users_by_id: &UsersById) -> GroupedView {
    let mut groups: Vec<TicketGroup> = Vec::new();

    for ticket in tickets {
        let label = match key {
            GroupKey::Status => ticket.status.clone(),
            GroupKey::Assignee => ticket
                .user_id
                .as_ref()
                .and_then(|id| users_by_id.get(id))
                .cloned()
                .unwrap_or_else(|| UNASSIGNED_GROUP.to_string()),
        };

        match groups.iter_mut().find(|g| g.key == label) {
            Some(group) => group.tickets.push(ticket.clone()),
            None => {
                let icon = match key {
                    GroupKey::Status => status_icon(&label),
                    GroupKey::Assignee => {
                        if label == UNASSIGNED_GROUP {
                            "user-unassigned"
                        } else {
                            "user"
                        }
                    }
                };
                groups.push(TicketGroup {
                    key: label,
                    icon,
                    tickets: vec![ticket.clone()],
                });
            }
        }
    }

    GroupedView { groups }
}

/// Partition tickets into the five fixed priority buckets, most urgent
/// first. Empty buckets are kept with count 0.
///
/// A ticket whose priority has no entry in the known table is never
/// dropped: it lands in a trailing [`UNKNOWN_PRIORITY_GROUP`] bucket and
/// the anomaly is logged.
pub fn priority_partition(tickets: &[Ticket]) -> GroupedView {
    let mut buckets: Vec<TicketGroup> = PRIORITY_ORDER
        .iter()
        .map(|p| TicketGroup {
            key: p.label().to_string(),
            icon: p.icon(),
            tickets: Vec::new(),
        })
        .collect();
    let mut unknown: Vec<Ticket> = Vec::new();

    for ticket in tickets {
        match Priority::from_num(ticket.priority) {
            // PRIORITY_ORDER runs 4..0, so bucket index is 4 - num
            Some(p) => buckets[(4 - p.as_num()) as usize].tickets.push(ticket.clone()),
            None => {
                tracing::warn!(
                    "ticket '{}' has priority {} outside the known 0-4 range",
                    ticket.id,
                    ticket.priority
                );
                unknown.push(ticket.clone());
            }
        }
    }

    if !unknown.is_empty() {
        buckets.push(TicketGroup {
            key: UNKNOWN_PRIORITY_GROUP.to_string(),
            icon: "priority-unknown",
            tickets: unknown,
        });
    }

    GroupedView { groups: buckets }
}
