//! Ticket and user data model, and the snapshot produced by one fetch.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BoardError, Result};
use crate::types::Priority;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,

    pub title: String,

    /// Raw status label from the feed, used verbatim as a group key.
    pub status: String,

    /// Raw wire priority. The five known values map onto [`Priority`];
    /// anything else is routed to the fallback bucket during partitioning.
    pub priority: i64,

    /// Weak reference into the user registry. `None` or a dangling id
    /// means unassigned.
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Feed-supplied labels (e.g. "Feature Request"), presentation only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<String>,
}

impl Ticket {
    /// Typed priority, if the raw value is within the known table.
    pub fn priority_level(&self) -> Option<Priority> {
        Priority::from_num(self.priority)
    }

    /// Build a session-local ticket. The id is a v4 UUID, so it cannot
    /// collide with feed ids or other local ids within a session.
    pub fn new_local(status: &str, priority: Priority, title: &str) -> Self {
        Ticket {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            status: status.to_string(),
            priority: i64::from(priority.as_num()),
            user_id: None,
            tag: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Presence flag consumed by presentation only.
    #[serde(default)]
    pub available: bool,
}

/// Lookup from user id to display name, read-only after construction.
pub type UsersById = HashMap<String, String>;

/// Wire shape of the board feed. Both fields are required; serde rejects
/// a payload missing either one.
#[derive(Debug, Deserialize)]
pub struct WirePayload {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}

/// The atomic unit of fetched state. Replaced wholesale on a successful
/// fetch, never partially merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSnapshot {
    pub tickets: Vec<Ticket>,
    pub users_by_id: UsersById,
}

impl BoardSnapshot {
    /// Normalize a wire payload. Users are indexed by id; a duplicate id
    /// keeps the later entry.
    pub fn from_wire(payload: WirePayload) -> Self {
        let mut users_by_id = UsersById::new();
        for user in payload.users {
            users_by_id.insert(user.id, user.name);
        }
        BoardSnapshot {
            tickets: payload.tickets,
            users_by_id,
        }
    }

    /// Parse a raw response body into a snapshot.
    pub fn parse(body: &str) -> Result<Self> {
        let payload: WirePayload =
            serde_json::from_str(body).map_err(|e| BoardError::MalformedResponse(e.to_string()))?;
        Ok(Self::from_wire(payload))
    }

    /// Strict integrity view: reports the first ticket whose priority is
    /// outside the known table. The engine itself never fails on this;
    /// such tickets render under the fallback bucket instead.
    pub fn check_integrity(&self) -> Result<()> {
        for ticket in &self.tickets {
            if ticket.priority_level().is_none() {
                return Err(BoardError::DataIntegrity {
                    id: ticket.id.clone(),
                    value: ticket.priority,
                });
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty() && self.users_by_id.is_empty()
    }
}
