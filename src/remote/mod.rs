//! Board feed fetching.
//!
//! The engine performs exactly one fetch per session. [`TicketSource`]
//! abstracts where the snapshot comes from so the state machine can be
//! driven by stub sources in tests; [`HttpTicketSource`] is the
//! production implementation.

pub mod http;

pub use http::{BOARD_API_URL, HttpTicketSource};

use crate::error::Result;
use crate::ticket::BoardSnapshot;

/// A source of board snapshots.
pub trait TicketSource: Send + Sync {
    /// Fetch a fresh snapshot. A successful result replaces any prior
    /// snapshot wholesale.
    fn fetch(&self) -> impl std::future::Future<Output = Result<BoardSnapshot>> + Send;
}
