//! Board model types for testable state management.
//!
//! This module separates state ([`BoardState`]) from view
//! ([`BoardViewModel`]): actions fold into state through a pure reducer,
//! and the view model is recomputed from scratch on demand. Nothing here
//! performs I/O; the fetch lives behind the source trait and arrives as
//! an action.

use crate::grouping::{GroupedView, group_tickets, priority_partition};
use crate::sorting::sort_tickets;
use crate::ticket::{BoardSnapshot, Ticket};
use crate::types::{GroupKey, Priority, SortKey, ViewMode, view_mode};

/// Fetch lifecycle phase. `Error` and `Ready` are terminal: the board
/// performs exactly one fetch per mount and never auto-retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Error,
    Ready,
}

/// Captured fields of the last clicked ticket, readable by presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub title: String,
    pub user_id: Option<String>,
    pub status: String,
}

/// Raw state that changes through [`reduce_board_state`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub phase: Phase,
    /// Empty until the fetch succeeds; replaced wholesale, never merged.
    pub snapshot: BoardSnapshot,
    /// Error message recorded on fetch failure.
    pub error: Option<String>,
    pub group_key: GroupKey,
    pub sort_key: SortKey,
    pub options_panel_open: bool,
    pub selection: Option<Selection>,
}

impl BoardState {
    /// Initial state: `Loading`, empty snapshot, panel closed, no
    /// selection. The key defaults are the deployment's choice.
    pub fn new(group_key: GroupKey, sort_key: SortKey) -> Self {
        BoardState {
            group_key,
            sort_key,
            ..Default::default()
        }
    }
}

/// All possible actions on the board.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    /// The session's fetch completed with a snapshot.
    FetchSucceeded(BoardSnapshot),
    /// The session's fetch failed with a human-readable message.
    FetchFailed(String),
    /// Change the grouping dimension.
    SetGroupKey(GroupKey),
    /// Change the ordering dimension.
    SetSortKey(SortKey),
    /// Flip the display-options panel.
    TogglePanel,
    /// Append a session-local ticket to the given status group.
    AddLocalTicket {
        status: String,
        priority: Priority,
        title: String,
    },
    /// Record the clicked ticket as the current selection.
    SelectTicket { id: String },
}

/// Pure function: apply an action to the state.
///
/// Fetch actions are only meaningful while `Loading`; mutations are only
/// meaningful once `Ready`. Out-of-phase actions are dropped with a log
/// instead of failing, so a misbehaving presentation layer can never
/// knock the board out of a usable phase.
pub fn reduce_board_state(mut state: BoardState, action: BoardAction) -> BoardState {
    match action {
        BoardAction::FetchSucceeded(snapshot) => {
            if state.phase != Phase::Loading {
                tracing::warn!("fetch result ignored: board is past loading");
                return state;
            }
            state.phase = Phase::Ready;
            state.snapshot = snapshot;
        }
        BoardAction::FetchFailed(message) => {
            if state.phase != Phase::Loading {
                tracing::warn!("fetch failure ignored: board is past loading");
                return state;
            }
            state.phase = Phase::Error;
            state.error = Some(message);
        }

        BoardAction::SetGroupKey(key) => {
            if state.phase != Phase::Ready {
                tracing::debug!("SetGroupKey ignored before ready");
                return state;
            }
            state.group_key = key;
        }
        BoardAction::SetSortKey(key) => {
            if state.phase != Phase::Ready {
                tracing::debug!("SetSortKey ignored before ready");
                return state;
            }
            state.sort_key = key;
        }

        // purely presentational, allowed in any phase
        BoardAction::TogglePanel => {
            state.options_panel_open = !state.options_panel_open;
        }

        BoardAction::AddLocalTicket {
            status,
            priority,
            title,
        } => {
            if state.phase != Phase::Ready {
                tracing::debug!("AddLocalTicket ignored before ready");
                return state;
            }
            let title = title.trim();
            if title.is_empty() {
                tracing::warn!("AddLocalTicket ignored: empty title");
                return state;
            }
            state
                .snapshot
                .tickets
                .push(Ticket::new_local(&status, priority, title));
        }

        BoardAction::SelectTicket { id } => {
            if state.phase != Phase::Ready {
                tracing::debug!("SelectTicket ignored before ready");
                return state;
            }
            match state.snapshot.tickets.iter().find(|t| t.id == id) {
                Some(ticket) => {
                    state.selection = Some(Selection {
                        title: ticket.title.clone(),
                        user_id: ticket.user_id.clone(),
                        status: ticket.status.clone(),
                    });
                }
                None => tracing::debug!("SelectTicket ignored: unknown id '{id}'"),
            }
        }
    }
    state
}

/// Computed view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardViewModel {
    pub phase: Phase,
    pub error: Option<String>,
    /// Which partition the columns came from.
    pub mode: ViewMode,
    pub columns: Vec<ColumnViewModel>,
    pub options_panel_open: bool,
    pub selection: Option<Selection>,
    pub total_tickets: usize,
}

/// View model for a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnViewModel {
    pub label: String,
    pub icon: &'static str,
    pub count: usize,
    /// Tickets already ordered by the active sort key.
    pub tickets: Vec<Ticket>,
}

/// Pure function: compute the view model from state.
///
/// Picks the partition from [`view_mode`], sorts each group with the
/// active sort key, and attaches header metadata. Full recompute every
/// call; data volumes are small enough that nothing is patched
/// incrementally.
pub fn compute_board_view_model(state: &BoardState) -> BoardViewModel {
    let mode = view_mode(state.group_key, state.sort_key);

    let grouped: GroupedView = match mode {
        ViewMode::PriorityLanes => priority_partition(&state.snapshot.tickets),
        ViewMode::StatusColumns => group_tickets(
            &state.snapshot.tickets,
            GroupKey::Status,
            &state.snapshot.users_by_id,
        ),
        ViewMode::AssigneeColumns => group_tickets(
            &state.snapshot.tickets,
            GroupKey::Assignee,
            &state.snapshot.users_by_id,
        ),
    };

    let columns: Vec<ColumnViewModel> = grouped
        .groups
        .into_iter()
        .map(|group| ColumnViewModel {
            count: group.tickets.len(),
            tickets: sort_tickets(&group.tickets, state.sort_key),
            label: group.key,
            icon: group.icon,
        })
        .collect();

    BoardViewModel {
        phase: state.phase,
        error: state.error.clone(),
        mode,
        total_tickets: state.snapshot.tickets.len(),
        options_panel_open: state.options_panel_open,
        selection: state.selection.clone(),
        columns,
    }
}
