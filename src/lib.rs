pub mod board;
pub mod display;
pub mod error;
pub mod grouping;
pub mod remote;
pub mod sorting;
pub mod ticket;
pub mod types;

pub use board::{
    BoardAction, BoardState, BoardViewModel, ColumnViewModel, Phase, Selection,
    compute_board_view_model, load_board, reduce_board_state,
};
pub use error::{BoardError, Result};
pub use grouping::{
    GroupedView, TicketGroup, UNASSIGNED_GROUP, UNKNOWN_PRIORITY_GROUP, group_tickets,
    priority_partition,
};
pub use remote::{BOARD_API_URL, HttpTicketSource, TicketSource};
pub use sorting::sort_tickets;
pub use ticket::{BoardSnapshot, Ticket, User, UsersById, WirePayload};
pub use types::{
    GroupKey, KNOWN_STATUSES, PRIORITY_ORDER, Priority, SortKey, VALID_GROUP_KEYS,
    VALID_PRIORITIES, VALID_SORT_KEYS, ViewMode, view_mode,
};
