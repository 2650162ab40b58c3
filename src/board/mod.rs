//! Board state machine and derived view model.

pub mod model;

pub use model::{
    BoardAction, BoardState, BoardViewModel, ColumnViewModel, Phase, Selection,
    compute_board_view_model, reduce_board_state,
};

use crate::remote::TicketSource;

/// Run the session's single fetch and fold the outcome into the state.
///
/// Fire-and-forget from the caller's perspective: the returned state is
/// either `Ready` with a populated snapshot or `Error` with a message,
/// and neither is revisited afterwards.
pub async fn load_board<S: TicketSource>(source: &S, state: BoardState) -> BoardState {
    match source.fetch().await {
        Ok(snapshot) => reduce_board_state(state, BoardAction::FetchSucceeded(snapshot)),
        Err(err) => reduce_board_state(state, BoardAction::FetchFailed(err.to_string())),
    }
}
