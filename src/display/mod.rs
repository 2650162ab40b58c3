//! Terminal rendering of the computed board.
//!
//! Everything here consumes [`BoardViewModel`] and produces text; no
//! board logic lives on this side of the boundary.

use std::collections::HashSet;

use owo_colors::OwoColorize;

use crate::board::{BoardViewModel, ColumnViewModel, Phase};
use crate::ticket::Ticket;

/// Ephemeral per-card "done" marks, keyed by ticket id.
///
/// Owned by the presentation layer: not a ticket field, never persisted,
/// never sent upstream. Vanishes with the session.
#[derive(Debug, Clone, Default)]
pub struct DoneOverlay {
    done: HashSet<String>,
}

impl DoneOverlay {
    pub fn toggle(&mut self, ticket_id: &str) {
        if !self.done.remove(ticket_id) {
            self.done.insert(ticket_id.to_string());
        }
    }

    pub fn is_done(&self, ticket_id: &str) -> bool {
        self.done.contains(ticket_id)
    }

    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }
}

/// Render the board for the current phase.
pub fn render_board(vm: &BoardViewModel, done: &DoneOverlay) -> String {
    match vm.phase {
        Phase::Loading => format!("{}\n", "Loading...".dimmed()),
        Phase::Error => format!(
            "{} {}\n",
            "error:".red().bold(),
            vm.error.as_deref().unwrap_or("fetch failed")
        ),
        Phase::Ready => render_columns(vm, done),
    }
}

fn render_columns(vm: &BoardViewModel, done: &DoneOverlay) -> String {
    if vm.total_tickets == 0 {
        return "No tickets available.\n".to_string();
    }

    let mut out = String::new();
    for column in &vm.columns {
        out.push_str(&format_column_header(column));
        out.push('\n');
        for ticket in &column.tickets {
            out.push_str(&format_card(ticket, done.is_done(&ticket.id)));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn format_column_header(column: &ColumnViewModel) -> String {
    format!(
        "{} {} {}",
        glyph(column.icon),
        colored_label(&column.label, column.icon),
        format!("({})", column.count).dimmed()
    )
}

fn format_card(ticket: &Ticket, is_done: bool) -> String {
    let title = if is_done {
        ticket.title.strikethrough().dimmed().to_string()
    } else {
        ticket.title.clone()
    };
    let mut line = format!("  {} {}", ticket.id.dimmed(), title);
    for tag in &ticket.tag {
        line.push(' ');
        line.push_str(&format!("[{tag}]").dimmed().to_string());
    }
    line
}

/// Glyph for an icon reference. Presentation-side choice; the references
/// themselves are fixed by the engine.
fn glyph(icon: &str) -> &'static str {
    match icon {
        "priority-urgent" => "!!",
        "priority-high" => "▲",
        "priority-medium" => "■",
        "priority-low" => "▼",
        "priority-none" => "·",
        "status-backlog" => "○",
        "status-todo" => "◌",
        "status-in-progress" => "◐",
        "status-done" => "●",
        "status-cancelled" => "✕",
        "user" => "@",
        "user-unassigned" => "?",
        _ => "?",
    }
}

fn colored_label(label: &str, icon: &str) -> String {
    match icon {
        "priority-urgent" => label.red().bold().to_string(),
        "priority-high" => label.yellow().to_string(),
        "priority-medium" => label.cyan().to_string(),
        "priority-low" => label.blue().to_string(),
        "priority-none" | "priority-unknown" => label.dimmed().to_string(),
        "status-backlog" => label.yellow().to_string(),
        "status-todo" => label.magenta().to_string(),
        "status-in-progress" => label.cyan().to_string(),
        "status-done" => label.green().to_string(),
        "status-cancelled" => label.dimmed().to_string(),
        _ => label.bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardAction, BoardState, compute_board_view_model, reduce_board_state};
    use crate::ticket::{BoardSnapshot, Ticket};

    fn vm_with_one_ticket() -> BoardViewModel {
        let snapshot = BoardSnapshot {
            tickets: vec![Ticket {
                id: "CAM-1".to_string(),
                title: "Fix login".to_string(),
                status: "Todo".to_string(),
                priority: 4,
                user_id: None,
                tag: vec!["Feature Request".to_string()],
            }],
            users_by_id: Default::default(),
        };
        let state = reduce_board_state(BoardState::default(), BoardAction::FetchSucceeded(snapshot));
        compute_board_view_model(&state)
    }

    #[test]
    fn test_done_overlay_toggle() {
        let mut done = DoneOverlay::default();
        assert!(!done.is_done("CAM-1"));
        done.toggle("CAM-1");
        assert!(done.is_done("CAM-1"));
        done.toggle("CAM-1");
        assert!(!done.is_done("CAM-1"));
        assert!(done.is_empty());
    }

    #[test]
    fn test_render_loading() {
        let vm = compute_board_view_model(&BoardState::default());
        let out = render_board(&vm, &DoneOverlay::default());
        assert!(out.contains("Loading"));
    }

    #[test]
    fn test_render_error() {
        let state = reduce_board_state(
            BoardState::default(),
            BoardAction::FetchFailed("connection refused".to_string()),
        );
        let vm = compute_board_view_model(&state);
        let out = render_board(&vm, &DoneOverlay::default());
        assert!(out.contains("connection refused"));
    }

    #[test]
    fn test_render_empty_board() {
        let state = reduce_board_state(
            BoardState::default(),
            BoardAction::FetchSucceeded(BoardSnapshot::default()),
        );
        let vm = compute_board_view_model(&state);
        let out = render_board(&vm, &DoneOverlay::default());
        assert_eq!(out, "No tickets available.\n");
    }

    #[test]
    fn test_render_ready_board() {
        let out = render_board(&vm_with_one_ticket(), &DoneOverlay::default());
        assert!(out.contains("CAM-1"));
        assert!(out.contains("Fix login"));
        assert!(out.contains("Urgent"));
        assert!(out.contains("Feature Request"));
    }

    #[test]
    fn test_render_done_card_struck_through() {
        let mut done = DoneOverlay::default();
        done.toggle("CAM-1");
        let plain = render_board(&vm_with_one_ticket(), &DoneOverlay::default());
        let struck = render_board(&vm_with_one_ticket(), &done);
        assert_ne!(plain, struck);
    }
}
