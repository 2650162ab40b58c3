use clap::Parser;
use std::process::ExitCode;

use kanri::board::{BoardState, Phase, compute_board_view_model, load_board};
use kanri::display::{DoneOverlay, render_board};
use kanri::remote::{BOARD_API_URL, HttpTicketSource};
use kanri::types::{GroupKey, SortKey};

#[derive(Parser)]
#[command(name = "kanri")]
#[command(about = "Client-side kanban board viewer")]
#[command(version)]
struct Cli {
    /// Board feed endpoint
    #[arg(long, default_value = BOARD_API_URL)]
    endpoint: String,

    /// Grouping dimension: status, assignee
    #[arg(short, long, default_value = "status", value_parser = parse_group_key)]
    group_by: GroupKey,

    /// Ordering dimension: priority, title
    #[arg(short, long, default_value = "priority", value_parser = parse_sort_key)]
    order_by: SortKey,
}

fn parse_group_key(s: &str) -> Result<GroupKey, String> {
    s.parse().map_err(|e: kanri::BoardError| e.to_string())
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse().map_err(|e: kanri::BoardError| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match HttpTicketSource::new() {
        Ok(source) => source.with_endpoint(cli.endpoint),
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let state = BoardState::new(cli.group_by, cli.order_by);
    let state = load_board(&source, state).await;

    // Priority anomalies render under the fallback bucket; surface them
    // once so operators notice the feed problem.
    if state.phase == Phase::Ready
        && let Err(err) = state.snapshot.check_integrity()
    {
        tracing::warn!("{err}");
    }

    let vm = compute_board_view_model(&state);
    print!("{}", render_board(&vm, &DoneOverlay::default()));

    match vm.phase {
        Phase::Error => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
