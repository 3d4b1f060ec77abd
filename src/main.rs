//! Jigsaw Bind entry point
//!
//! Builds a scattered board, replays a scripted drag sequence against it and
//! prints the resulting snapshot as JSON.
//!
//! Usage: `jigsaw-bind [settings.json] [script.json]`

use std::env;
use std::fs;
use std::process::ExitCode;

use jigsaw_bind::{Board, BufferedTileProvider, DragController, DragEvent, PuzzleError, Settings};

fn run() -> Result<(), PuzzleError> {
    let mut args = env::args().skip(1);

    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    let provider = BufferedTileProvider::new(settings.rows, settings.cols);
    let mut board = Board::new(&settings, &provider)?;

    let events: Vec<DragEvent> = match args.next() {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Vec::new(),
    };
    log::info!("Replaying {} input events", events.len());

    let mut controller = DragController::new();
    for event in events {
        if let Some(report) = controller.apply(&mut board, event)? {
            for merge in &report.merges {
                log::info!(
                    "{} snapped to {} ({:?})",
                    report.piece,
                    merge.with,
                    merge.direction
                );
            }
        }
    }
    if controller.is_dragging() {
        log::warn!("Script ended mid-gesture");
    }

    let snapshot = board.snapshot();
    log::info!(
        "{} pieces in {} groups",
        snapshot.pieces.len(),
        snapshot.group_count
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Jigsaw Bind starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
