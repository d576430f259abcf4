use std::sync::mpsc;
use std::thread;

use board_logging::{board_error, board_info};
use buzzboard_core::{Effect, Msg};
use buzzboard_engine::{EngineEvent, EngineHandle};

/// Executes effects against the engine and folds engine completions back
/// into the message stream.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        events: mpsc::Receiver<EngineEvent>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        spawn_event_loop(events, msg_tx);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchItems { generation, query } => {
                    board_info!("FetchItems generation={generation} query={query}");
                    self.engine.refresh(generation, query);
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let msg = match event {
                EngineEvent::RefreshCompleted { generation, result } => match result {
                    Ok(items) => Msg::ItemsFetched { generation, items },
                    Err(err) => {
                        // Malformed body: the refresh aborts and the
                        // previous render stays on screen.
                        board_error!("refresh {generation} aborted: {err}");
                        Msg::FetchFailed {
                            generation,
                            message: err.to_string(),
                        }
                    }
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}
