use std::sync::{mpsc, Arc};
use std::thread;

use buzzboard_core::Generation;

use crate::fetch::{ApiItemFetcher, FetchSettings, ItemFetcher};
use crate::{EngineEvent, FetchError};

enum EngineCommand {
    Refresh { generation: Generation, query: String },
}

/// Runs fetches on a dedicated worker thread with its own tokio runtime.
///
/// Commands go in over a channel, completions come back as
/// [`EngineEvent`]s. Overlapping refreshes run independently; ordering is
/// resolved by the caller via the generation counter.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Spawns the worker thread and returns the handle plus the event stream.
    pub fn new(
        base_url: impl Into<String>,
        settings: FetchSettings,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), FetchError> {
        let fetcher = Arc::new(ApiItemFetcher::new(base_url, settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn refresh(&self, generation: Generation, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Refresh {
            generation,
            query: query.into(),
        });
    }
}

async fn handle_command(
    fetcher: &dyn ItemFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Refresh { generation, query } => {
            let result = fetcher.fetch_items(&query).await;
            let _ = event_tx.send(EngineEvent::RefreshCompleted { generation, result });
        }
    }
}
