use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;

use jokes_core::{FetchOutcome, FetchRequest, JokeClient};

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App, client: JokeClient) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Drives the spinner
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    // Fetch results come back from spawned tasks on this channel
    let (fetch_tx, mut fetch_rx) = mpsc::channel::<FetchOutcome>(8);

    spawn_fetch(&client, app.session.categories_request(), fetch_tx.clone());

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                            if app.pending_quit {
                                app.quit();
                            } else {
                                app.pending_quit = true;
                            }
                        } else {
                            app.pending_quit = false;
                            if let Some(request) = handle_key(app, key) {
                                spawn_fetch(&client, request, fetch_tx.clone());
                            }
                        }
                    }
                    Some(Ok(Event::Paste(text))) => app.paste(&text),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => app.quit(),
                }
            }

            _ = tick_interval.tick() => {
                app.tick();
            }

            Some(outcome) = fetch_rx.recv() => {
                app.apply(outcome);
            }
        }
    }
    Ok(())
}

/// Run `request` on a background task so rendering never waits on the network
fn spawn_fetch(client: &JokeClient, request: FetchRequest, tx: mpsc::Sender<FetchOutcome>) {
    let client = client.clone();
    tokio::spawn(async move {
        tracing::debug!(?request, "fetch started");
        let outcome = client.execute(request).await;
        if tx.send(outcome).await.is_err() {
            tracing::debug!("UI closed before fetch finished");
        }
    });
}
