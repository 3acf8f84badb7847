//! Interactive chat session.

use futures_util::{SinkExt, StreamExt};
use roomcast_server::infrastructure::dto::websocket::{ClientEvent, ServerEvent};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::{
    command::{HELP, Input, parse_input},
    error::ClientError,
    render::render_event,
};

/// Connect to the relay, enter `room` as `name`, and chat until the user
/// quits or the server closes the connection.
pub async fn run_client(url: &str, name: String, room: String) -> Result<(), ClientError> {
    let (ws_stream, _) = connect_async(url).await?;
    tracing::info!("Connected to {}", url);
    println!("Connected to {url} as '{name}'. {HELP}");

    let (mut write, mut read) = ws_stream.split();

    let enter = ClientEvent::EnterRoom {
        name: name.clone(),
        room,
    };
    write
        .send(Message::Text(serde_json::to_string(&enter)?.into()))
        .await?;

    // Print everything the server sends
    let mut reader = tokio::spawn(async move {
        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => match serde_json::from_str::<ServerEvent>(text.as_str()) {
                    Ok(event) => println!("{}", render_event(&event)),
                    Err(e) => tracing::warn!("Unrecognized event from server: {}", e),
                },
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            }
        }
    });

    // rustyline blocks, so it gets its own thread
    let (line_tx, mut line_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        if let Err(e) = read_lines(&line_tx) {
            let _ = line_tx.send(Err(e));
        }
    });

    loop {
        tokio::select! {
            line = line_rx.recv() => {
                let Some(line) = line else { break };
                let event = match parse_input(&line?) {
                    Input::Message(text) => ClientEvent::Message {
                        name: Some(name.clone()),
                        text,
                    },
                    Input::Join(room) => ClientEvent::EnterRoom {
                        name: name.clone(),
                        room,
                    },
                    Input::Typing => ClientEvent::Activity { name: name.clone() },
                    Input::Quit => break,
                    Input::Empty => continue,
                    Input::Unknown(command) => {
                        println!("unknown command '{command}'. {HELP}");
                        continue;
                    }
                };
                write
                    .send(Message::Text(serde_json::to_string(&event)?.into()))
                    .await?;
            }
            _ = &mut reader => {
                println!("Server closed the connection");
                return Ok(());
            }
        }
    }

    if let Err(e) = write.send(Message::Close(None)).await {
        tracing::debug!("Failed to send close frame: {}", e);
    }
    reader.abort();
    tracing::info!("Disconnected");

    Ok(())
}

/// Forward typed lines until EOF or Ctrl-C.
fn read_lines(tx: &mpsc::UnboundedSender<Result<String, ReadlineError>>) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                if tx.send(Ok(line)).is_err() {
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}
