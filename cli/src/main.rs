//! Terminal client for the parley chat room.
//!
//! Joins with a username, prints incoming messages with local timestamps,
//! and sends each stdin line as a message. Join rejection is fatal.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use clap::Parser;
use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use wire::{ChatMessage, ClientEvent, ServerEvent};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("websocket connect failed: {0}")]
    WsConnect(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("websocket transport failed: {0}")]
    Transport(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("websocket closed before join completed")]
    WsClosed,
    #[error("frame codec failed: {0}")]
    Codec(#[from] wire::CodecError),
    #[error("join rejected: {0}")]
    JoinRejected(String),
    #[error("stdin read failed: {0}")]
    Stdin(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "parley-cli", about = "Terminal client for the parley chat room")]
struct Cli {
    #[arg(long, env = "PARLEY_URL", default_value = "ws://127.0.0.1:3000/ws")]
    url: String,

    #[arg(long, env = "PARLEY_USER")]
    user: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let (mut stream, _) = connect_async(&cli.url)
        .await
        .map_err(|error| CliError::WsConnect(Box::new(error)))?;

    let join = ClientEvent::Join { user: cli.user.clone() };
    stream
        .send(Message::Text(wire::encode_client(&join)?.into()))
        .await
        .map_err(|error| CliError::Transport(Box::new(error)))?;

    wait_for_join(&mut stream).await?;
    println!("joined as {}", cli.user);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let text = line.trim().to_owned();
                if text.is_empty() {
                    continue;
                }
                let message = ChatMessage {
                    user: cli.user.clone(),
                    text: Some(text),
                    time: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
                    image: None,
                    reply_to: None,
                };
                stream
                    .send(Message::Text(wire::encode_client(&ClientEvent::Message(message))?.into()))
                    .await
                    .map_err(|error| CliError::Transport(Box::new(error)))?;
            }
            frame = stream.next() => {
                let Some(frame) = frame else { break };
                let frame = frame.map_err(|error| CliError::Transport(Box::new(error)))?;
                if let Message::Text(text) = frame {
                    handle_frame(&text);
                }
            }
        }
    }

    Ok(())
}

/// Read frames until the join resolves. History and messages arriving before
/// the verdict still print.
async fn wait_for_join(
    stream: &mut (impl StreamExt<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin),
) -> Result<(), CliError> {
    loop {
        let frame = stream
            .next()
            .await
            .ok_or(CliError::WsClosed)?
            .map_err(|error| CliError::Transport(Box::new(error)))?;
        let Message::Text(text) = frame else { continue };
        match wire::decode_server(&text)? {
            ServerEvent::Joined { .. } => return Ok(()),
            ServerEvent::Error { message } => return Err(CliError::JoinRejected(message)),
            ServerEvent::Init { messages } => {
                for message in messages {
                    print_message(&message);
                }
            }
            ServerEvent::New { message } => print_message(&message),
        }
    }
}

fn handle_frame(text: &str) {
    match wire::decode_server(text) {
        Ok(ServerEvent::New { message }) => print_message(&message),
        Ok(ServerEvent::Init { messages }) => {
            for message in messages {
                print_message(&message);
            }
        }
        Ok(ServerEvent::Error { message }) => eprintln!("server error: {message}"),
        Ok(ServerEvent::Joined { .. }) => {}
        Err(error) => eprintln!("ignoring malformed frame: {error}"),
    }
}

fn print_message(message: &ChatMessage) {
    let label = time_label(message.time.as_deref());
    if let Some(reply) = &message.reply_to {
        println!("  > replying to {}: {}", reply.user, reply.text);
    }
    let body = message.text.as_deref().unwrap_or_default();
    let image = if message.image.is_some() { " [image]" } else { "" };
    println!("[{label}] {}: {body}{image}", message.user);
}

/// Local 12-hour label for a message timestamp, falling back to now.
fn time_label(time: Option<&str>) -> String {
    let local: DateTime<Local> = time
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .map_or_else(Local::now, |dt| dt.with_timezone(&Local));
    local.format("%l:%M %p").to_string().trim_start().to_owned()
}
