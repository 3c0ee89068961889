//! End-to-end protocol tests against a live server on an ephemeral port.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use parley::routes;
use parley::state::AppState;
use wire::{ChatMessage, ClientEvent, ReplyRef, ServerEvent};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn spawn_server() -> String {
    let state = AppState::new();
    let app = routes::app(state, "client/dist");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("ws://{addr}/ws")
}

async fn connect(url: &str) -> Client {
    let (stream, _) = connect_async(url).await.expect("connect");
    stream
}

async fn send(client: &mut Client, event: &ClientEvent) {
    let json = wire::encode_client(event).expect("encode");
    client.send(Message::Text(json.into())).await.expect("send");
}

/// Next text frame as a server event, skipping pings, within a deadline.
async fn recv_event(client: &mut Client) -> ServerEvent {
    let deadline = Duration::from_secs(5);
    loop {
        let frame = tokio::time::timeout(deadline, client.next())
            .await
            .expect("timed out waiting for frame")
            .expect("socket closed")
            .expect("transport error");
        if let Message::Text(text) = frame {
            return wire::decode_server(&text).expect("decode server event");
        }
    }
}

async fn join(client: &mut Client, user: &str) {
    send(client, &ClientEvent::Join { user: user.to_owned() }).await;
}

fn text_message(user: &str, text: &str) -> ChatMessage {
    ChatMessage {
        user: user.to_owned(),
        text: Some(text.to_owned()),
        time: Some("2024-05-01T12:30:00.000Z".to_owned()),
        image: None,
        reply_to: None,
    }
}

#[tokio::test]
async fn accepted_join_receives_joined_then_empty_init() {
    let url = spawn_server().await;
    let mut alice = connect(&url).await;

    join(&mut alice, "alice").await;

    assert_eq!(recv_event(&mut alice).await, ServerEvent::Joined { user: "alice".to_owned() });
    assert_eq!(recv_event(&mut alice).await, ServerEvent::Init { messages: vec![] });
}

#[tokio::test]
async fn duplicate_username_is_rejected_with_name_taken() {
    let url = spawn_server().await;
    let mut alice = connect(&url).await;
    join(&mut alice, "alice").await;
    let _ = recv_event(&mut alice).await; // joined
    let _ = recv_event(&mut alice).await; // init

    let mut impostor = connect(&url).await;
    join(&mut impostor, "alice").await;

    assert_eq!(
        recv_event(&mut impostor).await,
        ServerEvent::Error { message: "name taken".to_owned() }
    );
}

#[tokio::test]
async fn blank_username_is_rejected() {
    let url = spawn_server().await;
    let mut client = connect(&url).await;
    join(&mut client, "   ").await;

    assert_eq!(
        recv_event(&mut client).await,
        ServerEvent::Error { message: "a username is required".to_owned() }
    );
}

#[tokio::test]
async fn message_is_broadcast_to_every_client_including_sender() {
    let url = spawn_server().await;
    let mut alice = connect(&url).await;
    join(&mut alice, "alice").await;
    let _ = recv_event(&mut alice).await;
    let _ = recv_event(&mut alice).await;

    let mut bob = connect(&url).await;
    join(&mut bob, "bob").await;
    let _ = recv_event(&mut bob).await;
    let _ = recv_event(&mut bob).await;

    let mut outgoing = text_message("alice", "hello");
    outgoing.reply_to = Some(ReplyRef { user: "bob".to_owned(), text: "hi".to_owned() });
    send(&mut alice, &ClientEvent::Message(outgoing)).await;

    for client in [&mut alice, &mut bob] {
        let ServerEvent::New { message } = recv_event(client).await else {
            panic!("expected new event");
        };
        assert_eq!(message.user, "alice");
        assert_eq!(message.text.as_deref(), Some("hello"));
        assert_eq!(
            message.reply_to,
            Some(ReplyRef { user: "bob".to_owned(), text: "hi".to_owned() })
        );
    }
}

#[tokio::test]
async fn late_joiner_receives_history_in_arrival_order() {
    let url = spawn_server().await;
    let mut alice = connect(&url).await;
    join(&mut alice, "alice").await;
    let _ = recv_event(&mut alice).await;
    let _ = recv_event(&mut alice).await;

    send(&mut alice, &ClientEvent::Message(text_message("alice", "first"))).await;
    let _ = recv_event(&mut alice).await;
    send(&mut alice, &ClientEvent::Message(text_message("alice", "second"))).await;
    let _ = recv_event(&mut alice).await;

    let mut late = connect(&url).await;
    join(&mut late, "late").await;
    assert_eq!(recv_event(&mut late).await, ServerEvent::Joined { user: "late".to_owned() });
    let ServerEvent::Init { messages } = recv_event(&mut late).await else {
        panic!("expected init event");
    };
    let texts: Vec<&str> = messages.iter().filter_map(|m| m.text.as_deref()).collect();
    assert_eq!(texts, ["first", "second"]);
}

#[tokio::test]
async fn message_before_join_is_dropped() {
    let url = spawn_server().await;
    let mut lurker = connect(&url).await;
    send(&mut lurker, &ClientEvent::Message(text_message("ghost", "boo"))).await;

    // If the ghost message had landed, this init would carry it.
    let mut alice = connect(&url).await;
    join(&mut alice, "alice").await;
    let _ = recv_event(&mut alice).await;
    assert_eq!(recv_event(&mut alice).await, ServerEvent::Init { messages: vec![] });
}

#[tokio::test]
async fn sender_name_comes_from_the_join_not_the_payload() {
    let url = spawn_server().await;
    let mut alice = connect(&url).await;
    join(&mut alice, "alice").await;
    let _ = recv_event(&mut alice).await;
    let _ = recv_event(&mut alice).await;

    send(&mut alice, &ClientEvent::Message(text_message("mallory", "spoofed"))).await;
    let ServerEvent::New { message } = recv_event(&mut alice).await else {
        panic!("expected new event");
    };
    assert_eq!(message.user, "alice");
}

#[tokio::test]
async fn disconnect_frees_the_username() {
    let url = spawn_server().await;
    let mut alice = connect(&url).await;
    join(&mut alice, "alice").await;
    let _ = recv_event(&mut alice).await;
    let _ = recv_event(&mut alice).await;
    alice.close(None).await.expect("close");

    // The name may take a moment to free while the server reaps the socket.
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let mut retry = connect(&url).await;
        join(&mut retry, "alice").await;
        match recv_event(&mut retry).await {
            ServerEvent::Joined { user } => {
                assert_eq!(user, "alice");
                break;
            }
            ServerEvent::Error { .. } if tokio::time::Instant::now() < deadline => {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
