use super::*;

fn message(user: &str, text: &str) -> ChatMessage {
    ChatMessage {
        user: user.to_owned(),
        text: Some(text.to_owned()),
        time: None,
        image: None,
        reply_to: None,
    }
}

#[test]
fn history_replaces_log_and_preserves_order() {
    let mut state = ChatState::default();
    state.append(message("stale", "gone after init"));

    state.set_history(vec![message("alice", "one"), message("bob", "two"), message("alice", "three")]);
    let users: Vec<&str> = state.messages.iter().map(|m| m.user.as_str()).collect();
    assert_eq!(users, ["alice", "bob", "alice"]);
    assert_eq!(state.messages[0].text.as_deref(), Some("one"));
    assert_eq!(state.messages[2].text.as_deref(), Some("three"));
}

#[test]
fn append_adds_to_the_end() {
    let mut state = ChatState::default();
    state.append(message("alice", "first"));
    state.append(message("bob", "second"));
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].user, "bob");
}

#[test]
fn reply_draft_is_last_write_wins() {
    let mut state = ChatState::default();
    state.set_reply_draft(ReplyRef { user: "alice".to_owned(), text: "one".to_owned() });
    state.set_reply_draft(ReplyRef { user: "bob".to_owned(), text: "two".to_owned() });
    assert_eq!(state.reply_draft.as_ref().map(|r| r.user.as_str()), Some("bob"));
}

#[test]
fn take_reply_draft_detaches_and_clears() {
    let mut state = ChatState::default();
    state.set_reply_draft(ReplyRef { user: "bob".to_owned(), text: "hi".to_owned() });

    let taken = state.take_reply_draft().expect("draft should be armed");
    assert_eq!(taken.user, "bob");
    assert_eq!(taken.text, "hi");
    assert!(state.reply_draft.is_none());
    assert!(state.take_reply_draft().is_none());
}

#[test]
fn clear_reply_draft_dismisses_without_send() {
    let mut state = ChatState::default();
    state.set_reply_draft(ReplyRef { user: "bob".to_owned(), text: "hi".to_owned() });
    state.clear_reply_draft();
    assert!(state.reply_draft.is_none());
}
