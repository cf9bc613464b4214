//! Messages slice: the flash message shown after a successful mutation.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::state::Event;

/// A transient user-facing notice keyed by the operation that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub key: String,
    pub text: String,
}

impl FlashMessage {
    pub fn new(key: &str, text: &str) -> Self {
        Self { key: key.to_owned(), text: text.to_owned() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageState {
    pub current: Option<FlashMessage>,
}

/// Fold an event into the messages slice. Single-slot: the latest flash
/// replaces any prior one.
pub fn reduce(state: &MessageState, event: &Event) -> MessageState {
    match event {
        Event::Flash(message) => MessageState { current: Some(message.clone()) },
        _ => state.clone(),
    }
}
