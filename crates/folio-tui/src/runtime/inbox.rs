//! Inbox channel types.
//!
//! Handlers send their `UiEvent`s here; the runtime drains the receiver once
//! per loop turn.

use tokio::sync::mpsc;

use crate::events::UiEvent;

pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;
