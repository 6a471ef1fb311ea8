//! Button events and the fan-in queue that carries them.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::trace;

/// A press of one of the three buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewEvent {
    Instant,
    OneSec,
    FiveSec,
}

impl ViewEvent {
    /// All events in button order (left to right).
    pub const ALL: [Self; 3] = [Self::Instant, Self::OneSec, Self::FiveSec];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Instant => "Instant",
            Self::OneSec => "OneSec",
            Self::FiveSec => "FiveSec",
        }
    }

    /// Position of the button emitting this event.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Instant => 0,
            Self::OneSec => 1,
            Self::FiveSec => 2,
        }
    }
}

impl fmt::Display for ViewEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Producer side of one intent subscription.
///
/// Every [`EventSource`] handed out by the same channel feeds the same queue,
/// so events from different buttons arrive in the order they were emitted.
#[derive(Debug, Clone)]
pub struct IntentChannel {
    tx: UnboundedSender<ViewEvent>,
}

impl IntentChannel {
    /// Open a fresh subscription.
    ///
    /// Nothing is queued before this is called and nothing from a previous
    /// subscription carries over.
    #[must_use]
    pub fn open() -> (Self, IntentStream) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, IntentStream { rx })
    }

    /// A producer bound to a single button.
    #[must_use]
    pub fn source(&self, event: ViewEvent) -> EventSource {
        EventSource {
            event,
            tx: self.tx.clone(),
        }
    }

    /// One producer per button, in button order.
    #[must_use]
    pub fn sources(&self) -> [EventSource; 3] {
        ViewEvent::ALL.map(|event| self.source(event))
    }
}

/// Emits a fixed [`ViewEvent`] each time its button is pressed.
#[derive(Debug, Clone)]
pub struct EventSource {
    event: ViewEvent,
    tx: UnboundedSender<ViewEvent>,
}

impl EventSource {
    /// Queue one press.
    ///
    /// Returns `false` if the subscription has been dropped, in which case
    /// the press is discarded.
    pub fn emit(&self) -> bool {
        if self.tx.send(self.event).is_err() {
            trace!(event = %self.event, "intent subscription closed, dropping press");
            return false;
        }
        true
    }
}

/// Consumer side of one intent subscription.
///
/// Ends once every [`EventSource`] and the [`IntentChannel`] are dropped.
#[derive(Debug)]
pub struct IntentStream {
    rx: UnboundedReceiver<ViewEvent>,
}

impl IntentStream {
    /// Wait for the next press.
    pub async fn next_event(&mut self) -> Option<ViewEvent> {
        self.rx.recv().await
    }
}

impl Stream for IntentStream {
    type Item = ViewEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
