//! Maps button presses to state and effects.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;
use tracing::debug;

use super::{ViewEffect, ViewEvent, ViewState};

/// The state and effect produced by a single event.
///
/// The result depends on `event` alone, never on earlier state.
#[must_use]
pub const fn reduce(event: ViewEvent) -> (ViewState, ViewEffect) {
    let effect = match event {
        ViewEvent::Instant => ViewEffect::InstantToast,
        ViewEvent::OneSec => ViewEffect::OneSecToast,
        ViewEvent::FiveSec => ViewEffect::FiveSecToast,
    };
    (ViewState::pressed(event), effect)
}

/// Owns the outgoing state slot and the sending side of the effect queue.
///
/// `process` takes `&self` but the view model is meant to be owned by a single
/// task that feeds it events one at a time.
pub struct ViewModel {
    state_tx: watch::Sender<ViewState>,
    effect_tx: UnboundedSender<ViewEffect>,
}

impl ViewModel {
    /// A view model and the receiving end of its effect queue.
    ///
    /// The receiver is handed out only here, so effects have exactly one
    /// consumer.
    #[must_use]
    pub fn open() -> (Self, UnboundedReceiver<ViewEffect>) {
        let (state_tx, _) = watch::channel(ViewState::default());
        let (effect_tx, effect_rx) = mpsc::unbounded_channel();
        (Self { state_tx, effect_tx }, effect_rx)
    }

    /// Subscribe to states. Only the latest unread state is kept.
    #[must_use]
    pub fn view_state(&self) -> watch::Receiver<ViewState> {
        self.state_tx.subscribe()
    }

    /// Publish the state for `event`, then its effect.
    pub fn process(&self, event: ViewEvent) {
        let (state, effect) = reduce(event);
        debug!(%event, ?effect, "processing view event");

        // Stores the value even with no subscriber so a late render loop
        // still sees the latest state.
        self.state_tx.send_replace(state);

        if self.effect_tx.send(effect).is_err() {
            debug!(?effect, "effect channel closed, dropping effect");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut UnboundedReceiver<ViewEffect>) -> Vec<ViewEffect> {
        let mut effects = Vec::new();
        while let Ok(effect) = rx.try_recv() {
            effects.push(effect);
        }
        effects
    }

    #[test]
    fn test_reduce_maps_each_event() {
        assert_eq!(
            reduce(ViewEvent::Instant),
            (ViewState::pressed(ViewEvent::Instant), ViewEffect::InstantToast)
        );
        assert_eq!(
            reduce(ViewEvent::OneSec),
            (ViewState::pressed(ViewEvent::OneSec), ViewEffect::OneSecToast)
        );
        assert_eq!(
            reduce(ViewEvent::FiveSec),
            (ViewState::pressed(ViewEvent::FiveSec), ViewEffect::FiveSecToast)
        );
    }

    #[test]
    fn test_state_depends_only_on_latest_event() {
        let (vm, _effects) = ViewModel::open();
        let states = vm.view_state();
        let presses = [
            ViewEvent::FiveSec,
            ViewEvent::Instant,
            ViewEvent::Instant,
            ViewEvent::OneSec,
            ViewEvent::FiveSec,
        ];
        for event in presses {
            vm.process(event);
            assert_eq!(*states.borrow(), ViewState::pressed(event));
        }
    }

    #[test]
    fn test_one_effect_per_event_in_order() {
        let (vm, mut effects) = ViewModel::open();
        let presses = [
            ViewEvent::OneSec,
            ViewEvent::Instant,
            ViewEvent::OneSec,
            ViewEvent::FiveSec,
        ];
        for event in presses {
            vm.process(event);
        }
        let expected: Vec<_> = presses.iter().map(|&e| reduce(e).1).collect();
        assert_eq!(drain(&mut effects), expected);
    }

    #[test]
    fn test_repeated_press_is_not_deduplicated() {
        let (vm, mut effects) = ViewModel::open();
        let mut states = vm.view_state();

        vm.process(ViewEvent::Instant);
        let first = *states.borrow_and_update();
        vm.process(ViewEvent::Instant);
        assert!(states.has_changed().unwrap());
        let second = *states.borrow_and_update();

        assert_eq!(first, second);
        assert_eq!(
            drain(&mut effects),
            vec![ViewEffect::InstantToast, ViewEffect::InstantToast]
        );
    }

    #[test]
    fn test_state_slot_keeps_only_latest() {
        let (vm, _effects) = ViewModel::open();
        let mut states = vm.view_state();
        vm.process(ViewEvent::OneSec);
        vm.process(ViewEvent::FiveSec);
        assert_eq!(
            *states.borrow_and_update(),
            ViewState::pressed(ViewEvent::FiveSec)
        );
        assert!(!states.has_changed().unwrap());
    }

    #[test]
    fn test_process_after_effect_receiver_dropped() {
        let (vm, effects) = ViewModel::open();
        drop(effects);
        vm.process(ViewEvent::FiveSec);
        assert_eq!(*vm.view_state().borrow(), ViewState::pressed(ViewEvent::FiveSec));
    }
}
