//! Tasks tied to the lifetime of the screen.
//!
//! [`ScreenScope::launch`] is the "screen created" hook and
//! [`ScreenScope::shutdown`] the "screen destroyed" one. In between three
//! tasks run: one feeding intents into the [`ViewModel`], one rendering
//! states and one triggering effects. They suspend only while waiting on a
//! channel and stop as soon as the scope is cancelled or their channel closes.

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{IntentStream, Notifier, TextView, ViewEffect, ViewModel, ViewState};

pub struct ScreenScope {
    cancellation_token: CancellationToken,
    tasks: JoinSet<()>,
}

impl ScreenScope {
    /// Wire a fresh [`ViewModel`] between `intents` and the host.
    ///
    /// Must be called from within a tokio runtime.
    pub fn launch<V, N>(intents: IntentStream, view: V, notifier: N) -> Self
    where
        V: TextView + Send + 'static,
        N: Notifier + Send + 'static,
    {
        let cancellation_token = CancellationToken::new();
        let (view_model, effects) = ViewModel::open();
        let states = view_model.view_state();

        let mut tasks = JoinSet::new();
        tasks.spawn(intent_loop(intents, view_model, cancellation_token.clone()));
        tasks.spawn(render_loop(states, view, cancellation_token.clone()));
        tasks.spawn(effect_loop(effects, notifier, cancellation_token.clone()));
        debug!("screen scope launched");

        Self {
            cancellation_token,
            tasks,
        }
    }

    /// Cancel every task and wait for all of them to finish.
    pub async fn shutdown(mut self) {
        self.cancellation_token.cancel();
        while let Some(result) = self.tasks.join_next().await {
            if let Err(error) = result {
                warn!(%error, "screen task ended abnormally");
            }
        }
        debug!("screen scope shut down");
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        // Dropping the JoinSet aborts whatever is still running.
        self.cancellation_token.cancel();
    }
}

async fn intent_loop(
    mut intents: IntentStream,
    view_model: ViewModel,
    cancellation_token: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            () = cancellation_token.cancelled() => break,
            event = intents.next_event() => match event {
                Some(event) => view_model.process(event),
                None => break,
            },
        }
    }
    debug!("intent loop stopped");
}

async fn render_loop<V: TextView>(
    mut states: watch::Receiver<ViewState>,
    view: V,
    cancellation_token: CancellationToken,
) {
    loop {
        let state = *states.borrow_and_update();
        view.set_text(&state.label());

        tokio::select! {
            biased;
            () = cancellation_token.cancelled() => break,
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }
    debug!("render loop stopped");
}

async fn effect_loop<N: Notifier>(
    mut effects: UnboundedReceiver<ViewEffect>,
    notifier: N,
    cancellation_token: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            () = cancellation_token.cancelled() => break,
            effect = effects.recv() => match effect {
                Some(effect) => notifier.notify(effect.message(), effect.duration()),
                None => break,
            },
        }
    }
    debug!("effect loop stopped");
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc::{self, UnboundedSender};
    use tokio::time::timeout;

    use super::*;
    use crate::mvi::{IntentChannel, ToastDuration, ViewEvent, reduce};

    const WAIT: Duration = Duration::from_secs(1);

    struct RecordingView(UnboundedSender<String>);

    impl TextView for RecordingView {
        fn set_text(&self, text: &str) {
            let _ = self.0.send(text.to_string());
        }
    }

    struct RecordingNotifier(UnboundedSender<(String, ToastDuration)>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, duration: ToastDuration) {
            let _ = self.0.send((message.to_string(), duration));
        }
    }

    struct Harness {
        channel: IntentChannel,
        scope: ScreenScope,
        texts: UnboundedReceiver<String>,
        toasts: UnboundedReceiver<(String, ToastDuration)>,
    }

    fn launch() -> Harness {
        let (channel, intents) = IntentChannel::open();
        let (text_tx, texts) = mpsc::unbounded_channel();
        let (toast_tx, toasts) = mpsc::unbounded_channel();
        let scope = ScreenScope::launch(
            intents,
            RecordingView(text_tx),
            RecordingNotifier(toast_tx),
        );
        Harness {
            channel,
            scope,
            texts,
            toasts,
        }
    }

    async fn wait_for_text(texts: &mut UnboundedReceiver<String>, expected: &str) {
        timeout(WAIT, async {
            while let Some(text) = texts.recv().await {
                if text == expected {
                    return;
                }
            }
            panic!("text view closed before showing {expected:?}");
        })
        .await
        .expect("timed out waiting for text");
    }

    async fn next_toast(
        toasts: &mut UnboundedReceiver<(String, ToastDuration)>,
    ) -> (String, ToastDuration) {
        timeout(WAIT, toasts.recv())
            .await
            .expect("timed out waiting for toast")
            .expect("notifier closed")
    }

    #[tokio::test]
    async fn test_initial_state_is_rendered() {
        let mut h = launch();
        wait_for_text(&mut h.texts, "Last button: none").await;
        h.scope.shutdown().await;
    }

    #[tokio::test]
    async fn test_single_press() {
        let mut h = launch();
        assert!(h.channel.source(ViewEvent::Instant).emit());

        wait_for_text(&mut h.texts, "Last button: Instant").await;
        assert_eq!(
            next_toast(&mut h.toasts).await,
            ("Instant".to_string(), ToastDuration::Immediate)
        );

        h.scope.shutdown().await;
        assert!(h.toasts.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_rapid_presses_keep_effect_order() {
        let mut h = launch();
        let [_, one_sec, five_sec] = h.channel.sources();
        one_sec.emit();
        five_sec.emit();

        wait_for_text(&mut h.texts, "Last button: FiveSec").await;
        assert_eq!(
            next_toast(&mut h.toasts).await,
            ("One sec".to_string(), ToastDuration::Short)
        );
        assert_eq!(
            next_toast(&mut h.toasts).await,
            ("Five sec".to_string(), ToastDuration::Long)
        );
        h.scope.shutdown().await;
    }

    #[tokio::test]
    async fn test_every_press_yields_one_effect() {
        let mut h = launch();
        let sources = h.channel.sources();
        let presses = [0, 0, 2, 1, 2, 0, 1, 1];
        for &i in &presses {
            sources[i].emit();
        }

        for &i in &presses {
            let (message, _) = next_toast(&mut h.toasts).await;
            assert_eq!(message, reduce(ViewEvent::ALL[i]).1.message());
        }
        h.scope.shutdown().await;
        assert!(h.toasts.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_shutdown_with_pending_effects() {
        let mut h = launch();
        let [instant, one_sec, five_sec] = h.channel.sources();
        instant.emit();
        one_sec.emit();
        five_sec.emit();

        h.scope.shutdown().await;

        // Whatever made it out before cancellation is a prefix, in order.
        let mut delivered = Vec::new();
        while let Ok((message, _)) = h.toasts.try_recv() {
            delivered.push(message);
        }
        let expected = ["Instant", "One sec", "Five sec"];
        assert!(delivered.len() <= expected.len());
        assert!(delivered.iter().zip(expected).all(|(got, want)| got == want));

        assert!(!instant.emit());
    }

    #[tokio::test]
    async fn test_loops_exit_when_sources_close() {
        let h = launch();
        drop(h.channel);
        // The intent loop ends on its own; shutdown must still join cleanly.
        h.scope.shutdown().await;
    }

    #[tokio::test]
    async fn test_drop_cancels_scope() {
        let h = launch();
        let token = h.scope.cancellation_token.clone();
        drop(h.scope);
        assert!(token.is_cancelled());
    }
}
