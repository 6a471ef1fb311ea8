use std::sync::Arc;

use color_eyre::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::config::{AppConfig, KeyResolver};
use crate::mvi::{IntentChannel, IntentStream, ScreenScope};
use crate::screen::{MainScreen, ScreenHost, ScreenMessage, ScreenOutput};
use crate::theme::Theme;
use crate::tui::{Event, Tui};
use crate::ui::{Component, EventResult};

pub struct App {
    theme: Theme,
    frame_rate: f64,
    tick_rate: f64,
    screen: MainScreen,
    intents: Option<IntentStream>,
    scope: Option<ScreenScope>,
    message_tx: UnboundedSender<ScreenMessage>,
    message_rx: UnboundedReceiver<ScreenMessage>,
    should_quit: bool,
    should_suspend: bool,
}

impl App {
    pub fn new(config: &AppConfig, theme: Theme) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (channel, intents) = IntentChannel::open();
        let resolver = Arc::new(KeyResolver::new(Arc::new(config.keybindings.clone())));
        let screen = MainScreen::new(channel.sources(), resolver, config.toast.clone());

        Self {
            theme,
            frame_rate: config.terminal.frame_rate,
            tick_rate: config.terminal.tick_rate,
            screen,
            intents: Some(intents),
            scope: None,
            message_tx,
            message_rx,
            should_quit: false,
            should_suspend: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new(self.frame_rate, self.tick_rate)?;
        tui.enter()?;
        self.on_create();

        loop {
            tokio::select! {
                event = tui.next_event() => match event {
                    Some(Event::Render) => self.render(&mut tui)?,
                    Some(Event::Resize(width, height)) => {
                        debug!(width, height, "terminal resized");
                        self.render(&mut tui)?;
                    }
                    Some(event) => self.update(&event)?,
                    None => break,
                },
                Some(message) = self.message_rx.recv() => self.screen.apply(message),
            }

            if self.should_suspend {
                info!("Suspending");
                tui.suspend()?;
                tui.resume()?;
                self.should_suspend = false;
            } else if self.should_quit {
                break;
            }
        }

        self.on_destroy().await;
        tui.exit()?;
        Ok(())
    }

    /// Screen created: start the model-view-intent loops.
    fn on_create(&mut self) {
        let Some(intents) = self.intents.take() else {
            warn!("screen already created");
            return;
        };
        let host = ScreenHost::new(self.message_tx.clone());
        self.scope = Some(ScreenScope::launch(intents, host.clone(), host));
    }

    /// Screen destroyed: stop the loops and wait for them.
    async fn on_destroy(&mut self) {
        if let Some(scope) = self.scope.take() {
            scope.shutdown().await;
        }
    }

    fn update(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::Init => debug!("terminal events started"),
            Event::Quit => self.should_quit = true,
            Event::Error(error) => warn!(%error, "terminal input error"),
            Event::Tick => self.screen.handle_tick(),
            Event::Key(key) => {
                if let EventResult::Event(output) = self.screen.handle_key(*key)? {
                    self.handle_output(output);
                }
            }
            Event::Mouse(mouse) => {
                if let EventResult::Event(output) = self.screen.handle_mouse(*mouse)? {
                    self.handle_output(output);
                }
            }
            Event::Render | Event::Resize(..) | Event::FocusGained | Event::FocusLost => {}
        }
        Ok(())
    }

    const fn handle_output(&mut self, output: ScreenOutput) {
        match output {
            ScreenOutput::Quit => self.should_quit = true,
            ScreenOutput::Suspend => self.should_suspend = true,
        }
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        tui.draw(|frame| self.screen.render(frame, frame.area(), &self.theme))?;
        Ok(())
    }
}
