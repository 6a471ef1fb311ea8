//! Model-view-intent core.
//!
//! Button presses become [`ViewEvent`]s on a single fan-in queue. One task
//! owns the [`ViewModel`] and reduces each event into a [`ViewState`] and a
//! [`ViewEffect`]. States go out through a single-slot channel where only the
//! latest value matters; effects go out through an ordered queue where every
//! value is delivered exactly once.
//!
//! # Terminology
//! - **Event**: what the user did (a button press)
//! - **State**: what the screen shows (the last button pressed)
//! - **Effect**: what happens once and is gone (a toast)
//!
//! The host UI is reached only through the traits in [`host`]. The tasks that
//! connect everything live in a [`ScreenScope`] tied to the screen lifetime.

pub mod effect;
pub mod event;
pub mod host;
pub mod scope;
pub mod state;
pub mod view_model;

pub use effect::{ToastDuration, ViewEffect};
pub use event::{EventSource, IntentChannel, IntentStream, ViewEvent};
pub use host::{Notifier, TextView};
pub use scope::ScreenScope;
pub use state::ViewState;
pub use view_model::{ViewModel, reduce};
