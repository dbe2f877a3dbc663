//! Application state: a pure reducer plus an async controller that drives it.

mod controller;
mod state;

pub use controller::Controller;
pub use state::{transition, AppModel, AppState, Event, Failure, GenerationId};
