pub mod app;
pub mod charts;
pub mod commands;
pub mod config;
pub mod logging;
pub mod models;
pub mod presenter;
pub mod state;
pub mod utils;

pub use app::{CycleOutcome, Dashboard, Flow, READOUT_LABEL};
pub use presenter::{MessageKind, Presenter, TerminalPresenter};
pub use state::AppState;
