//! Interview session management
//!
//! This module provides the session controller that drives the visible
//! lifecycle of an interview:
//! - Job-role validation at interview start
//! - Listening start/stop against the recognizer boundary
//! - Dispatch of the final transcript to the active resolution strategy
//! - Formatting and hand-off of the result to the presentation boundary
//! - Session state and statistics

mod controller;
mod presenter;
mod session;

pub use controller::SessionController;
pub use presenter::{ConsolePresenter, Presenter};
pub use session::{Phase, Session, SessionStats};
