//! Bulls & Cows client library
//!
//! A thin client for a remote Bulls & Cows game service. The service
//! generates secrets, scores guesses and decides when a game is over; this
//! crate keeps the client-side session consistent and renders it.
//!
//! # Architecture
//!
//! - **Machine**: the session state machine, the only writer of session data
//! - **Games**: domain types and the local guess validator
//! - **Api**: the `GameApi` seam and its REST implementation
//! - **Tui / Console**: presentation layers reading machine snapshots
//!
//! # Example
//!
//! ```no_run
//! use bulls_cows::{Difficulty, RestGameClient, SessionMachine};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = RestGameClient::new("http://localhost:8080");
//! let mut machine = SessionMachine::new();
//!
//! machine.start(&client, Difficulty::Easy).await?;
//! machine.submit_guess(&client, "1234").await?;
//!
//! for outcome in machine.snapshot().history() {
//!     println!("{}: {} bulls, {} cows", outcome.guess(), outcome.bulls(), outcome.cows());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod config;
mod console;
mod games;
mod machine;
mod session;
mod tui;

// Crate-level exports - Service client
pub use api::{
    ApiError, ApiErrorKind, GameApi, GuessReply, GuessRequest, NewGame, NewGameRequest, Operation,
    RestGameClient,
};

// Crate-level exports - Configuration
pub use config::{API_BASE_ENV, ClientConfig, ConfigError};

// Crate-level exports - State machine
pub use machine::{CallOutcome, PendingCall, Rejection, SessionMachine, Snapshot};

// Crate-level exports - Session
pub use session::GameSession;

// Crate-level exports - Game types
pub use games::bulls_cows::{
    Difficulty, GUESS_LEN, GameId, Guess, GuessOutcome, GuessStatus, InvalidGuess, Phase,
    is_valid_guess,
};

// Crate-level exports - Front ends
pub use console::{ConsoleCommand, render_guess, render_start, run_console};
pub use tui::{App, Intent, map_key, run_tui};
