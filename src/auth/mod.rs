//! Session state and single-flight refresh coordination.

pub mod refresh;
pub mod session;

pub use refresh::{RefreshGate, RefreshOutcome, RefreshTicket};
pub use session::SessionStore;
