//! Client-side logic of the Birdie terminal client.
//!
//! Everything here is free of I/O except [`SessionStore`], which persists the
//! viewer's identity between runs. The HTTP layer and the screens live in the
//! `birdie_tui` crate.
pub use error::EngineError;
pub use expense::ExpenseDraft;
pub use money::Money;
pub use remote::{Remote, first_error};
pub use session::{Session, SessionStore};
pub use settlement::{Group, Settlement};

mod error;
mod expense;
mod money;
mod remote;
mod session;
mod settlement;

pub type ResultEngine<T> = Result<T, EngineError>;
