//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Compile routes → Install interceptors → Mount
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Dispatcher loop exits → Drop shell
//! ```
//!
//! # Design Decisions
//! - Initialization is one explicit call, never ambient global state
//! - Fail fast: any startup error is fatal
//! - The credential policy is always the last interceptor

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{Shell, ShellBuilder};
