//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured diagnostic events)
//!
//! Consumers:
//!     → stderr (stdout is reserved for the PID line)
//! ```
//!
//! # Design Decisions
//! - Diagnostics never go to the log file; that file holds records only
//! - Sink failures surface here at error level

pub mod logging;
