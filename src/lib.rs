//! # calwire
//!
//! Async client library for a calendar & scheduling-page REST API.
//!
//! ## Overview
//!
//! The library is a thin facade over the remote API: callers hand it
//! identifiers and parameter sets, it validates them up front, issues HTTP
//! requests, and returns results in the same order and shape as the input.
//!
//! Multi-id lookups and deletes are the interesting part: each id becomes
//! one concurrent network request, a failing id never aborts its siblings,
//! and the result sequence always lines up positionally with the input —
//! `result[i]` pertains to `ids[i]` even when ids repeat and regardless of
//! which request finished first. Callers inspect each entry's outcome
//! instead of relying on a thrown error to detect partial failure.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use calwire::{Calendars, ClientOptions};
//!
//! #[tokio::main]
//! async fn main() -> calwire::Result<()> {
//!     let options = ClientOptions::new("your-access-token");
//!     let calendars = Calendars::new(options)?;
//!
//!     // Three concurrent requests; three entries back, in this order.
//!     let entries = calendars.get(vec!["cal_1", "cal_2", "cal_1"]).await?;
//!     for entry in &entries {
//!         match entry.payload() {
//!             Some(payload) => println!("{}: {payload}", entry.id),
//!             None => eprintln!("{}: {:?}", entry.id, entry.error()),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`batch`] | Concurrent fan-out executor and ordered result reconciliation |
//! | [`calendars`] | Calendar facade (list, batched get) |
//! | [`scheduler`] | Scheduling-page facade (list, create, get, update, delete) |
//! | [`options`] | Client configuration: token, server selection, timeout |
//! | [`validation`] | Pre-flight input validation |
//! | [`request`] | Request descriptors and the factory that builds them |
//! | [`transport`] | HTTP transport and the seam for substituting it in tests |
//! | [`endpoints`] | URL template table |

pub mod batch;
pub mod calendars;
pub mod endpoints;
pub mod options;
pub mod request;
pub mod scheduler;
pub mod transport;
pub mod validation;

// Re-export main types for convenience
pub use batch::{BatchEntry, BatchOutcome, FailureMode, IdParam};
pub use calendars::{CalendarListParams, CalendarView, Calendars};
pub use options::{ClientOptions, Server};
pub use request::{RequestDescriptor, Verb};
pub use scheduler::SchedulingPages;
pub use transport::{HttpTransport, Transport};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
