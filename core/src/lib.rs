//! Client core for the expense tracker.
//!
//! # Overview
//! One screen's worth of logic: a create form, a list that mirrors the
//! server's expense records, inline editing, and a running total, all
//! backed by a four-operation HTTP/JSON API (list, create, update,
//! delete).
//!
//! # Design
//! - Host-does-IO: the core builds `HttpRequest` values and folds
//!   `HttpResponse` values into state; the caller executes the actual
//!   round-trips. The whole crate is deterministic and network-free.
//! - `ExpenseClient` is the stateless gateway; `ExpenseTracker` layers
//!   the view state (draft, mirrored list, edit mode, error banner) on
//!   top of it; `render` turns that state into a `Screen` value.
//! - The server owns the data. The mirror only changes when a response
//!   confirms a mutation, and a server-returned record is always adopted
//!   verbatim.

pub mod client;
pub mod error;
pub mod http;
pub mod render;
pub mod state;
pub mod tracker;
pub mod types;

pub use client::ExpenseClient;
pub use error::{ApiError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::{render, Row, Screen};
pub use state::{Change, Draft, EditState, ExpenseStore, ViewState};
pub use tracker::{ExpenseTracker, SubmitError};
pub use types::{Expense, NewExpense};
