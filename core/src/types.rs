//! Domain DTOs for the expense API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently
//! from the mock-server crate; integration tests catch schema drift.
//! `amount` is a `Decimal` that serializes as a plain JSON number, and
//! `date` is a calendar date serialized as `YYYY-MM-DD`, matching the
//! wire format the backend produces.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single expense record returned by the API. The server assigns `id`;
/// the client never invents one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for creating or replacing an expense — a full record minus the
/// server-assigned id. Updates send every field; there is no partial patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewExpense {
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
