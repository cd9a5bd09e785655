//! View state: the draft form, the mirrored expense list, and the banner.
//!
//! # Design
//! The list lives in an explicit store instead of ad-hoc mutation
//! scattered across callbacks. `ExpenseStore` keeps records in insertion
//! order (what the server returned, then appends) and maintains an id →
//! position index so update and delete are O(1) lookups rather than
//! linear scans. All mutation goes through `apply(Change)`, which keeps
//! the id-uniqueness invariant in one place.
//!
//! The store only ever holds what the server confirmed: a change is
//! applied after the corresponding response parses successfully, never
//! optimistically.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::{Expense, NewExpense};

/// Raw form-field text for a new or edited expense, exactly as typed.
/// Validation turns a draft into a typed `NewExpense` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl Draft {
    /// Seed an edit form from an existing record.
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount.to_string(),
            category: expense.category.clone(),
            date: expense.date.to_string(),
            description: expense.description.clone().unwrap_or_default(),
        }
    }

    /// Required-field and parse checks. Title, amount, category and date
    /// must be non-empty; amount must be a non-negative decimal; date must
    /// be `YYYY-MM-DD`. Description stays optional — empty means absent.
    pub fn validate(&self) -> Result<NewExpense, ValidationError> {
        let title = require(&self.title, "title")?;
        let amount = require(&self.amount, "amount")?;
        let category = require(&self.category, "category")?;
        let date = require(&self.date, "date")?;

        let amount: Decimal = amount.parse().map_err(|_| ValidationError::InvalidAmount)?;
        if amount < Decimal::ZERO {
            return Err(ValidationError::InvalidAmount);
        }
        let date: NaiveDate = date.parse().map_err(|_| ValidationError::InvalidDate)?;

        let description = self.description.trim();
        Ok(NewExpense {
            title,
            amount,
            category,
            date,
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        })
    }
}

fn require(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// One confirmed mutation of the mirrored list.
#[derive(Debug, Clone)]
pub enum Change {
    /// Adopt a freshly fetched list wholesale.
    Loaded(Vec<Expense>),
    /// Append the record the server created.
    Created(Expense),
    /// Replace the record with the same id.
    Updated(Expense),
    /// Remove the record with this id.
    Deleted(i64),
}

/// Insertion-ordered mirror of the server's expense list, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    records: Vec<Expense>,
    index: HashMap<i64, usize>,
}

impl ExpenseStore {
    pub fn apply(&mut self, change: Change) {
        match change {
            Change::Loaded(records) => {
                self.records = records;
                self.reindex();
            }
            Change::Created(expense) => match self.index.get(&expense.id) {
                // An id collision means the server re-sent a record we
                // already hold; adopt the newer copy to keep ids unique.
                Some(&pos) => self.records[pos] = expense,
                None => {
                    self.index.insert(expense.id, self.records.len());
                    self.records.push(expense);
                }
            },
            Change::Updated(expense) => {
                // Only a record we actually hold gets replaced; an unknown
                // id is ignored rather than appended.
                if let Some(&pos) = self.index.get(&expense.id) {
                    self.records[pos] = expense;
                }
            }
            Change::Deleted(id) => {
                if let Some(pos) = self.index.remove(&id) {
                    self.records.remove(pos);
                    self.reindex();
                }
            }
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .records
            .iter()
            .enumerate()
            .map(|(pos, e)| (e.id, pos))
            .collect();
    }

    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&Expense> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Running total of every visible amount, recomputed on each call.
    pub fn total(&self) -> Decimal {
        self.records.iter().map(|e| e.amount).sum()
    }
}

/// The record currently being edited inline, with its own draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: i64,
    pub draft: Draft,
}

/// Everything the renderer needs: the mirrored list, the create form, the
/// in-progress edit (if any), and the persistent error banner.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub expenses: ExpenseStore,
    pub draft: Draft,
    pub edit: Option<EditState>,
    pub error: Option<String>,
}
