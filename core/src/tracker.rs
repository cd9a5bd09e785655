//! The expense tracker component: client plus view state.
//!
//! # Design
//! Mirrors the client's build/parse split one level up. Each user action
//! has a method that produces the `HttpRequest` to execute (after local
//! validation, which blocks invalid drafts before any network work) and a
//! matching `apply_*` method that folds the `HttpResponse` into the view
//! state. The host owns the round-trip, so every state transition here is
//! testable with fabricated responses.
//!
//! Banner discipline: every successful apply clears the error banner,
//! every failed one overwrites it. Validation failures never touch the
//! banner — they are returned to the host to show as a blocking alert.
//! Requests are strictly sequential from the tracker's point of view; it
//! does nothing to de-duplicate or order concurrent calls.

use std::fmt;

use crate::client::ExpenseClient;
use crate::error::{ApiError, ValidationError};
use crate::http::{HttpRequest, HttpResponse};
use crate::state::{Change, Draft, EditState, ViewState};

/// Why a submit or save produced no request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The draft failed its required-field checks; show an alert, leave
    /// all state as it was.
    Invalid(ValidationError),

    /// The payload could not be turned into a request body.
    Request(ApiError),

    /// `save_edit` was called with no edit in progress.
    NoEdit,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(e) => e.fmt(f),
            SubmitError::Request(e) => e.fmt(f),
            SubmitError::NoEdit => write!(f, "no edit in progress"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<ValidationError> for SubmitError {
    fn from(e: ValidationError) -> Self {
        SubmitError::Invalid(e)
    }
}

impl From<ApiError> for SubmitError {
    fn from(e: ApiError) -> Self {
        SubmitError::Request(e)
    }
}

/// One expense-tracker screen: a create form, the mirrored list, an
/// optional inline edit, and an error banner.
#[derive(Debug, Clone)]
pub struct ExpenseTracker {
    client: ExpenseClient,
    state: ViewState,
}

impl ExpenseTracker {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: ExpenseClient::new(base_url),
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The create form, for the host to fill in as the user types.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.state.draft
    }

    /// Record a failure that happened outside the HTTP contract, e.g. the
    /// connection itself failed. Lands in the banner like any other error.
    pub fn set_error(&mut self, message: String) {
        self.state.error = Some(message);
    }

    // --- list ---

    pub fn refresh(&self) -> HttpRequest {
        self.client.build_list()
    }

    /// On success the fetched list replaces the mirror; on failure only
    /// the banner changes and the existing list stays visible.
    pub fn apply_refresh(&mut self, response: HttpResponse) {
        match self.client.parse_list(response) {
            Ok(expenses) => {
                self.state.expenses.apply(Change::Loaded(expenses));
                self.state.error = None;
            }
            Err(e) => self.state.error = Some(e.to_string()),
        }
    }

    // --- create ---

    /// Validate the create draft and build the POST. An invalid draft
    /// produces no request and changes no state.
    pub fn submit(&self) -> Result<HttpRequest, SubmitError> {
        let payload = self.state.draft.validate()?;
        Ok(self.client.build_create(&payload)?)
    }

    /// On success the server's record (with its assigned id) is appended
    /// and the form is cleared for the next entry.
    pub fn apply_submit(&mut self, response: HttpResponse) {
        match self.client.parse_create(response) {
            Ok(expense) => {
                self.state.expenses.apply(Change::Created(expense));
                self.state.draft = Draft::default();
                self.state.error = None;
            }
            Err(e) => self.state.error = Some(e.to_string()),
        }
    }

    // --- edit / update ---

    /// Enter inline-edit mode for `id`, seeding the edit form from the
    /// current record. Returns false if no such record is held.
    pub fn start_edit(&mut self, id: i64) -> bool {
        match self.state.expenses.get(id) {
            Some(expense) => {
                self.state.edit = Some(EditState {
                    id,
                    draft: Draft::from_expense(expense),
                });
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.state.edit = None;
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut Draft> {
        self.state.edit.as_mut().map(|edit| &mut edit.draft)
    }

    /// Validate the edit draft and build the full-record PUT.
    pub fn save_edit(&self) -> Result<HttpRequest, SubmitError> {
        let edit = self.state.edit.as_ref().ok_or(SubmitError::NoEdit)?;
        let payload = edit.draft.validate()?;
        Ok(self.client.build_update(edit.id, &payload)?)
    }

    /// On success the server's copy replaces the record and edit mode
    /// ends; on failure the edit stays open so nothing typed is lost.
    pub fn apply_save_edit(&mut self, response: HttpResponse) {
        match self.client.parse_update(response) {
            Ok(expense) => {
                self.state.expenses.apply(Change::Updated(expense));
                self.state.edit = None;
                self.state.error = None;
            }
            Err(e) => self.state.error = Some(e.to_string()),
        }
    }

    // --- delete ---

    /// Build the DELETE. The host must confirm with the user before
    /// executing this request.
    pub fn delete(&self, id: i64) -> HttpRequest {
        self.client.build_delete(id)
    }

    /// Deletes return no body, so the host passes the id back in.
    pub fn apply_delete(&mut self, id: i64, response: HttpResponse) {
        match self.client.parse_delete(response) {
            Ok(()) => {
                self.state.expenses.apply(Change::Deleted(id));
                self.state.error = None;
            }
            Err(e) => self.state.error = Some(e.to_string()),
        }
    }
}
