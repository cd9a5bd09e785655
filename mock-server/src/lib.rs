//! In-memory stand-in for the expense API.
//!
//! Mirrors the real backend's observable contract: sequential i64 ids,
//! 201 on create, 204 on delete, and `{"message": ...}` bodies on 400/404
//! the way its validation and not-found handlers respond. Records live in
//! a `BTreeMap` so listing returns them in id order.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Create/replace payload: a full record without the id.
#[derive(Debug, Deserialize)]
pub struct ExpenseInput {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    expenses: BTreeMap<i64, Expense>,
}

pub type Db = Arc<RwLock<Store>>;

type ApiFailure = (StatusCode, Json<ErrorBody>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found(id: i64) -> ApiFailure {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: format!("Expense not found with id {id}"),
        }),
    )
}

/// The checks the real backend enforces through bean validation.
fn validate(input: &ExpenseInput) -> Result<(), ApiFailure> {
    let message = if input.title.trim().is_empty() {
        "title must not be blank"
    } else if input.amount < 0.0 {
        "amount must be non-negative"
    } else {
        return Ok(());
    };
    Err((
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            message: message.to_string(),
        }),
    ))
}

async fn list_expenses(State(db): State<Db>) -> Json<Vec<Expense>> {
    let store = db.read().await;
    Json(store.expenses.values().cloned().collect())
}

async fn create_expense(
    State(db): State<Db>,
    Json(input): Json<ExpenseInput>,
) -> Result<(StatusCode, Json<Expense>), ApiFailure> {
    validate(&input)?;
    let mut store = db.write().await;
    store.next_id += 1;
    let expense = Expense {
        id: store.next_id,
        title: input.title,
        amount: input.amount,
        category: input.category,
        date: input.date,
        description: input.description,
    };
    store.expenses.insert(expense.id, expense.clone());
    Ok((StatusCode::CREATED, Json(expense)))
}

async fn get_expense(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Expense>, ApiFailure> {
    let store = db.read().await;
    store
        .expenses
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(id))
}

async fn update_expense(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<ExpenseInput>,
) -> Result<Json<Expense>, ApiFailure> {
    validate(&input)?;
    let mut store = db.write().await;
    if !store.expenses.contains_key(&id) {
        return Err(not_found(id));
    }
    let expense = Expense {
        id,
        title: input.title,
        amount: input.amount,
        category: input.category,
        date: input.date,
        description: input.description,
    };
    store.expenses.insert(id, expense.clone());
    Ok(Json(expense))
}

async fn delete_expense(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiFailure> {
    let mut store = db.write().await;
    store
        .expenses
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| not_found(id))
}
