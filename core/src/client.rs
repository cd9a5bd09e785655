//! Stateless HTTP request builder and response parser for the expense API.
//!
//! # Design
//! `ExpenseClient` holds only a `base_url`. Each of the four operations —
//! list, create, update, delete — is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the host executes the round-trip in between. Updates
//! are full-record replacements, so create and update share the
//! `NewExpense` payload.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Expense, NewExpense};

/// Stateless gateway to the expense API. Cheap to clone, no connection
/// state, no retries: a failed operation is reported once and dropped.
#[derive(Debug, Clone)]
pub struct ExpenseClient {
    base_url: String,
}

impl ExpenseClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection(&self) -> String {
        format!("{}/expenses", self.base_url)
    }

    fn record(&self, id: i64) -> String {
        format!("{}/expenses/{id}", self.base_url)
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest::get(self.collection())
    }

    pub fn build_create(&self, input: &NewExpense) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(HttpRequest::post_json(self.collection(), body))
    }

    pub fn build_update(&self, id: i64, input: &NewExpense) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(HttpRequest::put_json(self.record(id), body))
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest::delete(self.record(id))
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Expense>, ApiError> {
        check_success(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Expense, ApiError> {
        check_success(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Expense, ApiError> {
        check_success(&response)?;
        from_json(&response.body)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }
}

fn to_json(input: &NewExpense) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::from_response(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use rust_decimal_macros::dec;

    fn client() -> ExpenseClient {
        ExpenseClient::new("http://localhost:3000")
    }

    fn coffee() -> NewExpense {
        NewExpense {
            title: "Coffee".to_string(),
            amount: dec!(3.5),
            category: "Food".to_string(),
            date: "2024-01-01".parse().unwrap(),
            description: None,
        }
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_produces_correct_request() {
        let req = client().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/expenses");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_produces_correct_request() {
        let req = client().build_create(&coffee()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/expenses");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Coffee");
        assert_eq!(body["amount"], 3.5);
        assert_eq!(body["date"], "2024-01-01");
        assert!(body.get("id").is_none());
        assert!(body.get("description").is_none());
    }

    #[test]
    fn build_update_targets_the_record_path() {
        let req = client().build_update(42, &coffee()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/expenses/42");
        assert!(req.body.is_some());
    }

    #[test]
    fn build_delete_produces_correct_request() {
        let req = client().build_delete(42);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/expenses/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_success() {
        let resp = response(
            200,
            r#"[{"id":1,"title":"Coffee","amount":3.5,"category":"Food","date":"2024-01-01"}]"#,
        );
        let expenses = client().parse_list(resp).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].id, 1);
        assert_eq!(expenses[0].amount, dec!(3.5));
    }

    #[test]
    fn parse_create_accepts_any_2xx() {
        let body = r#"{"id":1,"title":"Coffee","amount":3.5,"category":"Food","date":"2024-01-01"}"#;
        assert!(client().parse_create(response(201, body)).is_ok());
        assert!(client().parse_create(response(200, body)).is_ok());
    }

    #[test]
    fn parse_create_surfaces_server_message() {
        let resp = response(400, r#"{"message":"title must not be blank"}"#);
        let err = client().parse_create(resp).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: "title must not be blank".to_string(),
            }
        );
    }

    #[test]
    fn parse_update_not_found_carries_server_message() {
        let resp = response(404, r#"{"message":"Expense not found with id 9"}"#);
        let err = client().parse_update(resp).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 404, .. }));
        assert_eq!(err.to_string(), "HTTP 404: Expense not found with id 9");
    }

    #[test]
    fn parse_delete_success_has_no_body_to_parse() {
        assert!(client().parse_delete(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_failure() {
        let err = client().parse_delete(response(500, "boom")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_list_bad_json() {
        let err = client().parse_list(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ExpenseClient::new("http://localhost:3000/");
        assert_eq!(client.build_list().path, "http://localhost:3000/expenses");
    }
}
