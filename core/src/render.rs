//! Pure presentation of the view state.
//!
//! `render` maps a `ViewState` to a `Screen` value and nothing else — no
//! I/O, no mutation, no caching. Each record becomes a display row unless
//! it is the one being edited, in which case its row carries the edit
//! draft instead. The running total is recomputed from the store on every
//! call.

use rust_decimal::Decimal;

use crate::state::{Draft, ViewState};

/// One list entry, in whichever of the two presentation modes applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Display {
        id: i64,
        title: String,
        amount: String,
        category: String,
        date: String,
        description: Option<String>,
    },
    Edit {
        id: i64,
        draft: Draft,
    },
}

/// Everything the host draws: the banner (if an error is pending), the
/// list rows, and the formatted running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub banner: Option<String>,
    pub rows: Vec<Row>,
    pub total: String,
}

pub fn render(state: &ViewState) -> Screen {
    let rows = state
        .expenses
        .records()
        .iter()
        .map(|expense| match &state.edit {
            Some(edit) if edit.id == expense.id => Row::Edit {
                id: expense.id,
                draft: edit.draft.clone(),
            },
            _ => Row::Display {
                id: expense.id,
                title: expense.title.clone(),
                amount: format_amount(expense.amount),
                category: expense.category.clone(),
                date: expense.date.to_string(),
                description: expense.description.clone(),
            },
        })
        .collect();

    Screen {
        banner: state.error.clone(),
        rows,
        total: format_amount(state.expenses.total()),
    }
}

/// Amounts always show two decimal places: `3.5` renders as `"3.50"`.
fn format_amount(amount: Decimal) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Change, EditState};
    use crate::types::Expense;
    use rust_decimal_macros::dec;

    fn expense(id: i64, title: &str, amount: Decimal) -> Expense {
        Expense {
            id,
            title: title.to_string(),
            amount,
            category: "Food".to_string(),
            date: "2024-01-01".parse().unwrap(),
            description: None,
        }
    }

    fn state_with(expenses: Vec<Expense>) -> ViewState {
        let mut state = ViewState::default();
        state.expenses.apply(Change::Loaded(expenses));
        state
    }

    #[test]
    fn empty_state_renders_empty_screen_with_zero_total() {
        let screen = render(&ViewState::default());
        assert!(screen.banner.is_none());
        assert!(screen.rows.is_empty());
        assert_eq!(screen.total, "0.00");
    }

    #[test]
    fn display_rows_format_amount_and_date() {
        let mut expenses = vec![expense(1, "Coffee", dec!(3.5))];
        expenses[0].description = Some("beans".to_string());
        let screen = render(&state_with(expenses));

        assert_eq!(screen.rows.len(), 1);
        assert_eq!(
            screen.rows[0],
            Row::Display {
                id: 1,
                title: "Coffee".to_string(),
                amount: "3.50".to_string(),
                category: "Food".to_string(),
                date: "2024-01-01".to_string(),
                description: Some("beans".to_string()),
            }
        );
        assert_eq!(screen.total, "3.50");
    }

    #[test]
    fn the_edited_record_renders_in_edit_mode() {
        let mut state = state_with(vec![
            expense(1, "Coffee", dec!(3.5)),
            expense(2, "Book", dec!(12)),
        ]);
        let draft = Draft {
            title: "Espresso".to_string(),
            amount: "4".to_string(),
            category: "Food".to_string(),
            date: "2024-01-01".to_string(),
            description: String::new(),
        };
        state.edit = Some(EditState {
            id: 1,
            draft: draft.clone(),
        });

        let screen = render(&state);
        assert_eq!(screen.rows[0], Row::Edit { id: 1, draft });
        assert!(matches!(screen.rows[1], Row::Display { id: 2, .. }));
    }

    #[test]
    fn total_is_the_sum_of_visible_amounts() {
        // Worked example: Coffee 3.5 then Book 12 totals 15.50.
        let mut state = state_with(vec![expense(1, "Coffee", dec!(3.5))]);
        assert_eq!(render(&state).total, "3.50");
        state
            .expenses
            .apply(Change::Created(expense(2, "Book", dec!(12))));
        assert_eq!(render(&state).total, "15.50");
        state.expenses.apply(Change::Deleted(1));
        assert_eq!(render(&state).total, "12.00");
    }

    #[test]
    fn banner_mirrors_the_pending_error() {
        let mut state = state_with(vec![expense(1, "Coffee", dec!(3.5))]);
        state.error = Some("HTTP 500: boom".to_string());
        let screen = render(&state);
        assert_eq!(screen.banner.as_deref(), Some("HTTP 500: boom"));
        // The list is still rendered under the banner.
        assert_eq!(screen.rows.len(), 1);
    }
}
