//! Interactive terminal host for the expense tracker core.
//!
//! The core never touches the network, so this binary supplies the two
//! missing pieces: executing `HttpRequest` values with ureq and talking
//! to the user — prompting for form fields, confirming deletes, and
//! printing the rendered screen after every action. Transport failures
//! are pushed into the tracker's error banner like any other failure.

use std::io::{self, BufRead, StdinLock, Write};

use anyhow::Result;
use expense_core::{
    render, Draft, ExpenseTracker, HttpMethod, HttpRequest, HttpResponse, Row, SubmitError,
};

type Input = io::Lines<StdinLock<'static>>;

fn main() -> Result<()> {
    env_logger::init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:3000".to_string());
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();
    let mut tracker = ExpenseTracker::new(&base_url);
    let mut input = io::stdin().lock().lines();

    // Initial load.
    match round_trip(&agent, tracker.refresh()) {
        Ok(resp) => tracker.apply_refresh(resp),
        Err(msg) => tracker.set_error(msg),
    }

    loop {
        print_screen(&tracker);
        let Some(line) = prompt(&mut input, "command (add / edit <id> / delete <id> / refresh / quit)")?
        else {
            break;
        };
        let line = line.trim();
        let (cmd, arg) = match line.split_once(' ') {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => {}
            "quit" | "q" => break,
            "refresh" => match round_trip(&agent, tracker.refresh()) {
                Ok(resp) => tracker.apply_refresh(resp),
                Err(msg) => tracker.set_error(msg),
            },
            "add" => {
                if !fill_draft(&mut input, tracker.draft_mut())? {
                    break;
                }
                match tracker.submit() {
                    Ok(req) => match round_trip(&agent, req) {
                        Ok(resp) => tracker.apply_submit(resp),
                        Err(msg) => tracker.set_error(msg),
                    },
                    Err(SubmitError::Invalid(e)) => alert(&e.to_string()),
                    Err(e) => tracker.set_error(e.to_string()),
                }
            }
            "edit" => {
                let Ok(id) = arg.parse::<i64>() else {
                    alert("usage: edit <id>");
                    continue;
                };
                if !tracker.start_edit(id) {
                    alert(&format!("no expense with id {id}"));
                    continue;
                }
                if let Some(draft) = tracker.edit_draft_mut() {
                    if !revise_draft(&mut input, draft)? {
                        break;
                    }
                }
                match tracker.save_edit() {
                    Ok(req) => match round_trip(&agent, req) {
                        Ok(resp) => tracker.apply_save_edit(resp),
                        Err(msg) => tracker.set_error(msg),
                    },
                    Err(SubmitError::Invalid(e)) => {
                        alert(&e.to_string());
                        tracker.cancel_edit();
                    }
                    Err(e) => {
                        tracker.set_error(e.to_string());
                        tracker.cancel_edit();
                    }
                }
            }
            "delete" => {
                let Ok(id) = arg.parse::<i64>() else {
                    alert("usage: delete <id>");
                    continue;
                };
                let Some(answer) = prompt(&mut input, &format!("delete expense {id}? [y/N]"))?
                else {
                    break;
                };
                if !matches!(answer.trim(), "y" | "Y") {
                    continue;
                }
                match round_trip(&agent, tracker.delete(id)) {
                    Ok(resp) => tracker.apply_delete(id, resp),
                    Err(msg) => tracker.set_error(msg),
                }
            }
            other => alert(&format!("unknown command: {other}")),
        }
    }

    Ok(())
}

/// Execute one request over the network. ureq's status-as-error behavior
/// is disabled so non-2xx responses come back as data for the core;
/// transport failures (connection refused, DNS, ...) become the error
/// string for the banner.
fn round_trip(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, String> {
    log::debug!("{:?} {}", req.method, req.path);
    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    };

    let mut response = result.map_err(|e| e.to_string())?;
    let status = response.status().as_u16();
    log::debug!("-> HTTP {status}");
    Ok(HttpResponse {
        status,
        body: response.body_mut().read_to_string().unwrap_or_default(),
    })
}

fn print_screen(tracker: &ExpenseTracker) {
    let screen = render(tracker.state());
    println!();
    if let Some(banner) = &screen.banner {
        println!("!! {banner}");
    }
    if screen.rows.is_empty() {
        println!("(no expenses)");
    }
    for row in &screen.rows {
        match row {
            Row::Display {
                id,
                title,
                amount,
                category,
                date,
                description,
            } => {
                print!("#{id}  {title}  {amount}  {category} | {date}");
                match description {
                    Some(text) => println!("  ({text})"),
                    None => println!(),
                }
            }
            Row::Edit { id, draft } => {
                println!(
                    "#{id}  [editing]  {}  {}  {} | {}",
                    draft.title, draft.amount, draft.category, draft.date
                );
            }
        }
    }
    println!("Total: {}", screen.total);
}

fn alert(message: &str) {
    println!("!! {message}");
}

/// Read one line for `label`. `None` means stdin closed.
fn prompt(input: &mut Input, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Fill the create form field by field.
fn fill_draft(input: &mut Input, draft: &mut Draft) -> Result<bool> {
    let fields = [
        ("title", &mut draft.title),
        ("amount", &mut draft.amount),
        ("category", &mut draft.category),
        ("date (YYYY-MM-DD)", &mut draft.date),
        ("description (optional)", &mut draft.description),
    ];
    for (label, slot) in fields {
        let Some(value) = prompt(input, label)? else {
            return Ok(false);
        };
        *slot = value.trim().to_string();
    }
    Ok(true)
}

/// Revise the edit form; an empty answer keeps the current value.
fn revise_draft(input: &mut Input, draft: &mut Draft) -> Result<bool> {
    let fields = [
        ("title", &mut draft.title),
        ("amount", &mut draft.amount),
        ("category", &mut draft.category),
        ("date (YYYY-MM-DD)", &mut draft.date),
        ("description", &mut draft.description),
    ];
    for (label, slot) in fields {
        let Some(value) = prompt(input, &format!("{label} [{slot}]"))? else {
            return Ok(false);
        };
        let value = value.trim();
        if !value.is_empty() {
            *slot = value.to_string();
        }
    }
    Ok(true)
}
