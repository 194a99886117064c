//! Terminal front-end: command-line parsing and plain-text rendering of
//! the view model. Layout and styling stay out of scope; this is the
//! thinnest surface that can drive every operation.

use std::fmt::Write as _;

use jobboard_core::{AppViewModel, Field, Msg, Tab, ToastSeverity, CATEGORIES};

pub enum Command {
    Msg(Msg),
    Quit,
    Help,
    ConfirmYes,
    ConfirmNo,
    Unknown(String),
}

pub fn help() -> &'static str {
    "Commands:\n\
     \x20 dashboard | add | jobs     switch tab\n\
     \x20 refresh                    re-fetch the job list\n\
     \x20 set <field> <value>        edit a form field (use \\n in requirements)\n\
     \x20 submit                     submit the form\n\
     \x20 edit <id> | delete <id>    act on a listed job\n\
     \x20 open <n> | dismiss <n>     follow or close toast n\n\
     \x20 help | quit"
}

pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match verb {
        "" => Command::Msg(Msg::NoOp),
        "dashboard" => Command::Msg(Msg::TabSelected(Tab::Dashboard)),
        "add" => Command::Msg(Msg::TabSelected(Tab::AddJob)),
        "jobs" => Command::Msg(Msg::TabSelected(Tab::ViewJobs)),
        "refresh" => Command::Msg(Msg::RefreshRequested),
        "submit" => Command::Msg(Msg::SubmitClicked),
        "edit" if !rest.is_empty() => Command::Msg(Msg::EditClicked {
            job_id: rest.to_string(),
        }),
        "delete" if !rest.is_empty() => Command::Msg(Msg::DeleteClicked {
            job_id: rest.to_string(),
        }),
        "set" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            match parse_field(field) {
                Some(field) => Command::Msg(Msg::FieldChanged {
                    field,
                    value: value.replace("\\n", "\n"),
                }),
                None => Command::Unknown(line.to_string()),
            }
        }
        "open" => match rest.parse() {
            Ok(toast_id) => Command::Msg(Msg::ToastClicked { toast_id }),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "dismiss" => match rest.parse() {
            Ok(toast_id) => Command::Msg(Msg::ToastDismissed { toast_id }),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "y" | "yes" => Command::ConfirmYes,
        "n" | "no" => Command::ConfirmNo,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn parse_field(name: &str) -> Option<Field> {
    match name {
        "title" => Some(Field::Title),
        "company" => Some(Field::Company),
        "location" => Some(Field::Location),
        "salary" => Some(Field::Salary),
        "category" => Some(Field::Category),
        "type" => Some(Field::Type),
        "description" => Some(Field::Description),
        "requirements" => Some(Field::Requirements),
        "applylink" | "apply_link" => Some(Field::ApplyLink),
        _ => None,
    }
}

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let tab_label = match view.tab {
        Tab::Dashboard => "Dashboard",
        Tab::AddJob => {
            if view.form.edit_mode {
                "Edit Job Listing"
            } else {
                "Add New Job Listing"
            }
        }
        Tab::ViewJobs => "All Job Listings",
    };
    let _ = writeln!(out, "\n=== {} ===", tab_label);

    match view.tab {
        Tab::Dashboard => {
            let _ = writeln!(
                out,
                "Total Jobs: {} | IT Jobs: {} | Govt Jobs: {}",
                view.total_jobs, view.it_jobs, view.govt_jobs
            );
            let _ = writeln!(out, "Recent Job Listings:");
            for row in &view.recent {
                let _ = writeln!(
                    out,
                    "  [{}] {} | {} | {}",
                    row.job_id, row.title, row.company, row.job_type
                );
            }
        }
        Tab::ViewJobs => {
            if view.loading {
                let _ = writeln!(out, "Loading jobs...");
            } else if let Some(error) = &view.fetch_error {
                let _ = writeln!(out, "Error: {}", error);
            } else if view.jobs.is_empty() {
                let _ = writeln!(out, "No jobs found.");
            } else {
                for row in &view.jobs {
                    let _ = writeln!(
                        out,
                        "  [{}] {} | {} | {} | {} | {}",
                        row.job_id,
                        row.title,
                        row.company,
                        row.location,
                        row.job_type,
                        row.category
                    );
                }
            }
        }
        Tab::AddJob => {
            let categories: Vec<&str> =
                CATEGORIES.iter().map(|category| category.as_str()).collect();
            let _ = writeln!(
                out,
                "  category:     {}  (options: {})",
                view.form.category,
                categories.join(", ")
            );
            let _ = writeln!(
                out,
                "  type:         {}  (options: {})",
                view.form.job_type,
                view.form.job_types.join(", ")
            );
            let _ = writeln!(out, "  title:        {}", view.form.title);
            let _ = writeln!(out, "  company:      {}", view.form.company);
            let _ = writeln!(out, "  location:     {}", view.form.location);
            let _ = writeln!(out, "  salary:       {}", view.form.salary);
            let _ = writeln!(out, "  description:  {}", view.form.description);
            let _ = writeln!(
                out,
                "  requirements: {}",
                view.form.requirements.replace('\n', " / ")
            );
            let _ = writeln!(out, "  applyLink:    {}", view.form.apply_link);
            for (field, message) in &view.form.errors {
                let _ = writeln!(out, "  ! {:?}: {}", field, message);
            }
            if view.form.submitting {
                let _ = writeln!(out, "  (submitting...)");
            }
        }
    }

    if !view.toasts.is_empty() {
        let _ = writeln!(out, "--- notifications ---");
        for toast in &view.toasts {
            let marker = match toast.severity {
                ToastSeverity::Info => "info",
                ToastSeverity::Warning => "warn",
            };
            let link = if toast.clickable { " (open to view)" } else { "" };
            let _ = writeln!(
                out,
                "  [{}] {}: {}{}",
                toast.toast_id, marker, toast.message, link
            );
        }
    }

    out
}
