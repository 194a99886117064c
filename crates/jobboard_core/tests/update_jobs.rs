use std::sync::Once;

use jobboard_core::{update, AppState, Category, Effect, Job, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn job(id: &str, title: &str, category: Category) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        company: "Google".to_string(),
        location: "Remote".to_string(),
        salary: String::new(),
        category,
        job_type: "Full-time".to_string(),
        description: "desc".to_string(),
        requirements: vec!["req".to_string()],
        apply_link: String::new(),
    }
}

#[test]
fn started_issues_fetch_and_success_replaces_list() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(state, Msg::Started);
    assert_eq!(effects, vec![Effect::FetchJobs { seq: 1 }]);
    assert!(state.view().loading);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::JobsFetched {
            seq: 1,
            result: Ok(vec![job("1", "Software Engineer", Category::It)]),
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.total_jobs, 1);
    assert_eq!(view.it_jobs, 1);
    assert_eq!(view.govt_jobs, 0);
    assert_eq!(view.jobs[0].title, "Software Engineer");
}

#[test]
fn stale_fetch_response_is_discarded() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::Started);
    let (mut state, effects) = update(state, Msg::RefreshRequested);
    assert_eq!(effects, vec![Effect::FetchJobs { seq: 2 }]);
    assert!(state.consume_dirty());

    // The first request completes late; its payload must not win.
    let (mut state, _) = update(
        state,
        Msg::JobsFetched {
            seq: 1,
            result: Ok(vec![job("old", "Stale", Category::It)]),
        },
    );
    assert!(!state.consume_dirty());
    assert_eq!(state.view().total_jobs, 0);

    let (state, _) = update(
        state,
        Msg::JobsFetched {
            seq: 2,
            result: Ok(vec![job("new", "Fresh", Category::Govt)]),
        },
    );
    assert_eq!(state.view().jobs[0].job_id, "new");
}

#[test]
fn fetch_failure_keeps_previous_list_and_sets_error() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::Started);
    let (state, _) = update(
        state,
        Msg::JobsFetched {
            seq: 1,
            result: Ok(vec![job("1", "Kept", Category::It)]),
        },
    );

    let (state, _) = update(state, Msg::RefreshRequested);
    let (state, _) = update(
        state,
        Msg::JobsFetched {
            seq: 2,
            result: Err("Failed to load jobs.".to_string()),
        },
    );

    let view = state.view();
    assert_eq!(view.fetch_error.as_deref(), Some("Failed to load jobs."));
    assert_eq!(view.total_jobs, 1);
    assert_eq!(view.jobs[0].title, "Kept");
    assert!(!view.loading);
}

#[test]
fn create_prepends_server_echoed_record() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::Started);
    let (state, _) = update(
        state,
        Msg::JobsFetched {
            seq: 1,
            result: Ok(vec![job("1", "First", Category::It)]),
        },
    );

    let (state, _) = update(
        state,
        Msg::CreateCompleted {
            result: Ok(job("2", "Second", Category::Govt)),
        },
    );

    let view = state.view();
    assert_eq!(view.total_jobs, 2);
    assert_eq!(view.jobs[0].job_id, "2");
    assert_eq!(view.jobs[1].job_id, "1");
    assert_eq!(view.govt_jobs, 1);
}

#[test]
fn update_replaces_exactly_one_element() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::Started);
    let (state, _) = update(
        state,
        Msg::JobsFetched {
            seq: 1,
            result: Ok(vec![
                job("1", "One", Category::It),
                job("2", "Two", Category::It),
            ]),
        },
    );

    let (state, _) = update(
        state,
        Msg::UpdateCompleted {
            result: Ok(job("2", "Two, renamed", Category::It)),
        },
    );

    let view = state.view();
    assert_eq!(view.total_jobs, 2);
    assert_eq!(view.jobs[0].title, "One");
    assert_eq!(view.jobs[1].job_id, "2");
    assert_eq!(view.jobs[1].title, "Two, renamed");
}

#[test]
fn delete_goes_through_confirmation() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::Started);
    let (mut state, _) = update(
        state,
        Msg::JobsFetched {
            seq: 1,
            result: Ok(vec![job("1", "Doomed", Category::It)]),
        },
    );
    state.consume_dirty();

    let (mut state, effects) = update(
        state,
        Msg::DeleteClicked {
            job_id: "1".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ConfirmDelete {
            job_id: "1".to_string(),
        }]
    );
    // Nothing happens until the user confirms.
    assert!(!state.consume_dirty());
    assert_eq!(state.view().total_jobs, 1);

    let (state, effects) = update(
        state,
        Msg::DeleteConfirmed {
            job_id: "1".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::DeleteJob {
            job_id: "1".to_string(),
        }]
    );

    let (state, effects) = update(
        state,
        Msg::DeleteCompleted {
            job_id: "1".to_string(),
            result: Ok(()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ShowAlert {
            message: "Job deleted successfully!".to_string(),
        }]
    );
    assert_eq!(state.view().total_jobs, 0);
}

#[test]
fn delete_failure_surfaces_message_and_keeps_list() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::Started);
    let (state, _) = update(
        state,
        Msg::JobsFetched {
            seq: 1,
            result: Ok(vec![job("1", "Sticky", Category::It)]),
        },
    );

    let (state, effects) = update(
        state,
        Msg::DeleteCompleted {
            job_id: "1".to_string(),
            result: Err("Job is referenced elsewhere".to_string()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ShowAlert {
            message: "Job is referenced elsewhere".to_string(),
        }]
    );
    assert_eq!(state.view().total_jobs, 1);
}

#[test]
fn recent_listing_is_capped() {
    init_logging();
    let jobs: Vec<Job> = (0..15)
        .map(|n| job(&n.to_string(), &format!("Job {n}"), Category::It))
        .collect();

    let state = AppState::new();
    let (state, _) = update(state, Msg::Started);
    let (state, _) = update(
        state,
        Msg::JobsFetched {
            seq: 1,
            result: Ok(jobs),
        },
    );

    let view = state.view();
    assert_eq!(view.total_jobs, 15);
    assert_eq!(view.recent.len(), jobboard_core::RECENT_JOBS_LIMIT);
    assert_eq!(view.recent[0].job_id, "0");
}
