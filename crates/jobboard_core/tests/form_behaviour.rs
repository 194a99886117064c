use std::sync::Once;

use jobboard_core::{update, AppState, Category, Effect, Field, Job, Msg, Tab};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn sample_job() -> Job {
    Job {
        id: "1".to_string(),
        title: "Software Engineer".to_string(),
        company: "Google".to_string(),
        location: "Bangalore".to_string(),
        salary: "₹8,00,000 - ₹12,00,000 per year".to_string(),
        category: Category::It,
        job_type: "Full-time".to_string(),
        description: "Build things".to_string(),
        requirements: vec!["Rust".to_string(), "SQL".to_string()],
        apply_link: "https://example.com/apply".to_string(),
    }
}

fn set_field(state: AppState, field: Field, value: &str) -> AppState {
    let (state, _) = update(
        state,
        Msg::FieldChanged {
            field,
            value: value.to_string(),
        },
    );
    state
}

fn fill_required(mut state: AppState) -> AppState {
    state = set_field(state, Field::Title, "Clerk");
    state = set_field(state, Field::Company, "Post Office");
    state = set_field(state, Field::Location, "Delhi");
    state = set_field(state, Field::Description, "Sort mail");
    state = set_field(state, Field::Requirements, "Typing\nPatience");
    state
}

fn load_jobs(state: AppState, jobs: Vec<Job>) -> AppState {
    let (state, _) = update(state, Msg::Started);
    let (state, _) = update(
        state,
        Msg::JobsFetched {
            seq: 1,
            result: Ok(jobs),
        },
    );
    state
}

#[test]
fn requirements_survive_edit_round_trip() {
    init_logging();
    let state = load_jobs(AppState::new(), vec![sample_job()]);

    let (state, _) = update(
        state,
        Msg::EditClicked {
            job_id: "1".to_string(),
        },
    );
    assert_eq!(state.view().tab, Tab::AddJob);
    assert_eq!(state.view().form.requirements, "Rust\nSQL");

    let (_state, effects) = update(state, Msg::SubmitClicked);
    match &effects[..] {
        [Effect::UpdateJob { job_id, payload }] => {
            assert_eq!(job_id, "1");
            assert_eq!(payload.requirements, vec!["Rust", "SQL"]);
        }
        other => panic!("expected UpdateJob, got {other:?}"),
    }
}

#[test]
fn blank_requirement_lines_are_dropped_on_submit() {
    init_logging();
    let state = fill_required(AppState::new());
    let state = set_field(state, Field::Requirements, " Rust \n\n   \nSQL\n");

    let (_state, effects) = update(state, Msg::SubmitClicked);
    match &effects[..] {
        [Effect::CreateJob { payload }] => {
            assert_eq!(payload.requirements, vec!["Rust", "SQL"]);
        }
        other => panic!("expected CreateJob, got {other:?}"),
    }
}

#[test]
fn category_switch_repopulates_type() {
    init_logging();
    let state = AppState::new();
    assert_eq!(state.view().form.job_type, "Full-time");

    let state = set_field(state, Field::Category, "Govt");
    let view = state.view();
    assert_eq!(view.form.category, Category::Govt);
    assert_eq!(view.form.job_type, "Government");
    assert!(view.form.job_types.contains(&"Municipal"));

    let state = set_field(state, Field::Category, "IT");
    assert_eq!(state.view().form.job_type, "Full-time");
}

#[test]
fn type_outside_category_set_is_ignored() {
    init_logging();
    let state = AppState::new();
    let state = set_field(state, Field::Type, "Municipal");
    assert_eq!(state.view().form.job_type, "Full-time");

    let state = set_field(state, Field::Type, "Contract");
    assert_eq!(state.view().form.job_type, "Contract");
}

#[test]
fn submit_with_missing_fields_sets_errors_and_emits_nothing() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());

    let errors = state.view().form.errors;
    let fields: Vec<Field> = errors.iter().map(|(field, _)| *field).collect();
    assert_eq!(
        fields,
        vec![
            Field::Title,
            Field::Company,
            Field::Location,
            Field::Description,
            Field::Requirements,
        ]
    );

    // Editing a field clears its error.
    let state = set_field(state, Field::Title, "Clerk");
    let errors = state.view().form.errors;
    assert!(errors.iter().all(|(field, _)| *field != Field::Title));
}

#[test]
fn create_success_resets_fields_except_category() {
    init_logging();
    let state = set_field(AppState::new(), Field::Category, "Govt");
    let state = fill_required(state);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(matches!(&effects[..], [Effect::CreateJob { .. }]));
    assert!(state.view().form.submitting);

    let created = Job {
        id: "9".to_string(),
        category: Category::Govt,
        job_type: "Government".to_string(),
        ..sample_job()
    };
    let (state, effects) = update(
        state,
        Msg::CreateCompleted {
            result: Ok(created),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ShowAlert {
            message: "Job created successfully!".to_string(),
        }]
    );

    let view = state.view();
    assert_eq!(view.form.title, "");
    assert_eq!(view.form.requirements, "");
    assert_eq!(view.form.category, Category::Govt);
    assert_eq!(view.form.job_type, "Government");
    assert!(!view.form.submitting);
    assert_eq!(view.jobs[0].job_id, "9");
}

#[test]
fn update_success_keeps_draft_but_leaves_edit_mode() {
    init_logging();
    let state = load_jobs(AppState::new(), vec![sample_job()]);
    let (state, _) = update(
        state,
        Msg::EditClicked {
            job_id: "1".to_string(),
        },
    );
    assert!(state.view().form.edit_mode);

    let mut updated = sample_job();
    updated.title = "Staff Engineer".to_string();
    let (state, _) = update(
        state,
        Msg::UpdateCompleted {
            result: Ok(updated),
        },
    );

    let view = state.view();
    assert!(!view.form.edit_mode);
    // The draft is not cleared after an edit.
    assert_eq!(view.form.title, "Software Engineer");
}

#[test]
fn add_job_tab_starts_a_fresh_draft() {
    init_logging();
    let state = load_jobs(AppState::new(), vec![sample_job()]);
    let (state, _) = update(
        state,
        Msg::EditClicked {
            job_id: "1".to_string(),
        },
    );

    let (state, _) = update(state, Msg::TabSelected(Tab::AddJob));
    let view = state.view();
    assert!(!view.form.edit_mode);
    assert_eq!(view.form.title, "");
}
