use crate::form::FormDraft;
use crate::job::{Job, JobId, JobPayload};
use crate::view_model::{AppViewModel, FormView, JobRowView, ToastView, RECENT_JOBS_LIMIT};
use crate::{catalog, Category, Field};

/// How long a toast stays on screen before the tick prunes it.
pub const TOAST_AUTO_CLOSE_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    AddJob,
    ViewJobs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Info,
    Warning,
}

/// A transient on-screen notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub severity: ToastSeverity,
    pub message: String,
    /// Created/updated toasts link to the job they announce.
    pub job_id: Option<JobId>,
    deadline_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    jobs: Vec<Job>,
    tab: Tab,
    loading: bool,
    fetch_error: Option<String>,
    /// Latest issued fetch token; completions with an older token are stale.
    fetch_seq: u64,
    form: FormDraft,
    editing: Option<JobId>,
    submitting: bool,
    toasts: Vec<Toast>,
    next_toast_id: u64,
    /// Platform clock as of the last tick, in milliseconds.
    now_ms: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let rows: Vec<JobRowView> = self.jobs.iter().map(job_row).collect();
        AppViewModel {
            tab: self.tab,
            loading: self.loading,
            fetch_error: self.fetch_error.clone(),
            total_jobs: self.jobs.len(),
            it_jobs: self.count_category(Category::It),
            govt_jobs: self.count_category(Category::Govt),
            recent: rows.iter().take(RECENT_JOBS_LIMIT).cloned().collect(),
            jobs: rows,
            form: self.form_view(),
            toasts: self.toasts.iter().map(toast_view).collect(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn count_category(&self, category: Category) -> usize {
        self.jobs.iter().filter(|job| job.category == category).count()
    }

    fn form_view(&self) -> FormView {
        FormView {
            title: self.form.title.clone(),
            company: self.form.company.clone(),
            location: self.form.location.clone(),
            salary: self.form.salary.clone(),
            category: self.form.category,
            job_type: self.form.job_type.clone(),
            description: self.form.description.clone(),
            requirements: self.form.requirements.clone(),
            apply_link: self.form.apply_link.clone(),
            job_types: catalog::job_types(self.form.category),
            errors: self
                .form
                .errors()
                .iter()
                .map(|(field, message)| (*field, message.clone()))
                .collect(),
            submitting: self.submitting,
            edit_mode: self.editing.is_some(),
        }
    }

    // ── Job list ────────────────────────────────────────────────────────

    pub(crate) fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.mark_dirty();
        self.fetch_seq
    }

    pub(crate) fn is_current_fetch(&self, seq: u64) -> bool {
        seq == self.fetch_seq
    }

    pub(crate) fn apply_fetch_success(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
        self.fetch_error = None;
        self.loading = false;
        self.mark_dirty();
    }

    /// Fetch failure keeps the previously loaded list; only the error
    /// region changes.
    pub(crate) fn apply_fetch_failure(&mut self, message: String) {
        self.fetch_error = Some(message);
        self.loading = false;
        self.mark_dirty();
    }

    pub(crate) fn job(&self, job_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    pub(crate) fn prepend_job(&mut self, job: Job) {
        self.jobs.insert(0, job);
        self.mark_dirty();
    }

    pub(crate) fn replace_job(&mut self, job: Job) -> bool {
        match self.jobs.iter_mut().find(|existing| existing.id == job.id) {
            Some(slot) => {
                *slot = job;
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_job(&mut self, job_id: &str) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|job| job.id != job_id);
        let removed = self.jobs.len() != before;
        if removed {
            self.mark_dirty();
        }
        removed
    }

    // ── Tabs & form ─────────────────────────────────────────────────────

    pub(crate) fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.mark_dirty();
    }

    /// Fresh create draft; abandons any edit in progress.
    pub(crate) fn reset_form(&mut self) {
        self.form = FormDraft::new();
        self.editing = None;
        self.mark_dirty();
    }

    pub(crate) fn set_form_field(&mut self, field: Field, value: String) {
        self.form.set_field(field, value);
        self.mark_dirty();
    }

    /// Validates the draft; returns the normalized payload when clean.
    pub(crate) fn submit_form(&mut self) -> Option<JobPayload> {
        self.mark_dirty();
        if self.form.validate() {
            Some(self.form.to_payload())
        } else {
            None
        }
    }

    pub(crate) fn editing(&self) -> Option<JobId> {
        self.editing.clone()
    }

    pub(crate) fn start_edit(&mut self, job: &Job) {
        self.form = FormDraft::from_job(job);
        self.editing = Some(job.id.clone());
        self.tab = Tab::AddJob;
        self.mark_dirty();
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
        self.mark_dirty();
    }

    /// After a successful create the draft resets, keeping the category.
    pub(crate) fn complete_create(&mut self) {
        self.form.reset_after_create();
        self.mark_dirty();
    }

    /// After a successful update the caller takes over; the draft keeps
    /// its values but is no longer tied to a job.
    pub(crate) fn complete_edit(&mut self) {
        self.editing = None;
        self.mark_dirty();
    }

    // ── Toasts ──────────────────────────────────────────────────────────

    pub(crate) fn push_toast(
        &mut self,
        severity: ToastSeverity,
        message: String,
        job_id: Option<JobId>,
    ) {
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id: self.next_toast_id,
            severity,
            message,
            job_id,
            deadline_ms: self.now_ms + TOAST_AUTO_CLOSE_MS,
        });
        self.mark_dirty();
    }

    pub(crate) fn remove_toast(&mut self, toast_id: u64) -> Option<Toast> {
        let index = self.toasts.iter().position(|toast| toast.id == toast_id)?;
        self.mark_dirty();
        Some(self.toasts.remove(index))
    }

    /// Advances the clock and drops toasts past their deadline.
    pub(crate) fn tick(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.deadline_ms > now_ms);
        if self.toasts.len() != before {
            self.mark_dirty();
        }
    }
}

fn job_row(job: &Job) -> JobRowView {
    JobRowView {
        job_id: job.id.clone(),
        title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        category: job.category,
        job_type: job.job_type.clone(),
    }
}

fn toast_view(toast: &Toast) -> ToastView {
    ToastView {
        toast_id: toast.id,
        severity: toast.severity,
        message: toast.message.clone(),
        clickable: toast.job_id.is_some(),
    }
}
