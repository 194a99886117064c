use std::collections::BTreeMap;

use crate::catalog::{default_job_type, job_types, Category};
use crate::job::{Job, JobPayload};

/// Form field names, used both for edits and for the validation-error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Title,
    Company,
    Location,
    Salary,
    Category,
    Type,
    Description,
    Requirements,
    ApplyLink,
}

/// A mutable draft of a single job record plus its validation errors.
///
/// Requirements are held as newline-joined text while being edited and
/// split into trimmed non-empty lines on submit; the two representations
/// round-trip losslessly except for blank-line removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub category: Category,
    pub job_type: String,
    pub description: String,
    pub requirements: String,
    pub apply_link: String,
    errors: BTreeMap<Field, String>,
}

impl Default for FormDraft {
    fn default() -> Self {
        let category = Category::default();
        Self {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            salary: String::new(),
            category,
            job_type: default_job_type(category).to_string(),
            description: String::new(),
            requirements: String::new(),
            apply_link: String::new(),
            errors: BTreeMap::new(),
        }
    }
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an edit draft from an existing job, collapsing the
    /// requirements list back to multi-line text.
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            category: job.category,
            job_type: job.job_type.clone(),
            description: job.description.clone(),
            requirements: job.requirements.join("\n"),
            apply_link: job.apply_link.clone(),
            errors: BTreeMap::new(),
        }
    }

    /// Applies a single field edit and clears that field's error.
    ///
    /// Changing the category resets the dependent job type to the first
    /// option of the new category's set. Values outside the catalog are
    /// ignored for category and type.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.errors.remove(&field);
        match field {
            Field::Title => self.title = value,
            Field::Company => self.company = value,
            Field::Location => self.location = value,
            Field::Salary => self.salary = value,
            Field::Description => self.description = value,
            Field::Requirements => self.requirements = value,
            Field::ApplyLink => self.apply_link = value,
            Field::Category => {
                if let Some(category) = Category::parse(&value) {
                    if category != self.category {
                        self.category = category;
                        self.job_type = default_job_type(category).to_string();
                    }
                }
            }
            Field::Type => {
                if job_types(self.category).contains(&value.as_str()) {
                    self.job_type = value;
                }
            }
        }
    }

    /// Presence-only validation. Returns true when the draft may be
    /// submitted; otherwise the error map names each missing field.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        if self.title.is_empty() {
            self.errors
                .insert(Field::Title, "Job title is required".to_string());
        }
        if self.company.is_empty() {
            self.errors
                .insert(Field::Company, "Company is required".to_string());
        }
        if self.location.is_empty() {
            self.errors
                .insert(Field::Location, "Location is required".to_string());
        }
        if self.description.is_empty() {
            self.errors
                .insert(Field::Description, "Description is required".to_string());
        }
        if self.requirements.is_empty() {
            self.errors
                .insert(Field::Requirements, "Requirements are required".to_string());
        }
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    /// Normalizes the draft into an outgoing payload.
    pub fn to_payload(&self) -> JobPayload {
        JobPayload {
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            salary: self.salary.clone(),
            category: self.category,
            job_type: self.job_type.clone(),
            description: self.description.clone(),
            requirements: split_requirements(&self.requirements),
            apply_link: self.apply_link.clone(),
        }
    }

    /// Post-create reset: every field back to defaults except the selected
    /// category (the job type follows the category back to its default).
    pub fn reset_after_create(&mut self) {
        let category = self.category;
        *self = Self::default();
        self.category = category;
        self.job_type = default_job_type(category).to_string();
    }
}

fn split_requirements(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
