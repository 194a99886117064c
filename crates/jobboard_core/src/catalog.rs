//! Category catalog: the single lookup from a job category to its allowed
//! job-type option set, shared by form validation and rendering.

/// Top-level job classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    It,
    Govt,
}

/// All categories, in display order.
pub const CATEGORIES: [Category; 2] = [Category::It, Category::Govt];

const IT_TYPES: &[&str] = &[
    "Full-time",
    "Part-time",
    "Contract",
    "Internship",
    "Freelance",
];

const GOVT_TYPES: &[&str] = &[
    "Government",
    "State Government",
    "Central Government",
    "Public Sector",
    "Municipal",
];

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::It => "IT",
            Category::Govt => "Govt",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        CATEGORIES
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The job types allowed for a category, first entry being the default.
pub fn job_types(category: Category) -> &'static [&'static str] {
    match category {
        Category::It => IT_TYPES,
        Category::Govt => GOVT_TYPES,
    }
}

/// The job type a form falls back to when the category changes.
pub fn default_job_type(category: Category) -> &'static str {
    job_types(category)[0]
}
