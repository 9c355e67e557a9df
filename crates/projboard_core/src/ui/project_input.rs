//! Project submission form.
//!
//! # Responsibility
//! - Hold raw field text as typed by the user.
//! - Validate it into a `ProjectDraft` and hand accepted drafts to the store.
//!
//! # Invariants
//! - A rejected submission mutates nothing and keeps the typed text.
//! - A stored submission clears every field, even when a listener then fails.

use crate::config::BoardConfig;
use crate::model::project::{ProjectDraft, ProjectId};
use crate::store::project_store::StoreError;
use crate::store::shared::SharedProjectStore;
use crate::ui::component::Component;
use crate::ui::surface::{Element, ElementKind, SharedSurface};
use crate::validation::validator::validate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Form element id.
pub const INPUT_ELEMENT_ID: &str = "user-input";
/// Alert raised for any rejected submission.
pub const INVALID_INPUT_ALERT: &str = "Invalid input, please try again!";

/// Form field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputRejection {
    /// The field failed its configured constraints.
    Invalid(FormField),
    /// The people field is not a whole number.
    NotANumber(String),
}

impl Display for InputRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(field) => write!(f, "{} is invalid", field.as_str()),
            Self::NotANumber(value) => write!(f, "people must be a whole number, got `{value}`"),
        }
    }
}

impl Error for InputRejection {}

/// Submission failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Rejected(InputRejection),
    /// Nothing was stored.
    Store(StoreError),
    /// The project was stored and the form cleared, but notifying the
    /// listeners failed.
    Unnotified {
        project_id: ProjectId,
        source: StoreError,
    },
}

impl SubmitError {
    /// Id of the project that exists despite the error, if any.
    pub fn stored_project(&self) -> Option<&ProjectId> {
        match self {
            Self::Unnotified { project_id, .. } => Some(project_id),
            Self::Rejected(_) | Self::Store(_) => None,
        }
    }
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(err) => write!(f, "submission rejected: {err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Unnotified { project_id, source } => {
                write!(f, "project {project_id} stored but not shown: {source}")
            }
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Unnotified { source, .. } => Some(source),
        }
    }
}

impl From<InputRejection> for SubmitError {
    fn from(value: InputRejection) -> Self {
        Self::Rejected(value)
    }
}

impl From<StoreError> for SubmitError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

pub struct ProjectInput {
    title: String,
    description: String,
    people: String,
    rules: BoardConfig,
    store: SharedProjectStore,
    surface: SharedSurface,
}

impl ProjectInput {
    pub fn new(rules: BoardConfig, store: SharedProjectStore, surface: SharedSurface) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            people: String::new(),
            rules,
            store,
            surface,
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.people = value.into();
    }

    /// Current `(title, description, people)` field text.
    pub fn fields(&self) -> (&str, &str, &str) {
        (&self.title, &self.description, &self.people)
    }

    /// Validates the typed fields into a draft.
    ///
    /// Text-only constraints of the people rule run against the raw text;
    /// numeric constraints run against the parsed number.
    pub fn gather_user_input(&self) -> Result<ProjectDraft, InputRejection> {
        if !validate(&self.rules.title.to_validatable(self.title.as_str())) {
            return Err(InputRejection::Invalid(FormField::Title));
        }
        if !validate(&self.rules.description.to_validatable(self.description.as_str())) {
            return Err(InputRejection::Invalid(FormField::Description));
        }
        if !validate(&self.rules.people.to_validatable(self.people.as_str())) {
            return Err(InputRejection::Invalid(FormField::People));
        }
        let people = parse_people(&self.people)
            .ok_or_else(|| InputRejection::NotANumber(self.people.clone()))?;
        if !validate(&self.rules.people.to_validatable(people)) {
            return Err(InputRejection::Invalid(FormField::People));
        }

        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            people,
        })
    }

    /// Validates, stores and clears; alerts and keeps input on rejection.
    pub fn submit(&mut self) -> Result<ProjectId, SubmitError> {
        let draft = match self.gather_user_input() {
            Ok(draft) => draft,
            Err(rejection) => {
                warn!(
                    "event=project_submit module=ui status=error reason=\"{rejection}\""
                );
                if let Ok(mut surface) = self.surface.try_borrow_mut() {
                    surface.alert(INVALID_INPUT_ALERT);
                }
                return Err(rejection.into());
            }
        };

        let (id, notified) = self
            .store
            .commit_project(draft.title, draft.description, draft.people)?;
        self.clear_inputs();
        if let Err(source) = notified {
            warn!(
                "event=project_submit module=ui status=partial project_id={id} error={source}"
            );
            return Err(SubmitError::Unnotified {
                project_id: id,
                source,
            });
        }
        info!("event=project_submit module=ui status=ok project_id={id}");
        Ok(id)
    }

    fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

/// Whole, non-negative head count. Integral decimals such as `3.0` count.
fn parse_people(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(people) = raw.parse::<u32>() {
        return Some(people);
    }
    let number = raw.parse::<f64>().ok()?;
    let integral = number.is_finite() && number.fract() == 0.0;
    (integral && (0.0..=f64::from(u32::MAX)).contains(&number)).then_some(number as u32)
}

impl Component for ProjectInput {
    fn build_element(&self) -> Element {
        Element::new(INPUT_ELEMENT_ID, ElementKind::Form).with_heading("ADD PROJECT")
    }

    fn render_content(&self) {}
}
