//! Post composer - the toggleable new-post form and its validation.

use std::fmt;

use super::post::NewPost;

/// One of the three composer inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Body,
    Author,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 3] = [Field::Title, Field::Body, Field::Author];

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Body => "Body",
            Field::Author => "Author",
        }
    }

    /// Inline message shown under the field when it is left empty.
    pub fn required_message(self) -> &'static str {
        match self {
            Field::Title => "Title is required",
            Field::Body => "Body is required",
            Field::Author => "Author is required",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields that failed the required check on the last submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_messages(.missing))]
pub struct ValidationErrors {
    missing: Vec<Field>,
}

fn join_messages(missing: &[Field]) -> String {
    missing
        .iter()
        .map(|field| field.required_message())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn fields(&self) -> &[Field] {
        &self.missing
    }

    pub fn contains(&self, field: Field) -> bool {
        self.missing.contains(&field)
    }

    /// Messages in form order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.missing.iter().map(|f| f.required_message()).collect()
    }
}

/// Observable phase of the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerPhase {
    Hidden,
    Editing,
    Invalid,
    Submitting,
}

/// Form state: visibility, the three inputs and the last validation result.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    visible: bool,
    submitting: bool,
    title: String,
    body: String,
    author: String,
    errors: Option<ValidationErrors>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the form. Field values survive a hide.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Label of the control that toggles the form.
    pub fn toggle_label(&self) -> &'static str {
        if self.visible { "Cancel" } else { "New Post" }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Body => &self.body,
            Field::Author => &self.author,
        }
    }

    /// Replace a field value. Any edit clears the previous validation errors.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Body => self.body = value,
            Field::Author => self.author = value,
        }
        self.errors = None;
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    /// Inline error for one field, if the last submit attempt flagged it.
    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .as_ref()
            .filter(|errors| errors.contains(field))
            .map(|_| field.required_message())
    }

    pub fn phase(&self) -> ComposerPhase {
        if self.submitting {
            ComposerPhase::Submitting
        } else if !self.visible {
            ComposerPhase::Hidden
        } else if self.errors.is_some() {
            ComposerPhase::Invalid
        } else {
            ComposerPhase::Editing
        }
    }

    /// Check the required fields without changing state.
    ///
    /// A value made only of whitespace counts as empty. The returned draft
    /// carries the values exactly as entered.
    pub fn validate(&self) -> Result<NewPost, ValidationErrors> {
        let missing: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect();

        if missing.is_empty() {
            Ok(NewPost::new(&self.title, &self.body, &self.author))
        } else {
            Err(ValidationErrors { missing })
        }
    }

    /// Validate and, when every field passes, enter `Submitting`.
    ///
    /// On failure the errors are stored for inline display and the phase
    /// becomes `Invalid`.
    pub fn begin_submit(&mut self) -> Result<NewPost, ValidationErrors> {
        match self.validate() {
            Ok(draft) => {
                self.errors = None;
                self.submitting = true;
                Ok(draft)
            }
            Err(errors) => {
                self.errors = Some(errors.clone());
                Err(errors)
            }
        }
    }

    /// Backend accepted the post: clear every field and hide the form.
    pub fn complete_submit(&mut self) {
        self.submitting = false;
        self.title.clear();
        self.body.clear();
        self.author.clear();
        self.errors = None;
        self.visible = false;
    }

    /// Backend rejected the post: keep the input as it was.
    pub fn abort_submit(&mut self) {
        self.submitting = false;
    }
}
