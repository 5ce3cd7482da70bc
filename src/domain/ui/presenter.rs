//! The rendering seam between validation and the page

use crate::domain::form::FieldId;

/// An inline notice attached to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldNotice {
    /// Error style: red border, message under the field.
    Error(String),
    /// Availability style: the green "you can use this" message.
    Available(String),
}

impl FieldNotice {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn available(message: impl Into<String>) -> Self {
        Self::Available(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Error(m) | Self::Available(m) => m,
        }
    }
}

/// Renders validation state onto the page.
///
/// Both operations are idempotent: a render replaces whatever the previous
/// render of the same kind put up. `render_summary` with an empty slice
/// draws nothing (and repeated non-empty calls never stack panels);
/// `render_field` with `None` clears the field's notice and visual state.
pub trait FormPresenter: Send + Sync {
    /// Render the aggregate error panel at the top of the form.
    fn render_summary(&self, messages: &[String]);

    /// Render or clear the inline notice for one field.
    fn render_field(&self, field: FieldId, notice: Option<FieldNotice>);
}
