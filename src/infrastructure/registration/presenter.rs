//! Headless presenter rendering onto the structured log

use tracing::{info, warn};

use crate::domain::form::FieldId;
use crate::domain::ui::{FieldNotice, FormPresenter};

/// Presenter for headless runs: notices land in the log instead of the
/// page. Replacement semantics are trivial here since a log line carries
/// no state to stack.
#[derive(Debug, Clone, Default)]
pub struct TracingFormPresenter;

impl TracingFormPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl FormPresenter for TracingFormPresenter {
    fn render_summary(&self, messages: &[String]) {
        if messages.is_empty() {
            return;
        }

        warn!(count = messages.len(), "validation failed");
        for message in messages {
            warn!("  - {}", message);
        }
    }

    fn render_field(&self, field: FieldId, notice: Option<FieldNotice>) {
        match notice {
            Some(FieldNotice::Error(message)) => {
                warn!(field = field.name(), "{}", message);
            }
            Some(FieldNotice::Available(message)) => {
                info!(field = field.name(), "{}", message);
            }
            None => {}
        }
    }
}
