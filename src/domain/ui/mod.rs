//! Narrow seams onto the page: rendering, the submit control, the success
//! dialog and navigation. Implementations live in the UI layer (or in
//! `infrastructure` for the headless tracing presenter); the pipeline only
//! ever sees these traits.

mod controls;
mod presenter;

pub use controls::{CancelPrompt, Navigator, SubmitControl, SuccessNotifier};
pub use presenter::{FieldNotice, FormPresenter};

#[cfg(test)]
pub mod mock {
    pub use super::controls::mock::{
        CannedPrompt, RecordingControl, RecordingNavigator, RecordingNotifier,
    };
    pub use super::presenter::mock::RecordingPresenter;
}
