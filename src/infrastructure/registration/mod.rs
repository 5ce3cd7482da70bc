//! The registration pipeline: debounced availability checking, real-time
//! validation glue, and the submission state machine.

mod availability;
mod backend;
mod debounce;
mod presenter;
mod realtime;
mod submitter;

pub use availability::{
    UsernameAvailabilityChecker, DEFAULT_DEBOUNCE, USERNAME_AVAILABLE_MESSAGE,
    USERNAME_TAKEN_MESSAGE,
};
pub use backend::{
    LocalSubmissionBackend, SubmissionBackend, SubmissionOutcome, DEFAULT_SUBMIT_LATENCY,
};
pub use debounce::DebouncedTask;
pub use presenter::TracingFormPresenter;
pub use realtime::RealtimeValidator;
pub use submitter::{
    handle_cancel, RegistrationSubmitter, SubmitOutcome, DUPLICATE_MESSAGE,
    SUBMIT_FAILED_MESSAGE,
};
