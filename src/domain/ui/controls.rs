//! Page control seams around the registration form

/// The primary submit control. `set_busy` disables it and swaps in the
/// busy label; `restore` puts the original label back and re-enables it.
pub trait SubmitControl: Send + Sync {
    fn set_busy(&self);
    fn restore(&self);
}

/// The success dialog shown after a completed registration. Its confirm
/// action is expected to navigate away from the form; a user who dismisses
/// it instead finds the form re-enabled.
pub trait SuccessNotifier: Send + Sync {
    fn notify_success(&self);
}

/// Confirmation prompt for the cancel path.
pub trait CancelPrompt: Send + Sync {
    /// Ask whether in-progress field state may be discarded.
    fn confirm_discard(&self) -> bool;
}

/// Navigation away from the registration form.
pub trait Navigator: Send + Sync {
    fn leave_form(&self);
}
