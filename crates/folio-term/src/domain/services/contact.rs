use std::time::Duration;

use tokio::sync::mpsc;

use super::timers;
use super::timers::TaskHandle;
use crate::domain::models::suggest_email;
use crate::domain::models::ContactField;
use crate::domain::models::ContactForm;
use crate::domain::models::Event;
use crate::domain::models::FormErrors;
use crate::domain::models::FormStatus;
use crate::domain::models::MapView;

pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

/// Contact page state: the form, its inline errors and the delivery status.
#[derive(Default)]
pub struct ContactDesk {
    pub errors: FormErrors,
    pub focus: ContactField,
    pub form: ContactForm,
    pub map: MapView,
    pub status: FormStatus,
    pub suggestion: Option<String>,
    pub failure: Option<String>,
    reset_timer: Option<TaskHandle>,
}

impl ContactDesk {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn push_char(&mut self, c: char) {
        self.form.field_mut(self.focus).push(c);
        self.on_edit();
    }

    pub fn push_str(&mut self, text: &str) {
        self.form.field_mut(self.focus).push_str(text);
        self.on_edit();
    }

    pub fn backspace(&mut self) {
        self.form.field_mut(self.focus).pop();
        self.on_edit();
    }

    fn on_edit(&mut self) {
        self.errors.clear(self.focus);
        if self.focus == ContactField::Email {
            self.suggestion = suggest_email(&self.form.email);
        }
    }

    /// Validates and moves to `Submitting`. Returns the form to deliver.
    pub fn submit(&mut self) -> Option<ContactForm> {
        if self.status == FormStatus::Submitting {
            return None;
        }

        if let Err(errors) = self.form.validate() {
            tracing::debug!(?errors, "contact form rejected");
            self.errors = errors;
            return None;
        }

        self.errors = FormErrors::default();
        self.failure = None;
        self.status = FormStatus::Submitting;
        self.reset_timer = None;

        return Some(self.form.clone());
    }

    /// Clears the form and schedules the return to `Idle`.
    pub fn delivered(&mut self, event_tx: &mpsc::UnboundedSender<Event>) {
        self.status = FormStatus::Success;
        self.form = ContactForm::default();
        self.suggestion = None;
        self.focus = ContactField::default();

        let tx = event_tx.clone();
        self.reset_timer = Some(timers::spawn_delayed(SUCCESS_RESET_DELAY, move || {
            let _ = tx.send(Event::ContactReset);
        }));
    }

    /// Keeps the form so the visitor can retry.
    pub fn failed(&mut self, reason: String) {
        tracing::warn!(%reason, "contact form delivery failed");
        self.status = FormStatus::Error;
        self.failure = Some(reason);
    }

    pub fn reset_status(&mut self) {
        if self.status == FormStatus::Success {
            self.status = FormStatus::Idle;
        }
        self.reset_timer = None;
    }
}
