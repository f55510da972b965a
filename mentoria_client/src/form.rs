use crate::{
    notify::{Notification, Notifier},
    submit::{SubmissionClient, SubmissionOutcome},
};

/// The editable field values, including the hidden honeypot field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Honeypot; any value here marks the submission as automated.
    pub website: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Sending,
}

/// Drives one submission at a time: `Idle -> Sending -> Idle`, with exactly
/// one notification per state change and a reset of the fields on success.
#[derive(Debug)]
pub struct ContactForm<N> {
    fields: ContactFormData,
    state: FormState,
    client: SubmissionClient,
    notifier: N,
}

impl<N: Notifier> ContactForm<N> {
    pub fn new(client: SubmissionClient, notifier: N) -> Self {
        Self {
            fields: ContactFormData::default(),
            state: FormState::Idle,
            client,
            notifier,
        }
    }

    pub fn fields(&self) -> &ContactFormData {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactFormData {
        &mut self.fields
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Submits the current field values. Returns `None` if a submission is
    /// already in flight (the submit control is disabled while sending).
    pub async fn submit(&mut self) -> Option<SubmissionOutcome> {
        if self.state == FormState::Sending {
            return None;
        }

        // Re-enabled on every exit path, including a submission future
        // dropped mid-flight.
        let _sending = SendingGuard::new(&mut self.state);
        self.notifier.notify(Notification::sending());

        let outcome = self.client.submit(&self.fields).await;

        self.notifier.notify(Notification::for_outcome(&outcome));
        if let SubmissionOutcome::Accepted { .. } = outcome {
            self.fields = ContactFormData::default();
        }

        Some(outcome)
    }
}

struct SendingGuard<'a>(&'a mut FormState);

impl<'a> SendingGuard<'a> {
    fn new(state: &'a mut FormState) -> Self {
        *state = FormState::Sending;
        Self(state)
    }
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = FormState::Idle;
    }
}
