//! The landing page's side of the contact pipeline: field validation,
//! honeypot bot filtering, one bounded-timeout POST per submission and the
//! notification lifecycle around it.

mod form;
mod notify;
mod submit;

pub use form::{ContactForm, ContactFormData, FormState};
pub use notify::{Notification, NotificationVariant, Notifier};
pub use submit::{
    validate, FieldError, SubmissionClient, SubmissionClientConfig, SubmissionOutcome,
    DEFAULT_TIMEOUT, HONEYPOT_DELIVERY_ID,
};
