use crate::submit::SubmissionOutcome;

/// One transient notification shown to the user; a new one replaces the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub variant: NotificationVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Loading,
    Success,
    Error,
}

impl Notification {
    pub fn sending() -> Self {
        Self {
            title: "Enviando...".into(),
            description: None,
            variant: NotificationVariant::Loading,
        }
    }

    pub fn for_outcome(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Accepted { .. } => Self {
                title: "Contato enviado!".into(),
                description: Some("Vou te responder ainda hoje 😊".into()),
                variant: NotificationVariant::Success,
            },
            SubmissionOutcome::Failed { error } => Self {
                title: "Erro ao enviar".into(),
                description: Some(error.clone()),
                variant: NotificationVariant::Error,
            },
        }
    }
}

/// Whatever renders the notifications; the form only emits them.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notification: Notification);
}
