//! User-facing notifications.
//!
//! Every submit outcome maps to exactly one notification triple. The four
//! canonical triples (invalid CPF, invalid email, success, generic send
//! error) keep the wording of the landing page; the required-field and
//! in-flight cases are extra triples the stricter session surfaces.

use crate::domain::ValidationError;
use crate::flow::SubmitOutcome;
use serde::{Deserialize, Serialize};

/// Notification severity, mirroring the toast variants of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A user-facing notification triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    fn new(title: &str, description: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            severity,
        }
    }

    /// Map a submit outcome to its notification.
    pub fn for_outcome(outcome: &SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Submitted => Self::new(
                "Inscrição realizada com sucesso!",
                "Você está participando do sorteio da passagem para Disney. Boa sorte!",
                Severity::Success,
            ),
            SubmitOutcome::Rejected(ValidationError::InvalidTaxId(_)) => Self::new(
                "CPF inválido",
                "Por favor, digite um CPF válido com 11 dígitos.",
                Severity::Error,
            ),
            SubmitOutcome::Rejected(ValidationError::InvalidEmail(_)) => Self::new(
                "Email inválido",
                "Por favor, digite um email válido.",
                Severity::Error,
            ),
            SubmitOutcome::Rejected(_) => Self::new(
                "Dados incompletos",
                "Por favor, preencha todos os campos obrigatórios.",
                Severity::Error,
            ),
            SubmitOutcome::Failed(_) => Self::new(
                "Erro ao enviar formulário",
                "Tente novamente em alguns instantes.",
                Severity::Error,
            ),
            SubmitOutcome::InFlight => Self::new(
                "Envio em andamento",
                "Por favor, aguarde...",
                Severity::Error,
            ),
        }
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Notifier that prints to the terminal, the binary's stand-in for the
/// page's toast widget.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) {
        let tag = match notification.severity {
            Severity::Success => "ok",
            Severity::Error => "erro",
        };
        println!(
            "[{}] {} - {}",
            tag, notification.title, notification.description
        );
    }
}
