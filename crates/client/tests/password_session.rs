mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{server_error, Call, RecordingBackend};
use skypass_client::{
    Notification, NotificationLevel, PasswordResetSession, Redirect, ResetOutcome, Route,
};
use skypass_core::DomainError;
use skypass_forms::{PasswordField, SubmitError};

fn session(backend: &Arc<RecordingBackend>) -> PasswordResetSession<RecordingBackend> {
    PasswordResetSession::open(backend.clone(), Some("tok-123")).unwrap()
}

fn fill(session: &mut PasswordResetSession<RecordingBackend>, password: &str, confirmation: &str) {
    session.set_field(PasswordField::Password, password);
    session.set_field(PasswordField::Confirmation, confirmation);
}

#[test]
fn missing_token_blocks_and_redirects_to_login() {
    let backend = Arc::new(RecordingBackend::default());

    for token in [None, Some("")] {
        let Err(blocked) = PasswordResetSession::open(backend.clone(), token) else {
            panic!("expected blocked screen");
        };
        assert!(matches!(blocked.error, DomainError::Precondition(_)));
        assert_eq!(blocked.notification.level, NotificationLevel::Error);
        assert_eq!(blocked.redirect, Redirect::now(Route::Login));
    }
    assert!(backend.calls().is_empty());
}

#[test]
fn link_without_token_is_blocked() {
    let backend = Arc::new(RecordingBackend::default());
    let result = PasswordResetSession::open_link(backend, "https://console.example.com/definir-senha");
    assert!(result.is_err());
}

#[tokio::test]
async fn weak_or_mismatched_password_is_rejected_locally() {
    let backend = Arc::new(RecordingBackend::default());
    let mut session = session(&backend);
    fill(&mut session, "abc", "abd");

    let outcome = session.submit().await;

    assert_eq!(outcome, ResetOutcome::Rejected(SubmitError::Invalid { fields: 2 }));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn status_200_completes_and_redirects_after_delay() {
    let backend = Arc::new(RecordingBackend::default());
    let mut session = session(&backend);
    fill(&mut session, "Secret123", "Secret123");

    let outcome = session.submit().await;

    assert_eq!(
        outcome,
        ResetOutcome::Completed {
            notification: Notification::success("Password set successfully! Please log in."),
            redirect: Redirect::after(Route::Login, Duration::from_millis(1200)),
        }
    );
    assert_eq!(
        backend.calls(),
        vec![Call::SetPassword {
            token: "tok-123".to_string(),
            password: "Secret123".to_string(),
        }]
    );
}

#[tokio::test]
async fn other_success_status_is_a_failure() {
    let backend = Arc::new(RecordingBackend {
        set_password: Ok(204),
        ..RecordingBackend::default()
    });
    let mut session = session(&backend);
    fill(&mut session, "Secret123", "Secret123");

    let outcome = session.submit().await;

    assert_eq!(
        outcome,
        ResetOutcome::Failed {
            notification: Notification::error("Could not set the password."),
        }
    );
}

#[tokio::test]
async fn server_message_is_surfaced() {
    let backend = Arc::new(RecordingBackend {
        set_password: Err(server_error("{\"mensagem\":\"Token expirado\"}")),
        ..RecordingBackend::default()
    });
    let mut session = session(&backend);
    fill(&mut session, "Secret123", "Secret123");

    let outcome = session.submit().await;

    assert_eq!(
        outcome,
        ResetOutcome::Failed {
            notification: Notification::error("Token expirado"),
        }
    );
    assert!(!session.form().is_submitting());
}

#[tokio::test]
async fn generic_message_without_server_text() {
    let backend = Arc::new(RecordingBackend {
        set_password: Err(server_error("<html>bad gateway</html>")),
        ..RecordingBackend::default()
    });
    let mut session = session(&backend);
    fill(&mut session, "Secret123", "Secret123");

    let outcome = session.submit().await;

    assert_eq!(
        outcome,
        ResetOutcome::Failed {
            notification: Notification::error("Error setting the password."),
        }
    );
}
