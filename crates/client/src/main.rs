//! `skypass-admin`: operator command line over the administration API.

use std::sync::Arc;

use anyhow::{bail, Context};
use tokio::io::{AsyncBufReadExt, BufReader};

use skypass_client::{
    ClientConfig, HttpBackend, PasswordResetSession, ResetOutcome, UserBackend, UserListController,
};
use skypass_core::UserId;
use skypass_forms::PasswordField;

const USAGE: &str = "usage: skypass-admin <users | delete <id> | catalog | set-password <link>>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    skypass_observability::init();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, authenticated = config.auth_token.is_some(), "starting");
    let backend = Arc::new(HttpBackend::new(&config)?);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["users"] => list_users(backend).await,
        ["delete", id] => {
            let id: UserId = id.parse()?;
            let mut list = UserListController::mount(backend).await;
            list.delete(id).await?;
            println!("deleted {id}; {} users remain", list.users().len());
            Ok(())
        }
        ["catalog"] => show_catalog(backend.as_ref()).await,
        ["set-password", link] => set_password(backend, link).await,
        _ => bail!(USAGE),
    }
}

async fn list_users(backend: Arc<HttpBackend>) -> anyhow::Result<()> {
    let list = UserListController::mount(backend).await;
    if list.is_empty() {
        println!("no users");
        return Ok(());
    }
    for user in list.users() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            user.id,
            user.name,
            user.email,
            user.phone_display(),
            user.active_display()
        );
    }
    Ok(())
}

async fn show_catalog(backend: &HttpBackend) -> anyhow::Result<()> {
    println!("access levels:");
    for level in backend.access_levels().await? {
        println!("  {}\t{}", level.id, level.label);
    }
    println!("screens:");
    for screen in backend.screens().await? {
        println!("  {}\t{}", screen.id, screen.label);
    }
    Ok(())
}

async fn set_password(backend: Arc<HttpBackend>, link: &str) -> anyhow::Result<()> {
    let mut session = match PasswordResetSession::open_link(backend, link) {
        Ok(session) => session,
        Err(blocked) => bail!("{}", blocked.notification.message),
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let password = lines.next_line().await?.context("expected a password on stdin")?;
    let confirmation = lines
        .next_line()
        .await?
        .context("expected the password confirmation on stdin")?;

    session.set_field(PasswordField::Password, password);
    session.set_field(PasswordField::Confirmation, confirmation);

    let requirements = session.form().password_requirements();
    for check in requirements.checklist() {
        let mark = if check.met { "x" } else { " " };
        println!("[{mark}] {}", check.requirement.label());
    }

    match session.submit().await {
        ResetOutcome::Completed { notification, .. } => {
            println!("{}", notification.message);
            Ok(())
        }
        ResetOutcome::Failed { notification } => bail!("{}", notification.message),
        ResetOutcome::Rejected(_) => {
            for (field, message) in session.form().errors().iter() {
                eprintln!("{field:?}: {message}");
            }
            bail!("password not accepted")
        }
    }
}
