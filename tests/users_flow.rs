//! Runs the real backend on an ephemeral port and drives it through the client
//! service, the form and the list/detail views.

use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use userdesk::app_lib::{AppConfig, FALLBACK_ERROR_MESSAGE};
use userdesk::backend::{self, store::UserStore};
use userdesk::features::users::{FormMode, UserForm, UserInput, UserService};
use userdesk::routes::{self, Route, UserDetail, UserList};

async fn spawn_backend() -> Result<UserService> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(backend::serve(listener, Arc::new(UserStore::new())));

    let config = AppConfig::load(Some(format!("http://{addr}").as_str()))?;
    Ok(UserService::from_config(&config)?)
}

#[tokio::test]
async fn create_edit_delete_round() -> Result<()> {
    let service = spawn_backend().await?;

    let mut form = UserForm::init(service.clone(), None).await;
    assert_eq!(form.mode(), FormMode::Create);
    form.set_name("Ada");
    form.set_email("ada@example.com");
    assert_eq!(form.submit().await, Some(Route::Users));

    let list = UserList::load(service.clone()).await;
    assert_eq!(list.users().len(), 1);
    let id = list.users()[0].id.expect("server assigns an id");

    let mut form = UserForm::init(service.clone(), Some(id)).await;
    assert_eq!(form.user().name, "Ada");
    form.set_name("Ada Lovelace");
    assert_eq!(form.submit().await, Some(Route::Users));

    let detail = UserDetail::load(service.clone(), id).await;
    assert_eq!(
        detail.user().map(|user| user.name.as_str()),
        Some("Ada Lovelace")
    );

    let mut list = UserList::load(service.clone()).await;
    assert!(list.delete(id).await);
    assert!(list.users().iter().all(|user| user.id != Some(id)));

    let listed = service.list().await?;
    assert!(listed.iter().all(|user| user.id != Some(id)));

    Ok(())
}

#[tokio::test]
async fn backend_messages_reach_the_form() -> Result<()> {
    let service = spawn_backend().await?;
    service
        .create(&UserInput::new("Grace", "grace@example.com"))
        .await?;

    let mut form = UserForm::init(service.clone(), None).await;
    form.set_name("Grace");
    form.set_email("someone@example.com");
    assert_eq!(form.submit().await, None);
    assert_eq!(form.error(), Some("A user with the name Grace already exists"));

    form.set_name("Someone");
    form.set_email("not-an-email");
    assert_eq!(form.submit().await, None);
    assert_eq!(form.error(), Some("Invalid email format"));

    Ok(())
}

#[tokio::test]
async fn editing_a_missing_user_keeps_empty_fields() -> Result<()> {
    let service = spawn_backend().await?;

    let mut form = UserForm::init(service.clone(), Some(77)).await;
    assert!(form.is_edit());
    assert_eq!(form.user().name, "");
    assert_eq!(form.error(), None);

    form.set_name("Nobody");
    form.set_email("nobody@example.com");
    assert_eq!(form.submit().await, None);
    assert_eq!(form.error(), Some("User not found with ID: 77"));

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_uses_fallback_message() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let config = AppConfig::load(Some(format!("http://{addr}").as_str()))?;
    let service = UserService::from_config(&config)?;

    let mut form = UserForm::init(service.clone(), None).await;
    form.set_name("Ada");
    form.set_email("ada@example.com");
    assert_eq!(form.submit().await, None);
    assert_eq!(form.error(), Some(FALLBACK_ERROR_MESSAGE));

    let list = UserList::load(service).await;
    assert_eq!(list.error(), Some(FALLBACK_ERROR_MESSAGE));

    Ok(())
}

#[tokio::test]
async fn routes_render_their_views() -> Result<()> {
    let service = spawn_backend().await?;
    let created = service
        .create(&UserInput::new("Linus", "linus@example.com"))
        .await?;
    let id = created.id.expect("server assigns an id");

    let rendered = routes::render(&service, Route::parse("/").expect("root route")).await;
    assert!(rendered.contains("linus@example.com"));

    let rendered = routes::render(&service, Route::UserDetail(id)).await;
    assert!(rendered.starts_with(&format!("User #{id}")));

    let rendered = routes::render(&service, Route::UserForm(Some(id))).await;
    assert!(rendered.starts_with(&format!("Edit user #{id}")));
    assert!(rendered.contains("Linus"));

    let rendered = routes::render(&service, Route::UserForm(None)).await;
    assert!(rendered.starts_with("New user"));

    Ok(())
}
