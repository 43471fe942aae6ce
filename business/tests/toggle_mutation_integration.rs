//! Toggle mutations against a mock backend: request bodies, refresh-on-success
//! and error recording.

mod common;

use common::TestCtx;
use dining_business::{
    ActionInput, ActionKind, ActionLifecycles, RefreshRowsCommand, RequestStatus, RowKey,
    RowsCompute, RunActionCommand, UserRow,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn users_body() -> serde_json::Value {
    serde_json::json!([
        {"id": 1, "givenName": "Phill", "email": "phtcon@ucsb.edu", "admin": true},
        {"id": 2, "givenName": "Chris", "email": "cgaucho@ucsb.edu", "admin": false}
    ])
}

async fn toggle(ctx: &mut TestCtx, kind: ActionKind, key: i64) {
    let updater = ctx.ctx.updater();
    ctx.ctx.update::<ActionInput>(|input| {
        *input = ActionInput::new(kind, RowKey(key))
            .on_success(RefreshRowsCommand::<UserRow>::callback(&updater));
    });
    ctx.ctx.dispatch::<RunActionCommand>().finished().await;
}

#[tokio::test]
async fn toggles_send_row_ids_and_refresh_once_each() {
    let mut ctx = TestCtx::new().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/users/toggleAdmin"))
        .and(body_json(serde_json::json!({"id": 1})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/admin/users/toggleModerator"))
        .and(body_json(serde_json::json!({"id": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_string("ignored"))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .expect(2)
        .mount(&ctx.mock_server)
        .await;

    toggle(&mut ctx, ActionKind::ToggleAdmin, 1).await;
    toggle(&mut ctx, ActionKind::ToggleModerator, 2).await;

    ctx.run_until("users to load", |c| {
        c.state::<RowsCompute<UserRow>>().rows().len() == 2
    })
    .await;
    ctx.idle().await;

    let lifecycles = ctx.ctx.state::<ActionLifecycles>();
    assert_eq!(lifecycles.status(ActionKind::ToggleAdmin), RequestStatus::Idle);
    assert_eq!(lifecycles.last_error(ActionKind::ToggleAdmin), None);
    assert_eq!(lifecycles.last_error(ActionKind::ToggleModerator), None);

    ctx.mock_server.verify().await;
}

#[tokio::test]
async fn rejected_toggle_records_server_message_without_refresh() {
    let mut ctx = TestCtx::new().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/users/toggleAdmin"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "type": "EntityNotFoundException",
            "message": "User with id 9 not found"
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    toggle(&mut ctx, ActionKind::ToggleAdmin, 9).await;
    ctx.idle().await;

    let lifecycles = ctx.ctx.state::<ActionLifecycles>();
    assert_eq!(lifecycles.status(ActionKind::ToggleAdmin), RequestStatus::Idle);
    assert_eq!(
        lifecycles.last_error(ActionKind::ToggleAdmin),
        Some("User with id 9 not found")
    );
    assert!(ctx.ctx.state::<RowsCompute<UserRow>>().is_idle());

    ctx.mock_server.verify().await;
}

#[tokio::test]
async fn server_error_without_body_uses_generic_message() {
    let mut ctx = TestCtx::new().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/users/toggleModerator"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ctx.mock_server)
        .await;

    toggle(&mut ctx, ActionKind::ToggleModerator, 2).await;
    ctx.idle().await;

    assert_eq!(
        ctx.ctx
            .state::<ActionLifecycles>()
            .last_error(ActionKind::ToggleModerator),
        Some("API returned status: 500")
    );
}

#[tokio::test]
async fn unreachable_backend_is_recorded_not_propagated() {
    let mut ctx = TestCtx::new().await;
    ctx.ctx.update::<dining_business::BusinessConfig>(|config| {
        // Port 9 (discard) is not listening in the test environment.
        config.api_base_url = "http://127.0.0.1:9".to_owned();
    });

    toggle(&mut ctx, ActionKind::ToggleAdmin, 1).await;
    ctx.idle().await;

    let lifecycles = ctx.ctx.state::<ActionLifecycles>();
    assert_eq!(lifecycles.status(ActionKind::ToggleAdmin), RequestStatus::Idle);
    assert!(
        lifecycles
            .last_error(ActionKind::ToggleAdmin)
            .is_some_and(|message| message.starts_with("request failed"))
    );
}
