//! The REST API driven end to end over in-memory services.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use crosspost::platform::adapters::PlatformAdapterRegistry;
use crosspost::publish::domain::PublishPolicy;
use crosspost::web::{AppState, USER_HEADER, create_app};
use eyre::ensure;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt as _;

#[fixture]
fn app() -> Router {
    create_app(AppState::in_memory(
        PlatformAdapterRegistry::simulated(),
        PublishPolicy::default(),
    ))
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    user: &str,
    body: Option<Value>,
) -> eyre::Result<(StatusCode, Value)> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(USER_HEADER, user)
        .header(header::CONTENT_TYPE, "application/json");
    let request = builder.body(body.map_or_else(Body::empty, |json| Body::from(json.to_string())))?;
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let parsed = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, parsed))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_workflow_publishes_a_task(app: Router) -> eyre::Result<()> {
    let (connected, _) = call(
        &app,
        Method::POST,
        "/accounts",
        "carol",
        Some(json!({ "platform": "tiktok", "username": "carol.brews", "accountId": "tt-991" })),
    )
    .await?;
    let (drafted, draft) = call(
        &app,
        Method::POST,
        "/tasks",
        "carol",
        Some(json!({
            "title": "Morning routine",
            "content": "V60, 15g, 250ml.",
            "mediaUrl": "https://cdn.example/v60.mp4",
            "platforms": "tiktok",
        })),
    )
    .await?;
    let id = draft["id"].as_str().unwrap_or_default().to_owned();

    let (published, summary) =
        call(&app, Method::POST, &format!("/tasks/{id}/publish"), "carol", None).await?;
    let (_, detail) = call(&app, Method::GET, &format!("/tasks/{id}"), "carol", None).await?;

    ensure!(connected == StatusCode::CREATED);
    ensure!(drafted == StatusCode::CREATED);
    ensure!(draft["status"] == "draft");
    ensure!(published == StatusCode::OK);
    ensure!(summary["status"] == "published");
    ensure!(detail["status"] == "published");
    let recorded_post = &detail["attempts"][0]["externalPostId"];
    ensure!(*recorded_post == summary["perPlatformResults"][0]["externalPostId"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_see_only_their_own_records(app: Router) -> eyre::Result<()> {
    call(
        &app,
        Method::POST,
        "/accounts",
        "dave",
        Some(json!({ "platform": "zhihu", "username": "dave", "accountId": "zh-1" })),
    )
    .await?;
    call(
        &app,
        Method::POST,
        "/tasks",
        "dave",
        Some(json!({ "title": "Grinders compared", "platforms": "zhihu" })),
    )
    .await?;

    let (_, erin_accounts) = call(&app, Method::GET, "/accounts", "erin", None).await?;
    let (_, erin_tasks) = call(&app, Method::GET, "/tasks", "erin", None).await?;
    let (_, dave_tasks) = call(&app, Method::GET, "/tasks", "dave", None).await?;

    ensure!(erin_accounts == json!([]));
    ensure!(erin_tasks == json!([]));
    ensure!(dave_tasks.as_array().map(Vec::len) == Some(1));
    Ok(())
}
