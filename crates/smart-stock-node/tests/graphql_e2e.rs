//! End-to-end tests driving the full application over HTTP.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use smart_stock_node::{create_app, Config};
use smart_stock_store::{CollectionStore, Resolver};
use smart_stock_web::RenderMode;
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> (axum::Router, Resolver) {
    create_test_app_with(Config::default())
}

fn create_test_app_with(config: Config) -> (axum::Router, Resolver) {
    let resolver = Resolver::new(Arc::new(CollectionStore::seeded()));
    (create_app(&config, resolver.clone()), resolver)
}

async fn graphql(app: &axum::Router, query: &str, variables: Value) -> Value {
    let mut payload = json!({ "query": query });
    if !variables.is_null() {
        payload["variables"] = variables;
    }

    let request = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn text_body(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_list_images_in_insertion_order() {
    let (app, _) = create_test_app();

    let body = graphql(&app, "{ images { id title } }", Value::Null).await;

    assert_eq!(
        body["data"]["images"],
        json!([
            { "id": "1", "title": "Demo image" },
            { "id": "2", "title": "Don Giovanni" },
            { "id": "3", "title": "NordSee photo" },
        ])
    );
}

#[tokio::test]
async fn test_search_images_by_title() {
    let (app, _) = create_test_app();

    let body = graphql(
        &app,
        "query Search($q: String) { images(query: $q) { title author { id name } } }",
        json!({ "q": "giovanni" }),
    )
    .await;

    assert_eq!(
        body["data"]["images"],
        json!([{ "title": "Don Giovanni", "author": { "id": "3", "name": "Anh Tu" } }])
    );
}

#[tokio::test]
async fn test_user_images_for_seed_user() {
    let (app, _) = create_test_app();

    let body = graphql(&app, r#"{ users(query: "sladi") { id images { title } } }"#, Value::Null).await;

    assert_eq!(
        body["data"]["users"],
        json!([{ "id": "2", "images": [{ "title": "NordSee photo" }] }])
    );
}

#[tokio::test]
async fn test_create_user_then_query() {
    let (app, resolver) = create_test_app();

    let created = graphql(
        &app,
        "mutation Create($name: String!, $email: String!) { createUser(name: $name, email: $email) { id name email images { id } } }",
        json!({ "name": "Mia", "email": "mia@example.com" }),
    )
    .await;

    let user = &created["data"]["createUser"];
    let id = user["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert!(!["1", "2", "3"].contains(&id));
    assert_eq!(user["email"], "mia@example.com");
    assert_eq!(user["images"], json!([]));
    assert_eq!(resolver.store().user_count(), 4);

    let listed = graphql(&app, "{ users { id } }", Value::Null).await;
    assert_eq!(listed["data"]["users"][3]["id"], id);
}

#[tokio::test]
async fn test_create_user_conflict_is_structured_error() {
    let (app, resolver) = create_test_app();

    let body = graphql(
        &app,
        r#"mutation { createUser(name: "Domen again", email: "d.lisjak@emakina.at") { id } }"#,
        Value::Null,
    )
    .await;

    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errors"][0]["message"], "Email already taken: d.lisjak@emakina.at");
    assert_eq!(body["errors"][0]["path"], json!(["createUser"]));
    assert_eq!(body["errors"][0]["extensions"]["code"], "CONFLICT");
    assert_eq!(resolver.store().user_count(), 3);

    // The server keeps answering after a failed mutation
    let body = graphql(&app, "{ users { id } }", Value::Null).await;
    assert_eq!(body["data"]["users"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_post_image_for_unknown_author() {
    let (app, resolver) = create_test_app();

    let body = graphql(
        &app,
        r#"mutation { postImage(title: "Ghost", author: "999", published: true) { id } }"#,
        Value::Null,
    )
    .await;

    assert_eq!(body["errors"][0]["message"], "User not valid: 999");
    assert_eq!(body["errors"][0]["path"], json!(["postImage"]));
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(resolver.store().image_count(), 3);
}

#[tokio::test]
async fn test_post_image_resolves_author() {
    let (app, _) = create_test_app();

    let body = graphql(
        &app,
        r#"mutation { postImage(title: "Alps at dawn", author: "2", published: false) {
            id title published comments likes author { id name } } }"#,
        Value::Null,
    )
    .await;

    let image = &body["data"]["postImage"];
    assert_eq!(image["published"], false);
    assert_eq!(image["comments"], json!([]));
    assert_eq!(image["likes"], Value::Null);
    assert_eq!(image["author"], json!({ "id": "2", "name": "Sladi" }));

    let search = graphql(&app, r#"{ images(query: "ALPS") { id } }"#, Value::Null).await;
    assert_eq!(search["data"]["images"], json!([{ "id": image["id"].clone() }]));
}

#[tokio::test]
async fn test_invalid_arguments_are_rejected() {
    let (app, resolver) = create_test_app();

    let body = graphql(
        &app,
        r#"mutation { postImage(title: "No flag", author: "1") { id } }"#,
        Value::Null,
    )
    .await;
    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));

    let body = graphql(
        &app,
        r#"mutation { createUser(name: "", email: "empty@example.com") { id } }"#,
        Value::Null,
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "BAD_USER_INPUT");
    assert_eq!(resolver.store().user_count(), 3);
}

#[tokio::test]
async fn test_pages_are_served_outside_api_path() {
    let (app, _) = create_test_app();

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text_body(response).await.contains("<h1>Smart stock</h1>"));

    let response = get(&app, "/signin").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/nowhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(text_body(response).await.contains("<!DOCTYPE html>"));
}

#[tokio::test]
async fn test_api_path_never_reaches_pages() {
    let (app, _) = create_test_app();

    let response = get(&app, "/graphql").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = text_body(response).await;
    assert!(html.to_lowercase().contains("graphiql"));
    assert!(!html.contains("I'm the footer"));

    let response = get(&app, "/graphql/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["errors"][0]["message"], "no GraphQL endpoint at /graphql/unknown");
}

#[tokio::test]
async fn test_get_cannot_run_mutations() {
    let (app, resolver) = create_test_app();

    // mutation { createUser(name: "Sneaky", email: "sneaky@example.com") { id } }
    let response = get(
        &app,
        "/graphql?query=mutation%20%7B%20createUser(name%3A%20%22Sneaky%22%2C%20email%3A%20%22sneaky%40example.com%22)%20%7B%20id%20%7D%20%7D",
    )
    .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
    let body = json_body(response).await;
    assert_eq!(body["errors"][0]["message"], "mutations must be sent with POST");
    assert_eq!(resolver.store().user_count(), 3);

    // Naming the query operation of a mixed document still runs over GET
    let response = get(
        &app,
        "/graphql?operationName=Read&query=query%20Read%20%7B%20users%20%7B%20id%20%7D%20%7D%20mutation%20Write%20%7B%20postImage(title%3A%20%22x%22%2C%20author%3A%20%221%22%2C%20published%3A%20true)%20%7B%20id%20%7D%20%7D",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["users"].as_array().map(Vec::len), Some(3));
    assert_eq!(resolver.store().image_count(), 3);
}

#[tokio::test]
async fn test_custom_api_path() {
    let (app, _) = create_test_app_with(
        Config::default()
            .with_graphql_path("/api")
            .with_mode(RenderMode::Production),
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "query": "{ images { id } }" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The default path now belongs to the page renderer
    let response = get(&app, "/graphql").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = text_body(response).await;
    assert!(html.contains("Page not found"));
    assert!(html.contains("<code>/graphql</code>"));

    let response = get(&app, "/").await;
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-cache"
    );
}

#[tokio::test]
async fn test_request_id_on_both_branches() {
    let (app, _) = create_test_app();

    for uri in ["/", "/graphql"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("x-request-id", "trace-me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-me");
    }
}
