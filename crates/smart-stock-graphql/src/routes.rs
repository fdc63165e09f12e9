//! HTTP endpoints of the schema gateway.

use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql::parser::{parse_query, types::OperationType};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::StockSchema;

/// Shared state for the gateway routes.
#[derive(Clone)]
struct GatewayState {
    schema: StockSchema,
    endpoint: Arc<str>,
}

/// Create the GraphQL router mounted at `path`.
///
/// - `POST {path}` executes a request
/// - `GET {path}?query=...` executes a request from the query string
/// - `GET {path}` without a query serves GraphiQL
/// - `GET {path}/sdl` returns the schema definition
///
/// `path` must start with `/`.
pub fn graphql_routes(schema: StockSchema, path: &str) -> Router {
    let state = GatewayState {
        schema,
        endpoint: Arc::from(path),
    };

    Router::new()
        .route(path, get(graphql_get).post(graphql_post))
        .route(&format!("{}/sdl", path.trim_end_matches('/')), get(sdl))
        .fallback(not_found)
        .with_state(state)
}

async fn graphql_post(State(state): State<GatewayState>, req: GraphQLRequest) -> GraphQLResponse {
    let req = req.into_inner();
    tracing::debug!(operation = ?req.operation_name, "Executing GraphQL request");
    state.schema.execute(req).await.into()
}

async fn graphql_get(State(state): State<GatewayState>, uri: Uri) -> Response {
    let Some(query_string) = uri.query().filter(|qs| has_query_param(qs)) else {
        return Html(GraphiQLSource::build().endpoint(&state.endpoint).finish()).into_response();
    };

    match parse_query_string(query_string) {
        Ok(req) if selects_mutation(&req) => {
            tracing::debug!(operation = ?req.operation_name, "Rejected mutation over GET");
            (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "POST")],
                Json(json!({ "errors": [{ "message": "mutations must be sent with POST" }] })),
            )
                .into_response()
        }
        Ok(req) => {
            tracing::debug!(operation = ?req.operation_name, "Executing GraphQL GET request");
            GraphQLResponse::from(state.schema.execute(req).await).into_response()
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "errors": [{ "message": e.to_string() }] })),
        )
            .into_response(),
    }
}

async fn sdl(State(state): State<GatewayState>) -> String {
    state.schema.sdl()
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "errors": [{ "message": format!("no GraphQL endpoint at {}", uri.path()) }] })),
    )
}

/// True if the operation the request would run is a mutation.
///
/// Unparsable documents are left to the executor, which reports the syntax error.
fn selects_mutation(req: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&req.query) else {
        return false;
    };

    document.operations.iter().any(|(name, operation)| {
        operation.node.ty == OperationType::Mutation
            && req
                .operation_name
                .as_deref()
                .is_none_or(|wanted| name.map(|n| n.as_str()) == Some(wanted))
    })
}

fn has_query_param(query_string: &str) -> bool {
    query_string
        .split('&')
        .any(|pair| pair == "query" || pair.starts_with("query="))
}
