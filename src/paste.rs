//! Paste routes.
//!
//! | Method | Path | Outcome |
//! |---|---|---|
//! | `GET` | `/` | landing page |
//! | `GET` | `/{id}` | `200` paste text, `400` bad id, `404` no paste |
//! | `POST` | `/` | `201` with the new id as body |
//! | `DELETE` | `/{id}` | `200 Deleted`, `400` bad id, `404` no paste |
//!
//! Everything else is `404`. A store fault answers `503` for that request
//! only; a stored record that is not UTF-8 answers `500`.

use std::sync::Arc;

use tracing::{debug, error};

use crate::key::PasteKey;
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::status::Status;
use crate::store::{PasteStore, StoreError};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// State shared by every paste handler: the injected store handle.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn PasteStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PasteStore>) -> Self {
        Self { store }
    }
}

/// Builds the paste service router over `store`.
pub fn app(store: Arc<dyn PasteStore>) -> Router<AppState> {
    Router::with_state(AppState::new(store))
        .on(Method::Get,    "/",     index)
        .on(Method::Get,    "/{id}", get_paste)
        .on(Method::Post,   "/",     create_paste)
        .on(Method::Delete, "/{id}", delete_paste)
}

async fn index(_req: Request, _state: AppState) -> Response {
    Response::html(INDEX_HTML)
}

async fn get_paste(req: Request, state: AppState) -> Response {
    let key = match paste_key(&req) {
        Ok(key) => key,
        Err(res) => return res,
    };

    match state.store.get(&key).await {
        Ok(Some(value)) => match String::from_utf8(value.to_vec()) {
            Ok(text) => Response::text(text),
            Err(_) => {
                error!(%key, "stored paste is not utf-8");
                Response::builder()
                    .status(Status::InternalServerError)
                    .text("Stored paste is not text")
            }
        },
        Ok(None) => Response::status(Status::NotFound),
        Err(e) => store_failure("get", &key, e),
    }
}

async fn create_paste(req: Request, state: AppState) -> Response {
    if req.text().is_none() {
        debug!(size = req.body().len(), "rejected non-utf-8 paste");
        return Response::builder()
            .status(Status::BadRequest)
            .text("Paste must be UTF-8 text");
    }

    let key = PasteKey::generate();
    if let Err(e) = state.store.set(&key, req.body().clone()).await {
        return store_failure("set", &key, e);
    }

    let id = key.encode();
    debug!(%key, size = req.body().len(), "paste created");
    Response::builder()
        .status(Status::Created)
        .header("location", &format!("/{id}"))
        .text(id)
}

async fn delete_paste(req: Request, state: AppState) -> Response {
    let key = match paste_key(&req) {
        Ok(key) => key,
        Err(res) => return res,
    };

    match state.store.exists(&key).await {
        Ok(true) => {}
        Ok(false) => return Response::status(Status::NotFound),
        Err(e) => return store_failure("get", &key, e),
    }

    match state.store.delete(&key).await {
        Ok(()) => {
            debug!(%key, "paste deleted");
            Response::text("Deleted")
        }
        Err(e) => store_failure("delete", &key, e),
    }
}

/// Decodes the `{id}` path parameter; a bad identifier never reaches the store.
fn paste_key(req: &Request) -> Result<PasteKey, Response> {
    let Some(id) = req.param("id") else {
        return Err(Response::status(Status::NotFound));
    };
    PasteKey::decode(id).map_err(|e| {
        debug!(id, error = %e, "rejected identifier");
        Response::builder().status(Status::BadRequest).text("Invalid key")
    })
}

fn store_failure(op: &'static str, key: &PasteKey, e: StoreError) -> Response {
    error!(op, %key, error = %e, "store operation failed");
    Response::builder()
        .status(Status::ServiceUnavailable)
        .text("Store unavailable")
}
