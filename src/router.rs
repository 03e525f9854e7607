//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. Every request gets
//! exactly one response: a routed handler's, or `404 Not Found`.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use matchit::Router as MatchitRouter;
use tracing::debug;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Holds one radix tree per HTTP method plus the application state `S`
/// that is cloned into every handler call. Build it once at startup; pass it
/// to [`Server::serve`](crate::Server::serve).
pub struct Router<S> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    state: S,
}

impl<S> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// An empty router handing `state` to every handler.
    pub fn with_state(state: S) -> Self {
        Self { routes: HashMap::new(), state }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax and match exactly one non-empty
    /// segment; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler<S>, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Routes one request and produces its response.
    ///
    /// Unknown methods, methods with no routes, and unmatched paths all
    /// resolve to `404 Not Found`.
    pub async fn dispatch(&self, method: &str, path: &str, body: Bytes) -> Response {
        let routed = method
            .parse::<Method>()
            .ok()
            .and_then(|m| self.lookup(m, path).map(|(handler, params)| (m, handler, params)));

        let response = match routed {
            Some((method, handler, params)) => {
                let req = Request::new(method, path.to_owned(), body, params);
                handler.call(req, self.state.clone()).await
            }
            None => Response::status(Status::NotFound),
        };

        debug!(%method, path, status = u16::from(response.status), "request");
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::IntoResponse;

    async fn echo_id(req: Request, _: ()) -> String {
        req.param("id").unwrap_or_default().to_owned()
    }

    async fn root(_: Request, prefix: &'static str) -> Response {
        Response::text(prefix)
    }

    async fn describe(req: Request, _: ()) -> String {
        format!("{} {}", req.method(), req.path())
    }

    async fn created(_: Request, _: ()) -> Status {
        Status::Created
    }

    fn router() -> Router<()> {
        Router::with_state(())
            .on(Method::Get, "/{id}", echo_id)
            .on(Method::Post, "/", created)
    }

    #[tokio::test]
    async fn single_segment_param_is_extracted() {
        let res = router().dispatch("GET", "/abc", Bytes::new()).await;
        assert_eq!(res.status_code(), Status::Ok);
        assert_eq!(res.body(), b"abc");
    }

    #[tokio::test]
    async fn param_does_not_match_root_or_nested_paths() {
        let app = router();
        for path in ["/", "/a/b", "/abc/", ""] {
            let res = app.dispatch("GET", path, Bytes::new()).await;
            assert_eq!(res.status_code(), Status::NotFound, "path {path:?}");
        }
    }

    #[tokio::test]
    async fn unregistered_and_unknown_methods_are_not_found() {
        let app = router();
        for method in ["PUT", "DELETE", "get", "BREW"] {
            let res = app.dispatch(method, "/abc", Bytes::new()).await;
            assert_eq!(res.status_code(), Status::NotFound, "method {method}");
        }
    }

    #[tokio::test]
    async fn handler_return_types_convert_into_responses() {
        let res = router().dispatch("POST", "/", Bytes::new()).await;
        assert_eq!(res.status_code(), Status::Created);
        assert_eq!(res.body(), Status::Created.into_response().body());
    }

    #[tokio::test]
    async fn state_is_handed_to_handlers() {
        let app = Router::with_state("from state").on(Method::Get, "/", root);
        let res = app.dispatch("GET", "/", Bytes::new()).await;
        assert_eq!(res.body(), b"from state");
        assert_eq!(*app.state(), "from state");
    }

    #[tokio::test]
    async fn handler_sees_parsed_method_and_raw_path() {
        let app = Router::with_state(()).on(Method::Delete, "/{id}", describe);
        let res = app.dispatch("DELETE", "/q0Gd3Vz1", Bytes::new()).await;
        assert_eq!(res.body(), b"DELETE /q0Gd3Vz1");
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic() {
        let _ = Router::with_state(())
            .on(Method::Get, "/{id}", echo_id)
            .on(Method::Get, "/{other}", echo_id);
    }
}
