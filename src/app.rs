use std::sync::Arc;

use axum::{middleware::from_fn_with_state, Router};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::core::middleware::{require_session, MakeRequestUuid, MakeSpanWithRequestId};
use crate::features::auth::{AuthService, SessionService};
use crate::features::files::FileService;
use crate::features::{auth, files, pages};

/// Assemble the full application router. File routes sit behind the
/// session guard; landing and auth routes are public.
pub fn build_app(
    auth_service: Arc<AuthService>,
    file_service: Arc<FileService>,
    session_service: Arc<SessionService>,
) -> Router {
    let protected = files::routes(file_service).route_layer(from_fn_with_state(
        Arc::clone(&session_service),
        require_session,
    ));

    Router::new()
        .merge(pages::routes())
        .merge(auth::routes(auth_service, session_service))
        .merge(protected)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
