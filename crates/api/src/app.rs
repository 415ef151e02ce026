use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    add_doctor::add_doctor, admin_login::admin_login, book_appointment::book_appointment,
    cancel_appointment::cancel_appointment, change_availability::change_availability,
    doctor_list::doctor_list, get_profile::get_profile, health::health_check, health::root,
    list_appointments::list_appointments, login::login, payment_razorpay::payment_razorpay,
    register::register, update_profile::update_profile, verify_razorpay::verify_razorpay,
};
use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use prescripto_core::{AppState, SecurityConfig};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Profile photos arrive as multipart uploads.
const BODY_LIMIT: usize = 5 * 1024 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    let public_router = create_public_routers();
    let user_router = create_user_routers(&state);
    let admin_router = create_admin_routers(&state);

    let mut router = Router::new()
        .merge(public_router)
        .merge(user_router)
        .merge(admin_router)
        .layer(axum::extract::DefaultBodyLimit::max(BODY_LIMIT))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            https_redirect_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        );

    // the peer-ip key extractor needs ConnectInfo, which test servers lack
    if !state.config.is_test() {
        match GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
        {
            Some(governor_conf) => {
                router = router.layer(GovernorLayer {
                    config: Arc::new(governor_conf),
                });
            }
            None => warn!("Invalid rate limit configuration; rate limiting disabled"),
        }
    }

    router.with_state(state)
}

fn create_user_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/user/get-profile", get(get_profile))
        .route("/api/user/update-profile", post(update_profile))
        .route("/api/user/book-appointment", post(book_appointment))
        .route("/api/user/appointments", get(list_appointments))
        .route("/api/user/cancel-appointment", post(cancel_appointment))
        .route("/api/user/payment-razorpay", post(payment_razorpay))
        .route("/api/user/verify-razorpay", post(verify_razorpay))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::auth_middleware,
        ))
}

fn create_admin_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/admin/add-doctor", post(add_doctor))
        .route("/api/admin/change-availability", post(change_availability))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::admin_middleware,
        ))
}

fn create_public_routers() -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .route("/api/user/register", post(register))
        .route("/api/user/login", post(login))
        .route("/api/doctor/list", get(doctor_list))
        .route("/api/admin/login", post(admin_login))
}

async fn https_redirect_middleware(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
    req: axum::extract::Request,
    next: middleware::Next,
) -> axum::response::Response {
    if state.config.is_production() {
        let headers = req.headers();
        let proto = headers
            .get("x-forwarded-proto")
            .and_then(|h| h.to_str().ok());

        if let Some("http") = proto {
            let host = headers
                .get("host")
                .and_then(|h| h.to_str().ok())
                .unwrap_or("localhost");

            let path_and_query = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or("");
            let redirect_url = format!("https://{}{}", host, path_and_query);

            return axum::response::Redirect::permanent(&redirect_url).into_response();
        }
    }

    next.run(req).await
}
