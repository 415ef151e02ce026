mod common;

use axum::http::StatusCode;
use common::fixtures::{insert_doctor, insert_user};
use common::{bearer, create_test_server, db_state_with, razorpay_details, test_config, user_token};
use prescripto_core::repositories::{AppointmentRepository, DoctorRepository};
use prescripto_core::services::appointment_service::AppointmentService;
use prescripto_core::services::payment_service::PaymentService;
use prescripto_core::AppState;
use prescripto_primitives::error::PaymentError;
use prescripto_primitives::models::dtos::appointment_dto::BookAppointmentRequest;
use prescripto_primitives::models::entities::appointment::{Appointment, AppointmentState};
use prescripto_primitives::models::entities::user::User;
use serde_json::{json, Value};
use serial_test::serial;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Fixture {
    gateway: MockServer,
    state: Arc<AppState>,
    user: User,
    appointment: Appointment,
}

async fn setup(fees: i64) -> Option<Fixture> {
    let gateway = MockServer::start().await;
    let mut config = test_config();
    config.razorpay_details = Some(razorpay_details(&gateway.uri()));
    let state = db_state_with(config)?;

    let (doctor, user) = {
        let mut conn = state.db.get().unwrap();
        (insert_doctor(&mut conn, fees, true), insert_user(&mut conn))
    };

    let appointment = AppointmentService::book(
        &state,
        user.id,
        BookAppointmentRequest {
            doc_id: doctor.id.to_string(),
            slot_date: "5_6_2025".into(),
            slot_time: "10:00 AM".into(),
        },
    )
    .await
    .unwrap();

    Some(Fixture {
        gateway,
        state,
        user,
        appointment,
    })
}

fn order_json(id: &str, receipt: &str, status: &str, amount: i64, amount_paid: i64) -> Value {
    json!({
        "id": id,
        "entity": "order",
        "amount": amount,
        "amount_paid": amount_paid,
        "amount_due": amount - amount_paid,
        "currency": "INR",
        "receipt": receipt,
        "status": status,
        "attempts": 1,
        "notes": {},
        "created_at": 1700000000
    })
}

async fn mount_fetch(gateway: &MockServer, order: Value) {
    let id = order["id"].as_str().unwrap().to_string();
    Mock::given(method("GET"))
        .and(path(format!("/v1/orders/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(order))
        .mount(gateway)
        .await;
}

fn verify_body(order_id: &str) -> Value {
    json!({
        "razorpay_order_id": order_id,
        "razorpay_payment_id": "pay_29QQoUBi66xm2f",
        "razorpay_signature": "9ef4dffbfd84f1318f6739a3ce19f9d85851857ae648f114332d8401e0949a3d"
    })
}

#[tokio::test]
#[serial]
async fn test_order_then_verify_marks_appointment_paid() {
    let Some(fx) = setup(500).await else { return };
    let receipt = fx.appointment.id.to_string();

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .and(body_partial_json(json!({ "amount": 50000, "currency": "INR", "receipt": receipt })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(order_json("order_Dp1", &receipt, "created", 50000, 0)),
        )
        .expect(1)
        .mount(&fx.gateway)
        .await;
    mount_fetch(
        &fx.gateway,
        order_json("order_Dp1", &receipt, "paid", 50000, 50000),
    )
    .await;

    let server = create_test_server(fx.state.clone());
    let token = bearer(&user_token(&fx.state, fx.user.id));

    let created = server
        .post("/api/user/payment-razorpay")
        .add_header("Authorization", token.clone())
        .json(&json!({ "appointmentId": fx.appointment.id }))
        .await;
    created.assert_status_ok();
    let body: Value = created.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["order"]["id"], "order_Dp1");
    assert_eq!(body["order"]["amount"], 50000);
    assert_eq!(body["order"]["currency"], "INR");

    let mut conn = fx.state.db.get().unwrap();
    let stored = AppointmentRepository::find_by_id(&mut conn, fx.appointment.id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.order_id.as_deref(), Some("order_Dp1"));
    assert_eq!(stored.state(), AppointmentState::OrderCreated);

    let verified = server
        .post("/api/user/verify-razorpay")
        .add_header("Authorization", token.clone())
        .json(&verify_body("order_Dp1"))
        .await;
    verified.assert_status_ok();
    let body: Value = verified.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Payment Successful");

    let stored = AppointmentRepository::find_by_id(&mut conn, fx.appointment.id)
        .unwrap()
        .unwrap();
    assert!(stored.payment);
    assert_eq!(stored.payment_id.as_deref(), Some("pay_29QQoUBi66xm2f"));
    assert!(stored.payment_date.is_some());
    assert_eq!(stored.state(), AppointmentState::Paid);

    let again = server
        .post("/api/user/verify-razorpay")
        .add_header("Authorization", token.clone())
        .json(&verify_body("order_Dp1"))
        .await;
    again.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = again.json();
    assert_eq!(body["message"], "Payment already completed");

    let reorder = server
        .post("/api/user/payment-razorpay")
        .add_header("Authorization", token.clone())
        .json(&json!({ "appointmentId": fx.appointment.id }))
        .await;
    reorder.assert_status(StatusCode::BAD_REQUEST);

    let cancel = server
        .post("/api/user/cancel-appointment")
        .add_header("Authorization", token)
        .json(&json!({ "appointmentId": fx.appointment.id }))
        .await;
    let body: Value = cancel.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Paid appointments cannot be cancelled");

    let doctor = DoctorRepository::find_by_id(&mut conn, fx.appointment.doctor_id)
        .unwrap()
        .unwrap();
    assert!(doctor.slots().unwrap().is_booked("5_6_2025", "10:00 AM"));
}

#[tokio::test]
#[serial]
async fn test_cancelled_appointment_cannot_be_paid() {
    let Some(fx) = setup(500).await else { return };
    AppointmentService::cancel(&fx.state, fx.user.id, &fx.appointment.id.to_string())
        .await
        .unwrap();

    let server = create_test_server(fx.state.clone());
    let response = server
        .post("/api/user/payment-razorpay")
        .add_header("Authorization", bearer(&user_token(&fx.state, fx.user.id)))
        .json(&json!({ "appointmentId": fx.appointment.id }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "Cannot process payment for cancelled appointment"
    );

    assert!(fx.gateway.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_other_users_appointment_is_forbidden() {
    let Some(fx) = setup(500).await else { return };
    let intruder = {
        let mut conn = fx.state.db.get().unwrap();
        insert_user(&mut conn)
    };
    let receipt = fx.appointment.id.to_string();
    mount_fetch(
        &fx.gateway,
        order_json("order_Dp2", &receipt, "paid", 50000, 50000),
    )
    .await;

    let server = create_test_server(fx.state.clone());
    let token = bearer(&user_token(&fx.state, intruder.id));

    let order = server
        .post("/api/user/payment-razorpay")
        .add_header("Authorization", token.clone())
        .json(&json!({ "appointmentId": fx.appointment.id }))
        .await;
    order.assert_status(StatusCode::FORBIDDEN);

    let verify = server
        .post("/api/user/verify-razorpay")
        .add_header("Authorization", token)
        .json(&verify_body("order_Dp2"))
        .await;
    verify.assert_status(StatusCode::FORBIDDEN);
    let body: Value = verify.json();
    assert_eq!(body["message"], "Unauthorized action");

    let mut conn = fx.state.db.get().unwrap();
    let stored = AppointmentRepository::find_by_id(&mut conn, fx.appointment.id)
        .unwrap()
        .unwrap();
    assert!(!stored.payment);
}

#[tokio::test]
#[serial]
async fn test_verify_rejects_unpaid_unknown_and_short_orders() {
    let Some(fx) = setup(500).await else { return };
    let receipt = fx.appointment.id.to_string();

    mount_fetch(
        &fx.gateway,
        order_json("order_created", &receipt, "created", 50000, 0),
    )
    .await;
    mount_fetch(
        &fx.gateway,
        order_json("order_short", &receipt, "paid", 50000, 100),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/v1/orders/order_ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&fx.gateway)
        .await;

    {
        let mut conn = fx.state.db.get().unwrap();
        AppointmentRepository::set_order_id(&mut conn, fx.appointment.id, "order_short").unwrap();
    }

    let verify = |order_id: &'static str| {
        let state = fx.state.clone();
        let user_id = fx.user.id;
        async move {
            PaymentService::verify(
                &state,
                user_id,
                serde_json::from_value(verify_body(order_id)).unwrap(),
            )
            .await
            .unwrap_err()
        }
    };

    let err = verify("order_created").await;
    assert!(matches!(
        err,
        prescripto_primitives::error::ApiError::Payment(PaymentError::NotCompleted)
    ));

    let err = verify("order_short").await;
    assert!(matches!(
        err,
        prescripto_primitives::error::ApiError::Payment(PaymentError::AmountMismatch)
    ));

    let err = verify("order_ghost").await;
    assert!(matches!(
        err,
        prescripto_primitives::error::ApiError::Payment(PaymentError::OrderNotFound)
    ));

    let mut conn = fx.state.db.get().unwrap();
    let stored = AppointmentRepository::find_by_id(&mut conn, fx.appointment.id)
        .unwrap()
        .unwrap();
    assert!(!stored.payment);
    assert_eq!(stored.state(), AppointmentState::OrderCreated);
}

#[tokio::test]
#[serial]
async fn test_verify_only_accepts_the_order_issued_for_the_appointment() {
    let Some(fx) = setup(500).await else { return };
    let receipt = fx.appointment.id.to_string();
    mount_fetch(
        &fx.gateway,
        order_json("order_stale", &receipt, "paid", 50000, 50000),
    )
    .await;

    let server = create_test_server(fx.state.clone());
    let token = bearer(&user_token(&fx.state, fx.user.id));

    // no order issued yet
    let response = server
        .post("/api/user/verify-razorpay")
        .add_header("Authorization", token.clone())
        .json(&verify_body("order_stale"))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Order does not match appointment");

    // a newer order replaced it
    {
        let mut conn = fx.state.db.get().unwrap();
        AppointmentRepository::set_order_id(&mut conn, fx.appointment.id, "order_latest").unwrap();
    }
    let response = server
        .post("/api/user/verify-razorpay")
        .add_header("Authorization", token)
        .json(&verify_body("order_stale"))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let mut conn = fx.state.db.get().unwrap();
    let stored = AppointmentRepository::find_by_id(&mut conn, fx.appointment.id)
        .unwrap()
        .unwrap();
    assert!(!stored.payment);
    assert!(stored.payment_id.is_none());
}

#[test]
fn test_minor_amount() {
    assert_eq!(PaymentService::minor_amount(500).unwrap(), 50000);
    assert!(matches!(
        PaymentService::minor_amount(0),
        Err(PaymentError::InvalidAmount)
    ));
    assert!(matches!(
        PaymentService::minor_amount(-5),
        Err(PaymentError::InvalidAmount)
    ));
    assert!(matches!(
        PaymentService::minor_amount(i64::MAX),
        Err(PaymentError::InvalidAmount)
    ));
}
