use crate::handlers::{
    add_doctor::__path_add_doctor, admin_login::__path_admin_login,
    book_appointment::__path_book_appointment, cancel_appointment::__path_cancel_appointment,
    change_availability::__path_change_availability, doctor_list::__path_doctor_list,
    get_profile::__path_get_profile, health::__path_health_check,
    list_appointments::__path_list_appointments, login::__path_login,
    payment_razorpay::__path_payment_razorpay, register::__path_register,
    update_profile::__path_update_profile, verify_razorpay::__path_verify_razorpay,
};
use prescripto_primitives::error::ErrorBody;
use prescripto_primitives::models::*;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check, register, login, get_profile, update_profile,
        book_appointment, list_appointments, cancel_appointment,
        payment_razorpay, verify_razorpay, doctor_list,
        admin_login, add_doctor, change_availability
    ),
    components(schemas(
        ErrorBody, RegisterRequest, LoginRequest, AuthResponse, MessageResponse,
        HealthStatus, UserProfile, ProfileResponse, UpdateProfileForm, Address,
        BookAppointmentRequest, AppointmentIdRequest, AppointmentDto,
        AppointmentsResponse, AppointmentState, VerifyPaymentRequest,
        PaymentOrderResponse, RazorpayOrder, OrderStatus, DoctorSummary,
        DoctorListResponse, AddDoctorRequest, ChangeAvailabilityRequest
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "User", description = "Registration, login and profile"),
        (name = "Appointments", description = "Booking and cancelling doctor appointments"),
        (name = "Payments", description = "Razorpay checkout for appointment fees"),
        (name = "Doctors", description = "Public doctor directory"),
        (name = "Admin", description = "Doctor management"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
