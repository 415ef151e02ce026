pub mod add_doctor;
pub mod admin_login;
pub mod book_appointment;
pub mod cancel_appointment;
pub mod change_availability;
pub mod doctor_list;
pub mod get_profile;
pub mod health;
pub mod list_appointments;
pub mod login;
pub mod payment_razorpay;
pub mod register;
pub mod update_profile;
pub mod verify_razorpay;
