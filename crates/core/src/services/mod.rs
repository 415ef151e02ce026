pub mod admin_service;
pub mod appointment_service;
pub mod auth_service;
pub mod doctor_service;
pub mod payment_service;
pub mod profile_service;
pub mod slot_allocator;
