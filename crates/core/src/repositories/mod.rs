pub mod appointment_repository;
pub mod doctor_repository;
pub mod user_repository;

pub use appointment_repository::AppointmentRepository;
pub use doctor_repository::DoctorRepository;
pub use user_repository::UserRepository;
