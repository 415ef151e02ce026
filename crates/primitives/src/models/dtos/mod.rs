pub mod appointment_dto;
pub mod auth_dto;
pub mod doctor_dto;
pub mod payment_dto;
pub mod profile_dto;
pub mod providers;

pub use appointment_dto::*;
pub use auth_dto::*;
pub use doctor_dto::*;
pub use payment_dto::*;
pub use profile_dto::*;
pub use providers::*;
