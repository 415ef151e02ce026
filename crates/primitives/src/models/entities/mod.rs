pub mod address;
pub mod appointment;
pub mod doctor;
pub mod slots;
pub mod snapshot;
pub mod user;

pub use address::*;
pub use appointment::*;
pub use doctor::*;
pub use slots::*;
pub use snapshot::*;
pub use user::*;
