pub mod admin_details;
pub mod app_config;
pub mod cloudinary_details;
pub mod jwt_details;
pub mod razorpay_details;

pub use admin_details::*;
pub use app_config::*;
pub use cloudinary_details::*;
pub use jwt_details::*;
pub use razorpay_details::*;
