pub mod cloudinary;
pub mod razorpay;

pub use cloudinary::*;
pub use razorpay::*;
