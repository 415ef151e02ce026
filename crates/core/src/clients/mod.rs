pub mod cloudinary;
pub mod razorpay;

pub use cloudinary::CloudinaryClient;
pub use razorpay::RazorpayClient;
