//! Page Components

mod checkout;
mod error;
mod home;
mod success;

pub use checkout::CheckoutPage;
pub use error::ErrorPage;
pub use home::StorefrontPage;
pub use success::SuccessPage;
