//! Email model and simulated delivery

pub mod address;
pub mod email;
pub mod error;
pub mod service;
pub mod status;

pub use address::EmailAddress;
pub use email::{AddressInput, Email, RecipientInput};
pub use error::AddressError;
pub use service::EmailService;
pub use status::Status;
