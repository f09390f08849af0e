pub mod error;
pub mod order;
pub mod store;
pub mod supplier;
pub mod vendor;

pub use error::{RasoiError, Result};
pub use store::ResourceStore;
