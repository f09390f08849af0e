use thiserror::Error;

pub type Result<T> = std::result::Result<T, RasoiError>;

/// Validation failures raised while turning a draft into a stored record.
///
/// Display strings double as the client-facing error messages, so they are
/// phrased for API consumers rather than for logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasoiError {
    #[error("Name is required")]
    NameRequired,

    #[error("Vendor ID and Supplier ID are required")]
    OrderPartiesRequired,
}
