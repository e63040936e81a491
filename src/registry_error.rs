use thiserror::Error;

/// Errors returned by registry queries.
///
/// Construction never produces these: a failing `Singleton::build` returns the
/// managed type's own error unchanged.
#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("Failed to acquire registry lock")]
    RegistryLock,

    #[error("Type mismatch in registry for {type_name}")]
    TypeMismatch { type_name: &'static str },

    #[error("No instance constructed for {type_name}")]
    TypeNotFound { type_name: &'static str },
}
