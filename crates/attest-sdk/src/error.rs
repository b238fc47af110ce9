use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SdkError {
    #[error("registry error: {0}")]
    Registry(#[from] attest_registry::RegistryError),

    #[error("gate error: {0}")]
    Gate(#[from] attest_gate::GateError),
}

pub type SdkResult<T> = Result<T, SdkError>;
