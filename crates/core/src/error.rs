use heartguard_types::CoercionError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("unknown field '{0}' is not part of the patient metrics schema")]
    UnknownField(String),
    #[error("unknown preset profile '{0}' (expected \"healthy\" or \"at-risk\")")]
    UnknownPreset(String),
    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
