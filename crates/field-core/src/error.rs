use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("invalid color {0:?}: expected #rgb, #rrggbb, #rrggbbaa, rgb(..) or rgba(..)")]
    InvalidColor(String),

    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("particle field has been torn down")]
    TornDown,
}

pub type Result<T> = std::result::Result<T, FieldError>;
