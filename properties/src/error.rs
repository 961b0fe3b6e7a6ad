use bedrock_signals::HandlerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropertyError {
    /// Write attempted on a property without a setter.
    #[error("property is read-only")]
    ReadOnly,

    /// No value stored under the bound key.
    #[error("missing property")]
    Missing,

    /// Stored text can't be parsed as the property's type.
    #[error("invalid value '{value}' for type {ty}")]
    InvalidValue { value: String, ty: &'static str },

    /// A change handler failed; the inner error is the handler's own.
    #[error("change handler failed: {0}")]
    Handler(#[source] HandlerError),
}

impl From<HandlerError> for PropertyError {
    fn from(error: HandlerError) -> Self { PropertyError::Handler(error) }
}
