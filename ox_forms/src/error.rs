use thiserror::Error;

/// Errors raised while turning a widget definition into markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The call site asked for something the widget cannot express,
    /// e.g. `required` without a form-name scope to validate against.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("no renderer registered for widget '{0}'")]
    UnknownWidget(String),

    #[error("renderer for '{expected}' cannot render a '{found}' widget")]
    WidgetMismatch { expected: String, found: String },

    #[error("failed to parse form definition: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
