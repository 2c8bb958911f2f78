use thiserror::Error;

/// Result type alias using ClearError
pub type Result<T> = std::result::Result<T, ClearError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and structured log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    UnknownField,
    InvalidRecord,
    MissingEntityId,

    // Integration/IO
    Io,
    Serialization,
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownField => "ERR_UNKNOWN_FIELD",
            ExErrorKind::InvalidRecord => "ERR_INVALID_RECORD",
            ExErrorKind::MissingEntityId => "ERR_MISSING_ENTITY_ID",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity, field) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<String>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity kind context
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add field name context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for Clear record operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClearError {
    /// A field set names a field the entity schema does not declare
    #[error("Unknown field referenced: {field} is not a property of {entity}")]
    UnknownField { entity: String, field: String },

    /// A record could not be built from the supplied value
    #[error("Invalid record: {reason}")]
    InvalidRecord { reason: String },

    /// An update or delete was requested without a record id
    #[error("Missing entity id for {entity}")]
    MissingEntityId { entity: String },

    /// Promo code length outside the accepted range
    #[error("Invalid promo code length: {length}")]
    InvalidCodeLength { length: usize },

    /// Configuration file could not be parsed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Filesystem failure
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<ClearError> for ExError {
    fn from(err: ClearError) -> Self {
        match err {
            ClearError::UnknownField { entity, field } => ExError::new(ExErrorKind::UnknownField)
                .with_entity(entity)
                .with_field(field)
                .with_message("Unknown field referenced"),

            ClearError::InvalidRecord { reason } => {
                ExError::new(ExErrorKind::InvalidRecord).with_message(reason)
            }

            ClearError::MissingEntityId { entity } => ExError::new(ExErrorKind::MissingEntityId)
                .with_entity(entity)
                .with_message("Entity id must not be empty"),

            ClearError::InvalidCodeLength { length } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity("PromoCode")
                .with_message(format!("Invalid promo code length: {}", length)),

            ClearError::Config { message } => {
                ExError::new(ExErrorKind::Config).with_message(message)
            }

            ClearError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),

            ClearError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to ClearError
impl From<serde_json::Error> for ClearError {
    fn from(err: serde_json::Error) -> Self {
        ClearError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ClearError {
    fn from(err: std::io::Error) -> Self {
        ClearError::Io {
            message: err.to_string(),
        }
    }
}
