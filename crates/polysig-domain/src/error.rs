//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for polysig
#[derive(Error, Debug)]
pub enum Error {
    /// A signature with the same ordered parameter types is already registered
    #[error("Duplicate signature for '{operation}': {signature} is already registered")]
    DuplicateSignature {
        /// Operation the registration targeted
        operation: String,
        /// Rendered signature that was rejected
        signature: String,
    },

    /// A signature is malformed (empty or repeated parameter names)
    #[error("Invalid signature for '{operation}': {message}")]
    InvalidSignature {
        /// Operation the registration targeted
        operation: String,
        /// Description of the problem
        message: String,
    },

    /// Dispatch to an operation name nothing was registered for
    #[error("Unknown operation: '{operation}'")]
    UnknownOperation {
        /// The requested operation name
        operation: String,
    },

    /// No registered signature accepts the supplied arguments
    #[error("No signature of '{operation}' matches arguments {arguments}")]
    NoMatchingSignature {
        /// The requested operation name
        operation: String,
        /// Rendered argument shapes, e.g. `(String, b=i64)`
        arguments: String,
    },

    /// More than one signature accepts the supplied arguments
    #[error("Ambiguous call to '{operation}' with {arguments}: candidates {candidates:?}")]
    AmbiguousCall {
        /// The requested operation name
        operation: String,
        /// Rendered argument shapes
        arguments: String,
        /// Rendered signatures that all matched
        candidates: Vec<String>,
    },

    /// A parameter was requested with a type it was not passed as
    #[error("Argument '{parameter}' has type {actual}, expected {expected}")]
    ArgumentType {
        /// Parameter name
        parameter: String,
        /// Requested type
        expected: String,
        /// Runtime type of the supplied value
        actual: String,
    },

    /// A parameter was requested that the call did not bind
    #[error("Missing argument: '{parameter}'")]
    MissingArgument {
        /// Parameter name
        parameter: String,
    },

    /// An asynchronous singleton initializer completed with a non-empty value
    #[error("Async initializer of {type_name} must complete with an empty value, produced {produced}")]
    InvalidInitializerResult {
        /// Managed type whose initializer misbehaved
        type_name: String,
        /// Description of the value that was produced
        produced: String,
    },

    /// A singleton constructor or initializer failed
    #[error("Failed to construct {type_name}: {message}")]
    Construction {
        /// Managed type being constructed
        type_name: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A bound implementation failed
    #[error("Implementation of '{operation}' failed: {message}")]
    Handler {
        /// Operation whose implementation failed
        operation: String,
        /// Description of the failure
        message: String,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Dispatch error creation methods
impl Error {
    /// Create a duplicate signature error
    pub fn duplicate_signature<O: Into<String>, S: Into<String>>(operation: O, signature: S) -> Self {
        Self::DuplicateSignature {
            operation: operation.into(),
            signature: signature.into(),
        }
    }

    /// Create an invalid signature error
    pub fn invalid_signature<O: Into<String>, S: Into<String>>(operation: O, message: S) -> Self {
        Self::InvalidSignature {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an unknown operation error
    pub fn unknown_operation<O: Into<String>>(operation: O) -> Self {
        Self::UnknownOperation {
            operation: operation.into(),
        }
    }

    /// Create a no matching signature error
    pub fn no_matching_signature<O: Into<String>, A: Into<String>>(operation: O, arguments: A) -> Self {
        Self::NoMatchingSignature {
            operation: operation.into(),
            arguments: arguments.into(),
        }
    }

    /// Create an ambiguous call error
    pub fn ambiguous_call<O: Into<String>, A: Into<String>>(
        operation: O,
        arguments: A,
        candidates: Vec<String>,
    ) -> Self {
        Self::AmbiguousCall {
            operation: operation.into(),
            arguments: arguments.into(),
            candidates,
        }
    }

    /// Create a handler error
    pub fn handler<O: Into<String>, S: Into<String>>(operation: O, message: S) -> Self {
        Self::Handler {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

// Argument access error creation methods
impl Error {
    /// Create an argument type error
    pub fn argument_type<P, E, A>(parameter: P, expected: E, actual: A) -> Self
    where
        P: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Self::ArgumentType {
            parameter: parameter.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a missing argument error
    pub fn missing_argument<P: Into<String>>(parameter: P) -> Self {
        Self::MissingArgument {
            parameter: parameter.into(),
        }
    }
}

// Singleton lifecycle error creation methods
impl Error {
    /// Create an invalid initializer result error
    pub fn invalid_initializer_result<T: Into<String>, P: Into<String>>(type_name: T, produced: P) -> Self {
        Self::InvalidInitializerResult {
            type_name: type_name.into(),
            produced: produced.into(),
        }
    }

    /// Create a construction error
    pub fn construction<T: Into<String>, S: Into<String>>(type_name: T, message: S) -> Self {
        Self::Construction {
            type_name: type_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a construction error with source
    pub fn construction_with_source<T, S, E>(type_name: T, message: S, source: E) -> Self
    where
        T: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Construction {
            type_name: type_name.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error was raised while registering a signature
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateSignature { .. } | Self::InvalidSignature { .. }
        )
    }

    /// Whether this error was raised while resolving a call
    pub fn is_dispatch_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownOperation { .. }
                | Self::NoMatchingSignature { .. }
                | Self::AmbiguousCall { .. }
        )
    }
}
