/*!
Error handling for the SASL mechanism registry.

Every failure is reported to the immediate caller as a distinct variant so
that a session layer can tell "this mechanism does not exist" apart from
"this deployment does not offer it".
*/

use thiserror::Error;

use crate::core::mechanism::{Capability, Mechanism};

/// Result type for the registry
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Name outside the mechanism catalog
    #[error("Unknown mechanism: {0}")]
    UnknownMechanism(String),

    /// Two factories bound to the same (capability, mechanism) pair
    #[error("Duplicate {capability} binding for {mechanism}: {first} conflicts with {second}")]
    DuplicateBinding {
        capability: Capability,
        mechanism: Mechanism,
        first: String,
        second: String,
    },

    /// Valid or invalid name that this registry has no binding for
    #[error("Mechanism not supported: no {capability} registered for {mechanism}")]
    NoSuchMechanism {
        capability: Capability,
        mechanism: String,
    },

    /// Binding declared one capability but carried a factory of another kind
    #[error("Factory {implementation} is a {actual}, but was bound as a {expected}")]
    CapabilityMismatch {
        expected: Capability,
        actual: Capability,
        implementation: String,
    },

    /// Capability that makes no sense for the mechanism, e.g. a codec for a -PLUS name
    #[error("{capability} does not apply to {mechanism}")]
    NotApplicable {
        capability: Capability,
        mechanism: Mechanism,
    },

    /// A -PLUS mechanism was requested without channel binding data
    #[error("Channel binding required for {0}")]
    ChannelBindingRequired(Mechanism),

    /// Invalid provider configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Authentication exchange failure (limited details for security)
    #[error("Authentication failed")]
    Authentication(#[source] AuthError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures raised by mechanism implementations during an exchange
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Peer credentials were rejected
    #[error("Credentials rejected")]
    Rejected,

    /// Peer message could not be parsed
    #[error("Malformed message")]
    MalformedMessage,

    /// Message received after the exchange finished
    #[error("Exchange already complete")]
    AlreadyComplete,

    /// Stored credential does not fit the mechanism
    #[error("Invalid credential")]
    InvalidCredential,
}

impl Error {
    /// Returns `true` if a name outside the catalog was referenced.
    #[inline]
    pub fn is_unknown_mechanism(&self) -> bool {
        matches!(self, Error::UnknownMechanism(_))
    }

    /// Returns `true` if the requested mechanism is not offered by this registry.
    #[inline]
    pub fn is_not_supported(&self) -> bool {
        matches!(self, Error::NoSuchMechanism { .. })
    }

    /// Returns `true` if a build failed because of conflicting bindings.
    #[inline]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::DuplicateBinding { .. })
    }
}

/// Create a configuration error
#[macro_export]
macro_rules! config_err {
    ($msg:expr) => {
        Err($crate::error::Error::Config($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::error::Error::Config(format!($fmt, $($arg)*)))
    };
}

/// Create an authentication error
#[macro_export]
macro_rules! auth_err {
    ($err:expr) => {
        Err($crate::error::Error::Authentication($err))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownMechanism("SCRAM-SHA-2048".to_string());
        assert_eq!(format!("{}", err), "Unknown mechanism: SCRAM-SHA-2048");

        let err = Error::NoSuchMechanism {
            capability: Capability::ClientFactory,
            mechanism: "PLAIN".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Mechanism not supported: no ClientFactory registered for PLAIN"
        );

        let err = Error::Authentication(AuthError::Rejected);
        assert_eq!(format!("{}", err), "Authentication failed");
    }

    #[test]
    fn test_duplicate_names_both_factories() {
        let err = Error::DuplicateBinding {
            capability: Capability::ServerFactory,
            mechanism: Mechanism::ScramSha256,
            first: "fx".to_string(),
            second: "fy".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("fx"));
        assert!(text.contains("fy"));
        assert!(text.contains("SCRAM-SHA-256"));
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_predicates() {
        assert!(Error::UnknownMechanism("X".into()).is_unknown_mechanism());
        assert!(!Error::UnknownMechanism("X".into()).is_not_supported());
        assert!(
            Error::NoSuchMechanism {
                capability: Capability::CredentialCodec,
                mechanism: "PLAIN".into(),
            }
            .is_not_supported()
        );
    }

    #[test]
    fn test_macros() {
        let res: Result<()> = config_err!("bad {}", 1);
        assert_eq!(res, Err(Error::Config("bad 1".into())));

        let res: Result<()> = auth_err!(AuthError::MalformedMessage);
        assert!(matches!(res, Err(Error::Authentication(AuthError::MalformedMessage))));
    }
}
