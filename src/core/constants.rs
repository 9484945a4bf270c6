/*!
Constants for the SASL mechanism registry.

This module contains the provider identity and the verbatim mechanism
name strings exchanged with peers.
*/

/// Crate version, reported through the provider info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default provider name
pub const PROVIDER_NAME: &str = "sasl-registry";

/// Prefix of the provider's human readable info string
pub const PROVIDER_INFO_PREFIX: &str = "SASL Mechanism Provider";

/// Suffix marking a channel-binding variant
pub const PLUS_SUFFIX: &str = "-PLUS";

/// Mechanism names as they appear on the wire
pub mod names {
    /// Anonymous access (RFC 4505)
    pub const ANONYMOUS: &str = "ANONYMOUS";

    /// Clear-text user/password (RFC 4616)
    pub const PLAIN: &str = "PLAIN";

    /// Local trust shortcut for same-host clients
    pub const JBOSS_LOCAL_USER: &str = "JBOSS-LOCAL-USER";

    /// Salted challenge response mechanisms (RFC 5802, RFC 7677)
    pub mod scram {
        pub const SCRAM_SHA_1: &str = "SCRAM-SHA-1";
        pub const SCRAM_SHA_1_PLUS: &str = "SCRAM-SHA-1-PLUS";
        pub const SCRAM_SHA_256: &str = "SCRAM-SHA-256";
        pub const SCRAM_SHA_256_PLUS: &str = "SCRAM-SHA-256-PLUS";
        pub const SCRAM_SHA_384: &str = "SCRAM-SHA-384";
        pub const SCRAM_SHA_384_PLUS: &str = "SCRAM-SHA-384-PLUS";
        pub const SCRAM_SHA_512: &str = "SCRAM-SHA-512";
        pub const SCRAM_SHA_512_PLUS: &str = "SCRAM-SHA-512-PLUS";
    }
}

/// Digest output sizes in bytes
pub mod sizes {
    /// SHA-1 digest length
    pub const SHA1_DIGEST_BYTES: usize = 20;

    /// SHA-256 digest length
    pub const SHA256_DIGEST_BYTES: usize = 32;

    /// SHA-384 digest length
    pub const SHA384_DIGEST_BYTES: usize = 48;

    /// SHA-512 digest length
    pub const SHA512_DIGEST_BYTES: usize = 64;
}
