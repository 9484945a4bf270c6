/*!
Mechanism type definitions.

This module defines the closed set of mechanism identifiers, the
capabilities a factory can fulfil, and the static properties of each
mechanism.
*/

use std::fmt;
use std::str::FromStr;

use crate::core::constants::{names, names::scram, sizes};
use crate::core::error::{Error, Result};

/// Role a registered factory fulfils
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Creates client-side exchange instances
    ClientFactory,
    /// Creates server-side exchange instances
    ServerFactory,
    /// Encodes and decodes stored credentials
    CredentialCodec,
}

impl Capability {
    /// All capabilities in declaration order
    pub const ALL: [Capability; 3] = [
        Capability::ClientFactory,
        Capability::ServerFactory,
        Capability::CredentialCodec,
    ];

    /// Get the name of the capability as a string
    pub fn name(&self) -> &'static str {
        match self {
            Capability::ClientFactory => "ClientFactory",
            Capability::ServerFactory => "ServerFactory",
            Capability::CredentialCodec => "CredentialCodec",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hash function backing a SCRAM mechanism.
///
/// Variants are declared weakest first, so the derived ordering is the
/// strength ordering a negotiation layer can use to prefer the strongest
/// mutually supported mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashStrength {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashStrength {
    /// Get the name of the hash as a string
    pub fn name(&self) -> &'static str {
        match self {
            HashStrength::Sha1 => "SHA-1",
            HashStrength::Sha256 => "SHA-256",
            HashStrength::Sha384 => "SHA-384",
            HashStrength::Sha512 => "SHA-512",
        }
    }

    /// Digest output length in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            HashStrength::Sha1 => sizes::SHA1_DIGEST_BYTES,
            HashStrength::Sha256 => sizes::SHA256_DIGEST_BYTES,
            HashStrength::Sha384 => sizes::SHA384_DIGEST_BYTES,
            HashStrength::Sha512 => sizes::SHA512_DIGEST_BYTES,
        }
    }
}

/// Mechanism family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Anonymous,
    Plain,
    LocalUser,
    Scram,
}

/// Static properties of a mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MechanismProperties {
    /// Hash strength, `None` outside the SCRAM family
    pub hash_strength: Option<HashStrength>,
    /// Whether the mechanism may only run over a channel-bound transport
    pub requires_channel_binding: bool,
    /// Family the mechanism belongs to
    pub family: Family,
}

impl MechanismProperties {
    /// Whether a factory of the given capability makes sense for this mechanism.
    ///
    /// Credential encoding only applies to the unsuffixed SCRAM names.
    /// `Registry::build` rejects bindings for which this is false.
    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::ClientFactory | Capability::ServerFactory => true,
            Capability::CredentialCodec => {
                self.family == Family::Scram && !self.requires_channel_binding
            }
        }
    }
}

/// Supported SASL mechanisms, in catalog declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mechanism {
    Anonymous,
    Plain,
    JbossLocalUser,
    ScramSha1,
    ScramSha1Plus,
    ScramSha256,
    ScramSha256Plus,
    ScramSha384,
    ScramSha384Plus,
    ScramSha512,
    ScramSha512Plus,
}

impl Mechanism {
    /// Every mechanism in declaration order
    pub const ALL: [Mechanism; 11] = [
        Mechanism::Anonymous,
        Mechanism::Plain,
        Mechanism::JbossLocalUser,
        Mechanism::ScramSha1,
        Mechanism::ScramSha1Plus,
        Mechanism::ScramSha256,
        Mechanism::ScramSha256Plus,
        Mechanism::ScramSha384,
        Mechanism::ScramSha384Plus,
        Mechanism::ScramSha512,
        Mechanism::ScramSha512Plus,
    ];

    /// Get the wire name of the mechanism
    pub fn as_str(&self) -> &'static str {
        match self {
            Mechanism::Anonymous => names::ANONYMOUS,
            Mechanism::Plain => names::PLAIN,
            Mechanism::JbossLocalUser => names::JBOSS_LOCAL_USER,
            Mechanism::ScramSha1 => scram::SCRAM_SHA_1,
            Mechanism::ScramSha1Plus => scram::SCRAM_SHA_1_PLUS,
            Mechanism::ScramSha256 => scram::SCRAM_SHA_256,
            Mechanism::ScramSha256Plus => scram::SCRAM_SHA_256_PLUS,
            Mechanism::ScramSha384 => scram::SCRAM_SHA_384,
            Mechanism::ScramSha384Plus => scram::SCRAM_SHA_384_PLUS,
            Mechanism::ScramSha512 => scram::SCRAM_SHA_512,
            Mechanism::ScramSha512Plus => scram::SCRAM_SHA_512_PLUS,
        }
    }

    /// Static properties of the mechanism
    pub fn properties(&self) -> MechanismProperties {
        let (family, hash_strength) = match self {
            Mechanism::Anonymous => (Family::Anonymous, None),
            Mechanism::Plain => (Family::Plain, None),
            Mechanism::JbossLocalUser => (Family::LocalUser, None),
            Mechanism::ScramSha1 | Mechanism::ScramSha1Plus => {
                (Family::Scram, Some(HashStrength::Sha1))
            }
            Mechanism::ScramSha256 | Mechanism::ScramSha256Plus => {
                (Family::Scram, Some(HashStrength::Sha256))
            }
            Mechanism::ScramSha384 | Mechanism::ScramSha384Plus => {
                (Family::Scram, Some(HashStrength::Sha384))
            }
            Mechanism::ScramSha512 | Mechanism::ScramSha512Plus => {
                (Family::Scram, Some(HashStrength::Sha512))
            }
        };
        MechanismProperties {
            hash_strength,
            requires_channel_binding: self.is_plus(),
            family,
        }
    }

    /// Whether this is a channel-binding (`-PLUS`) variant
    pub fn is_plus(&self) -> bool {
        matches!(
            self,
            Mechanism::ScramSha1Plus
                | Mechanism::ScramSha256Plus
                | Mechanism::ScramSha384Plus
                | Mechanism::ScramSha512Plus
        )
    }

    /// The channel-binding variant of an unsuffixed SCRAM mechanism
    pub fn plus_variant(&self) -> Option<Mechanism> {
        match self {
            Mechanism::ScramSha1 => Some(Mechanism::ScramSha1Plus),
            Mechanism::ScramSha256 => Some(Mechanism::ScramSha256Plus),
            Mechanism::ScramSha384 => Some(Mechanism::ScramSha384Plus),
            Mechanism::ScramSha512 => Some(Mechanism::ScramSha512Plus),
            _ => None,
        }
    }

    /// The unsuffixed counterpart of a `-PLUS` mechanism
    pub fn base_variant(&self) -> Mechanism {
        match self {
            Mechanism::ScramSha1Plus => Mechanism::ScramSha1,
            Mechanism::ScramSha256Plus => Mechanism::ScramSha256,
            Mechanism::ScramSha384Plus => Mechanism::ScramSha384,
            Mechanism::ScramSha512Plus => Mechanism::ScramSha512,
            other => *other,
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mechanism {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        super::catalog::lookup_name(name)
    }
}

impl TryFrom<&str> for Mechanism {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        name.parse()
    }
}
