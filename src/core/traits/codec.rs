/*!
Traits for SCRAM credential encoding.

Codecs translate between a stored representation and the parameters a
SCRAM server needs. Derivation of the keys themselves happens elsewhere.
*/

use crate::core::error::{AuthError, Error, Result};
use crate::core::mechanism::{Capability, Mechanism};

/// Stored SCRAM verifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScramCredential {
    /// Salt used when the password was hashed
    pub salt: Vec<u8>,
    /// PBKDF2 iteration count
    pub iteration_count: u32,
    /// `H(ClientKey)`
    pub stored_key: Vec<u8>,
    /// `HMAC(SaltedPassword, "Server Key")`
    pub server_key: Vec<u8>,
}

/// Trait for credential codecs
pub trait CredentialCodec: Send + Sync {
    /// Stable implementation name
    fn implementation(&self) -> &str;

    /// Encode a credential for storage
    fn encode(&self, mechanism: Mechanism, credential: &ScramCredential) -> Result<Vec<u8>>;

    /// Decode a stored credential
    fn decode(&self, mechanism: Mechanism, encoded: &[u8]) -> Result<ScramCredential>;

    /// Check that a credential fits the hash strength of `mechanism`
    fn check_shape(&self, mechanism: Mechanism, credential: &ScramCredential) -> Result<()> {
        let strength = mechanism
            .properties()
            .hash_strength
            .ok_or_else(|| Error::NoSuchMechanism {
                capability: Capability::CredentialCodec,
                mechanism: mechanism.to_string(),
            })?;
        let len = strength.digest_len();
        if credential.iteration_count == 0
            || credential.stored_key.len() != len
            || credential.server_key.len() != len
        {
            return crate::auth_err!(AuthError::InvalidCredential);
        }
        Ok(())
    }
}
