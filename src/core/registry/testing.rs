//! Fake factories for unit tests.

use std::sync::Arc;

use crate::core::error::{AuthError, Result};
use crate::core::mechanism::Mechanism;
use crate::core::traits::{
    ClientParams, CredentialCodec, SaslClient, SaslClientFactory, SaslServer, SaslServerFactory,
    ScramCredential, ServerParams,
};

pub struct FakeExchange {
    mechanism: Mechanism,
    complete: bool,
}

impl SaslClient for FakeExchange {
    fn mechanism(&self) -> Mechanism {
        self.mechanism
    }

    fn has_initial_response(&self) -> bool {
        false
    }

    fn evaluate_challenge(&mut self, _challenge: &[u8]) -> Result<Vec<u8>> {
        if self.complete {
            return crate::auth_err!(AuthError::AlreadyComplete);
        }
        self.complete = true;
        Ok(Vec::new())
    }

    fn is_complete(&self) -> bool {
        self.complete
    }
}

impl SaslServer for FakeExchange {
    fn mechanism(&self) -> Mechanism {
        self.mechanism
    }

    fn evaluate_response(&mut self, _response: &[u8]) -> Result<Vec<u8>> {
        self.complete = true;
        Ok(Vec::new())
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn authorization_id(&self) -> Option<&str> {
        None
    }
}

pub struct FakeClientFactory(pub &'static str);

impl FakeClientFactory {
    pub fn shared(name: &'static str) -> Arc<dyn SaslClientFactory> {
        Arc::new(FakeClientFactory(name))
    }
}

impl SaslClientFactory for FakeClientFactory {
    fn implementation(&self) -> &str {
        self.0
    }

    fn create_client(
        &self,
        mechanism: Mechanism,
        _params: &ClientParams,
    ) -> Result<Box<dyn SaslClient>> {
        Ok(Box::new(FakeExchange {
            mechanism,
            complete: false,
        }))
    }
}

pub struct FakeServerFactory(pub &'static str);

impl FakeServerFactory {
    pub fn shared(name: &'static str) -> Arc<dyn SaslServerFactory> {
        Arc::new(FakeServerFactory(name))
    }
}

impl SaslServerFactory for FakeServerFactory {
    fn implementation(&self) -> &str {
        self.0
    }

    fn create_server(
        &self,
        mechanism: Mechanism,
        _params: &ServerParams,
    ) -> Result<Box<dyn SaslServer>> {
        Ok(Box::new(FakeExchange {
            mechanism,
            complete: false,
        }))
    }
}

/// Codec storing `iteration_count || salt_len || salt || stored_key || server_key`
pub struct FakeCodec(pub &'static str);

impl FakeCodec {
    pub fn shared(name: &'static str) -> Arc<dyn CredentialCodec> {
        Arc::new(FakeCodec(name))
    }
}

impl CredentialCodec for FakeCodec {
    fn implementation(&self) -> &str {
        self.0
    }

    fn encode(&self, mechanism: Mechanism, credential: &ScramCredential) -> Result<Vec<u8>> {
        self.check_shape(mechanism, credential)?;
        let mut out = credential.iteration_count.to_be_bytes().to_vec();
        out.push(credential.salt.len() as u8);
        out.extend_from_slice(&credential.salt);
        out.extend_from_slice(&credential.stored_key);
        out.extend_from_slice(&credential.server_key);
        Ok(out)
    }

    fn decode(&self, mechanism: Mechanism, encoded: &[u8]) -> Result<ScramCredential> {
        let len = mechanism
            .properties()
            .hash_strength
            .map(|h| h.digest_len())
            .unwrap_or(0);
        if encoded.len() < 5 {
            return crate::auth_err!(AuthError::MalformedMessage);
        }
        let iteration_count = u32::from_be_bytes([encoded[0], encoded[1], encoded[2], encoded[3]]);
        let salt_len = encoded[4] as usize;
        let rest = &encoded[5..];
        if rest.len() != salt_len + 2 * len {
            return crate::auth_err!(AuthError::MalformedMessage);
        }
        let credential = ScramCredential {
            salt: rest[..salt_len].to_vec(),
            iteration_count,
            stored_key: rest[salt_len..salt_len + len].to_vec(),
            server_key: rest[salt_len + len..].to_vec(),
        };
        self.check_shape(mechanism, &credential)?;
        Ok(credential)
    }
}
