/*!
Traits for client side mechanism factories.
*/

use crate::core::error::Result;
use crate::core::mechanism::Mechanism;
use crate::core::traits::params::ClientParams;

/// Stateful client side of one authentication exchange
pub trait SaslClient: Send {
    /// Mechanism this exchange runs
    fn mechanism(&self) -> Mechanism;

    /// Whether the client sends data before the first challenge
    fn has_initial_response(&self) -> bool;

    /// Produce the response to a server challenge
    fn evaluate_challenge(&mut self, challenge: &[u8]) -> Result<Vec<u8>>;

    /// Whether the exchange has finished
    fn is_complete(&self) -> bool;
}

/// Trait for factories producing client exchanges
pub trait SaslClientFactory: Send + Sync {
    /// Stable implementation name
    fn implementation(&self) -> &str;

    /// Create a client exchange for `mechanism`
    fn create_client(
        &self,
        mechanism: Mechanism,
        params: &ClientParams,
    ) -> Result<Box<dyn SaslClient>>;
}
