/*!
Traits for server side mechanism factories.
*/

use crate::core::error::Result;
use crate::core::mechanism::Mechanism;
use crate::core::traits::params::ServerParams;

/// Stateful server side of one authentication exchange
pub trait SaslServer: Send {
    /// Mechanism this exchange runs
    fn mechanism(&self) -> Mechanism;

    /// Verify a client response and produce the next challenge
    fn evaluate_response(&mut self, response: &[u8]) -> Result<Vec<u8>>;

    /// Whether the exchange has finished
    fn is_complete(&self) -> bool;

    /// Authorized identity, available once the exchange completed
    fn authorization_id(&self) -> Option<&str>;
}

/// Trait for factories producing server exchanges
pub trait SaslServerFactory: Send + Sync {
    /// Stable implementation name
    fn implementation(&self) -> &str;

    /// Create a server exchange for `mechanism`
    fn create_server(
        &self,
        mechanism: Mechanism,
        params: &ServerParams,
    ) -> Result<Box<dyn SaslServer>>;
}
