/*!
Capability traits.

One trait per capability; the registry stores trait objects and never
depends on concrete mechanism implementations.
*/

pub mod client;
pub mod codec;
pub mod params;
pub mod server;

pub use client::{SaslClient, SaslClientFactory};
pub use codec::{CredentialCodec, ScramCredential};
pub use params::{ChannelBinding, ClientParams, ServerParams};
pub use server::{SaslServer, SaslServerFactory};
