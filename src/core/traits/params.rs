/*!
Parameters handed to factories when an exchange is created.
*/

/// Channel binding data obtained from the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBinding {
    /// Binding type, e.g. `tls-unique` or `tls-server-end-point`
    pub kind: String,
    /// Raw binding data
    pub data: Vec<u8>,
}

impl ChannelBinding {
    pub fn new(kind: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: kind.into(),
            data: data.into(),
        }
    }
}

/// Client side exchange parameters
#[derive(Debug, Clone, Default)]
pub struct ClientParams {
    /// Identity to act as, if different from the authentication identity
    pub authorization_id: Option<String>,
    /// Protocol name, e.g. `remote` or `imap`
    pub protocol: String,
    /// Fully qualified server name
    pub server_name: String,
    /// Channel binding, when the transport provides one
    pub channel_binding: Option<ChannelBinding>,
}

impl ClientParams {
    pub fn new(protocol: impl Into<String>, server_name: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            server_name: server_name.into(),
            ..Self::default()
        }
    }

    pub fn with_authorization_id(mut self, authorization_id: impl Into<String>) -> Self {
        self.authorization_id = Some(authorization_id.into());
        self
    }

    pub fn with_channel_binding(mut self, binding: ChannelBinding) -> Self {
        self.channel_binding = Some(binding);
        self
    }
}

/// Server side exchange parameters
#[derive(Debug, Clone, Default)]
pub struct ServerParams {
    /// Protocol name
    pub protocol: String,
    /// Fully qualified server name
    pub server_name: String,
    /// Channel binding, when the transport provides one
    pub channel_binding: Option<ChannelBinding>,
}

impl ServerParams {
    pub fn new(protocol: impl Into<String>, server_name: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            server_name: server_name.into(),
            channel_binding: None,
        }
    }

    pub fn with_channel_binding(mut self, binding: ChannelBinding) -> Self {
        self.channel_binding = Some(binding);
        self
    }
}
