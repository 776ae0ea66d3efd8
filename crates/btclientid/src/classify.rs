use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    decoders::{decode_bitcomet, decode_bitspirit, identify_awkward_client},
    overrides::apply_az_overrides,
    peer_id::PeerId,
    registry::ClientRegistry,
    style::{is_az_style, is_mainline_style, is_possible_spoof, is_shadow_style},
};

pub const UNKNOWN: &str = "unknown";

/// The result of classifying a peer id. `version` is `None` when the client
/// was recognized but its version couldn't be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientIdentification {
    pub client: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ClientIdentification {
    pub fn new(client: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            version: None,
        }
    }

    pub fn with_version(client: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            version: Some(version.into()),
        }
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN)
    }

    pub fn is_unknown(&self) -> bool {
        self.client == UNKNOWN
    }
}

impl std::fmt::Display for ClientIdentification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{} {}", self.client, v),
            None => write!(f, "{}", self.client),
        }
    }
}

/// Classifies peer ids against a [`ClientRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'r> {
    registry: &'r ClientRegistry,
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'r> Classifier<'r> {
    pub fn new(registry: &'r ClientRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r ClientRegistry {
        self.registry
    }

    pub fn classify(&self, id: &PeerId) -> ClientIdentification {
        let r = self.classify_inner(id);
        if r.is_unknown() {
            debug!(peer_id = %id, "unrecognized peer id");
        }
        r
    }

    fn classify_inner(&self, id: &PeerId) -> ClientIdentification {
        if is_possible_spoof(id) {
            trace!(peer_id = %id, "spoof marker");
            return decode_bitspirit(id)
                .or_else(|| decode_bitcomet(id))
                .unwrap_or_else(|| ClientIdentification::new("BitSpirit?"));
        }

        if is_az_style(id) {
            if let Some(r) = self.az_style(id) {
                trace!(peer_id = %id, client = %r, "az-style");
                return r;
            }
        }

        // Shadow and mainline style version numbers aren't decoded.
        if is_shadow_style(id) {
            if let Some(client) = self.registry.shadow_client(&id.substring(0, 1)) {
                trace!(peer_id = %id, client, "shadow-style");
                return ClientIdentification::new(client);
            }
        }

        if is_mainline_style(id) {
            if let Some(client) = self.registry.mainline_client(&id.substring(0, 1)) {
                trace!(peer_id = %id, client, "mainline-style");
                return ClientIdentification::new(client);
            }
        }

        // Some clients using these encodings don't match any style.
        if let Some(r) = decode_bitspirit(id).or_else(|| decode_bitcomet(id)) {
            trace!(peer_id = %id, client = %r, "binary encoded");
            return r;
        }

        if let Some(simple) = self.registry.find_simple(id) {
            trace!(peer_id = %id, client = %simple.client, "simple");
            return ClientIdentification {
                client: simple.client.clone(),
                version: simple.version.clone(),
            };
        }

        if let Some(r) = identify_awkward_client(id) {
            trace!(peer_id = %id, client = %r, "awkward");
            return r;
        }

        ClientIdentification::unknown()
    }

    fn az_style(&self, id: &PeerId) -> Option<ClientIdentification> {
        let client = self.registry.az_client(&id.substring(1, 3))?;
        // A short id still gets literal versions, positional ones need the field.
        let field = id.chars_in(3, 7).unwrap_or_default();
        let version = self
            .registry
            .az_version_format(client)
            .and_then(|format| format.format(&field));
        let ident = ClientIdentification {
            client: client.to_owned(),
            version,
        };
        Some(apply_az_overrides(id, ident))
    }
}

impl Classifier<'static> {
    pub fn builtin() -> Self {
        Self::new(ClientRegistry::builtin())
    }
}

/// Classify using the built-in client table.
pub fn classify(id: &PeerId) -> ClientIdentification {
    Classifier::builtin().classify(id)
}
