//! Identify the bittorrent client behind a peer id.
//!
//! ```
//! use btclientid::{classify, PeerId};
//!
//! let r = classify(&PeerId::from_text("-AZ2060-123456789012"));
//! assert_eq!(r.client, "Vuze");
//! assert_eq!(r.version.as_deref(), Some("2.0.6.0"));
//! ```

pub mod byte_codec;
mod builtin;
pub mod classify;
pub mod decoders;
pub mod error;
pub mod overrides;
pub mod peer_id;
pub mod registry;
pub mod style;
pub mod version;

pub use classify::{Classifier, ClientIdentification, classify};
pub use error::{Error, Result};
pub use peer_id::PeerId;
pub use registry::{
    ClientRegistration, ClientRegistry, ClientRegistryBuilder, Position, SimpleClient,
};
pub use version::VersionFormat;
