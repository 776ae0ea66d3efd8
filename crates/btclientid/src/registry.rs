use std::{collections::HashMap, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::{
    builtin,
    error::{Error, Result},
    peer_id::PeerId,
    version::VersionFormat,
};

/// Where the literal id of a [`SimpleClient`] has to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    At(usize),
    Anywhere,
}

impl Default for Position {
    fn default() -> Self {
        Position::At(0)
    }
}

/// A client recognized purely by a literal substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleClient {
    pub id: String,
    pub client: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub position: Position,
}

impl SimpleClient {
    pub fn matches(&self, peer_id: &PeerId) -> bool {
        match self.position {
            Position::At(pos) => peer_id.has_at(pos, &self.id),
            Position::Anywhere => peer_id.contains(&self.id),
        }
    }
}

/// One registration call. Deserializes from e.g.
/// `{"kind": "az", "code": "AZ", "client": "Vuze", "version": "four_digits"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClientRegistration {
    Az {
        code: String,
        client: String,
        #[serde(default)]
        version: Option<VersionFormat>,
    },
    Shadow {
        code: String,
        client: String,
        #[serde(default)]
        version: Option<VersionFormat>,
    },
    Mainline {
        code: String,
        client: String,
    },
    Simple(SimpleClient),
}

/// Immutable client tables used by the classifier.
///
/// Simple clients are kept in registration order and the first match wins,
/// so a specific id (`-UT170-`) has to be registered before a broader one
/// (`-UT`) that would otherwise shadow it.
#[derive(Debug, Clone, Default)]
pub struct ClientRegistry {
    az: HashMap<String, String>,
    az_versions: HashMap<String, VersionFormat>,
    shadow: HashMap<String, String>,
    shadow_versions: HashMap<String, VersionFormat>,
    mainline: HashMap<String, String>,
    simple: Vec<SimpleClient>,
}

static BUILTIN: LazyLock<ClientRegistry> = LazyLock::new(|| {
    ClientRegistryBuilder::with_builtin()
        .and_then(|b| b.build())
        .expect("builtin client table is valid")
});

impl ClientRegistry {
    /// The registry with every built-in client, built once per process.
    pub fn builtin() -> &'static ClientRegistry {
        &BUILTIN
    }

    pub fn builder() -> ClientRegistryBuilder {
        ClientRegistryBuilder::new()
    }

    pub fn az_client(&self, code: &str) -> Option<&str> {
        self.az.get(code).map(|s| s.as_str())
    }

    pub fn az_version_format(&self, client: &str) -> Option<&VersionFormat> {
        self.az_versions.get(client)
    }

    pub fn shadow_client(&self, code: &str) -> Option<&str> {
        self.shadow.get(code).map(|s| s.as_str())
    }

    pub fn shadow_version_format(&self, client: &str) -> Option<&VersionFormat> {
        self.shadow_versions.get(client)
    }

    pub fn mainline_client(&self, code: &str) -> Option<&str> {
        self.mainline.get(code).map(|s| s.as_str())
    }

    pub fn simple_clients(&self) -> &[SimpleClient] {
        &self.simple
    }

    /// First simple client, in registration order, matching the peer id.
    pub fn find_simple(&self, peer_id: &PeerId) -> Option<&SimpleClient> {
        self.simple.iter().find(|c| c.matches(peer_id))
    }
}

#[derive(Debug, Default)]
pub struct ClientRegistryBuilder {
    registry: ClientRegistry,
}

fn check_code(style: &'static str, code: &str, expected: usize) -> Result<()> {
    if code.encode_utf16().count() != expected {
        return Err(Error::InvalidStyleCode {
            style,
            code: code.to_owned(),
            expected,
        });
    }
    Ok(())
}

fn check_name(code: &str, client: &str) -> Result<()> {
    if client.is_empty() {
        return Err(Error::EmptyClientName(code.to_owned()));
    }
    Ok(())
}

fn check_version(client: &str, version: Option<&VersionFormat>) -> Result<()> {
    match version {
        Some(VersionFormat::Literal(s)) if s.is_empty() => {
            Err(Error::EmptyVersion(client.to_owned()))
        }
        _ => Ok(()),
    }
}

impl ClientRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder pre-filled with the built-in client table.
    pub fn with_builtin() -> Result<Self> {
        let mut b = Self::new();
        builtin::register(&mut b)?;
        Ok(b)
    }

    pub fn configure(&mut self, reg: ClientRegistration) -> Result<&mut Self> {
        let r = &mut self.registry;
        match reg {
            ClientRegistration::Az {
                code,
                client,
                version,
            } => {
                check_code("az-style", &code, 2)?;
                check_name(&code, &client)?;
                check_version(&client, version.as_ref())?;
                // Versions are keyed by client name, the last registration wins.
                r.az_versions.insert(
                    client.clone(),
                    version.unwrap_or(VersionFormat::FourDigits),
                );
                r.az.insert(code, client);
            }
            ClientRegistration::Shadow {
                code,
                client,
                version,
            } => {
                check_code("shadow-style", &code, 1)?;
                check_name(&code, &client)?;
                check_version(&client, version.as_ref())?;
                r.shadow_versions.insert(
                    client.clone(),
                    version.unwrap_or(VersionFormat::ThreeDigits),
                );
                r.shadow.insert(code, client);
            }
            ClientRegistration::Mainline { code, client } => {
                check_code("mainline-style", &code, 1)?;
                check_name(&code, &client)?;
                r.mainline.insert(code, client);
            }
            ClientRegistration::Simple(simple) => {
                if simple.id.is_empty() {
                    return Err(Error::EmptySimpleId(simple.client));
                }
                check_name(&simple.id, &simple.client)?;
                if simple.version.as_deref() == Some("") {
                    return Err(Error::EmptyVersion(simple.client));
                }
                r.simple.push(simple);
            }
        }
        Ok(self)
    }

    pub fn configure_all(
        &mut self,
        regs: impl IntoIterator<Item = ClientRegistration>,
    ) -> Result<&mut Self> {
        for reg in regs {
            self.configure(reg)?;
        }
        Ok(self)
    }

    pub fn az_style(
        &mut self,
        code: &str,
        client: &str,
        version: Option<VersionFormat>,
    ) -> Result<&mut Self> {
        self.configure(ClientRegistration::Az {
            code: code.to_owned(),
            client: client.to_owned(),
            version,
        })
    }

    pub fn shadow_style(
        &mut self,
        code: &str,
        client: &str,
        version: Option<VersionFormat>,
    ) -> Result<&mut Self> {
        self.configure(ClientRegistration::Shadow {
            code: code.to_owned(),
            client: client.to_owned(),
            version,
        })
    }

    pub fn mainline_style(&mut self, code: &str, client: &str) -> Result<&mut Self> {
        self.configure(ClientRegistration::Mainline {
            code: code.to_owned(),
            client: client.to_owned(),
        })
    }

    pub fn simple(
        &mut self,
        client: &str,
        version: Option<&str>,
        id: &str,
        position: Position,
    ) -> Result<&mut Self> {
        self.configure(ClientRegistration::Simple(SimpleClient {
            id: id.to_owned(),
            client: client.to_owned(),
            version: version.map(|v| v.to_owned()),
            position,
        }))
    }

    pub fn build(self) -> Result<ClientRegistry> {
        Ok(self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length_is_checked() {
        let mut b = ClientRegistryBuilder::new();
        assert!(matches!(
            b.az_style("AZX", "Vuze", None),
            Err(Error::InvalidStyleCode { expected: 2, .. })
        ));
        assert!(matches!(
            b.shadow_style("TT", "BitTornado", None),
            Err(Error::InvalidStyleCode { expected: 1, .. })
        ));
        assert!(matches!(
            b.mainline_style("", "Mainline"),
            Err(Error::InvalidStyleCode { expected: 1, .. })
        ));
        assert!(b.az_style("\u{00B5}T", "Odd", None).is_ok());
    }

    #[test]
    fn test_empty_values_are_rejected() {
        let mut b = ClientRegistryBuilder::new();
        assert!(matches!(
            b.az_style("AZ", "", None),
            Err(Error::EmptyClientName(_))
        ));
        assert!(matches!(
            b.az_style("AZ", "Vuze", Some(VersionFormat::literal(""))),
            Err(Error::EmptyVersion(_))
        ));
        assert!(matches!(
            b.simple("Foo", None, "", Position::default()),
            Err(Error::EmptySimpleId(_))
        ));
        assert!(matches!(
            b.simple("Foo", Some(""), "FOO", Position::default()),
            Err(Error::EmptyVersion(_))
        ));
    }

    #[test]
    fn test_version_format_is_keyed_by_client_name() {
        let mut b = ClientRegistryBuilder::new();
        b.az_style("A~", "Ares", Some(VersionFormat::ThreeDigits))
            .unwrap()
            .az_style("AR", "Ares", None)
            .unwrap();
        let r = b.build().unwrap();
        assert_eq!(r.az_client("A~"), Some("Ares"));
        assert_eq!(r.az_version_format("Ares"), Some(&VersionFormat::FourDigits));
    }

    #[test]
    fn test_simple_clients_first_match_wins() {
        let mut b = ClientRegistryBuilder::new();
        b.simple("\u{00B5}Torrent", Some("1.7.0 RC"), "-UT170-", Position::default())
            .unwrap()
            .simple("\u{00B5}Torrent", None, "-UT", Position::default())
            .unwrap();
        let r = b.build().unwrap();

        let found = r.find_simple(&PeerId::from_text("-UT170-abcdefghijklm")).unwrap();
        assert_eq!(found.version.as_deref(), Some("1.7.0 RC"));

        let found = r.find_simple(&PeerId::from_text("-UT3550abcdefghijklm")).unwrap();
        assert_eq!(found.version, None);
    }

    #[test]
    fn test_simple_client_positions() {
        let at = SimpleClient {
            id: "BG".into(),
            client: "BTGetit".into(),
            version: None,
            position: Position::At(10),
        };
        assert!(at.matches(&PeerId::from_text("0123456789BGxxxxxxxx")));
        assert!(!at.matches(&PeerId::from_text("BG3456789012xxxxxxxx")));

        let anywhere = SimpleClient {
            position: Position::Anywhere,
            ..at
        };
        assert!(anywhere.matches(&PeerId::from_text("0123BG6789xxxxxxxxxx")));
    }

    #[test]
    fn test_registrations_from_json() {
        let regs: Vec<ClientRegistration> = serde_json::from_str(
            r#"[
                {"kind": "az", "code": "rQ", "client": "rqbit", "version": "four_digits"},
                {"kind": "shadow", "code": "X", "client": "Xylo"},
                {"kind": "mainline", "code": "N", "client": "Newline"},
                {"kind": "simple", "id": "HELLO", "client": "Hello", "position": {"at": 2}},
                {"kind": "simple", "id": "WORLD", "client": "World", "version": "1.0", "position": "anywhere"}
            ]"#,
        )
        .unwrap();
        let mut b = ClientRegistryBuilder::new();
        b.configure_all(regs).unwrap();
        let r = b.build().unwrap();

        assert_eq!(r.az_client("rQ"), Some("rqbit"));
        assert_eq!(r.shadow_client("X"), Some("Xylo"));
        assert_eq!(
            r.shadow_version_format("Xylo"),
            Some(&VersionFormat::ThreeDigits)
        );
        assert_eq!(r.mainline_client("N"), Some("Newline"));
        assert_eq!(r.simple_clients().len(), 2);
        assert_eq!(r.simple_clients()[0].position, Position::At(2));
        assert_eq!(r.simple_clients()[1].position, Position::Anywhere);
    }

    #[test]
    fn test_builtin_registry() {
        let r = ClientRegistry::builtin();
        assert_eq!(r.az_client("AZ"), Some("Vuze"));
        assert_eq!(r.shadow_client("T"), Some("BitTornado"));
        assert_eq!(r.mainline_client("M"), Some("Mainline"));
        assert_eq!(r.simple_clients()[0].id, "-UT170-");
        assert_eq!(r.simple_clients().last().map(|c| c.id.as_str()), Some("-UT"));
    }
}
