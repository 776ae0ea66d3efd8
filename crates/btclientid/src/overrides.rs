use crate::{classify::ClientIdentification, peer_id::PeerId};

const UTORRENT: &str = "\u{00B5}Torrent";
const RAKSHASA: &str = "libTorrent (Rakshasa)";

/// Corrections applied after a successful Az-style lookup, in the order of
/// [`AzOverride::ALL`]. The first rule that applies decides the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AzOverride {
    /// Some clients use the ZipTorrent code but aren't ZipTorrent.
    FakeZipTorrent,
    /// BitTorrent 6.0 Beta identifies itself as µTorrent.
    MisreportedMainline,
    /// Rakshasa's libtorrent is nearly always running inside rTorrent.
    RakshasaRTorrent,
}

impl AzOverride {
    pub const ALL: [AzOverride; 3] = [
        AzOverride::FakeZipTorrent,
        AzOverride::MisreportedMainline,
        AzOverride::RakshasaRTorrent,
    ];

    pub fn apply(
        self,
        id: &PeerId,
        ident: &ClientIdentification,
    ) -> Option<ClientIdentification> {
        match self {
            AzOverride::FakeZipTorrent => {
                if ident.client.starts_with("ZipTorrent") && id.has_at(8, "bLAde") {
                    return Some(ClientIdentification {
                        client: format!("unknown [fake: {}]", ident.client),
                        version: ident.version.clone(),
                    });
                }
                None
            }
            AzOverride::MisreportedMainline => {
                if ident.client == UTORRENT && ident.version.as_deref() == Some("6.0 Beta") {
                    return Some(ClientIdentification::with_version("Mainline", "6.0 Beta"));
                }
                None
            }
            AzOverride::RakshasaRTorrent => {
                if ident.client.starts_with(RAKSHASA) {
                    return Some(ClientIdentification {
                        client: format!("{} / rTorrent*", ident.client),
                        version: ident.version.clone(),
                    });
                }
                None
            }
        }
    }
}

pub fn apply_az_overrides(id: &PeerId, ident: ClientIdentification) -> ClientIdentification {
    AzOverride::ALL
        .iter()
        .find_map(|rule| rule.apply(id, &ident))
        .unwrap_or(ident)
}
