//! The built-in client table.

use crate::{
    error::Result,
    registry::{ClientRegistryBuilder, Position},
    version::VersionFormat::{self, *},
};

const KTORRENT_STYLE: VersionFormat = VersionFormat::literal("1.2.3=[RD].4");
const THREE_ALPHANUMERIC_DIGITS: VersionFormat = VersionFormat::literal("2.33.4");

const AZ_STYLE: &[(&str, &str, Option<VersionFormat>)] = &[
    ("A~", "Ares", Some(ThreeDigits)),
    ("AG", "Ares", Some(ThreeDigits)),
    ("AN", "Ares", Some(FourDigits)),
    // Ares is more likely than ArcticTorrent
    ("AR", "Ares", None),
    ("AV", "Avicora", None),
    ("AX", "BitPump", Some(TwoMajTwoMin)),
    ("AT", "Artemis", None),
    ("AZ", "Vuze", Some(FourDigits)),
    ("BB", "BitBuddy", Some(VersionFormat::literal("1.234"))),
    ("BC", "BitComet", Some(SkipFirstOneMajTwoMin)),
    ("BE", "BitTorrent SDK", None),
    ("BF", "BitFlu", Some(NoVersion)),
    ("BG", "BTG", Some(FourDigits)),
    ("bk", "BitKitten (libtorrent)", None),
    ("BR", "BitRocket", Some(VersionFormat::literal("1.2(34)"))),
    ("BS", "BTSlave", None),
    ("BT", "BitTorrent", Some(ThreeDigitsPlusMnemonic)),
    ("BW", "BitWombat", None),
    ("BX", "BittorrentX", None),
    ("CB", "Shareaza Plus", None),
    ("CD", "Enhanced CTorrent", Some(TwoMajTwoMin)),
    ("CT", "CTorrent", Some(VersionFormat::literal("1.2.34"))),
    ("DP", "Propogate Data Client", None),
    ("DE", "Deluge", Some(Deluge)),
    ("EB", "EBit", None),
    ("ES", "Electric Sheep", Some(ThreeDigits)),
    ("FC", "FileCroc", None),
    ("FG", "FlashGet", Some(SkipFirstOneMajTwoMin)),
    ("FT", "FoxTorrent/RedSwoosh", None),
    ("GR", "GetRight", Some(VersionFormat::literal("1.2"))),
    ("GS", "GSTorrent", None),
    ("HL", "Halite", Some(ThreeDigits)),
    ("HN", "Hydranode", None),
    ("KG", "KGet", None),
    ("KT", "KTorrent", Some(KTORRENT_STYLE)),
    ("LC", "LeechCraft", None),
    ("LH", "LH-ABC", None),
    ("LK", "linkage", Some(ThreeDigits)),
    ("LP", "Lphant", Some(TwoMajTwoMin)),
    ("LT", "libtorrent (Rasterbar)", Some(THREE_ALPHANUMERIC_DIGITS)),
    ("lt", "libTorrent (Rakshasa)", Some(THREE_ALPHANUMERIC_DIGITS)),
    // "0001" after LW is the BT protocol revision, not the client version.
    ("LW", "LimeWire", Some(NoVersion)),
    ("MO", "MonoTorrent", None),
    ("MP", "MooPolice", Some(ThreeDigits)),
    ("MR", "Miro", None),
    ("MT", "MoonlightTorrent", None),
    ("NE", "BT Next Evolution", Some(ThreeDigits)),
    ("NX", "Net Transport", None),
    ("OS", "OneSwarm", Some(FourDigits)),
    ("OT", "OmegaTorrent", None),
    ("PC", "CacheLogic", Some(VersionFormat::literal("12.3-4"))),
    ("PT", "Popcorn Time", None),
    ("PD", "Pando", None),
    ("PE", "PeerProject", None),
    ("pX", "pHoeniX", None),
    ("qB", "qBittorrent", Some(Deluge)),
    ("QD", "qqdownload", None),
    ("RT", "Retriever", None),
    ("RZ", "RezTorrent", None),
    ("S~", "Shareaza alpha/beta", None),
    ("SB", "SwiftBit", None),
    // Known in English as "Thunderbolt".
    ("SD", "\u{8FC5}\u{96F7}\u{5728}\u{7EBF} (Xunlei)", None),
    ("SG", "GS Torrent", Some(FourDigits)),
    ("SN", "ShareNET", None),
    // >= 3.6
    ("SP", "BitSpirit", Some(ThreeDigits)),
    ("SS", "SwarmScope", None),
    ("ST", "SymTorrent", Some(VersionFormat::literal("2.34"))),
    ("st", "SharkTorrent", None),
    ("SZ", "Shareaza", None),
    ("TN", "Torrent.NET", None),
    ("TR", "Transmission", Some(Transmission)),
    ("TS", "TorrentStorm", None),
    ("TT", "TuoTu", Some(ThreeDigits)),
    ("UL", "uLeecher!", None),
    ("UE", "\u{00B5}Torrent Embedded", Some(ThreeDigitsPlusMnemonic)),
    ("UT", "\u{00B5}Torrent", Some(ThreeDigitsPlusMnemonic)),
    ("UM", "\u{00B5}Torrent Mac", Some(ThreeDigitsPlusMnemonic)),
    ("WD", "WebTorrent Desktop", Some(WebTorrent)),
    ("WT", "Bitlet", None),
    ("WW", "WebTorrent", Some(WebTorrent)),
    // formerly Wyzo
    ("WY", "FireTorrent", None),
    ("VG", "\u{54C7}\u{560E} (Vagaa)", Some(FourDigits)),
    ("XL", "\u{8FC5}\u{96F7}\u{5728}\u{7EBF} (Xunlei)", None),
    ("XT", "XanTorrent", None),
    ("XF", "Xfplay", Some(Transmission)),
    ("XX", "XTorrent", Some(VersionFormat::literal("1.2.34"))),
    ("XC", "XTorrent", Some(VersionFormat::literal("1.2.34"))),
    ("ZT", "ZipTorrent", None),
    ("7T", "aTorrent", None),
    ("ZO", "Zona", Some(FourDigits)),
    ("#@", "Invalid PeerID", None),
];

const SHADOW_STYLE: &[(&str, &str)] = &[
    ("A", "ABC"),
    ("O", "Osprey Permaseed"),
    ("Q", "BTQueue"),
    ("R", "Tribler"),
    ("S", "Shad0w"),
    ("T", "BitTornado"),
    ("U", "UPnP NAT"),
];

const MAINLINE_STYLE: &[(&str, &str)] = &[("M", "Mainline"), ("Q", "Queen Bee")];

const fn at(pos: usize) -> Position {
    Position::At(pos)
}

const START: Position = Position::At(0);

/// (client, version, id, position). Order matters: the first match wins.
const SIMPLE: &[(&str, Option<&str>, &str, Position)] = &[
    ("\u{00B5}Torrent", Some("1.7.0 RC"), "-UT170-", START),
    ("Azureus", Some("1"), "Azureus", START),
    ("Azureus", Some("2.0.3.2"), "Azureus", at(5)),
    ("Aria", Some("2"), "-aria2-", START),
    ("BitTorrent Plus!", Some("II"), "PRC.P---", START),
    ("BitTorrent Plus!", None, "P87.P---", START),
    ("BitTorrent Plus!", None, "S587Plus", START),
    ("BitTyrant (Azureus Mod)", None, "AZ2500BT", START),
    ("Blizzard Downloader", None, "BLZ", START),
    ("BTGetit", None, "BG", at(10)),
    ("BTugaXP", None, "btuga", START),
    ("BTugaXP", None, "BTuga", at(5)),
    ("BTugaXP", None, "oernu", START),
    ("Deadman Walking", None, "BTDWV-", START),
    ("Deadman", None, "Deadman Walking-", START),
    ("External Webseed", None, "Ext", START),
    ("G3 Torrent", None, "-G3", START),
    ("GreedBT", Some("2.7.1"), "271-", START),
    ("Hurricane Electric", None, "arclight", START),
    ("HTTP Seed", None, "-WS", START),
    ("JVtorrent", None, "10-------", START),
    ("Limewire", None, "LIME", START),
    ("Martini Man", None, "martini", START),
    ("Pando", None, "Pando", START),
    ("PeerApp", None, "PEERAPP", START),
    ("SimpleBT", None, "btfans", at(4)),
    ("Swarmy", None, "a00---0", START),
    ("Swarmy", None, "a02---0", START),
    ("Teeweety", None, "T00---0", START),
    ("TorrentTopia", None, "346-", START),
    ("XanTorrent", None, "DansClient", START),
    ("MediaGet", None, "-MG1", START),
    ("MediaGet", Some("2.1"), "-MG21", START),
    // Mainline style with a two character code.
    ("Amazon AWS S3", None, "S3-", START),
    ("BitTorrent DNA", None, "DNA", START),
    // pre build 10000
    ("Opera", None, "OP", START),
    // post build 10000
    ("Opera", None, "O", START),
    ("Burst!", None, "Mbrst", START),
    ("TurboBT", None, "turbobt", START),
    ("BT Protocol Daemon", None, "btpd", START),
    ("Plus!", None, "Plus", START),
    ("XBT", None, "XBT", START),
    ("BitsOnWheels", None, "-BOW", START),
    ("eXeem", None, "eX", START),
    ("MLdonkey", None, "-ML", START),
    ("Bitlet", None, "BitLet", START),
    ("AllPeers", None, "AP", START),
    ("BTuga Revolution", None, "BTM", START),
    ("Rufus", None, "RS", at(2)),
    // predecessor to Rufus
    ("BitMagnet", None, "BM", at(2)),
    ("QVOD", None, "QVOD", START),
    // BitTornado based, but doesn't follow Shadow's conventions.
    ("Top-BT", None, "TB", START),
    ("Tixati", None, "TIX", START),
    ("folx", None, "-FL", START),
    ("\u{00B5}Torrent Mac", None, "-UM", START),
    // 3.4+
    ("\u{00B5}Torrent", None, "-UT", START),
];

pub(crate) fn register(b: &mut ClientRegistryBuilder) -> Result<()> {
    for (code, client, version) in AZ_STYLE {
        b.az_style(code, client, version.clone())?;
    }
    for (code, client) in SHADOW_STYLE {
        b.shadow_style(code, client, None)?;
    }
    for (code, client) in MAINLINE_STYLE {
        b.mainline_style(code, client)?;
    }
    for (client, version, id, position) in SIMPLE {
        b.simple(client, *version, id, *position)?;
    }
    Ok(())
}
