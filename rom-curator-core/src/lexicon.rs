//! Static reference tables for No-Intro style filename tags.
//!
//! Everything in this module is data plus small pure lookups: canonical
//! region names with their aliases, language codes, prototype and hack
//! keywords, special-version keywords, and the ROM file-extension set.

// ── Regions ─────────────────────────────────────────────────────────────────

/// Canonical region names as they appear in No-Intro names.
pub const KNOWN_REGIONS: &[&str] = &[
    "USA",
    "Europe",
    "Japan",
    "World",
    "Australia",
    "France",
    "Germany",
    "Spain",
    "Italy",
    "Netherlands",
    "Sweden",
    "Norway",
    "Denmark",
    "Finland",
    "Brazil",
    "Korea",
    "China",
    "Taiwan",
    "Hong Kong",
    "Asia",
    "Russia",
    "Poland",
    "Greece",
    "Portugal",
    "Canada",
    "Mexico",
    "Argentina",
    "UK",
];

/// Exact-token aliases: short codes and alternate spellings mapped to a
/// canonical region name. Compared case-insensitively against a whole token.
const REGION_ALIASES: &[(&str, &str)] = &[
    ("us", "USA"),
    ("u", "USA"),
    ("united states", "USA"),
    ("jp", "Japan"),
    ("jpn", "Japan"),
    ("j", "Japan"),
    ("eu", "Europe"),
    ("eur", "Europe"),
    ("e", "Europe"),
    ("aus", "Australia"),
    ("kor", "Korea"),
    ("kr", "Korea"),
    ("chn", "China"),
    ("cn", "China"),
    ("bra", "Brazil"),
    ("br", "Brazil"),
    ("hk", "Hong Kong"),
    ("rus", "Russia"),
    ("gbr", "UK"),
];

/// Phrases recognized anywhere inside a token ("Chinese version", "Pt-Br",
/// "Euro"). Checked only after exact and suffix matching fail.
const REGION_PHRASES: &[(&str, &str)] = &[
    ("chinese", "China"),
    ("japanese", "Japan"),
    ("euro", "Europe"),
    ("pt-br", "Brazil"),
];

/// Resolve one comma-separated token to a canonical region name.
///
/// Three forms are admitted:
/// 1. an exact canonical name or alias (`USA`, `jp`, `Hong Kong`);
/// 2. a canonical name followed by whitespace and digits or `set`, the
///    MAME convention for datestamped and numbered sets (`World 900227`,
///    `Japan set 1`);
/// 3. a recognized alias phrase appearing anywhere in the token
///    (`Chinese version`, `Pt-Br`).
pub fn match_region(token: &str) -> Option<&'static str> {
    let lower = token.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    for region in KNOWN_REGIONS {
        if region.to_lowercase() == lower {
            return Some(region);
        }
    }
    for (alias, region) in REGION_ALIASES {
        if *alias == lower {
            return Some(region);
        }
    }

    // MAME suffix form: region name, whitespace, then digits or "set".
    for region in KNOWN_REGIONS {
        if let Some(rest) = lower.strip_prefix(&region.to_lowercase()) {
            let rest = rest.trim_start();
            if !rest.is_empty()
                && (rest.starts_with(|c: char| c.is_ascii_digit()) || rest.starts_with("set"))
            {
                return Some(region);
            }
        }
    }

    for (phrase, region) in REGION_PHRASES {
        if lower.contains(phrase) {
            return Some(region);
        }
    }

    None
}

// ── Languages ───────────────────────────────────────────────────────────────

/// Known language codes, canonical capitalization.
pub const KNOWN_LANGUAGES: &[&str] = &[
    "En", "Fr", "De", "Es", "It", "Nl", "Pt", "Sv", "No", "Da", "Fi", "Ja", "Ko", "Zh", "Ru",
    "Pl", "El", "Ca", "Cs", "Hu", "Tr",
];

/// Resolve a token to a canonical language code (case-insensitive exact match).
pub fn match_language(token: &str) -> Option<&'static str> {
    let trimmed = token.trim();
    KNOWN_LANGUAGES
        .iter()
        .find(|l| l.eq_ignore_ascii_case(trimmed))
        .copied()
}

// ── Keywords ────────────────────────────────────────────────────────────────

/// Keywords marking prototype/pre-release dumps.
pub const PROTOTYPE_KEYWORDS: &[&str] =
    &["Proto", "Beta", "Demo", "Sample", "Kiosk", "Debug", "Preview"];

/// Keywords marking hacked, pirated, or otherwise modified dumps.
pub const HACK_KEYWORDS: &[&str] = &["Hack", "Pirate", "Bootleg", "Cracked", "Trained"];

/// Keywords marking legitimate special versions that are not duplicates.
pub const SPECIAL_KEYWORDS: &[&str] = &[
    "SGB Enhanced",
    "GB Compatible",
    "Rumble Version",
    "Virtual Console",
    "Unl",
    "Aftermarket",
    "Pirate",
    "Hack",
    "Alt",
    "NDSi Enhanced",
    "DSi Enhanced",
];

/// True if any group contains a prototype keyword (case-insensitive substring).
pub fn contains_prototype_keyword(group: &str) -> bool {
    contains_keyword(group, PROTOTYPE_KEYWORDS)
}

/// True if any group contains a hack keyword (case-insensitive substring).
pub fn contains_hack_keyword(group: &str) -> bool {
    contains_keyword(group, HACK_KEYWORDS)
}

fn contains_keyword(group: &str, keywords: &[&str]) -> bool {
    let lower = group.to_lowercase();
    keywords.iter().any(|k| lower.contains(&k.to_lowercase()))
}

// ── File extensions ─────────────────────────────────────────────────────────

/// Extensions recognized as ROM files (archives, cartridge dumps, disc images).
pub const ROM_EXTENSIONS: &[&str] = &[
    "zip", "7z", "rar", "nes", "snes", "smc", "sfc", "gb", "gbc", "gba", "nds", "3ds", "cia",
    "iso", "bin", "cue", "img", "md", "gen", "sms", "gg", "pce", "ngp", "ngc", "n64", "v64",
    "z64", "chd", "pbp", "cso",
];
