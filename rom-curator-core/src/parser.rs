//! Filename tag parser for No-Intro style ROM names.
//!
//! ROM filenames encode identity and provenance in parenthesized and
//! bracketed suffix groups:
//!
//! ```text
//! Game Name (Region1, Region2) (En,Fr,De) (Rev A) [!]
//! ```
//!
//! [`parse_filename`] turns one filename (plus an optional fallback name
//! from catalog metadata) into a [`TaggedRecord`]: canonical regions and
//! languages, revision number, prototype/hack flags, free-form tags, and
//! base/normalized display names. Parsing is total: unrecognizable tokens
//! simply yield empty tag sets.

use crate::lexicon;
use crate::types::TaggedRecord;

/// Parse a ROM filename into a [`TaggedRecord`].
///
/// `fallback_name` is the catalog display name for this file, if known. It
/// is consulted for regions when the filename itself carries none (and for
/// languages only when the filename carries neither), and is always scanned
/// for revision and prototype/hack markers.
///
/// File size, location, catalog id, and collection tag are attached by the
/// caller through the record's `with_*` builders.
///
/// # Examples
///
/// ```
/// use rom_curator_core::parse_filename;
///
/// let rec = parse_filename("Sonic the Hedgehog (USA, Europe) (En,Fr,De).md", None);
/// assert_eq!(rec.base_name, "Sonic the Hedgehog");
/// assert_eq!(rec.regions, vec!["USA", "Europe"]);
/// assert_eq!(rec.languages, vec!["En", "Fr", "De"]);
/// assert_eq!(rec.revision, 0);
/// assert!(!rec.is_prototype);
/// ```
pub fn parse_filename(filename: &str, fallback_name: Option<&str>) -> TaggedRecord {
    let (paren_groups, bracket_groups) = extract_groups(filename);

    let (mut regions, mut languages) = scan_regions_and_languages(filename);
    if regions.is_empty() {
        if let Some(fallback) = fallback_name {
            let (fb_regions, fb_languages) = scan_regions_and_languages(fallback);
            regions = fb_regions;
            if languages.is_empty() {
                languages = fb_languages;
            }
        }
    }

    let base_name = strip_tag_groups(strip_extension(filename));
    let normalized_name = normalize_name(&base_name);

    // Revision and prototype/hack markers may live on the catalog name
    // rather than the file itself.
    let mut all_parens = paren_groups;
    let mut all_brackets = bracket_groups;
    if let Some(fallback) = fallback_name {
        let (fb_parens, fb_brackets) = extract_groups(fallback);
        all_parens.extend(fb_parens);
        all_brackets.extend(fb_brackets);
    }

    let revision = extract_revision(&all_parens);
    let is_prototype = all_parens
        .iter()
        .chain(all_brackets.iter())
        .any(|g| lexicon::contains_prototype_keyword(g));
    let is_hack = all_parens
        .iter()
        .chain(all_brackets.iter())
        .any(|g| lexicon::contains_hack_keyword(g));
    let tags = extract_tags(&all_parens, &all_brackets);

    TaggedRecord {
        filename: filename.to_string(),
        base_name,
        normalized_name,
        regions,
        languages,
        tags,
        revision,
        is_prototype,
        is_hack,
        ..TaggedRecord::default()
    }
}

/// True if the filename has a recognized ROM extension.
pub fn is_rom_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => {
            let lower = ext.to_lowercase();
            lexicon::ROM_EXTENSIONS.iter().any(|e| *e == lower)
        }
        None => false,
    }
}

/// The region a record files under when routed to a regional folder.
///
/// Multi-region records resolve through a fixed preference order; a record
/// with no regions at all files under `"Unknown"`.
pub fn primary_region(record: &TaggedRecord) -> &str {
    const ORDER: &[&str] = &[
        "USA",
        "World",
        "Europe",
        "Australia",
        "Japan",
        "Asia",
        "Brazil",
        "China",
        "Korea",
    ];

    match record.regions.as_slice() {
        [] => "Unknown",
        [only] => only,
        regions => ORDER
            .iter()
            .find(|o| regions.iter().any(|r| r.eq_ignore_ascii_case(o)))
            .copied()
            .unwrap_or(&regions[0]),
    }
}

/// Normalize a display name for identity comparison: lowercase, unify
/// apostrophes and quotes, `&` becomes `and`, drop everything that is not
/// alphanumeric or whitespace, collapse whitespace runs.
pub fn normalize_name(name: &str) -> String {
    let mut text = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '\u{2018}' | '\u{2019}' => text.push('\''),
            '\u{201C}' | '\u{201D}' => text.push('"'),
            '&' => text.push_str("and"),
            _ => text.extend(ch.to_lowercase()),
        }
    }

    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else if ch.is_whitespace() {
            pending_space = true;
        }
    }
    out
}

// ── Group extraction ────────────────────────────────────────────────────────

/// Collect the contents of all `(...)` and `[...]` groups via balanced
/// delimiter scanning. Unterminated groups yield nothing.
fn extract_groups(source: &str) -> (Vec<String>, Vec<String>) {
    let mut parens = Vec::new();
    let mut brackets = Vec::new();
    let mut chars = source.char_indices();

    while let Some((i, ch)) = chars.next() {
        let (open, close) = match ch {
            '(' => ('(', ')'),
            '[' => ('[', ']'),
            _ => continue,
        };

        let start = i + open.len_utf8();
        let mut end = start;
        let mut depth = 1u32;
        for (j, c) in chars.by_ref() {
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    end = j;
                    break;
                }
            }
        }

        let content = &source[start..end];
        if !content.is_empty() {
            if open == '(' {
                parens.push(content.to_string());
            } else {
                brackets.push(content.to_string());
            }
        }
    }

    (parens, brackets)
}

/// Drop the extension (final `.xyz` segment), if any.
fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) if pos + 1 < filename.len() => &filename[..pos],
        _ => filename,
    }
}

/// Remove every tag group, along with the whitespace run leading into it.
fn strip_tag_groups(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars();

    while let Some(ch) = chars.next() {
        let (open, close) = match ch {
            '(' => ('(', ')'),
            '[' => ('[', ']'),
            _ => {
                out.push(ch);
                continue;
            }
        };

        while out.ends_with(|c: char| c.is_whitespace()) {
            out.pop();
        }
        let mut depth = 1u32;
        for c in chars.by_ref() {
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
        }
    }

    out.trim().to_string()
}

// ── Region / language scanning ──────────────────────────────────────────────

/// MAME-style six-digit date codes (YYMMDD) carry no identity information.
fn is_date_code(token: &str) -> bool {
    let t = token.trim();
    t.len() == 6 && t.chars().all(|c| c.is_ascii_digit())
}

/// Scan the parenthesized groups of `source` for regions and languages.
///
/// A group where every comma part is a language code is a language group;
/// otherwise, a group with at least one region token is a region group, and
/// its non-region parts are still checked for embedded language codes.
fn scan_regions_and_languages(source: &str) -> (Vec<String>, Vec<String>) {
    let (paren_groups, _) = extract_groups(source);
    let mut regions: Vec<String> = Vec::new();
    let mut languages: Vec<String> = Vec::new();

    for group in &paren_groups {
        if is_date_code(group) {
            continue;
        }
        let parts: Vec<&str> = group.split(',').map(str::trim).collect();

        if parts.iter().all(|p| lexicon::match_language(p).is_some()) {
            for part in &parts {
                if let Some(lang) = lexicon::match_language(part) {
                    push_unique(&mut languages, lang);
                }
            }
        } else if parts.iter().any(|p| lexicon::match_region(p).is_some()) {
            for part in &parts {
                if is_date_code(part) {
                    continue;
                }
                if let Some(region) = lexicon::match_region(part) {
                    push_unique(&mut regions, region);
                } else if let Some(lang) = lexicon::match_language(part) {
                    push_unique(&mut languages, lang);
                }
            }
        }
    }

    (regions, languages)
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        list.push(value.to_string());
    }
}

// ── Revision ────────────────────────────────────────────────────────────────

/// First revision value found across the groups, scanning each group for
/// the `Rev` form before the `vX.Y` form. 0 when absent.
fn extract_revision(groups: &[String]) -> u32 {
    for group in groups {
        let trimmed = group.trim();
        if let Some(rev) = parse_rev_token(trimmed) {
            return rev;
        }
        if let Some(version) = parse_version_token(trimmed) {
            return version;
        }
    }
    0
}

/// `Rev 2` → 2, `Rev A` → 1, `Rev B` → 2. The whole token must match.
fn parse_rev_token(token: &str) -> Option<u32> {
    let rest = strip_prefix_ci(token, "Rev")?.trim_start();
    if rest.is_empty() {
        return None;
    }
    if rest.chars().all(|c| c.is_ascii_digit()) {
        return rest.parse().ok();
    }
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Some(c.to_ascii_uppercase() as u32 - 'A' as u32 + 1)
        }
        _ => None,
    }
}

/// `v1.1` → 11, `v2.0` → 20. The whole token must match.
fn parse_version_token(token: &str) -> Option<u32> {
    let rest = token.strip_prefix(['v', 'V'])?;
    let (major, minor) = rest.split_once('.')?;
    if major.is_empty()
        || minor.is_empty()
        || !major.chars().all(|c| c.is_ascii_digit())
        || !minor.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    Some(major.parse::<u32>().ok()? * 10 + minor.parse::<u32>().ok()?)
}

fn is_rev_token(token: &str) -> bool {
    parse_rev_token(token.trim()).is_some()
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

// ── Tags ────────────────────────────────────────────────────────────────────

/// Collect free-form tags: special-version and prototype keywords found in
/// any group, `Rev` tokens verbatim, and every bracket group verbatim
/// (dump-quality markers like `b` and `!`).
fn extract_tags(paren_groups: &[String], bracket_groups: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for group in paren_groups.iter().chain(bracket_groups.iter()) {
        let lower = group.to_lowercase();
        for keyword in lexicon::SPECIAL_KEYWORDS {
            if lower.contains(&keyword.to_lowercase()) {
                push_unique(&mut tags, keyword);
            }
        }
        for keyword in lexicon::PROTOTYPE_KEYWORDS {
            if lower.contains(&keyword.to_lowercase()) {
                push_unique(&mut tags, keyword);
            }
        }
        if is_rev_token(group) {
            push_unique(&mut tags, group);
        }
    }

    for group in bracket_groups {
        push_unique(&mut tags, group);
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_stripping() {
        assert_eq!(strip_extension("Game (USA).nes"), "Game (USA)");
        assert_eq!(strip_extension("No Extension"), "No Extension");
        assert_eq!(strip_extension("Trailing dot."), "Trailing dot.");
    }

    #[test]
    fn group_extraction_is_balanced() {
        let (parens, brackets) = extract_groups("Game (USA) (Rev 1) [b] [!]");
        assert_eq!(parens, vec!["USA", "Rev 1"]);
        assert_eq!(brackets, vec!["b", "!"]);
    }

    #[test]
    fn unterminated_group_yields_nothing() {
        let (parens, brackets) = extract_groups("Game (USA");
        assert!(parens.is_empty());
        assert!(brackets.is_empty());
    }

    #[test]
    fn base_name_keeps_interstitial_text() {
        assert_eq!(strip_tag_groups("Game (USA) Extra"), "Game Extra");
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize_name("Kirby's Dream Land"), "kirbys dream land");
        assert_eq!(normalize_name("Chip & Dale"), "chip and dale");
        assert_eq!(normalize_name("  Mega  Man:  X  "), "mega man x");
    }

    #[test]
    fn revision_tokens() {
        assert_eq!(parse_rev_token("Rev 2"), Some(2));
        assert_eq!(parse_rev_token("Rev A"), Some(1));
        assert_eq!(parse_rev_token("rev b"), Some(2));
        assert_eq!(parse_rev_token("Rev1"), Some(1));
        assert_eq!(parse_rev_token("Revision notes"), None);
        assert_eq!(parse_version_token("v1.1"), Some(11));
        assert_eq!(parse_version_token("V2.0"), Some(20));
        assert_eq!(parse_version_token("v1"), None);
    }
}
