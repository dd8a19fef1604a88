//! Tag grammar embedded in source names.
//!
//! A source opts into tracking by starting its name with `T[...]`.
//! The brackets hold a comma-separated list of modifier flags:
//!
//! ```text
//! T[] NotePad++
//! T[offsetx,snapy] Eclipse
//! T[loop] Idle Game
//! ```
//!
//! The `T[` wrapper is case-sensitive, the flags are not. Flags are stored
//! lower-cased; unknown flags are kept but have no effect.

use serde::Serialize;
use std::collections::BTreeSet;

const TAG_OPEN: &str = "T[";
const TAG_CLOSE: char = ']';

/// Modifier flags that change how a tracked item is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Offset,
    OffsetPlus,
    OffsetMinus,
    OffsetX,
    OffsetXPlus,
    OffsetXMinus,
    OffsetY,
    OffsetYPlus,
    OffsetYMinus,
    Snap,
    SnapX,
    SnapY,
    Loop,
    LoopX,
    LoopY,
}

impl Modifier {
    pub const ALL: [Modifier; 15] = [
        Modifier::Offset,
        Modifier::OffsetPlus,
        Modifier::OffsetMinus,
        Modifier::OffsetX,
        Modifier::OffsetXPlus,
        Modifier::OffsetXMinus,
        Modifier::OffsetY,
        Modifier::OffsetYPlus,
        Modifier::OffsetYMinus,
        Modifier::Snap,
        Modifier::SnapX,
        Modifier::SnapY,
        Modifier::Loop,
        Modifier::LoopX,
        Modifier::LoopY,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Offset => "offset",
            Modifier::OffsetPlus => "offset+",
            Modifier::OffsetMinus => "offset-",
            Modifier::OffsetX => "offsetx",
            Modifier::OffsetXPlus => "offsetx+",
            Modifier::OffsetXMinus => "offsetx-",
            Modifier::OffsetY => "offsety",
            Modifier::OffsetYPlus => "offsety+",
            Modifier::OffsetYMinus => "offsety-",
            Modifier::Snap => "snap",
            Modifier::SnapX => "snapx",
            Modifier::SnapY => "snapy",
            Modifier::Loop => "loop",
            Modifier::LoopX => "loopx",
            Modifier::LoopY => "loopy",
        }
    }

    /// Look up a recognized flag. Expects an already lower-cased token.
    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == flag)
    }
}

/// Normalized set of flags parsed from a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModifierSet {
    flags: BTreeSet<String>,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw flag, normalizing it to lower case.
    /// Blank flags are ignored.
    pub fn insert_flag(&mut self, flag: &str) {
        let flag = flag.trim();
        if !flag.is_empty() {
            self.flags.insert(flag.to_lowercase());
        }
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.flags.insert(modifier.as_str().to_string());
    }

    pub fn has(&self, modifier: Modifier) -> bool {
        self.flags.contains(modifier.as_str())
    }

    pub fn contains_flag(&self, flag: &str) -> bool {
        self.flags.contains(&flag.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }

    /// Flags that no modifier recognizes; accepted but inert.
    pub fn unrecognized(&self) -> impl Iterator<Item = &str> {
        self.flags().filter(|f| Modifier::from_flag(f).is_none())
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut set = Self::new();
        for modifier in iter {
            set.insert(modifier);
        }
        set
    }
}

/// Parse the tag out of a source name.
///
/// Returns `None` when the name is not tracked: no leading `T[`, no closing
/// `]`, or a nested `[` inside the brackets.
pub fn parse_tag(name: &str) -> Option<ModifierSet> {
    let rest = name.strip_prefix(TAG_OPEN)?;
    let end = rest.find(TAG_CLOSE)?;
    let body = rest.get(..end)?;

    if body.contains('[') {
        return None;
    }

    let mut set = ModifierSet::new();
    for flag in body.split(',') {
        set.insert_flag(flag);
    }
    Some(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_not_tracked_without_tag() {
        assert!(parse_tag("Notepad++").is_none());
        assert!(parse_tag("").is_none());
        assert!(parse_tag("[snap] Editor").is_none());
    }

    #[test]
    fn test_parse_tag_wrapper_is_case_sensitive() {
        assert!(parse_tag("t[snap] Editor").is_none());
    }

    #[test]
    fn test_parse_tag_empty_brackets() {
        let set = parse_tag("T[] NotePad++").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_tag_lowercases_and_keeps_unknown_flags() {
        let set = parse_tag("T[Snap,Border]").unwrap();
        let flags: Vec<&str> = set.flags().collect();
        assert_eq!(flags, vec!["border", "snap"]);
        assert!(set.has(Modifier::Snap));
        assert_eq!(set.unrecognized().collect::<Vec<_>>(), vec!["border"]);
    }

    #[test]
    fn test_parse_tag_duplicates_collapse() {
        let set = parse_tag("T[loop,LOOP,Loop] Idle Game").unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.has(Modifier::Loop));
    }

    #[test]
    fn test_parse_tag_trims_flags() {
        let set = parse_tag("T[offsetx, snapy] Eclipse").unwrap();
        assert!(set.has(Modifier::OffsetX));
        assert!(set.has(Modifier::SnapY));
    }

    #[test]
    fn test_parse_tag_must_lead_the_name() {
        assert!(parse_tag("Editor T[offset-]").is_none());
        assert!(parse_tag("CAT[snap] Logo").is_none());
        assert!(parse_tag(" T[snap] Logo").is_none());
    }

    #[test]
    fn test_parse_tag_malformed() {
        assert!(parse_tag("T[snap Editor").is_none());
        assert!(parse_tag("T[snap[x]] Editor").is_none());
    }

    #[test]
    fn test_parse_tag_uses_first_occurrence() {
        let set = parse_tag("T[snapx] and T[snapy]").unwrap();
        assert!(set.has(Modifier::SnapX));
        assert!(!set.has(Modifier::SnapY));
    }

    #[test]
    fn test_modifier_flag_round_trip() {
        for modifier in Modifier::ALL {
            assert_eq!(Modifier::from_flag(modifier.as_str()), Some(modifier));
        }
        assert_eq!(Modifier::from_flag("border"), None);
    }
}
