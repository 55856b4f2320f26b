// =============================================================================
// Forsaj Web - Section Identifier Parsing
// =============================================================================
// Section records are keyed `SECTION_<n>_<FIELD>`. They are parsed once into
// `SectionKey` so merging works on plain data.
// =============================================================================

use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "SECTION_";

/// Field of a logical section an identifier targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionField {
    Title,
    Icon,
    Body,
}

impl SectionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionField::Title => "TITLE",
            SectionField::Icon => "ICON",
            SectionField::Body => "BODY",
        }
    }
}

impl FromStr for SectionField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("TITLE") {
            Ok(SectionField::Title)
        } else if s.eq_ignore_ascii_case("ICON") {
            Ok(SectionField::Icon)
        } else if s.eq_ignore_ascii_case("BODY") {
            Ok(SectionField::Body)
        } else {
            Err(())
        }
    }
}

/// Parsed `SECTION_<n>_<FIELD>` identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SectionKey {
    pub number: u32,
    pub field: SectionField,
}

impl SectionKey {
    pub fn new(number: u32, field: SectionField) -> Self {
        Self { number, field }
    }

    /// Parse an identifier, ignoring ASCII case. Returns `None` for anything
    /// that is not exactly `SECTION_<digits>_<TITLE|ICON|BODY>`.
    pub fn parse(id: &str) -> Option<Self> {
        let head = id.get(..PREFIX.len())?;
        if !head.eq_ignore_ascii_case(PREFIX) {
            return None;
        }

        let rest = &id[PREFIX.len()..];
        let (digits, field) = rest.split_once('_')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self {
            number: digits.parse().ok()?,
            field: field.parse().ok()?,
        })
    }

    /// Localized-text key for this field, e.g. `SECTION_3_BODY`.
    pub fn text_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}_{}", PREFIX, self.number, self.field.as_str())
    }
}
