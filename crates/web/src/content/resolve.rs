// =============================================================================
// Forsaj Web - Section Resolution
// =============================================================================
// Table of Contents:
// 1. First Non-Empty
// 2. Dynamic Records
// 3. Logical Sections
// =============================================================================
// Each field resolves through: CMS record -> localized text (with the
// built-in text as its default) -> empty. Icons come from CMS records only.
// =============================================================================

use std::collections::{BTreeMap, BTreeSet};

use super::defaults::FallbackSection;
use super::key::{SectionField, SectionKey};
use super::model::{ContentSource, SectionRecord};
use super::LogicalSection;

// -----------------------------------------------------------------------------
// 1. First Non-Empty
// -----------------------------------------------------------------------------

/// First provided value that is non-empty after trimming, trimmed.
pub fn first_non_empty<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

// -----------------------------------------------------------------------------
// 2. Dynamic Records
// -----------------------------------------------------------------------------

/// CMS overrides collected for one section number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialSection {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub body: Option<String>,
}

impl PartialSection {
    fn set(&mut self, field: SectionField, value: String) {
        match field {
            SectionField::Title => self.title = Some(value),
            SectionField::Icon => self.icon = Some(value),
            SectionField::Body => self.body = Some(value),
        }
    }
}

/// Group CMS records by section number. Unparseable identifiers and blank
/// values are skipped; a later value for the same field replaces an earlier one.
pub fn collect_dynamic(records: &[SectionRecord]) -> BTreeMap<u32, PartialSection> {
    let mut dynamic: BTreeMap<u32, PartialSection> = BTreeMap::new();

    for record in records {
        let Some(key) = SectionKey::parse(&record.id) else {
            log::debug!("Ignoring content record {:?}", record.id);
            continue;
        };

        let value = record.value.trim();
        if value.is_empty() {
            continue;
        }

        dynamic
            .entry(key.number)
            .or_default()
            .set(key.field, value.to_string());
    }

    dynamic
}

// -----------------------------------------------------------------------------
// 3. Logical Sections
// -----------------------------------------------------------------------------

/// Section numbers worth resolving: the built-in range, every CMS section,
/// and any localized `SECTION_<n>_*` text below the highest of those. Gaps
/// with nothing behind them resolve empty and are skipped, so they are not
/// visited.
fn section_numbers(
    fallback_count: usize,
    dynamic: &BTreeMap<u32, PartialSection>,
    text_keys: impl Iterator<Item = SectionKey>,
) -> BTreeSet<u32> {
    let fallback_count = u32::try_from(fallback_count).unwrap_or(u32::MAX);
    let highest = dynamic
        .keys()
        .next_back()
        .copied()
        .unwrap_or(0)
        .max(fallback_count);

    let mut numbers: BTreeSet<u32> = (1..=fallback_count).collect();
    numbers.extend(dynamic.keys().copied().filter(|n| *n >= 1));
    numbers.extend(
        text_keys
            .map(|key| key.number)
            .filter(|n| (1..=highest).contains(n)),
    );
    numbers
}

/// Resolve the ordered section list for a page.
pub fn resolve_sections<S>(
    source: &S,
    page_key: &str,
    fallbacks: &[FallbackSection],
) -> Vec<LogicalSection>
where
    S: ContentSource + ?Sized,
{
    let page = source.page(page_key);
    let records = page.map(|p| p.sections.as_slice()).unwrap_or(&[]);
    let dynamic = collect_dynamic(records);
    let text_keys = page
        .into_iter()
        .flat_map(|p| p.texts.keys())
        .filter_map(|key| SectionKey::parse(key));
    let numbers = section_numbers(fallbacks.len(), &dynamic, text_keys);

    let empty = PartialSection::default();
    let sections: Vec<LogicalSection> = numbers
        .iter()
        .filter_map(|&number| {
            let overrides = dynamic.get(&number).unwrap_or(&empty);
            let fallback = fallbacks.get(number as usize - 1);

            let title = resolve_field(
                source,
                overrides.title.as_deref(),
                SectionKey::new(number, SectionField::Title),
                fallback.map(|f| f.title).unwrap_or_default(),
            );
            let body = resolve_field(
                source,
                overrides.body.as_deref(),
                SectionKey::new(number, SectionField::Body),
                fallback.map(|f| f.body).unwrap_or_default(),
            );

            if title.is_empty() && body.is_empty() {
                return None;
            }

            Some(LogicalSection {
                title,
                icon: overrides.icon.clone().unwrap_or_default(),
                body,
            })
        })
        .collect();

    log::debug!("Resolved {} of {} sections", sections.len(), numbers.len());
    sections
}

fn resolve_field<S>(source: &S, dynamic: Option<&str>, key: SectionKey, fallback: &str) -> String
where
    S: ContentSource + ?Sized,
{
    first_non_empty([
        dynamic.map(str::to_string),
        Some(source.text(&key.text_key(), fallback)),
    ])
    .unwrap_or_default()
}
