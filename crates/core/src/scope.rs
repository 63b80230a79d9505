//! Named reading scopes and plan-item generation.
//!
//! A scope is a fixed, ordered list of canonical book ids (e.g.
//! `"gospels"`). Expanding a scope against a book catalog yields the
//! ordered chapter-level reading items a plan is created from; item
//! order indexes are derived positionally from that sequence, so
//! generation must be deterministic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Scope ids
// ---------------------------------------------------------------------------

/// The whole Old Testament, canonical order.
pub const SCOPE_OLD_TESTAMENT: &str = "old-testament";
/// The whole New Testament, canonical order.
pub const SCOPE_NEW_TESTAMENT: &str = "new-testament";
/// The four gospels.
pub const SCOPE_GOSPELS: &str = "gospels";
/// Psalms and Proverbs.
pub const SCOPE_PSALMS_PROVERBS: &str = "psalms-proverbs";

/// All valid scope ids.
pub const VALID_SCOPES: &[&str] = &[
    SCOPE_OLD_TESTAMENT,
    SCOPE_NEW_TESTAMENT,
    SCOPE_GOSPELS,
    SCOPE_PSALMS_PROVERBS,
];

// ---------------------------------------------------------------------------
// Book lists
// ---------------------------------------------------------------------------

const OLD_TESTAMENT_BOOKS: &[&str] = &[
    "genesis",
    "exodus",
    "leviticus",
    "numbers",
    "deuteronomy",
    "joshua",
    "judges",
    "ruth",
    "1-samuel",
    "2-samuel",
    "1-kings",
    "2-kings",
    "1-chronicles",
    "2-chronicles",
    "ezra",
    "nehemiah",
    "esther",
    "job",
    "psalms",
    "proverbs",
    "ecclesiastes",
    "song-of-solomon",
    "isaiah",
    "jeremiah",
    "lamentations",
    "ezekiel",
    "daniel",
    "hosea",
    "joel",
    "amos",
    "obadiah",
    "jonah",
    "micah",
    "nahum",
    "habakkuk",
    "zephaniah",
    "haggai",
    "zechariah",
    "malachi",
];

const NEW_TESTAMENT_BOOKS: &[&str] = &[
    "matthew",
    "mark",
    "luke",
    "john",
    "acts",
    "romans",
    "1-corinthians",
    "2-corinthians",
    "galatians",
    "ephesians",
    "philippians",
    "colossians",
    "1-thessalonians",
    "2-thessalonians",
    "1-timothy",
    "2-timothy",
    "titus",
    "philemon",
    "hebrews",
    "james",
    "1-peter",
    "2-peter",
    "1-john",
    "2-john",
    "3-john",
    "jude",
    "revelation",
];

const GOSPEL_BOOKS: &[&str] = &["matthew", "mark", "luke", "john"];

const PSALMS_PROVERBS_BOOKS: &[&str] = &["psalms", "proverbs"];

/// Ordered book ids for a scope. Unknown scope ids yield an empty slice,
/// which expands to an empty item sequence rather than an error.
pub fn scope_books(scope_id: &str) -> &'static [&'static str] {
    match scope_id {
        SCOPE_OLD_TESTAMENT => OLD_TESTAMENT_BOOKS,
        SCOPE_NEW_TESTAMENT => NEW_TESTAMENT_BOOKS,
        SCOPE_GOSPELS => GOSPEL_BOOKS,
        SCOPE_PSALMS_PROVERBS => PSALMS_PROVERBS_BOOKS,
        _ => &[],
    }
}

// ---------------------------------------------------------------------------
// Catalog and item drafts
// ---------------------------------------------------------------------------

/// Upper bound on chapters per book. No real book comes close (Psalms
/// has 150); catalog entries beyond this are treated as malformed.
pub const MAX_BOOK_CHAPTERS: u32 = 200;

/// Catalog entry for one book, as supplied by the content provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCatalogEntry {
    /// Number of the first chapter (usually 1).
    pub first_chapter: u32,
    /// Total number of chapters.
    pub chapter_count: u32,
    /// Display name, e.g. `"Matthew"`.
    pub common_name: String,
}

/// Book id → catalog entry, keyed by canonical book id.
pub type BookCatalog = HashMap<String, BookCatalogEntry>;

/// One chapter-level reading item, before persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItemDraft {
    pub translation_id: String,
    pub book_id: String,
    pub chapter: u32,
    pub label: String,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Expand a scope into the ordered chapter item sequence for one translation.
///
/// Books in the scope that are missing from the catalog are skipped
/// silently, as are malformed entries: zero chapters, more than
/// [`MAX_BOOK_CHAPTERS`], or a chapter range that would overflow `u32`
/// (the catalog is client-supplied). For each valid book, one item is
/// emitted per chapter from `first_chapter` through
/// `first_chapter + chapter_count - 1`, book order following the scope
/// definition and chapters ascending. The label is
/// `"{common_name} {chapter}"`.
pub fn generate_plan_items(
    scope_id: &str,
    translation_id: &str,
    catalog: &BookCatalog,
) -> Vec<PlanItemDraft> {
    let mut items = Vec::new();
    for book_id in scope_books(scope_id) {
        let Some(entry) = catalog.get(*book_id) else {
            continue;
        };
        if entry.chapter_count == 0 || entry.chapter_count > MAX_BOOK_CHAPTERS {
            continue;
        }
        let Some(end) = entry.first_chapter.checked_add(entry.chapter_count) else {
            continue;
        };
        for chapter in entry.first_chapter..end {
            items.push(PlanItemDraft {
                translation_id: translation_id.to_string(),
                book_id: (*book_id).to_string(),
                chapter,
                label: format!("{} {}", entry.common_name, chapter),
            });
        }
    }
    items
}

/// Estimated days to finish `item_count` readings at `readings_per_day`.
///
/// Non-integer rates are truncated, then clamped to at least one reading
/// per day. An empty plan takes zero days.
pub fn estimated_days(item_count: usize, readings_per_day: f64) -> u64 {
    if item_count == 0 {
        return 0;
    }
    let rate = (readings_per_day.trunc() as u64).max(1);
    (item_count as u64).div_ceil(rate)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
