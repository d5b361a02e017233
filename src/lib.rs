//! Content auto-linking engine.
//!
//! Takes AI-generated (or hand-written) blog HTML plus a list of known
//! entities and inserts hyperlinks for mentioned entities without touching
//! existing markup. Three operations make up the public surface:
//!
//! - [`find_matches`]: detect which candidates a plain-text draft mentions,
//!   using diacritic- and case-insensitive containment.
//! - [`apply_links`]: wrap phrase occurrences in anchors inside an HTML
//!   fragment, honoring exclusion zones (existing anchors, citations, code)
//!   and a per-phrase insertion cap.
//! - [`reconcile`]: diff two HTML snapshots and report which permitted
//!   anchors the later one added.
//!
//! ```
//! use autolink::{apply_links, build_keyword_table, Candidate, Document, LinkOptions};
//!
//! let candidates = [Candidate::show("Wicked", "/shows/wicked")];
//! let entries = build_keyword_table(&candidates);
//!
//! let mut doc = Document::parse("<p>Wicked returns this fall.</p>");
//! let summary = apply_links(&mut doc, &entries, &LinkOptions::default());
//!
//! assert!(summary.contains("Wicked", "/shows/wicked"));
//! assert!(doc.to_html().contains(r#"<a href="/shows/wicked""#));
//! ```
//!
//! Enable the `tracing` cargo feature to get span-per-pass instrumentation
//! from the match applier.

pub mod detect;
pub mod dom;
pub mod keywords;
pub mod linker;
pub mod reconcile;
pub mod segment;
pub mod types;

pub use detect::{find_matches, CandidateMatch, MatchReport};
pub use dom::Document;
pub use keywords::{build_keyword_table, intent_phrases};
pub use linker::{apply_links, LinkOptions};
pub use reconcile::{collect_anchors, reconcile};
pub use types::{
    AnchorRecord, AppliedLink, Candidate, CandidateKind, InsertionSummary, IntentTag,
    KeywordEntry,
};
