//! Text fragments for the site's SEO files, built from catalog records.
//!
//! Pure functions: writing the results anywhere is the caller's job.

use crate::classify::{Classifier, Prioritizer};
use crate::keyword::Keyword;
use crate::manager::SemanticCore;
use crate::types::taxonomy::{Cluster, Priority};

/// Heading line of the keyword listing section.
pub const LISTING_HEADING: &str = "## Семантическое ядро";

/// Markdown section listing active phrases grouped by cluster.
///
/// Clusters appear in enumeration order and only when non-empty; phrases
/// within a cluster are sorted. The section starts with a blank-line
/// separator so it can be appended to existing text.
pub fn render_cluster_listing<'a>(keywords: impl IntoIterator<Item = &'a Keyword>) -> String {
    let mut grouped: Vec<(Cluster, Vec<&str>)> =
        Cluster::ALL.into_iter().map(|c| (c, Vec::new())).collect();

    for keyword in keywords.into_iter().filter(|k| k.is_active) {
        if let Some((_, phrases)) = grouped.iter_mut().find(|(c, _)| *c == keyword.cluster) {
            phrases.push(keyword.phrase.as_str());
        }
    }

    let mut section = format!("\n\n{LISTING_HEADING}\n\n");
    for (cluster, mut phrases) in grouped {
        if phrases.is_empty() {
            continue;
        }
        phrases.sort_unstable();

        section.push_str(&format!("### {}\n", cluster.title()));
        for phrase in phrases {
            section.push_str(&format!("- {phrase}\n"));
        }
        section.push('\n');
    }
    section
}

/// Put `section` into `existing`, replacing a previous listing.
///
/// A previous listing is everything from its heading line to the end of the
/// text. Trailing newlines before the section are dropped in both cases, so
/// splicing the same section again is a no-op. Without a previous listing,
/// `section` is appended.
pub fn splice_listing(existing: &str, section: &str) -> String {
    let lines: Vec<&str> = existing.split('\n').collect();
    let kept = match lines.iter().position(|l| l.trim() == LISTING_HEADING) {
        Some(pos) => lines[..pos].join("\n"),
        None => existing.to_string(),
    };
    format!("{}{section}", kept.trim_end_matches('\n'))
}

/// Comma-separated high and critical phrases, in catalog order, for a
/// `<meta name="keywords">` tag.
pub fn meta_keywords<'a>(keywords: impl IntoIterator<Item = &'a Keyword>, limit: usize) -> String {
    keywords
        .into_iter()
        .filter(|k| k.is_active && k.priority >= Priority::High)
        .take(limit)
        .map(|k| k.phrase.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl<C, P> SemanticCore<C, P>
where
    C: Classifier,
    P: Prioritizer,
{
    pub fn cluster_listing(&self) -> String {
        render_cluster_listing(self.store().iter())
    }

    /// [`meta_keywords`] capped at the configured limit.
    pub fn meta_keywords(&self) -> String {
        meta_keywords(self.store().iter(), self.config().meta_keyword_limit)
    }
}
