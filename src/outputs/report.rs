//! Console report of entity statistics.

use crate::stats::{EntityStatistics, ranked};
use std::fmt::Write;

/// Render the report shown on stdout.
///
/// Document and entity totals, the mean per document (2 decimals), the
/// per-label table and the `top` most frequent entity texts.
pub fn render(stats: &EntityStatistics, top: usize) -> String {
    let mut out = String::new();
    writeln!(out, "Number of documents: {}", stats.num_docs).unwrap();
    writeln!(out, "Total entities: {}", stats.total_entities).unwrap();
    writeln!(out, "Mean entities per document: {:.2}", stats.avg_entities).unwrap();

    writeln!(out, "\nEntity types:").unwrap();
    for (label, count) in ranked(&stats.label_counts) {
        writeln!(out, "{label}: {count}").unwrap();
    }

    if top > 0 && !stats.text_counts.is_empty() {
        writeln!(out, "\nMost frequent entities:").unwrap();
        for (text, count) in ranked(&stats.text_counts).into_iter().take(top) {
            writeln!(out, "{text}: {count}").unwrap();
        }
    }
    out
}

pub fn display_results(stats: &EntityStatistics, top: usize) {
    print!("{}", render(stats, top));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn counts(items: &[(&str, usize)]) -> BTreeMap<String, usize> {
        items.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_render_empty() {
        let out = render(&EntityStatistics::default(), 10);
        assert!(out.contains("Number of documents: 0"));
        assert!(out.contains("Mean entities per document: 0.00"));
        assert!(!out.contains("Most frequent"));
    }

    #[test]
    fn test_render_labels_and_top_entities() {
        let stats = EntityStatistics {
            num_docs: 3,
            total_entities: 7,
            avg_entities: 7.0 / 3.0,
            label_counts: counts(&[("LOC", 4), ("ORG", 3)]),
            text_counts: counts(&[("France", 3), ("OMS", 2), ("Paris", 1), ("Inserm", 1)]),
        };
        let out = render(&stats, 2);

        assert!(out.contains("Mean entities per document: 2.33"));
        assert!(out.contains("LOC: 4\nORG: 3\n"));
        assert!(out.contains("France: 3\nOMS: 2\n"));
        assert!(!out.contains("Paris"));
    }
}
