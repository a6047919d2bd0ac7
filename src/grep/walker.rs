use crate::cpp::cursor::{visit_children, VisitAction};
use crate::cpp::parser::ParsedSource;
use crate::grep::entry::{classify, DeclEntry};
use crate::grep::filter::FilterSpec;
use crate::grep::query::QuerySpec;

/// Walk one translation unit in pre-order, handing every declaration that
/// survives classify → filter → query to `on_entry`.
///
/// System-header and foreign-file nodes are skipped opaque (their subtrees
/// are never entered); every other node is descended into regardless of
/// whether it produced an entry, so match success never steers traversal.
pub fn walk<F>(parsed: &ParsedSource<'_>, filter: &FilterSpec, query: &QuerySpec, mut on_entry: F)
where
    F: FnMut(DeclEntry),
{
    visit_children(parsed.root_node(), parsed.source.as_bytes(), |cursor| {
        if cursor.is_in_system_header() || !cursor.is_in_primary_file() {
            return VisitAction::Continue;
        }
        if let Some(entry) = classify(cursor) {
            if filter.accepts(&entry) && query.matches(&entry.info().identifier) {
                on_entry(entry);
            }
        }
        VisitAction::Recurse
    });
}
