//! Installation order resolver
//!
//! Turns a requested set of catalog keys into a safe installation order:
//! every declared prerequisite that is also part of the request is installed
//! before the entry that needs it.
//!
//! # Design
//!
//! - **Prerequisites outside the request** are assumed to be satisfied already
//! - **Deterministic**: among eligible keys, catalog declaration order wins
//! - **Pure logic**: no I/O, no side effects, only ordering
//! - **Bounded**: each pass must move one key; a pass that moves nothing means
//!   the remaining keys form (or wait on) a cycle
//!
//! # Resolution Rules
//!
//! | Situation                          | Result |
//! |------------------------------------|--------|
//! | Key absent from the catalog        | `UnknownApplication` |
//! | Same key requested twice           | Installed once |
//! | `visio` requested with `office`    | `office` first |
//! | `a -> b -> a` both requested       | `CyclicDependency([a, b])` |

use tracing::debug;

use crate::catalog::{ApplicationEntry, Catalog, DependencyGraph};
use crate::error::{Result, WinpatableError};

/// Resolve `request` into an installation plan.
///
/// Unknown keys are reported before any ordering happens, so an invalid
/// request never yields a partial plan.
pub fn resolve_order<'c, S: AsRef<str>>(
    catalog: &'c Catalog,
    request: &[S],
    graph: &DependencyGraph,
) -> Result<Vec<&'c ApplicationEntry>> {
    let mut remaining: Vec<&'c ApplicationEntry> = Vec::with_capacity(request.len());
    for key in request {
        let entry = catalog.require(key.as_ref())?;
        if !remaining.iter().any(|e| e.key == entry.key) {
            remaining.push(entry);
        }
    }

    // Tie-break on declaration order
    remaining.sort_by_key(|e| catalog.position(&e.key).unwrap_or(usize::MAX));

    let mut ordered = Vec::with_capacity(remaining.len());
    let passes = remaining.len();

    for _ in 0..passes {
        let eligible = remaining.iter().position(|entry| {
            graph.get(&entry.key).is_none_or(|prereqs| {
                prereqs
                    .iter()
                    .all(|p| !remaining.iter().any(|r| r.key == *p))
            })
        });

        match eligible {
            Some(idx) => {
                let entry = remaining.remove(idx);
                debug!("Resolved {} at position {}", entry.key, ordered.len());
                ordered.push(entry);
            }
            None => break,
        }
    }

    if !remaining.is_empty() {
        let stuck = remaining.iter().map(|e| e.key.clone()).collect();
        return Err(WinpatableError::CyclicDependency(stuck));
    }

    Ok(ordered)
}

/// Same as [`resolve_order`], returning only the keys.
pub fn resolve_keys<S: AsRef<str>>(
    catalog: &Catalog,
    request: &[S],
    graph: &DependencyGraph,
) -> Result<Vec<String>> {
    Ok(resolve_order(catalog, request, graph)?
        .into_iter()
        .map(|e| e.key.clone())
        .collect())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    fn fixture_catalog() -> Catalog {
        Catalog::new(vec![
            ApplicationEntry::new("a", "A", "a.exe"),
            ApplicationEntry::new("b", "B", "b.exe"),
            ApplicationEntry::new("c", "C", "c.exe"),
            ApplicationEntry::new("d", "D", "d.exe"),
        ])
        .unwrap()
    }

    fn graph(edges: &[(&str, &[&str])]) -> DependencyGraph {
        edges
            .iter()
            .map(|(k, deps)| {
                (
                    k.to_string(),
                    deps.iter().map(|d| d.to_string()).collect::<BTreeSet<_>>(),
                )
            })
            .collect()
    }

    #[test]
    fn test_office_before_visio() {
        let catalog = Catalog::builtin();
        let order = resolve_keys(&catalog, &["visio", "office"], &catalog.dependency_graph()).unwrap();
        assert_eq!(order, vec!["office", "visio"]);
    }

    #[test]
    fn test_prerequisite_outside_request_is_assumed_installed() {
        let catalog = Catalog::builtin();
        let order = resolve_keys(&catalog, &["visio"], &catalog.dependency_graph()).unwrap();
        assert_eq!(order, vec!["visio"]);
    }

    #[test]
    fn test_declaration_order_tie_break() {
        let catalog = fixture_catalog();
        let order = resolve_keys(&catalog, &["d", "b", "a"], &BTreeMap::new()).unwrap();
        assert_eq!(order, vec!["a", "b", "d"]);
    }

    #[test]
    fn test_chain_is_reversed() {
        let catalog = fixture_catalog();
        let g = graph(&[("a", &["b"]), ("b", &["c"]), ("c", &["d"])]);
        let order = resolve_keys(&catalog, &["a", "b", "c", "d"], &g).unwrap();
        assert_eq!(order, vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_two_node_cycle() {
        let catalog = fixture_catalog();
        let g = graph(&[("a", &["b"]), ("b", &["a"])]);
        match resolve_order(&catalog, &["a", "b"], &g) {
            Err(WinpatableError::CyclicDependency(keys)) => assert_eq!(keys, vec!["a", "b"]),
            other => panic!("expected CyclicDependency, got {:?}", other),
        }
    }

    #[test]
    fn test_self_cycle() {
        let catalog = fixture_catalog();
        let g = graph(&[("c", &["c"])]);
        let err = resolve_order(&catalog, &["c"], &g).unwrap_err();
        assert!(matches!(err, WinpatableError::CyclicDependency(keys) if keys == vec!["c"]));
    }

    #[test]
    fn test_cycle_outside_request_is_ignored() {
        let catalog = fixture_catalog();
        let g = graph(&[("a", &["b"]), ("b", &["a"])]);
        let order = resolve_keys(&catalog, &["a", "c"], &g).unwrap();
        assert_eq!(order, vec!["a", "c"]);
    }

    #[test]
    fn test_unknown_key_fails_before_ordering() {
        let catalog = Catalog::builtin();
        let err = resolve_order(&catalog, &["office", "photoshop2"], &catalog.dependency_graph())
            .unwrap_err();
        assert!(matches!(err, WinpatableError::UnknownApplication(k) if k == "photoshop2"));
    }

    #[test]
    fn test_duplicates_and_case_collapse() {
        let catalog = Catalog::builtin();
        let order =
            resolve_keys(&catalog, &["Office", "office", "OFFICE"], &catalog.dependency_graph())
                .unwrap();
        assert_eq!(order, vec!["office"]);
    }

    #[test]
    fn test_empty_request() {
        let catalog = Catalog::builtin();
        let empty: [&str; 0] = [];
        assert!(resolve_order(&catalog, &empty, &catalog.dependency_graph())
            .unwrap()
            .is_empty());
    }
}
