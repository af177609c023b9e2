//! Property-based tests for winpatable
//!
//! These tests verify:
//! - Catalog lookup is case-insensitive and entries are well-formed
//! - Resolver output is deterministic and respects every dependency
//! - Cycles are always reported, never looped on
//! - REGEDIT4 value formatting
//! - Environment layering precedence

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use winpatable::logic::environment::{compose_layers, EnvMap};
use winpatable::{resolve_keys, ApplicationEntry, Catalog, RegistryValue, WinpatableError};

// =============================================================================
// Catalog
// =============================================================================

proptest! {
    /// Any casing of a catalog key finds the lowercase entry
    #[test]
    fn catalog_lookup_any_case(idx in 0usize..55, mask in any::<u64>()) {
        let catalog = Catalog::builtin();
        let entry = &catalog.list_all()[idx % catalog.len()];
        let mixed: String = entry
            .key
            .chars()
            .enumerate()
            .map(|(i, c)| if mask >> (i % 64) & 1 == 1 { c.to_ascii_uppercase() } else { c })
            .collect();

        let found = catalog.get(&mixed).expect("lookup by mixed case");
        prop_assert_eq!(&found.key, &entry.key.to_lowercase());

        let unique: BTreeSet<&String> = found.required_dlls.iter().collect();
        prop_assert_eq!(unique.len(), found.required_dlls.len());
    }

    /// Lookup never panics on arbitrary input
    #[test]
    fn catalog_lookup_arbitrary(key in ".*") {
        let catalog = Catalog::builtin();
        if let Some(entry) = catalog.get(&key) {
            prop_assert_eq!(&entry.key, &key.trim().to_lowercase());
        }
    }
}

// =============================================================================
// Resolver
// =============================================================================

const NODES: usize = 8;

/// Catalog k0..k7 where each entry may depend on lower-numbered entries.
fn dag_catalog(edges: &[(usize, usize)]) -> Catalog {
    let mut deps: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for &(from, to) in edges {
        let (from, to) = (from.max(to), from.min(to));
        if from != to {
            let dep = format!("k{}", to);
            let list = deps.entry(from).or_default();
            if !list.contains(&dep) {
                list.push(dep);
            }
        }
    }

    let entries = (0..NODES)
        .map(|i| {
            let key = format!("k{}", i);
            let dep_refs: Vec<&str> = deps
                .get(&i)
                .map(|d| d.iter().map(String::as_str).collect())
                .unwrap_or_default();
            ApplicationEntry::new(key.clone(), key.to_uppercase(), format!("{}.exe", key))
                .depending_on(&dep_refs)
        })
        .collect();
    Catalog::new(entries).expect("valid fixture catalog")
}

fn edges_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..NODES, 0..NODES), 0..16)
}

fn request_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..NODES, 0..12)
}

proptest! {
    /// Every dependency inside the request comes before its dependent
    #[test]
    fn resolver_respects_dependencies(edges in edges_strategy(), request in request_strategy()) {
        let catalog = dag_catalog(&edges);
        let graph = catalog.dependency_graph();
        let keys: Vec<String> = request.iter().map(|i| format!("k{}", i)).collect();

        let order = resolve_keys(&catalog, &keys, &graph).expect("acyclic graph resolves");

        let requested: BTreeSet<&String> = keys.iter().collect();
        prop_assert_eq!(order.len(), requested.len());

        for (pos, key) in order.iter().enumerate() {
            for dep in graph.get(key).into_iter().flatten() {
                if let Some(dep_pos) = order.iter().position(|k| k == dep) {
                    prop_assert!(dep_pos < pos, "{} must precede {}", dep, key);
                }
            }
        }
    }

    /// Same request in any order gives the same plan
    #[test]
    fn resolver_is_deterministic(edges in edges_strategy(), request in request_strategy()) {
        let catalog = dag_catalog(&edges);
        let graph = catalog.dependency_graph();
        let keys: Vec<String> = request.iter().map(|i| format!("k{}", i)).collect();
        let mut reversed = keys.clone();
        reversed.reverse();

        let first = resolve_keys(&catalog, &keys, &graph).unwrap();
        let again = resolve_keys(&catalog, &keys, &graph).unwrap();
        let other = resolve_keys(&catalog, &reversed, &graph).unwrap();
        prop_assert_eq!(&first, &again);
        prop_assert_eq!(&first, &other);
    }

    /// A requested ring of any length is reported as a cycle naming all members
    #[test]
    fn resolver_reports_rings(len in 1usize..NODES) {
        let catalog = dag_catalog(&[]);
        let graph: BTreeMap<String, BTreeSet<String>> = (0..len)
            .map(|i| (format!("k{}", i), BTreeSet::from([format!("k{}", (i + 1) % len)])))
            .collect();
        let keys: Vec<String> = (0..len).map(|i| format!("k{}", i)).collect();

        match resolve_keys(&catalog, &keys, &graph) {
            Err(WinpatableError::CyclicDependency(stuck)) => prop_assert_eq!(stuck, keys),
            other => prop_assert!(false, "expected cycle, got {:?}", other),
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

proptest! {
    /// DWORDs are `dword:` plus exactly 8 lowercase hex digits
    #[test]
    fn dword_format(n in any::<u32>()) {
        let text = RegistryValue::Dword(n).to_string();
        let hex = text.strip_prefix("dword:").expect("dword prefix");
        prop_assert_eq!(hex.len(), 8);
        prop_assert_eq!(hex, hex.to_lowercase());
        prop_assert_eq!(u32::from_str_radix(hex, 16).unwrap(), n);
    }

    /// Escaped strings never contain a bare quote and unescape to the input
    #[test]
    fn string_escaping(s in ".*") {
        let text = RegistryValue::String(s.clone()).to_string();
        let inner = &text[1..text.len() - 1];

        let mut unescaped = String::new();
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                let next = chars.next().expect("escape is followed by a char");
                prop_assert!(next == '\\' || next == '"');
                unescaped.push(next);
            } else {
                prop_assert_ne!(c, '"');
                unescaped.push(c);
            }
        }
        prop_assert_eq!(unescaped, s);
    }
}

// =============================================================================
// Environment
// =============================================================================

fn env_strategy() -> impl Strategy<Value = EnvMap> {
    prop::collection::btree_map("[A-D]", "[0-9]", 0..4)
}

proptest! {
    /// App overlay beats baseline, baseline beats the process environment
    #[test]
    fn environment_precedence(
        process in env_strategy(),
        baseline in env_strategy(),
        app in env_strategy(),
    ) {
        let env = compose_layers(process.clone(), &baseline, &app);

        for (key, value) in &env {
            let expected = app
                .get(key)
                .or_else(|| baseline.get(key))
                .or_else(|| process.get(key));
            prop_assert_eq!(Some(value), expected);
        }
        let all: BTreeSet<&String> = process.keys().chain(baseline.keys()).chain(app.keys()).collect();
        prop_assert_eq!(env.len(), all.len());
    }
}
