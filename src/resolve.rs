//! Obligation resolution.
//!
//! Computes, for every type, the set of method signatures it must support:
//! its own declared signatures plus everything inherited from its supertypes.
//! Nodes are processed in topological order (supertypes before subtypes) so
//! each set is computed exactly once from already-finalized ancestor sets,
//! which keeps diamond inheritance at O(V+E) with no ancestor re-walk.

use crate::decl::{MethodSignature, TypeId};
use crate::graph::HierarchyGraph;
use std::collections::{HashMap, VecDeque};

/// One method signature a type must support, with the ancestors that declared
/// it (discovery order, deduplicated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obligation {
    pub signature: MethodSignature,
    pub sources: Vec<TypeId>,
}

/// The obligations of one type, in first-discovery order.
///
/// A duplicate signature arriving from two ancestors collapses to one entry;
/// only its source list grows. Signatures that differ in parameter list or
/// return type stay separate entries (the conflict detector groups those).
#[derive(Debug, Clone, Default)]
pub struct ObligationSet {
    entries: Vec<Obligation>,
    by_signature: HashMap<MethodSignature, usize>,
}

impl ObligationSet {
    fn insert(&mut self, signature: &MethodSignature, sources: &[TypeId]) {
        match self.by_signature.get(signature) {
            Some(&i) => {
                let known = &mut self.entries[i].sources;
                for source in sources {
                    if !known.contains(source) {
                        known.push(source.clone());
                    }
                }
            }
            None => {
                self.by_signature.insert(signature.clone(), self.entries.len());
                self.entries.push(Obligation {
                    signature: signature.clone(),
                    sources: sources.to_vec(),
                });
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obligation> {
        self.entries.iter()
    }

    pub fn contains(&self, signature: &MethodSignature) -> bool {
        self.by_signature.contains_key(signature)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ObligationSet {
    type Item = &'a Obligation;
    type IntoIter = std::slice::Iter<'a, Obligation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Resolved obligations for every node of a hierarchy graph; a write-once
/// arena indexed by graph node.
#[derive(Debug)]
pub struct Obligations {
    sets: Vec<ObligationSet>,
}

impl Obligations {
    pub(crate) fn at(&self, node: usize) -> &ObligationSet {
        &self.sets[node]
    }

    pub fn of(&self, graph: &HierarchyGraph, id: &TypeId) -> Option<&ObligationSet> {
        graph.node(id).map(|n| &self.sets[n])
    }
}

/// Resolves obligation sets for the whole graph.
///
/// Kahn-style pass: a node becomes ready once all its direct supertypes are
/// finalized. The ready queue is seeded in declaration order, so discovery
/// order is deterministic.
pub fn resolve(graph: &HierarchyGraph) -> Obligations {
    let n = graph.len();
    let mut pending = vec![0usize; n];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];
    for node in graph.nodes() {
        let sups = graph.supertypes_of(node);
        pending[node] = sups.len();
        for &sup in sups {
            dependents[sup].push(node);
        }
    }

    let mut ready: VecDeque<usize> = graph.nodes().filter(|&i| pending[i] == 0).collect();
    let mut sets = vec![ObligationSet::default(); n];
    let mut resolved = vec![false; n];

    while let Some(node) = ready.pop_front() {
        let mut set = ObligationSet::default();
        for &sup in graph.supertypes_of(node) {
            debug_assert!(resolved[sup], "supertype finalized before subtype");
            for obligation in sets[sup].iter() {
                set.insert(&obligation.signature, &obligation.sources);
            }
        }
        let decl = graph.decl(node);
        for signature in &decl.methods {
            set.insert(signature, std::slice::from_ref(&decl.id));
        }
        sets[node] = set;
        resolved[node] = true;
        for &dep in &dependents[node] {
            pending[dep] -= 1;
            if pending[dep] == 0 {
                ready.push_back(dep);
            }
        }
    }

    log::debug!("obligations resolved for {} types", n);
    Obligations { sets }
}
