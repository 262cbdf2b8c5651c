//! Hierarchy graph construction.
//!
//! Nodes are types, edges point from a type to its direct supertypes. The
//! build validates that the declaration set is closed-world, that every edge
//! respects Java's supertype-kind rules, and that the graph is acyclic.

use crate::decl::{DeclarationKind, DeclarationStore, TypeDeclaration, TypeId};
use std::collections::HashMap;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown supertype '{supertype}' referenced by '{referrer}'")]
    UnknownSupertype { referrer: TypeId, supertype: TypeId },
    #[error("class '{sub}' cannot extend interface '{sup}'")]
    ClassExtendsInterface { sub: TypeId, sup: TypeId },
    #[error("class '{sub}' cannot implement class '{sup}'")]
    ClassImplementsClass { sub: TypeId, sup: TypeId },
    #[error("interface '{sub}' cannot extend class '{sup}'")]
    InterfaceExtendsClass { sub: TypeId, sup: TypeId },
    #[error("inheritance cycle: {}", fmt_cycle(.path))]
    CycleDetected { path: Vec<TypeId> },
}

pub type Result<T> = std::result::Result<T, GraphError>;

fn fmt_cycle(path: &[TypeId]) -> String {
    let mut names: Vec<&str> = path.iter().map(TypeId::as_str).collect();
    if let Some(first) = names.first().copied() {
        names.push(first);
    }
    names.join(" -> ")
}

/// Immutable type hierarchy: a dense node arena in declaration order plus
/// direct-supertype edge lists (superclass first, then interfaces).
#[derive(Debug)]
pub struct HierarchyGraph {
    decls: Vec<TypeDeclaration>,
    index: HashMap<TypeId, usize>,
    supers: Vec<Vec<usize>>,
}

impl HierarchyGraph {
    /// Builds and validates the graph from a populated store.
    pub fn build(store: &DeclarationStore) -> Result<Self> {
        let decls: Vec<TypeDeclaration> = store.iter().cloned().collect();
        let mut index = HashMap::with_capacity(decls.len());
        for (i, decl) in decls.iter().enumerate() {
            index.insert(decl.id.clone(), i);
        }

        let mut supers = Vec::with_capacity(decls.len());
        for decl in &decls {
            supers.push(resolve_edges(decl, &decls, &index)?);
        }

        let graph = Self { decls, index, supers };
        graph.check_acyclic()?;
        log::debug!("hierarchy graph built: {} types", graph.len());
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Dense node index of a type, if declared.
    pub fn node(&self, id: &TypeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn decl(&self, node: usize) -> &TypeDeclaration {
        &self.decls[node]
    }

    pub fn decl_of(&self, id: &TypeId) -> Option<&TypeDeclaration> {
        self.node(id).map(|n| &self.decls[n])
    }

    /// Direct supertype nodes in declared order.
    pub fn supertypes_of(&self, node: usize) -> &[usize] {
        &self.supers[node]
    }

    /// Nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = usize> {
        0..self.decls.len()
    }

    /// Depth-first cycle check from every node, deterministic given the
    /// declaration order and declared supertype order.
    fn check_acyclic(&self) -> Result<()> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            OnPath,
            Done,
        }

        fn visit(
            graph: &HierarchyGraph,
            node: usize,
            marks: &mut [Mark],
            path: &mut Vec<usize>,
        ) -> Result<()> {
            marks[node] = Mark::OnPath;
            path.push(node);
            for &sup in graph.supertypes_of(node) {
                match marks[sup] {
                    Mark::Done => {}
                    Mark::Unvisited => visit(graph, sup, marks, path)?,
                    Mark::OnPath => {
                        // Minimal cycle: from the first revisited node to here.
                        let start = path.iter().position(|&n| n == sup).unwrap_or(0);
                        let cycle = path[start..]
                            .iter()
                            .map(|&n| graph.decl(n).id.clone())
                            .collect();
                        return Err(GraphError::CycleDetected { path: cycle });
                    }
                }
            }
            path.pop();
            marks[node] = Mark::Done;
            Ok(())
        }

        let mut marks = vec![Mark::Unvisited; self.len()];
        let mut path = Vec::new();
        for node in self.nodes() {
            if marks[node] == Mark::Unvisited {
                visit(self, node, &mut marks, &mut path)?;
            }
        }
        Ok(())
    }
}

/// Resolves one declaration's supertype names against the store and enforces
/// the kind rules: classes extend classes and implement interfaces,
/// interfaces extend interfaces.
fn resolve_edges(
    decl: &TypeDeclaration,
    decls: &[TypeDeclaration],
    index: &HashMap<TypeId, usize>,
) -> Result<Vec<usize>> {
    let mut edges = Vec::with_capacity(decl.interfaces.len() + 1);

    if let Some(sup) = &decl.super_class {
        let node = lookup(decl, sup, index)?;
        if decls[node].kind == DeclarationKind::Interface {
            return Err(GraphError::ClassExtendsInterface {
                sub: decl.id.clone(),
                sup: sup.clone(),
            });
        }
        edges.push(node);
    }

    for sup in &decl.interfaces {
        let node = lookup(decl, sup, index)?;
        if decls[node].kind == DeclarationKind::Class {
            return Err(match decl.kind {
                DeclarationKind::Class => GraphError::ClassImplementsClass {
                    sub: decl.id.clone(),
                    sup: sup.clone(),
                },
                DeclarationKind::Interface => GraphError::InterfaceExtendsClass {
                    sub: decl.id.clone(),
                    sup: sup.clone(),
                },
            });
        }
        edges.push(node);
    }

    Ok(edges)
}

fn lookup(
    referrer: &TypeDeclaration,
    supertype: &TypeId,
    index: &HashMap<TypeId, usize>,
) -> Result<usize> {
    index.get(supertype).copied().ok_or_else(|| GraphError::UnknownSupertype {
        referrer: referrer.id.clone(),
        supertype: supertype.clone(),
    })
}
