use crate::decl::{DeclarationKind, MethodSignature, TypeId};
use crate::graph::HierarchyGraph;
use crate::resolve::{Obligation, Obligations};
use std::collections::HashSet;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("unknown type '{0}'")]
    UnknownType(TypeId),
    #[error("'{0}' is not a concrete type")]
    NotAConcreteType(TypeId),
}

pub type Result<T> = std::result::Result<T, CheckError>;

/// Obligations of a concrete class not covered by any provided method.
/// Empty means satisfied. Order follows obligation discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatisfactionReport {
    pub type_id: TypeId,
    pub missing: Vec<Obligation>,
}

impl SatisfactionReport {
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for SatisfactionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_satisfied() {
            write!(f, "{}: all obligations satisfied", self.type_id)
        } else {
            write!(f, "{}: {} unmet obligation(s)", self.type_id, self.missing.len())
        }
    }
}

/// Verifies that a concrete class provides an implementation for every
/// obligation in its resolved set.
///
/// Provided signatures come from the class itself and its ancestor classes
/// along the single-inheritance chain; interfaces never provide, only
/// require. Interfaces cannot be checked.
pub fn check(
    graph: &HierarchyGraph,
    obligations: &Obligations,
    id: &TypeId,
) -> Result<SatisfactionReport> {
    let node = graph
        .node(id)
        .ok_or_else(|| CheckError::UnknownType(id.clone()))?;
    if graph.decl(node).kind != DeclarationKind::Class {
        return Err(CheckError::NotAConcreteType(id.clone()));
    }

    // The graph build guarantees every super_class edge targets a class,
    // so this walk never leaves the class chain.
    let mut provided: HashSet<&MethodSignature> = HashSet::new();
    let mut current = Some(node);
    while let Some(n) = current {
        let decl = graph.decl(n);
        provided.extend(decl.methods.iter());
        current = decl.super_class.as_ref().and_then(|sup| graph.node(sup));
    }

    let missing: Vec<Obligation> = obligations
        .at(node)
        .iter()
        .filter(|obligation| !provided.contains(&obligation.signature))
        .cloned()
        .collect();

    Ok(SatisfactionReport {
        type_id: id.clone(),
        missing,
    })
}
