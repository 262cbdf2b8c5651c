use crate::decl::{MethodSignature, TypeId};
use crate::resolve::ObligationSet;
use std::collections::HashMap;
use std::fmt;

/// One signature variant participating in a conflict, with the ancestors
/// that contributed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictVariant {
    pub signature: MethodSignature,
    pub sources: Vec<TypeId>,
}

/// The same method name demanded with incompatible shapes by different
/// ancestors. Reported once per method name, variants in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub method_name: String,
    pub variants: Vec<ConflictVariant>,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "method '{}' has {} incompatible signatures",
            self.method_name,
            self.variants.len()
        )
    }
}

/// Groups one type's obligations by method name and reports every name that
/// carries more than one distinct signature.
///
/// Obligation entries are already structurally deduplicated, so two entries
/// under one name means the parameter list or return type differ somewhere.
/// Identical signatures reaching a type through different ancestors collapse
/// upstream and are never reported here. Output order follows obligation
/// discovery order, so repeated runs yield identical reports.
pub fn detect_conflicts(obligations: &ObligationSet) -> Vec<Conflict> {
    let mut name_order: Vec<&str> = Vec::new();
    let mut by_name: HashMap<&str, Vec<ConflictVariant>> = HashMap::new();

    for obligation in obligations {
        let name = obligation.signature.name.as_str();
        if !by_name.contains_key(name) {
            name_order.push(name);
        }
        by_name.entry(name).or_default().push(ConflictVariant {
            signature: obligation.signature.clone(),
            sources: obligation.sources.clone(),
        });
    }

    let mut found = Vec::new();
    for name in name_order {
        if let Some(variants) = by_name.remove(name) {
            if variants.len() > 1 {
                found.push(Conflict {
                    method_name: name.to_string(),
                    variants,
                });
            }
        }
    }
    found
}
