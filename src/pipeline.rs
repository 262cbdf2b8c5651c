//! Resolution pipeline driver.
//!
//! One `Resolution` owns a sealed declaration store and advances through the
//! stages `Unbuilt -> GraphBuilt -> ObligationsResolved -> Checked`. Each
//! transition requires the prior stage to have succeeded; skipping a stage
//! fails with `InvalidStageError`. There are no internal retries: after a
//! failure the caller rebuilds from scratch with fixed input.

use crate::decl::{DeclarationStore, TypeId};
use crate::error::{Error, Result};
use crate::graph::HierarchyGraph;
use crate::resolve::{self, ObligationSet, Obligations};
use crate::review::{self, Conflict, SatisfactionReport};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Unbuilt,
    GraphBuilt,
    ObligationsResolved,
    Checked,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Unbuilt => "unbuilt",
            Stage::GraphBuilt => "graph-built",
            Stage::ObligationsResolved => "obligations-resolved",
            Stage::Checked => "checked",
        };
        write!(f, "{}", name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid stage: expected {expected}, found {found}")]
pub struct InvalidStageError {
    pub expected: Stage,
    pub found: Stage,
}

/// One resolution run over a fixed declaration set.
pub struct Resolution {
    store: DeclarationStore,
    graph: Option<HierarchyGraph>,
    obligations: Option<Obligations>,
    stage: Stage,
}

impl Resolution {
    /// Takes ownership of the declarations and seals the store; the run
    /// starts at `Unbuilt`.
    pub fn new(mut store: DeclarationStore) -> Self {
        store.seal();
        Self {
            store,
            graph: None,
            obligations: None,
            stage: Stage::Unbuilt,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn store(&self) -> &DeclarationStore {
        &self.store
    }

    /// `Unbuilt -> GraphBuilt`: validates supertype references, kinds and
    /// acyclicity.
    pub fn build_graph(&mut self) -> Result<()> {
        self.expect_stage(Stage::Unbuilt)?;
        self.graph = Some(HierarchyGraph::build(&self.store)?);
        self.stage = Stage::GraphBuilt;
        Ok(())
    }

    /// `GraphBuilt -> ObligationsResolved`: computes every type's
    /// obligation set in topological order.
    pub fn resolve_obligations(&mut self) -> Result<()> {
        self.expect_stage(Stage::GraphBuilt)?;
        let obligations = resolve::resolve(self.graph()?);
        self.obligations = Some(obligations);
        self.stage = Stage::ObligationsResolved;
        Ok(())
    }

    /// The resolved obligation set of one type.
    pub fn obligations_of(&self, id: &TypeId) -> Result<&ObligationSet> {
        self.expect_resolved()?;
        let graph = self.graph()?;
        self.obligations()?
            .of(graph, id)
            .ok_or_else(|| Error::UnknownType(id.clone()))
    }

    /// Signature conflicts among one type's obligations, as advisory data.
    pub fn conflicts(&self, id: &TypeId) -> Result<Vec<Conflict>> {
        Ok(review::detect_conflicts(self.obligations_of(id)?))
    }

    /// `ObligationsResolved -> Checked`: satisfaction report for one
    /// concrete class. Repeated checks stay in `Checked`.
    pub fn check(&mut self, id: &TypeId) -> Result<SatisfactionReport> {
        self.expect_resolved()?;
        let report = review::check(self.graph()?, self.obligations()?, id)?;
        self.stage = Stage::Checked;
        Ok(report)
    }

    pub fn hierarchy(&self) -> Result<&HierarchyGraph> {
        self.expect_at_least(Stage::GraphBuilt)?;
        self.graph()
    }

    fn graph(&self) -> Result<&HierarchyGraph> {
        self.graph.as_ref().ok_or_else(|| Error::Internal {
            message: "hierarchy graph missing after build stage".to_string(),
        })
    }

    fn obligations(&self) -> Result<&Obligations> {
        self.obligations.as_ref().ok_or_else(|| Error::Internal {
            message: "obligation sets missing after resolve stage".to_string(),
        })
    }

    fn expect_stage(&self, expected: Stage) -> std::result::Result<(), InvalidStageError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(InvalidStageError {
                expected,
                found: self.stage,
            })
        }
    }

    fn expect_at_least(&self, expected: Stage) -> std::result::Result<(), InvalidStageError> {
        if self.stage >= expected {
            Ok(())
        } else {
            Err(InvalidStageError {
                expected,
                found: self.stage,
            })
        }
    }

    fn expect_resolved(&self) -> std::result::Result<(), InvalidStageError> {
        self.expect_at_least(Stage::ObligationsResolved)
    }
}
