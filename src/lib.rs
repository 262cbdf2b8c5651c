//! Type Hierarchy Resolver (hierc)
//!
//! A resolver for Java-style type hierarchies: given interface and class
//! declarations related by extends/implements edges, it computes each type's
//! complete set of method obligations, detects signature conflicts across
//! ancestors, and checks whether concrete classes satisfy everything they
//! inherit (including through diamond-shaped interface hierarchies).
//!
//! ## Architecture
//!
//! - **parser**: lexing and parsing of declaration source into records
//! - **decl**: declaration records and the sealed store holding them
//! - **graph**: hierarchy graph construction and validation (closed world,
//!   supertype kinds, acyclicity)
//! - **resolve**: topological obligation resolution with per-type memoization
//! - **review**: advisory analyses (signature conflicts, satisfaction checks)
//! - **pipeline**: the staged `Resolution` driver
//! - **bin**: command-line interface
//!
//! ## Resolution flow
//!
//! ```text
//! Source -> Parser -> Declaration Store -> Hierarchy Graph -> Obligations
//!                                                               |
//!                                           {Conflicts, Satisfaction Reports}
//! ```

pub mod config;
pub mod decl;
pub mod error;
pub mod graph;
pub mod parser;
pub mod pipeline;
pub mod resolve;
pub mod review;

pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{Resolution, Stage};

use decl::{DeclarationKind, DeclarationStore, TypeDeclaration, TypeId};
use review::{Conflict, SatisfactionReport};

/// Parse declaration source into records without resolving anything.
pub fn parse_decls(source: &str) -> Result<Vec<TypeDeclaration>> {
    Ok(parser::parse_decls(source)?)
}

/// Run the pipeline over an already-parsed declaration batch.
///
/// Returns a `Resolution` at the `ObligationsResolved` stage, ready for
/// obligation queries, conflict detection and satisfaction checks.
pub fn resolve_decls(decls: Vec<TypeDeclaration>) -> Result<Resolution> {
    let mut store = DeclarationStore::new();
    for decl in decls {
        store.add(decl)?;
    }
    let mut resolution = Resolution::new(store);
    resolution.build_graph()?;
    resolution.resolve_obligations()?;
    Ok(resolution)
}

/// Parse declaration source and run the pipeline.
pub fn resolve_source(source: &str) -> Result<Resolution> {
    log::debug!("resolution start");
    let resolution = resolve_decls(parse_decls(source)?)?;
    log::debug!("resolution end: {} types", resolution.store().len());
    Ok(resolution)
}

/// Full analysis of one source: conflicts for every type, satisfaction
/// reports for every class, both in declaration order.
#[derive(Debug)]
pub struct Analysis {
    pub conflicts: Vec<(TypeId, Vec<Conflict>)>,
    pub reports: Vec<SatisfactionReport>,
}

impl Analysis {
    pub fn conflict_count(&self) -> usize {
        self.conflicts.iter().map(|(_, c)| c.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.conflict_count() == 0 && self.reports.iter().all(SatisfactionReport::is_satisfied)
    }
}

/// Parse, resolve and review a whole source.
///
/// Conflicts stay advisory data unless `config.strict` is set, in which case
/// any conflict fails the run.
pub fn analyze_source(source: &str, config: &Config) -> Result<Analysis> {
    let mut resolution = resolve_source(source)?;

    let types: Vec<(TypeId, DeclarationKind)> = resolution
        .store()
        .iter()
        .map(|d| (d.id.clone(), d.kind))
        .collect();

    let mut conflicts = Vec::new();
    let mut reports = Vec::new();
    for (id, kind) in types {
        let found = resolution.conflicts(&id)?;
        if !found.is_empty() {
            conflicts.push((id.clone(), found));
        }
        if kind == DeclarationKind::Class {
            reports.push(resolution.check(&id)?);
        }
    }

    let analysis = Analysis { conflicts, reports };
    if config.strict && analysis.conflict_count() > 0 {
        return Err(Error::StrictConflicts {
            count: analysis.conflict_count(),
        });
    }
    Ok(analysis)
}
