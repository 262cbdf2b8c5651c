//! Declaration records and the store they live in.
//!
//! A `TypeDeclaration` is the immutable input record for one interface or
//! class: its declared method signatures plus the supertypes it names. The
//! `DeclarationStore` collects every declaration of a run (in any order),
//! then seals; everything downstream is derived from it.

mod nodes;
mod store;

pub use nodes::{DeclarationKind, MethodSignature, TypeDeclaration, TypeId};
pub use store::{DeclarationStore, StoreError};
