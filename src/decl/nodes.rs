use std::fmt;

/// Unique name of a declared type; stable for the lifetime of a resolution run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(String);

impl TypeId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Whether a declaration requires its methods (interface) or provides them (class).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Interface,
    Class,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Interface => write!(f, "interface"),
            DeclarationKind::Class => write!(f, "class"),
        }
    }
}

/// Method name plus ordered parameter types plus return type.
///
/// Equality is structural: two signatures with identical name, parameter list
/// and return type are the same obligation. The derived total order keeps set
/// membership and conflict reports deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodSignature {
    pub name: String,
    pub param_types: Vec<String>,
    pub return_type: String,
}

impl MethodSignature {
    pub fn new(
        name: impl Into<String>,
        param_types: Vec<String>,
        return_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_types,
            return_type: return_type.into(),
        }
    }

    /// Zero-argument signature, the common case in hierarchy fixtures.
    pub fn nullary(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self::new(name, Vec::new(), return_type)
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}({})",
            self.return_type,
            self.name,
            self.param_types.join(", ")
        )
    }
}

/// One interface or class declaration. Immutable once stored.
///
/// `super_class` is only meaningful for classes (classes are
/// single-inheritance); `interfaces` holds the `implements` list of a class
/// or the `extends` list of an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub id: TypeId,
    pub kind: DeclarationKind,
    pub methods: Vec<MethodSignature>,
    pub super_class: Option<TypeId>,
    pub interfaces: Vec<TypeId>,
}

impl TypeDeclaration {
    pub fn interface(id: impl Into<TypeId>) -> Self {
        Self {
            id: id.into(),
            kind: DeclarationKind::Interface,
            methods: Vec::new(),
            super_class: None,
            interfaces: Vec::new(),
        }
    }

    pub fn class(id: impl Into<TypeId>) -> Self {
        Self {
            id: id.into(),
            kind: DeclarationKind::Class,
            methods: Vec::new(),
            super_class: None,
            interfaces: Vec::new(),
        }
    }

    pub fn extends(mut self, id: impl Into<TypeId>) -> Self {
        match self.kind {
            DeclarationKind::Class => self.super_class = Some(id.into()),
            DeclarationKind::Interface => self.interfaces.push(id.into()),
        }
        self
    }

    pub fn implements(mut self, id: impl Into<TypeId>) -> Self {
        self.interfaces.push(id.into());
        self
    }

    pub fn method(mut self, signature: MethodSignature) -> Self {
        self.methods.push(signature);
        self
    }

    pub fn is_class(&self) -> bool {
        self.kind == DeclarationKind::Class
    }

    /// Direct supertypes in declared order: the superclass (if any) first,
    /// then the extended/implemented interfaces.
    pub fn supertypes(&self) -> impl Iterator<Item = &TypeId> {
        self.super_class.iter().chain(self.interfaces.iter())
    }
}

impl fmt::Display for TypeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)?;
        if let Some(sup) = &self.super_class {
            write!(f, " extends {}", sup)?;
        }
        if !self.interfaces.is_empty() {
            let names: Vec<&str> = self.interfaces.iter().map(TypeId::as_str).collect();
            let keyword = match self.kind {
                DeclarationKind::Interface => "extends",
                DeclarationKind::Class => "implements",
            };
            write!(f, " {} {}", keyword, names.join(", "))?;
        }
        Ok(())
    }
}
