//! Declaration types

use std::fmt;

/// Structural type of a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Unknown: a `null` sample or the element of an empty array
    Any,
    String,
    Number,
    Boolean,
    /// Plain object that was not expanded
    Object,
    Array(Box<TypeExpr>),
    /// Reference to another generated declaration
    Named(String),
}

impl TypeExpr {
    /// Wrap this type as the element type of an array
    pub fn array_of(element: TypeExpr) -> Self {
        TypeExpr::Array(Box::new(element))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Any => write!(f, "any"),
            TypeExpr::String => write!(f, "string"),
            TypeExpr::Number => write!(f, "number"),
            TypeExpr::Boolean => write!(f, "boolean"),
            TypeExpr::Object => write!(f, "object"),
            TypeExpr::Array(inner) => write!(f, "{inner}[]"),
            TypeExpr::Named(name) => write!(f, "{name}"),
        }
    }
}

/// A named interface: ordered field name to type mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDeclaration {
    pub name: String,
    pub fields: Vec<(String, TypeExpr)>,
}

impl InterfaceDeclaration {
    /// Create an empty declaration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Look up the type of a field
    pub fn field(&self, name: &str) -> Option<&TypeExpr> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, ty)| ty)
    }

    /// Opening text of the rendered block, used for duplicate detection
    pub fn header(name: &str) -> String {
        format!("interface {name} {{")
    }
}

impl fmt::Display for InterfaceDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::header(&self.name))?;
        for (name, ty) in &self.fields {
            writeln!(f, "  {name}: {ty};")?;
        }
        writeln!(f, "}}")
    }
}
