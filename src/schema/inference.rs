//! Interface inference from JSON values

use super::types::{InterfaceDeclaration, TypeExpr};
use serde_json::{Map, Value};

/// Interface inferrer with configuration options
#[derive(Debug, Clone, Default)]
pub struct InterfaceInferrer {
    /// Expand nested objects into their own declarations
    nested_interfaces: bool,
}

impl InterfaceInferrer {
    /// Create an inferrer that types nested objects as `object`
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable child interface generation for nested objects
    #[must_use]
    pub fn with_nested_interfaces(mut self, enabled: bool) -> Self {
        self.nested_interfaces = enabled;
        self
    }

    /// Infer declarations for `value`; the first entry is always `name`
    ///
    /// Child declarations (nested mode only) follow their parent in
    /// depth-first order.
    pub fn infer(&self, value: &Value, name: &str) -> Vec<InterfaceDeclaration> {
        let mut out = Vec::new();
        self.infer_into(value, name, &mut out);
        out
    }

    fn infer_into(&self, value: &Value, name: &str, out: &mut Vec<InterfaceDeclaration>) {
        match value {
            Value::Object(map) => self.infer_object(map, name, out),
            // Scalars and arrays have no keys, so the root gets no fields
            _ => out.push(InterfaceDeclaration::new(name)),
        }
    }

    fn infer_object(
        &self,
        map: &Map<String, Value>,
        name: &str,
        out: &mut Vec<InterfaceDeclaration>,
    ) {
        let slot = out.len();
        out.push(InterfaceDeclaration::new(name));

        let mut children = Vec::new();
        let mut fields = Vec::with_capacity(map.len());
        for (key, val) in map {
            let child_name = format!("{name}{}", capitalize_first_letter(key));
            fields.push((key.clone(), self.type_of(val, &child_name, &mut children)));
        }

        out[slot].fields = fields;
        out.extend(children);
    }

    fn type_of(
        &self,
        value: &Value,
        child_name: &str,
        children: &mut Vec<InterfaceDeclaration>,
    ) -> TypeExpr {
        match value {
            Value::Null => TypeExpr::Any,
            Value::Bool(_) => TypeExpr::Boolean,
            Value::Number(_) => TypeExpr::Number,
            Value::String(_) => TypeExpr::String,
            Value::Array(items) => match items.first() {
                Some(first) => TypeExpr::array_of(self.type_of(first, child_name, children)),
                None => TypeExpr::array_of(TypeExpr::Any),
            },
            Value::Object(map) => self.object_type(map, child_name, children),
        }
    }

    fn object_type(
        &self,
        map: &Map<String, Value>,
        child_name: &str,
        children: &mut Vec<InterfaceDeclaration>,
    ) -> TypeExpr {
        if !self.nested_interfaces {
            return TypeExpr::Object;
        }

        // Repeated sampling of the same path (e.g. nested arrays) reuses the
        // first declaration
        if !children.iter().any(|d| d.name == child_name) {
            self.infer_object(map, child_name, children);
        }
        TypeExpr::Named(child_name.to_string())
    }
}

/// Infer a single flattened declaration (convenience function)
pub fn infer_interface(value: &Value, name: &str) -> InterfaceDeclaration {
    let mut declarations = InterfaceInferrer::new().infer(value, name);
    declarations.swap_remove(0)
}

/// Render declarations as consecutive `interface` blocks
pub fn render_declarations(declarations: &[InterfaceDeclaration]) -> String {
    declarations.iter().map(ToString::to_string).collect()
}

fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
