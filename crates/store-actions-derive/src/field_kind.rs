//! Field type analysis for code generation.

use syn::{GenericArgument, PathArguments, Type, TypePath};

/// The shape of a field's Rust type, as far as action generation cares.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A `Vec<T>`; carries the element type.
    Vec(Type),

    /// Anything else.
    Scalar,
}

impl FieldKind {
    /// Analyze a type and determine its kind.
    pub fn from_type(ty: &Type) -> Self {
        match ty {
            Type::Path(type_path) => Self::from_type_path(type_path),
            _ => FieldKind::Scalar,
        }
    }

    fn from_type_path(type_path: &TypePath) -> Self {
        let Some(segment) = type_path.path.segments.last() else {
            return FieldKind::Scalar;
        };

        if segment.ident == "Vec" {
            if let Some(inner) = extract_single_generic_arg(&segment.arguments) {
                return FieldKind::Vec(inner.clone());
            }
        }
        FieldKind::Scalar
    }

    /// Element type of a `Vec<T>` field.
    pub fn element(&self) -> Option<&Type> {
        match self {
            FieldKind::Vec(inner) => Some(inner),
            FieldKind::Scalar => None,
        }
    }
}

/// Extract a single generic type argument from path arguments.
fn extract_single_generic_arg(args: &PathArguments) -> Option<&Type> {
    match args {
        PathArguments::AngleBracketed(ab) => {
            if ab.args.len() == 1 {
                if let GenericArgument::Type(ty) = ab.args.first()? {
                    return Some(ty);
                }
            }
            None
        }
        _ => None,
    }
}
