//! Validation of values against type specifications

use crate::error::TypeDefinitionError;
use crate::registry::{self, TypeDef};
use crate::spec::TypeSpec;
use crate::value::Value;

/// Check `value` against `spec`.
///
/// Tags resolve through the registry, composites expand to "one of" their
/// members, concrete types match the runtime type or a subtype, and lists
/// match if any member does. An empty list behaves like `any`.
///
/// Every tag in `spec` is resolved before matching, so an unknown tag fails
/// even when an earlier list member would have matched.
///
/// This is a pure predicate. Callers that treat `Null` as "unset" skip it
/// before calling.
///
/// # Errors
///
/// `TypeDefinitionError` if `spec` names a tag the registry does not know.
pub fn validate(value: &Value, spec: &TypeSpec) -> Result<bool, TypeDefinitionError> {
    ensure_known(spec)?;
    Ok(matches(value, spec))
}

/// Fail if any tag inside `spec` is unknown.
pub fn ensure_known(spec: &TypeSpec) -> Result<(), TypeDefinitionError> {
    match spec.tags().into_iter().find(|tag| !registry::is_known(tag)) {
        Some(tag) => Err(TypeDefinitionError::new(tag)),
        None => Ok(()),
    }
}

fn matches(value: &Value, spec: &TypeSpec) -> bool {
    match spec {
        TypeSpec::Tag(tag) => matches_tag(value, tag),
        TypeSpec::Concrete(ty) => ty.accepts(value),
        TypeSpec::OneOf(specs) if specs.is_empty() => true,
        TypeSpec::OneOf(specs) => specs.iter().any(|s| matches(value, s)),
    }
}

fn matches_tag(value: &Value, tag: &str) -> bool {
    match registry::resolve(tag) {
        Some(TypeDef::Concrete(ty)) => ty.accepts(value),
        Some(TypeDef::Composite(members)) => members.iter().any(|t| matches_tag(value, t)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueType;

    #[test]
    fn test_unknown_tag_in_list_fails_even_after_match() {
        let spec = TypeSpec::from(vec!["int", "wat"]);
        let err = validate(&Value::Integer(1), &spec).unwrap_err();
        assert_eq!(err.tag, "wat");
    }

    #[test]
    fn test_empty_list_accepts_everything() {
        let spec = TypeSpec::OneOf(vec![]);
        assert_eq!(validate(&Value::string("x"), &spec), Ok(true));
    }

    #[test]
    fn test_concrete_skips_registry() {
        let spec = TypeSpec::from(ValueType::Integer);
        assert_eq!(validate(&Value::Integer(1), &spec), Ok(true));
        assert_eq!(validate(&Value::Float(1.0), &spec), Ok(false));
    }
}
