//! Type specifications attached to setting keys

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::registry;
use crate::value::ValueType;

/// What a setting value is checked against.
///
/// A spec is a registry tag, a concrete type identity, or a list of
/// either ("one of"). The default is the `any` tag.
///
/// # Example
///
/// ```
/// use configtree::{TypeSpec, ValueType};
///
/// let spec = TypeSpec::from(vec![TypeSpec::from("int"), ValueType::String.into()]);
/// assert_eq!(spec.to_string(), "[int, String]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    /// A registry tag such as `int` or `numeric`
    Tag(String),

    /// A concrete type, checked without the registry
    Concrete(ValueType),

    /// Matches if any member matches
    OneOf(Vec<TypeSpec>),
}

impl Default for TypeSpec {
    fn default() -> Self {
        Self::any()
    }
}

impl TypeSpec {
    /// The universal `any` tag
    pub fn any() -> Self {
        TypeSpec::Tag("any".to_string())
    }

    /// Whether this spec is exactly the `any` tag
    pub fn is_any(&self) -> bool {
        matches!(self, TypeSpec::Tag(tag) if tag == "any")
    }

    /// Every tag named in this spec, depth-first
    pub fn tags(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_tags(&mut out);
        out
    }

    fn collect_tags<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            TypeSpec::Tag(tag) => out.push(tag),
            TypeSpec::Concrete(_) => {}
            TypeSpec::OneOf(specs) => specs.iter().for_each(|s| s.collect_tags(out)),
        }
    }

    /// Interpret a written name: known tags stay tags, type names become
    /// concrete identities, anything else is kept as an (unknown) tag.
    pub fn parse(name: &str) -> Self {
        if registry::is_known(name) {
            return TypeSpec::Tag(name.to_string());
        }
        match ValueType::parse(name) {
            Some(ty) => TypeSpec::Concrete(ty),
            None => TypeSpec::Tag(name.to_string()),
        }
    }
}

impl From<&str> for TypeSpec {
    fn from(tag: &str) -> Self {
        TypeSpec::Tag(tag.to_string())
    }
}

impl From<String> for TypeSpec {
    fn from(tag: String) -> Self {
        TypeSpec::Tag(tag)
    }
}

impl From<ValueType> for TypeSpec {
    fn from(ty: ValueType) -> Self {
        TypeSpec::Concrete(ty)
    }
}

impl<T: Into<TypeSpec>> From<Vec<T>> for TypeSpec {
    fn from(specs: Vec<T>) -> Self {
        TypeSpec::OneOf(specs.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Tag(tag) => f.write_str(tag),
            TypeSpec::Concrete(ty) => f.write_str(ty.name()),
            TypeSpec::OneOf(specs) => {
                write!(f, "[")?;
                for (i, spec) in specs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", spec)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Serialize for TypeSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TypeSpec::Tag(tag) => serializer.serialize_str(tag),
            TypeSpec::Concrete(ty) => serializer.serialize_str(ty.name()),
            TypeSpec::OneOf(specs) => specs.serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSpec {
    One(String),
    Many(Vec<TypeSpec>),
}

impl<'de> Deserialize<'de> for TypeSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawSpec::deserialize(deserializer)? {
            RawSpec::One(name) => TypeSpec::parse(&name),
            RawSpec::Many(specs) => TypeSpec::OneOf(specs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_any() {
        assert!(TypeSpec::default().is_any());
        assert!(!TypeSpec::from("int").is_any());
    }

    #[test]
    fn test_parse_distinguishes_tags_and_types() {
        assert_eq!(TypeSpec::parse("int"), TypeSpec::from("int"));
        assert_eq!(TypeSpec::parse("Integer"), TypeSpec::from(ValueType::Integer));
        assert_eq!(
            TypeSpec::parse("Endpoint"),
            TypeSpec::from(ValueType::custom("Endpoint"))
        );
        assert_eq!(TypeSpec::parse("nope"), TypeSpec::from("nope"));
    }

    #[test]
    fn test_tags_walks_lists() {
        let spec = TypeSpec::from(vec![
            TypeSpec::from("int"),
            TypeSpec::from(ValueType::Float),
            TypeSpec::from(vec!["str", "sym"]),
        ]);
        assert_eq!(spec.tags(), vec!["int", "str", "sym"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let spec = TypeSpec::from(vec![
            TypeSpec::from("numeric"),
            TypeSpec::from(ValueType::custom("Endpoint")),
        ]);
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"["numeric","Endpoint"]"#);
        let back: TypeSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
