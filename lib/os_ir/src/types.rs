//! Type descriptors for fields, parameters and return values.

use crate::errors::IrError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Type {
    /// `void` type, only valid for return types.
    Void,
    /// `boolean` type.
    Boolean,
    /// `byte` type.
    Byte,
    /// `short` type.
    Short,
    /// `char` type.
    Char,
    /// `int` type.
    Int,
    /// `long` type.
    Long,
    /// `float` type.
    Float,
    /// `double` type.
    Double,
    /// Array of the given type descriptor with the given number of dimensions,
    /// though it is invalid to have more than 255 dimensions.
    Array(usize, Box<Self>),
    /// Type of a fully-qualified class
    Class(String),
    /// A named generic type variable, declared either at method or class level.
    Var(String),
}

impl Type {
    #[inline]
    #[must_use]
    pub fn is_class(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    #[inline]
    #[must_use]
    pub fn is_var(&self) -> bool {
        matches!(self, Self::Var(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Boolean => write!(f, "boolean"),
            Self::Byte => write!(f, "byte"),
            Self::Short => write!(f, "short"),
            Self::Char => write!(f, "char"),
            Self::Int => write!(f, "int"),
            Self::Long => write!(f, "long"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
            Self::Array(n, t) => {
                write!(f, "{t}")?;
                for _ in 0..*n {
                    write!(f, "[]")?;
                }
                Ok(())
            }
            Self::Class(cl) => write!(f, "{cl}"),
            Self::Var(v) => write!(f, "var:{v}"),
        }
    }
}

impl FromStr for Type {
    type Err = IrError;

    /// Parses a java-like textual descriptor: primitive keywords, `[]`
    /// suffixes for arrays, a `var:` prefix for generic type variables,
    /// anything else is a fully-qualified class name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(elem) = s.strip_suffix("[]") {
            let mut dims = 1;
            let mut elem = elem;
            while let Some(inner) = elem.strip_suffix("[]") {
                dims += 1;
                elem = inner;
            }
            if dims > 255 {
                return Err(IrError::BadType(s.to_string()));
            }
            return Ok(Self::Array(dims, Box::new(elem.parse()?)));
        }
        Ok(match s {
            "" => return Err(IrError::BadType(s.to_string())),
            "void" => Self::Void,
            "boolean" => Self::Boolean,
            "byte" => Self::Byte,
            "short" => Self::Short,
            "char" => Self::Char,
            "int" => Self::Int,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            _ => match s.strip_prefix("var:") {
                Some(v) => Self::Var(v.to_string()),
                None => Self::Class(s.to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_primitives() {
        assert_eq!("int".parse::<Type>().unwrap(), Type::Int);
        assert_eq!("void".parse::<Type>().unwrap(), Type::Void);
        assert_eq!("boolean".parse::<Type>().unwrap(), Type::Boolean);
    }

    #[test]
    fn parse_class_and_var() {
        assert_eq!(
            "java/lang/String".parse::<Type>().unwrap(),
            Type::Class("java/lang/String".to_string())
        );
        assert_eq!(
            "var:T".parse::<Type>().unwrap(),
            Type::Var("T".to_string())
        );
    }

    #[test]
    fn parse_arrays() {
        assert_eq!(
            "int[]".parse::<Type>().unwrap(),
            Type::Array(1, Box::new(Type::Int))
        );
        assert_eq!(
            "java/lang/String[][]".parse::<Type>().unwrap(),
            Type::Array(2, Box::new(Type::Class("java/lang/String".to_string())))
        );
    }

    #[test]
    fn display_roundtrip() {
        for descr in ["int", "java/lang/Object", "long[][]", "var:E"] {
            let t: Type = descr.parse().unwrap();
            assert_eq!(format!("{t}"), descr);
        }
    }
}
