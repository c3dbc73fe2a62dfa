//! Process variables.
//!
//! A [`Var`] is a handle to a declared variable, not a value. It is produced
//! by the builder (`var()` or a task's declared outputs) and consumed as a
//! flow condition or as a task input.

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

/// Type of a process variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VarType {
    Text,
    Boolean,
    Number,
    Date,
}

impl VarType {
    /// The engine type tag written into variable metadata.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Boolean => "boolean",
            Self::Number => "double",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a type tag names no known variable type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown var type: {tag}")]
pub struct UnknownVarType {
    pub tag: String,
}

impl FromStr for VarType {
    type Err = UnknownVarType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" | "text" => Ok(Self::Text),
            "boolean" => Ok(Self::Boolean),
            "double" | "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            other => Err(UnknownVarType {
                tag: other.to_string(),
            }),
        }
    }
}

/// Reference to a declared process variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Var {
    name: String,
    #[serde(rename = "type")]
    ty: VarType,
}

impl Var {
    pub fn new(name: impl Into<String>, ty: VarType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> VarType {
        self.ty
    }

    /// The variable in the engine's interpolation syntax, e.g. `${approved}`.
    pub fn reference(&self) -> String {
        format!("${{{}}}", self.name)
    }
}

/// Whether a declaration is consumed or produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A variable declared at process level or on a single element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: VarType,
    pub direction: Direction,
}

impl VarDeclaration {
    /// Declaration of a variable the owner consumes.
    pub fn input(var: &Var) -> Self {
        Self {
            name: var.name().to_string(),
            ty: var.ty(),
            direction: Direction::In,
        }
    }

    /// Declaration of a variable the owner produces.
    pub fn output(name: impl Into<String>, ty: VarType) -> Self {
        Self {
            name: name.into(),
            ty,
            direction: Direction::Out,
        }
    }

    pub fn is_input(&self) -> bool {
        self.direction == Direction::In
    }

    pub fn is_output(&self) -> bool {
        self.direction == Direction::Out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_type_tags() {
        assert_eq!(VarType::Text.tag(), "string");
        assert_eq!(VarType::Boolean.tag(), "boolean");
        assert_eq!(VarType::Number.tag(), "double");
        assert_eq!(VarType::Date.tag(), "date");
    }

    #[test]
    fn test_var_type_from_str() {
        assert_eq!("string".parse::<VarType>(), Ok(VarType::Text));
        assert_eq!("text".parse::<VarType>(), Ok(VarType::Text));
        assert_eq!("number".parse::<VarType>(), Ok(VarType::Number));
        assert_eq!("double".parse::<VarType>(), Ok(VarType::Number));
        assert_eq!("date".parse::<VarType>(), Ok(VarType::Date));
    }

    #[test]
    fn test_var_type_from_str_unknown() {
        let err = "integer".parse::<VarType>().unwrap_err();
        assert_eq!(err.tag, "integer");
        assert_eq!(err.to_string(), "Unknown var type: integer");
    }

    #[test]
    fn test_var_reference() {
        let var = Var::new("approved", VarType::Boolean);
        assert_eq!(var.reference(), "${approved}");
        assert_eq!(var.name(), "approved");
        assert_eq!(var.ty(), VarType::Boolean);
    }

    #[test]
    fn test_declarations() {
        let amount = Var::new("amount", VarType::Number);
        let input = VarDeclaration::input(&amount);
        assert!(input.is_input());
        assert_eq!(input.name, "amount");

        let output = VarDeclaration::output("isValid", VarType::Boolean);
        assert!(output.is_output());
        assert_eq!(output.direction.to_string(), "out");
    }
}
