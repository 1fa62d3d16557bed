//! Node launch action

use crate::error::SubstitutionError;
use crate::substitution::{Expr, LaunchContext};

/// A ROS 2 node process to launch
///
/// Built once by the configuration assembler and never mutated afterwards.
/// The external launch runtime consumes its resolved form to spawn the
/// process; nothing here starts or supervises anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub package: String,
    pub executable: String,
    pub name: Option<String>,
    pub output: Option<String>,
    pub parameters: Vec<Parameter>,
}

/// A named node parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: ParamValue,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Resolve the parameter value to its command-line literal
    pub fn render(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        self.value.render(context)
    }
}

/// Typed parameter value
///
/// The ROS parameter client parses command-line literals back into typed
/// values, so rendering must keep the type readable from the text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Expr),
}

impl ParamValue {
    /// Render the value as a ROS command-line literal
    pub fn render(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        match self {
            ParamValue::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
            ParamValue::Int(i) => Ok(i.to_string()),
            ParamValue::Float(f) => {
                // Always format floats with decimal point to preserve type information
                if f.fract() == 0.0 && f.is_finite() {
                    Ok(format!("{:.1}", f))
                } else {
                    Ok(f.to_string())
                }
            }
            ParamValue::Str(expr) => expr.resolve(context),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(Expr::literal(value))
    }
}

impl From<Expr> for ParamValue {
    fn from(value: Expr) -> Self {
        ParamValue::Str(value)
    }
}
