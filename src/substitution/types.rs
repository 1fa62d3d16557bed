//! Substitution types

use crate::error::SubstitutionError;
use crate::substitution::context::LaunchContext;

/// Substitution enum representing one part of a deferred string
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution {
    /// Plain text (no substitution)
    Text(String),
    /// Launch configuration variable, resolved from the context
    LaunchConfiguration(String),
}

impl Substitution {
    /// Resolve substitution to string value
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        match self {
            Substitution::Text(s) => Ok(s.clone()),
            Substitution::LaunchConfiguration(name) => match context.get_configuration(name) {
                Some(value) => Ok(value.to_string()),
                None => Err(SubstitutionError::UndefinedConfiguration(name.clone())),
            },
        }
    }
}

/// Resolve list of substitutions to single string
pub fn resolve_substitutions(
    subs: &[Substitution],
    context: &LaunchContext,
) -> Result<String, SubstitutionError> {
    let mut result = String::new();
    for sub in subs {
        result.push_str(&sub.resolve(context)?);
    }
    Ok(result)
}

/// An ordered substitution chain, resolved lazily against a context.
///
/// Launch arguments are not known until the runtime applies command-line
/// overrides, so any value referencing one stays an `Expr` until resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub parts: Vec<Substitution>,
}

impl Expr {
    /// A literal expression with no deferred parts
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Substitution::Text(text.into())],
        }
    }

    /// An expression resolving to the named launch configuration
    pub fn configuration(name: impl Into<String>) -> Self {
        Self {
            parts: vec![Substitution::LaunchConfiguration(name.into())],
        }
    }

    /// True if the expression contains no deferred parts
    pub fn is_literal(&self) -> bool {
        self.parts
            .iter()
            .all(|part| matches!(part, Substitution::Text(_)))
    }

    /// The literal text, if the expression is a single text part
    pub fn as_literal(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [Substitution::Text(s)] => Some(s),
            _ => None,
        }
    }

    /// Resolve all parts against the context and concatenate them
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        resolve_substitutions(&self.parts, context)
    }
}
