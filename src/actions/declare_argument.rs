//! Launch argument declaration

use crate::substitution::LaunchContext;

/// Declaration of a named, overridable launch argument
#[derive(Debug, Clone, PartialEq)]
pub struct DeclareArgument {
    pub name: String,
    pub default: Option<String>,
    pub description: Option<String>,
}

impl DeclareArgument {
    /// Fill in the default value unless the name is already set.
    ///
    /// Overrides are seeded into the context before the walk, so a value
    /// that is already present always wins over the declared default.
    pub fn apply(&self, context: &mut LaunchContext) {
        if context.get_configuration(&self.name).is_some() {
            return;
        }

        if let Some(default) = &self.default {
            log::debug!("Argument '{}' defaulted to '{}'", self.name, default);
            context.set_configuration(self.name.clone(), default.clone());
        }
    }
}
