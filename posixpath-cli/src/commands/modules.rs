//! Command to list registered module names.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use posixpath::registry;

/// List the names the path module can be looked up by.
#[derive(Args)]
pub struct ModulesCommand {
    /// Only check whether this name is registered (exit code 6 if not)
    #[arg(long, value_name = "NAME")]
    pub check: Option<String>,
}

impl ModulesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let registry = registry::global();

        if let Some(name) = self.check {
            registry.require(&name)?;
            return global.print_value(&name);
        }

        for name in registry.names() {
            global.print_value(name)?;
        }
        Ok(())
    }
}
