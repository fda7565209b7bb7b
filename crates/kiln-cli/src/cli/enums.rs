//! Value enums accepted on the command line.

use clap::ValueEnum;
use kiln_config::BuildProfile;

/// Build profile to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Fast rebuilds, inline styles, no optimizers
    #[value(alias = "dev")]
    Development,
    /// Extracted styles, minimizers, code splitting
    #[value(alias = "prod")]
    Production,
}

impl From<Profile> for BuildProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Development => BuildProfile::Development,
            Profile::Production => BuildProfile::Production,
        }
    }
}
