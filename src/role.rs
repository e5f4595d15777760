use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::dataset::FixedLabels;
use crate::error::{Error, Result};

/// Role category of a player
///
/// The declaration order is the fixed label order used for probability rows and tie-breaking.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Duelist,
    Sentinel,
    Initiator,
    Controller,
}

const ROLES: [Role; 4] = [
    Role::Duelist,
    Role::Sentinel,
    Role::Initiator,
    Role::Controller,
];

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Duelist => "duelist",
            Role::Sentinel => "sentinel",
            Role::Initiator => "initiator",
            Role::Controller => "controller",
        }
    }
}

impl FixedLabels for Role {
    fn classes() -> &'static [Self] {
        &ROLES
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a role name, ignoring case and surrounding whitespace
impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        ROLES
            .iter()
            .find(|x| x.as_str() == name)
            .copied()
            .ok_or_else(|| Error::UnknownLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_order_matches_index() {
        for (i, role) in Role::classes().iter().enumerate() {
            assert_eq!(role.index(), i);
        }
        assert_eq!(Role::classes()[0], Role::Duelist);
    }

    #[test]
    fn parses_known_roles() -> Result<()> {
        assert_eq!("duelist".parse::<Role>()?, Role::Duelist);
        assert_eq!(" Controller ".parse::<Role>()?, Role::Controller);

        for role in Role::classes() {
            assert_eq!(role.to_string().parse::<Role>()?, *role);
        }

        Ok(())
    }

    #[test]
    fn unknown_role_is_a_data_error() {
        assert_eq!(
            "flex".parse::<Role>(),
            Err(Error::UnknownLabel("flex".to_string()))
        );
    }
}
