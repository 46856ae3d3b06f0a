//! Logical actions that key combos can be bound to

use std::fmt;
use std::str::FromStr;

/// A logical hub command triggered when its combo is satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Terminate the hub
    CloseApp,
}

impl Action {
    /// Every action, in declaration order
    pub const ALL: [Action; 1] = [Action::CloseApp];

    /// Name of the `keybinds` entry in hub settings that holds this action's combo
    pub fn settings_key(self) -> &'static str {
        match self {
            Action::CloseApp => "Escape",
        }
    }

    /// Reverse of [`Action::settings_key`]
    pub fn from_settings_key(key: &str) -> Option<Action> {
        Self::ALL.into_iter().find(|a| a.settings_key() == key)
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::CloseApp => "CloseApp",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|a| a.name() == s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_key_roundtrip() {
        assert_eq!(Action::CloseApp.settings_key(), "Escape");
        assert_eq!(Action::from_settings_key("Escape"), Some(Action::CloseApp));
        assert_eq!(Action::from_settings_key("escape"), None);
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(Action::from_str("CloseApp"), Ok(Action::CloseApp));
        assert!(Action::from_str("Quit").is_err());
        assert_eq!(Action::CloseApp.to_string(), "CloseApp");
    }
}
