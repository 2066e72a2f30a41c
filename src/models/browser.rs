//! Build targets and release channels

use crate::config::REMOTE_RULES_BRANCHES;
use crate::error::BuildError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Browser the build tree is being packaged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Browser {
    Chromium,
    Edge,
    Safari,
    Firefox,
    FirefoxLegacy,
}

impl Browser {
    pub const ALL: [Browser; 5] = [
        Browser::Chromium,
        Browser::Edge,
        Browser::Safari,
        Browser::Firefox,
        Browser::FirefoxLegacy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Browser::Chromium => "chromium",
            Browser::Edge => "edge",
            Browser::Safari => "safari",
            Browser::Firefox => "firefox",
            Browser::FirefoxLegacy => "firefox-legacy",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Browser {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Browser::ALL
            .into_iter()
            .find(|b| b.name() == normalized)
            .ok_or_else(|| BuildError::UnknownBrowser(s.to_string()))
    }
}

/// Release channel name (release, beta, dev, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Branch(String);

impl Branch {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether Firefox builds on this branch may run remote JS rules.
    pub fn allows_remote_script_rules(&self) -> bool {
        REMOTE_RULES_BRANCHES.contains(&self.0.as_str())
    }
}

impl Default for Branch {
    fn default() -> Self {
        Self::new("release")
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Branch {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("chromium", Browser::Chromium)]
    #[test_case("Edge", Browser::Edge)]
    #[test_case("SAFARI", Browser::Safari)]
    #[test_case("firefox", Browser::Firefox)]
    #[test_case("firefox_legacy", Browser::FirefoxLegacy)]
    #[test_case("firefox-legacy", Browser::FirefoxLegacy)]
    fn test_parse_browser(input: &str, expected: Browser) {
        assert_eq!(input.parse::<Browser>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_browser() {
        let err = "netscape".parse::<Browser>().unwrap_err();
        assert!(matches!(err, BuildError::UnknownBrowser(name) if name == "netscape"));
    }

    #[test]
    fn test_browser_name_round_trips() {
        for browser in Browser::ALL {
            assert_eq!(browser.to_string().parse::<Browser>().unwrap(), browser);
        }
    }

    #[test_case("beta", true)]
    #[test_case("dev", true)]
    #[test_case("legacy", true)]
    #[test_case("dev-legacy", true)]
    #[test_case("release", false)]
    #[test_case("Beta", false)]
    #[test_case("", false)]
    fn test_remote_rules_branches(name: &str, expected: bool) {
        assert_eq!(Branch::new(name).allows_remote_script_rules(), expected);
    }
}
