use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Host;

/// A named launch command template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub command: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }

    /// Build a profile from user input, trimming both fields.
    ///
    /// Blank name or command is rejected with [`Error::Validation`].
    pub fn from_input(name: &str, command: &str) -> Result<Self> {
        let name = name.trim();
        let command = command.trim();

        if name.is_empty() || command.is_empty() {
            return Err(Error::Validation(
                "Profile name and command must both be filled in".to_string(),
            ));
        }

        Ok(Self::new(name, command))
    }

    fn is_blank(&self) -> bool {
        self.name.trim().is_empty() || self.command.trim().is_empty()
    }
}

/// Normalize a domain typed by the user into the form URL hosts take.
///
/// The domain is lowercased and non-ASCII labels become punycode, so a rule
/// for `GitHub.com` matches `https://github.com/`. Blank or malformed input
/// is rejected with [`Error::Validation`].
pub fn domain_from_input(domain: &str) -> Result<String> {
    let domain = domain.trim();
    if domain.is_empty() {
        return Err(Error::Validation("Please enter a domain".to_string()));
    }

    Host::parse(domain)
        .map(|host| host.to_string())
        .map_err(|e| Error::Validation(format!("'{}' is not a valid domain: {}", domain, e)))
}

/// Domain to profile-name mapping that keeps insertion order.
///
/// Serialized as a JSON object. Overwriting an existing key keeps the
/// key's original position, and a document that repeats a key keeps the
/// last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainRules {
    rules: IndexMap<String, String>,
}

impl DomainRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, domain: &str) -> Option<&str> {
        self.rules.get(domain).map(String::as_str)
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.rules.contains_key(domain)
    }

    /// Insert or overwrite a rule, returning the previous profile name
    pub fn insert(&mut self, domain: String, profile: String) -> Option<String> {
        self.rules.insert(domain, profile)
    }

    pub fn remove(&mut self, domain: &str) -> Option<String> {
        self.rules.shift_remove(domain)
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        self.rules.retain(|d, p| keep(d.as_str(), p.as_str()));
    }

    /// Rules in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(d, p)| (d.as_str(), p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<D, P> FromIterator<(D, P)> for DomainRules
where
    D: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (D, P)>>(iter: I) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(d, p)| (d.into(), p.into()))
                .collect(),
        }
    }
}

/// Outcome of [`ConfigStore::remove_profile`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileRemoval {
    pub profiles: usize,
    pub domain_rules: usize,
}

/// The whole persisted configuration: profiles plus domain rules.
///
/// Domain rules are expected to name an existing profile, but only
/// [`ConfigStore::remove_profile`] cleans them up. Renaming a profile
/// leaves rules pointing at the old name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigStore {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub domains: DomainRules,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a profile. Duplicate names are allowed; lookups return the first.
    pub fn add_profile(&mut self, name: impl Into<String>, command: impl Into<String>) {
        self.profiles.push(Profile::new(name, command));
    }

    /// First profile with exactly this name
    pub fn find_profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Remove every profile called `name` and every domain rule targeting it
    pub fn remove_profile(&mut self, name: &str) -> ProfileRemoval {
        let profiles_before = self.profiles.len();
        self.profiles.retain(|p| p.name != name);

        let rules_before = self.domains.len();
        self.domains.retain(|_, profile| profile != name);

        let removal = ProfileRemoval {
            profiles: profiles_before - self.profiles.len(),
            domain_rules: rules_before - self.domains.len(),
        };
        tracing::debug!(
            "Removed {} profile(s) and {} domain rule(s) for '{}'",
            removal.profiles,
            removal.domain_rules,
            name
        );
        removal
    }

    /// Insert or overwrite the rule for `domain`. The profile name is not checked.
    pub fn set_domain_rule(
        &mut self,
        domain: impl Into<String>,
        profile: impl Into<String>,
    ) -> Option<String> {
        self.domains.insert(domain.into(), profile.into())
    }

    pub fn remove_domain_rule(&mut self, domain: &str) -> Option<String> {
        self.domains.remove(domain)
    }

    /// Replace the profile list wholesale.
    ///
    /// Entries are trimmed; any with a blank name or command are dropped
    /// and the rest keep their order. Returns how many were dropped.
    pub fn replace_all_profiles(&mut self, profiles: Vec<Profile>) -> usize {
        let total = profiles.len();
        self.profiles = profiles
            .into_iter()
            .filter(|p| !p.is_blank())
            .map(|p| Profile::new(p.name.trim(), p.command.trim()))
            .collect();
        total - self.profiles.len()
    }

    /// Domain rules whose profile name matches no configured profile
    pub fn dangling_rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.domains
            .iter()
            .filter(move |(_, profile)| self.find_profile(profile).is_none())
    }

    /// Number of domain rules pointing at `profile`
    pub fn rules_for(&self, profile: &str) -> usize {
        self.domains.iter().filter(|(_, p)| *p == profile).count()
    }
}
