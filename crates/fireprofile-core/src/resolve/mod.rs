//! Domain resolution: decide which profile handles a host.
//!
//! Lookup is exact match first, then a parent-domain scan over the rules
//! in insertion order. The scan returns the first rule that is a parent of
//! the host, not the most specific one: with rules `example.com` then
//! `mail.example.com`, the host `a.mail.example.com` resolves through
//! `example.com`.

mod host;

pub use host::host_from_url;

use crate::config::ConfigStore;

/// How a host matched a domain rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The host is the rule's domain
    Exact,
    /// The rule's domain is a parent of the host
    Parent,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Parent => "parent",
        }
    }
}

/// A successful resolution, borrowing from the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// The rule key that matched
    pub domain: &'a str,
    pub profile: &'a str,
    pub kind: MatchKind,
}

/// Find the domain rule that applies to `host`
pub fn resolve<'a>(store: &'a ConfigStore, host: &str) -> Option<Resolution<'a>> {
    if let Some((domain, profile)) = store.domains.iter().find(|(d, _)| *d == host) {
        tracing::debug!("{} matched rule '{}' exactly", host, domain);
        return Some(Resolution {
            domain,
            profile,
            kind: MatchKind::Exact,
        });
    }

    let found = store
        .domains
        .iter()
        .find(|(domain, _)| is_parent_domain(domain, host));

    match found {
        Some((domain, profile)) => {
            tracing::debug!("{} matched parent rule '{}'", host, domain);
            Some(Resolution {
                domain,
                profile,
                kind: MatchKind::Parent,
            })
        }
        None => {
            tracing::debug!("No domain rule for {}", host);
            None
        }
    }
}

/// True if `host` ends with `"." + domain`
fn is_parent_domain(domain: &str, host: &str) -> bool {
    host.strip_suffix(domain)
        .is_some_and(|prefix| prefix.ends_with('.'))
}

/// The last two labels of `host`, used as the key when a choice is remembered.
///
/// `sub.example.com` gives `example.com`; a single-label host is returned
/// unchanged.
pub fn derive_parent_domain(host: &str) -> String {
    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() > 1 {
        parts[parts.len() - 2..].join(".")
    } else {
        host.to_string()
    }
}

/// The rule key to store when remembering a choice for `host`.
///
/// `None` for single-label hosts, which never get a remembered rule.
pub fn remembered_domain(host: &str) -> Option<String> {
    if host.contains('.') {
        Some(derive_parent_domain(host))
    } else {
        None
    }
}
