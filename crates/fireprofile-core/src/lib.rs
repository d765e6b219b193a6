pub mod config;
pub mod error;
pub mod resolve;

pub use config::{ConfigStore, DomainRules, Profile, ProfileStore};
pub use error::{Error, Result};
pub use resolve::{MatchKind, Resolution};
