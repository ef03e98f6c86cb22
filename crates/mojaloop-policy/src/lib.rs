pub mod bundle;
pub mod defaults;
pub mod emitter;
pub mod error;
pub mod matcher;
pub mod validator;

pub use bundle::{
    Gate, ImageMatchType, ImageReference, ImageSelector, MappingRule, Policy, PolicyBundle,
    PolicyRule, RuleAction, RuleParam, Whitelist, WhitelistItem,
};
pub use emitter::{generate, render, write_bundle};
pub use error::{PolicyError, Result};
pub use matcher::ImageMatcher;
pub use validator::BundleValidator;
