//! Rule registry — single source of truth for translated flags.

use std::borrow::Cow;
use std::ffi::OsStr;

use crate::config::RuleConfig;

/// Backend-escape marker that hands a flag through clang to LLVM.
pub const MLLVM: &str = "-mllvm";

/// A prefix-match-and-expand rule for one raw argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentRule {
    /// Prefix the argument must start with (e.g., "-accept-").
    pub prefix: Cow<'static, str>,
    /// Token inserted immediately before a matching argument.
    pub carrier: Cow<'static, str>,
}

/// Build the complete rule table: built-in rules first, then `extra`.
pub fn rule_registry(extra: &[RuleConfig]) -> Vec<ArgumentRule> {
    let mut rules = vec![
        // ACCEPT pass options live in LLVM's option namespace.
        ArgumentRule {
            prefix: Cow::Borrowed("-accept-"),
            carrier: Cow::Borrowed(MLLVM),
        },
    ];
    rules.extend(extra.iter().map(|r| ArgumentRule {
        prefix: Cow::Owned(r.prefix.clone()),
        carrier: Cow::Owned(r.carrier.clone()),
    }));
    rules
}

impl ArgumentRule {
    /// Check if this rule matches the given argument.
    pub fn matches(&self, arg: &OsStr) -> bool {
        arg.as_encoded_bytes().starts_with(self.prefix.as_bytes())
    }
}
