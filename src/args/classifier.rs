//! Argument classifier — raw args → classified args.

use std::ffi::{OsStr, OsString};

use crate::args::registry::ArgumentRule;

/// A classified argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedArg {
    /// Matched a rule; `carrier` goes in front of `arg`.
    Translated { carrier: String, arg: OsString },
    /// Forwarded as-is.
    Passthrough(OsString),
}

impl ClassifiedArg {
    /// Tokens this argument contributes to the final command line.
    pub fn into_tokens(self) -> Vec<OsString> {
        match self {
            ClassifiedArg::Translated { carrier, arg } => vec![OsString::from(carrier), arg],
            ClassifiedArg::Passthrough(arg) => vec![arg],
        }
    }
}

/// Classify a single argument: first matching rule wins.
pub fn classify_one(arg: &OsStr, rules: &[ArgumentRule]) -> ClassifiedArg {
    match rules.iter().find(|r| r.matches(arg)) {
        Some(rule) => ClassifiedArg::Translated {
            carrier: rule.carrier.to_string(),
            arg: arg.to_owned(),
        },
        None => ClassifiedArg::Passthrough(arg.to_owned()),
    }
}

/// Classify raw args against the rule table, preserving order.
pub fn classify(raw_args: &[OsString], rules: &[ArgumentRule]) -> Vec<ClassifiedArg> {
    raw_args.iter().map(|a| classify_one(a, rules)).collect()
}

/// Translate one argument into the tokens that replace it.
///
/// Never drops or rewrites the argument itself; a match only inserts
/// the carrier in front of it.
pub fn translate_argument(arg: &OsStr, rules: &[ArgumentRule]) -> Vec<OsString> {
    classify_one(arg, rules).into_tokens()
}
