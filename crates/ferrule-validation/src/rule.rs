//! Rule string parsing
//!
//! A rule string is a `|`-separated list of rule tokens. A token is a rule
//! name, optionally followed by `:` and a `,`-separated parameter list.

/// Separator between rule tokens in a rule string
pub const RULE_SEPARATOR: char = '|';
/// Separator between a rule name and its parameters
pub const PARAM_MARKER: char = ':';
/// Separator between parameters
pub const PARAM_SEPARATOR: char = ',';

/// A rule token split into its name and ordered parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    pub name: String,
    pub params: Vec<String>,
}

impl ParsedRule {
    /// A rule with no parameters
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Parse a single rule token.
    ///
    /// Only a token with exactly one `:` carries parameters. Any other token,
    /// including one with several colons, becomes a parameterless rule named
    /// by the whole token.
    pub fn parse(token: &str) -> Self {
        let parts: Vec<&str> = token.split(PARAM_MARKER).collect();
        match parts.as_slice() {
            [name, params] => Self {
                name: (*name).to_string(),
                params: params.split(PARAM_SEPARATOR).map(str::to_string).collect(),
            },
            _ => Self::bare(token),
        }
    }
}

/// Parse a single rule token into its name and parameters
pub fn parse_rule(token: &str) -> ParsedRule {
    ParsedRule::parse(token)
}

/// Split a rule string into its tokens, preserving declaration order
pub fn split_rules(rule_string: &str) -> Vec<&str> {
    rule_string.split(RULE_SEPARATOR).collect()
}
