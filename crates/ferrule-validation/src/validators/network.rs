//! IP address and URL validators

use crate::registry::RuleContext;
use std::net::IpAddr;
use url::Url;

const URL_SCHEMES: &[&str] = &["http://", "https://"];

/// Passes for an IPv4 or IPv6 address literal
pub fn ip(ctx: &RuleContext<'_>) -> bool {
    ctx.value.parse::<IpAddr>().is_ok()
}

/// Passes when the value starts with an http or https scheme, in any case.
///
/// Nothing after the scheme is inspected; use `active_url` for a stricter check.
pub fn url(ctx: &RuleContext<'_>) -> bool {
    let lowered = ctx.value.to_lowercase();
    URL_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme))
}

/// Passes when the value is an http(s) URL whose host resolves.
///
/// Performs a blocking DNS lookup. Parse failures, missing hosts and
/// resolution errors all count as invalid.
pub fn active_url(ctx: &RuleContext<'_>) -> bool {
    if !url(ctx) {
        return false;
    }

    let parsed = match Url::parse(ctx.value) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::trace!(value = %ctx.value, error = %err, "active_url parse failed");
            return false;
        }
    };

    match parsed.socket_addrs(|| None) {
        Ok(addrs) => !addrs.is_empty(),
        Err(err) => {
            tracing::trace!(host = ?parsed.host_str(), error = %err, "active_url host did not resolve");
            false
        }
    }
}
