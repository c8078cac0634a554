use axum::http::Request;
use serde::Serialize;

use crate::error::Error;

/// Header naming the provider that issued the credential. The name is shared
/// by convention with the client libraries, so it must not change.
pub const AUTH_PROVIDER_HEADER: &str = "auth-provider";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ProviderKind {
    #[serde(rename = "auth0")]
    Auth0,
    #[serde(rename = "netlify")]
    Netlify,
    #[serde(rename = "goTrue")]
    GoTrue,
    #[serde(rename = "magicLink")]
    MagicLink,
    #[serde(rename = "firebase")]
    Firebase,
    #[serde(rename = "supabase")]
    Supabase,
    #[serde(rename = "custom")]
    Custom,
}

impl ProviderKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Auth0 => "auth0",
            ProviderKind::Netlify => "netlify",
            ProviderKind::GoTrue => "goTrue",
            ProviderKind::MagicLink => "magicLink",
            ProviderKind::Firebase => "firebase",
            ProviderKind::Supabase => "supabase",
            ProviderKind::Custom => "custom",
        }
    }

    /// Look up a provider by its header tag. Unrecognized tags return `None`.
    pub fn from_tag(tag: &str) -> Option<ProviderKind> {
        let kind = match tag {
            "auth0" => ProviderKind::Auth0,
            "netlify" => ProviderKind::Netlify,
            "goTrue" => ProviderKind::GoTrue,
            "magicLink" => ProviderKind::MagicLink,
            "firebase" => ProviderKind::Firebase,
            "supabase" => ProviderKind::Supabase,
            "custom" => ProviderKind::Custom,
            _ => return None,
        };

        Some(kind)
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKind::from_tag(s).ok_or_else(|| Error::UnknownProvider(s.to_string()))
    }
}

/// Read the provider header from a request. A missing header, a value that
/// isn't valid ASCII, or an unrecognized tag all read as "no provider".
pub fn provider_kind<B>(req: &Request<B>) -> Option<ProviderKind> {
    req.headers()
        .get(AUTH_PROVIDER_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(ProviderKind::from_tag)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::Request;

    use super::{provider_kind, ProviderKind, AUTH_PROVIDER_HEADER};
    use crate::error::Error;

    #[test]
    fn tag_round_trip() {
        let kinds = [
            ProviderKind::Auth0,
            ProviderKind::Netlify,
            ProviderKind::GoTrue,
            ProviderKind::MagicLink,
            ProviderKind::Firebase,
            ProviderKind::Supabase,
            ProviderKind::Custom,
        ];

        for kind in kinds {
            assert_eq!(ProviderKind::from_tag(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unrecognized_tag_fails_closed() {
        assert_eq!(ProviderKind::from_tag("passport"), None);
        assert_eq!(ProviderKind::from_tag(""), None);
        // Tags are case-sensitive.
        assert_eq!(ProviderKind::from_tag("Auth0"), None);
    }

    #[test]
    fn parse_for_config() {
        assert_matches!("custom".parse::<ProviderKind>(), Ok(ProviderKind::Custom));
        assert_matches!(
            "passport".parse::<ProviderKind>(),
            Err(Error::UnknownProvider(tag)) if tag == "passport"
        );
    }

    #[test]
    fn header_lookup() {
        let req = Request::builder()
            .header(AUTH_PROVIDER_HEADER, "netlify")
            .body(())
            .unwrap();
        assert_eq!(provider_kind(&req), Some(ProviderKind::Netlify));

        let req = Request::builder().body(()).unwrap();
        assert_eq!(provider_kind(&req), None);

        let req = Request::builder()
            .header(AUTH_PROVIDER_HEADER, "not-a-provider")
            .body(())
            .unwrap();
        assert_eq!(provider_kind(&req), None);
    }
}
