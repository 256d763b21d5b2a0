use serde::{Deserialize, Serialize};
use std::fmt;

use super::ScalarError;

fn resolve(value: &str, base: Option<&url::Url>) -> Result<url::Url, ScalarError> {
    let parsed = match base {
        Some(base) => base.join(value),
        None => url::Url::parse(value),
    };
    parsed.map_err(|e| ScalarError::Unresolvable {
        value: value.to_string(),
        message: e.to_string(),
    })
}

macro_rules! opaque_string {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Parse the value as an absolute URL.
            pub fn resolve(&self) -> Result<url::Url, ScalarError> {
                resolve(&self.0, None)
            }

            /// Resolve the value relative to `base`.
            pub fn resolve_against(&self, base: &url::Url) -> Result<url::Url, ScalarError> {
                resolve(&self.0, Some(base))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

opaque_string! {
    /// A URI kept verbatim; it may be relative or a URN.
    Uri
}

opaque_string! {
    /// A locator kept verbatim until [`Url::resolve`] is asked for.
    Url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kept_verbatim() {
        let uri = Uri::new("urn:ebu:metadata-schema:ebucore");
        assert_eq!(serde_json::to_string(&uri).unwrap(), "\"urn:ebu:metadata-schema:ebucore\"");
        assert_eq!(uri.resolve().unwrap().scheme(), "urn");
    }

    #[test]
    fn test_relative_needs_base() {
        let url = Url::new("media/track.mp4");
        assert!(matches!(url.resolve(), Err(ScalarError::Unresolvable { .. })));

        let base = url::Url::parse("https://opencast.example.org/static/").unwrap();
        assert_eq!(
            url.resolve_against(&base).unwrap().as_str(),
            "https://opencast.example.org/static/media/track.mp4"
        );
    }
}
