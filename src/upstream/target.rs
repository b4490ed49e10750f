//! The upstream base and relative path resolution.
//!
//! # Design Decisions
//! - Parsed once at startup, immutable afterwards
//! - Resolution is RFC 3986 relative reference resolution (`Url::join`):
//!   a leading `/` replaces the base path, otherwise the reference resolves
//!   against the base's directory
//! - A reference that resolves to a different origin is refused

use url::Url;

use crate::upstream::error::ForwardError;

/// The single upstream service every forwarded request goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upstream {
    base: Url,
}

impl Upstream {
    /// Parse the configured base URL.
    pub fn parse(base: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(base)?,
        })
    }

    /// The base URL all paths resolve against.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve `path` against the base.
    pub fn resolve(&self, path: &str) -> Result<Url, ForwardError> {
        let url = self
            .base
            .join(path)
            .map_err(|source| ForwardError::InvalidTarget {
                path: path.to_string(),
                source,
            })?;

        if url.origin() != self.base.origin() {
            return Err(ForwardError::OriginEscape {
                path: path.to_string(),
                url,
            });
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(base: &str) -> Upstream {
        Upstream::parse(base).unwrap()
    }

    #[test]
    fn relative_path_appends_to_base_directory() {
        let up = upstream("http://upstream.test/v1/");
        assert_eq!(up.resolve("songs").unwrap().as_str(), "http://upstream.test/v1/songs");
        assert_eq!(
            up.resolve("albums/tracks").unwrap().as_str(),
            "http://upstream.test/v1/albums/tracks"
        );
    }

    #[test]
    fn leading_slash_replaces_base_path() {
        let up = upstream("http://upstream.test/v1/");
        assert_eq!(up.resolve("/songs").unwrap().as_str(), "http://upstream.test/songs");
    }

    #[test]
    fn base_without_trailing_slash_replaces_last_segment() {
        let up = upstream("http://upstream.test/v1");
        assert_eq!(up.resolve("songs").unwrap().as_str(), "http://upstream.test/songs");
    }

    #[test]
    fn empty_path_is_the_base() {
        let up = upstream("https://upstream.test/api/");
        assert_eq!(up.resolve("").unwrap(), *up.base());
    }

    #[test]
    fn dot_segments_stay_inside_origin() {
        let up = upstream("http://upstream.test/v1/");
        assert_eq!(up.resolve("../search").unwrap().as_str(), "http://upstream.test/search");
    }

    #[test]
    fn absolute_or_scheme_relative_targets_are_refused() {
        let up = upstream("http://upstream.test/");
        assert!(matches!(
            up.resolve("http://elsewhere.test/x"),
            Err(ForwardError::OriginEscape { .. })
        ));
        assert!(matches!(
            up.resolve("//elsewhere.test/x"),
            Err(ForwardError::OriginEscape { .. })
        ));
    }

    #[test]
    fn same_origin_absolute_target_is_allowed() {
        let up = upstream("http://upstream.test/v1/");
        assert_eq!(
            up.resolve("http://upstream.test/other").unwrap().as_str(),
            "http://upstream.test/other"
        );
    }

    #[test]
    fn unjoinable_path_is_invalid_target() {
        let up = upstream("http://upstream.test/");
        assert!(matches!(
            up.resolve("http://[::1"),
            Err(ForwardError::InvalidTarget { .. })
        ));
    }
}
