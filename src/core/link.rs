//! Link classification utilities.

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/about, /node/http/get).
    SiteRoot(&'a str),
    /// File-relative path (./intro, ../other).
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }

    /// Human-readable kind label for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::External(_) => "an external URL",
            Self::Fragment(_) => "a bare fragment",
            Self::SiteRoot(_) => "a site-root route",
            Self::FileRelative(_) => "a relative path",
        }
    }
}

/// A link is external when it starts with a URL scheme
/// (`https:`, `mailto:`, `tel:`, ...).
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
