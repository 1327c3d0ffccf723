//! Static storefront content that drives the footer: link columns and social links.
//!
//! Both structures are plain owned data, rebuilt on every render and dropped
//! afterwards. Constructors validate the invariants the footer relies on.

mod menu;
mod social;

pub use menu::{MenuCategory, MenuMap};
pub use social::{SocialIcon, SocialLink, SocialLinks};

use std::fmt;

/// Why a piece of footer content was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A menu category was declared with no items.
    EmptyCategory(String),
    /// The same category heading was declared twice.
    DuplicateCategory(String),
    /// Two social links share a label (labels double as render keys).
    DuplicateLabel(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory(title) => write!(f, "menu category `{title}` has no items"),
            Self::DuplicateCategory(title) => write!(f, "menu category `{title}` is declared twice"),
            Self::DuplicateLabel(label) => write!(f, "social link label `{label}` is used twice"),
        }
    }
}

impl std::error::Error for ContentError {}

/// Placeholder target for links that are not wired to a route yet.
pub const INERT_HREF: &str = "#";

/// Remote logo shown next to the navbar wordmark.
pub const NAVBAR_LOGO_URL: &str =
    "https://storage.googleapis.com/a1aa/image/5a06ef6b-27fd-470a-4532-63fe4fa2df8d.jpg";

/// Remote logo shown in the footer brand block.
pub const FOOTER_LOGO_URL: &str =
    "https://storage.googleapis.com/a1aa/image/3b6842ab-6b81-4b05-c444-1c40ae25855d.jpg";
