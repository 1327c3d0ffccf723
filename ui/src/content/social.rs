use std::collections::HashSet;

use super::{ContentError, INERT_HREF};

/// Brand glyphs available for social links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialIcon {
    XTwitter,
    LinkedIn,
    Instagram,
    Facebook,
}

impl SocialIcon {
    /// Stable name used for the glyph's CSS modifier class.
    pub fn name(self) -> &'static str {
        match self {
            Self::XTwitter => "x-twitter",
            Self::LinkedIn => "linkedin",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: SocialIcon,
    /// Accessible name of the link; also its render key.
    pub label: String,
    pub href: String,
}

impl SocialLink {
    pub fn new(icon: SocialIcon, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Ordered social links with unique labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinks {
    links: Vec<SocialLink>,
}

impl SocialLinks {
    pub fn new(links: Vec<SocialLink>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(links.len());
        for link in &links {
            if !seen.insert(link.label.as_str()) {
                return Err(ContentError::DuplicateLabel(link.label.clone()));
            }
        }
        Ok(Self { links })
    }

    /// The storefront's social row. Targets are placeholders until the
    /// accounts are published.
    pub fn storefront() -> Self {
        Self {
            links: vec![
                SocialLink::new(SocialIcon::XTwitter, "Twitter", INERT_HREF),
                SocialLink::new(SocialIcon::LinkedIn, "LinkedIn", INERT_HREF),
                SocialLink::new(SocialIcon::Instagram, "Instagram", INERT_HREF),
                SocialLink::new(SocialIcon::Facebook, "Facebook", INERT_HREF),
            ],
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SocialLink> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self::storefront()
    }
}

impl<'a> IntoIterator for &'a SocialLinks {
    type Item = &'a SocialLink;
    type IntoIter = std::slice::Iter<'a, SocialLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
