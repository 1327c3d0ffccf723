//! Shared UI crate for the Vintage storefront: footer content, chrome
//! components, localization and the theme stylesheet.

pub mod content;
pub mod core;
pub mod i18n;

mod theme;
pub use theme::{ThemeStylesheet, THEME_CSS, THEME_CSS_INLINE};

pub mod components {
    mod footer;
    pub use footer::Footer;

    mod navbar;
    pub use navbar::Navbar;

    mod social_icon;
    pub use social_icon::SocialGlyph;
}
