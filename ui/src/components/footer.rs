use crate::content::{MenuCategory, MenuMap, SocialLink, SocialLinks, FOOTER_LOGO_URL, INERT_HREF};
use crate::core::calendar;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;

use super::SocialGlyph;

/// Site-wide footer: brand block with social links, link columns, legal bar.
///
/// Mounted without arguments it renders the storefront content; `menu` and
/// `social` can be overridden to render other columns or networks.
#[component]
pub fn Footer(#[props(default)] menu: MenuMap, #[props(default)] social: SocialLinks) -> Element {
    i18n::init();

    let year = calendar::current_year().to_string();
    let copyright = t!("footer-copyright", year = year);
    let logo_alt = t!("footer-logo-alt");
    let tagline = t!("footer-tagline");

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    div { class: "footer__brand-mark",
                        img {
                            class: "footer__logo",
                            src: FOOTER_LOGO_URL,
                            alt: "{logo_alt}",
                        }
                        span { class: "footer__wordmark", "VINTAGE" }
                    }
                    p { class: "footer__tagline", "{tagline}" }
                    div { class: "footer__social",
                        for link in social.iter() {
                            {render_social_link(link)}
                        }
                    }
                }

                div { class: "footer__menu",
                    for category in menu.categories() {
                        {render_category(category)}
                    }
                }
            }

            div { class: "footer__bottom",
                div { class: "footer__legal",
                    a { class: "footer__legal-link", href: INERT_HREF, {t!("footer-privacy")} }
                    a { class: "footer__legal-link", href: INERT_HREF, {t!("footer-terms")} }
                }
                span { class: "footer__copyright", "{copyright}" }
            }
        }
    }
}

fn render_social_link(link: &SocialLink) -> Element {
    let SocialLink { icon, label, href } = link;

    rsx! {
        a {
            key: "{label}",
            class: "footer__social-link",
            aria_label: "{label}",
            href: "{href}",
            SocialGlyph { icon: *icon }
        }
    }
}

fn render_category(category: &MenuCategory) -> Element {
    let MenuCategory { title, items } = category;

    rsx! {
        div { key: "{title}", class: "footer__column",
            h3 { class: "footer__heading", "{title}" }
            ul { class: "footer__links",
                for item in items.iter() {
                    li {
                        a { class: "footer__link", href: INERT_HREF, "{item}" }
                    }
                }
            }
        }
    }
}
