use crate::content::NAVBAR_LOGO_URL;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// Fixed top bar: logo, catalogue search, account actions, language indicator.
///
/// Nothing here is wired yet. The search input is uncontrolled and has no
/// submit handler, both account buttons are plain `type="button"` elements,
/// and the "EN" language indicator is static text with a decorative caret.
#[component]
pub fn Navbar() -> Element {
    i18n::init();

    let logo_alt = t!("nav-logo-alt");
    let placeholder = t!("nav-search-placeholder");

    #[cfg(debug_assertions)]
    dioxus::logger::tracing::debug!("Navbar render");

    rsx! {
        header { id: "navbar", class: "navbar",
            nav { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    img {
                        class: "navbar__logo",
                        src: NAVBAR_LOGO_URL,
                        alt: "{logo_alt}",
                    }
                    span { class: "navbar__wordmark", "Vintage" }
                }

                div { class: "navbar__search",
                    input {
                        r#type: "search",
                        class: "navbar__search-input",
                        placeholder: "{placeholder}",
                    }
                }

                div { class: "navbar__actions",
                    button { r#type: "button", class: "button button--outline",
                        {t!("nav-login")}
                    }
                    button { r#type: "button", class: "button button--primary",
                        {t!("nav-signup")}
                    }
                    div { class: "navbar__locale",
                        span { class: "navbar__locale-code", "EN" }
                        span { class: "navbar__caret", aria_hidden: "true" }
                    }
                }
            }
        }
    }
}
