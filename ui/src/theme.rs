use dioxus::prelude::*;

/// Shared storefront stylesheet (navbar, footer, buttons).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Same stylesheet embedded as text, for shells that inline it.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Links the theme, and inlines it too in release native builds where the
/// asset directory may not ship alongside the binary.
#[component]
pub fn ThemeStylesheet() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }
    }
}
