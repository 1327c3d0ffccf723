use crate::content::SocialIcon;
use dioxus::prelude::*;

/// Inline 24x24 brand glyph, drawn in `currentColor`.
#[component]
pub fn SocialGlyph(icon: SocialIcon) -> Element {
    let class = format!("social-glyph social-glyph--{}", icon.name());

    let shape = match icon {
        SocialIcon::XTwitter => rsx! {
            path { d: "M3 3h5.2l12.8 18h-5.2z" }
            path {
                d: "M20.2 3 13.3 10.8M10.6 13.9 3.8 21",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.8",
                stroke_linecap: "round",
            }
        },
        SocialIcon::LinkedIn => rsx! {
            rect { x: "3", y: "9", width: "4", height: "12" }
            circle { cx: "5", cy: "5", r: "2.1" }
            path { d: "M10 9h3.8v1.7c.6-1 1.9-1.9 3.8-1.9 2.8 0 3.4 1.9 3.4 4.4V21h-4v-6.9c0-1.4-.3-2.6-1.8-2.6s-1.8 1.1-1.8 2.5V21H10z" }
        },
        SocialIcon::Instagram => rsx! {
            rect {
                x: "3",
                y: "3",
                width: "18",
                height: "18",
                rx: "5",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
            }
            circle {
                cx: "12",
                cy: "12",
                r: "4",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
            }
            circle { cx: "17.5", cy: "6.5", r: "1.2" }
        },
        SocialIcon::Facebook => rsx! {
            path { d: "M14 22v-8h2.7l.4-3.2H14V8.8c0-.9.3-1.6 1.6-1.6h1.7V4.3c-.3 0-1.3-.1-2.5-.1-2.5 0-4.2 1.5-4.2 4.3v2.3H7.8V14h2.8v8z" }
        },
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            width: "20",
            height: "20",
            fill: "currentColor",
            "aria-hidden": "true",
            {shape}
        }
    }
}
