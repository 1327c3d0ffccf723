//! Renders the chrome components to HTML and checks the markup they produce.

use dioxus::prelude::*;
use ui::components::{Footer, Navbar};
use ui::content::{MenuMap, SocialIcon, SocialLink, SocialLinks};
use ui::core::calendar;

fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

fn render_footer(menu: MenuMap) -> String {
    render(rsx! { Footer { menu } })
}

/// Text of every `<h3>` in document order.
fn headings(html: &str) -> Vec<&str> {
    html.split("<h3")
        .skip(1)
        .filter_map(|chunk| {
            let open_end = chunk.find('>')?;
            let close = chunk.find("</h3>")?;
            Some(&chunk[open_end + 1..close])
        })
        .collect()
}

/// Number of list items following each heading, in heading order.
fn items_per_heading(html: &str) -> Vec<usize> {
    html.split("<h3")
        .skip(1)
        .map(|chunk| chunk.matches("<li").count())
        .collect()
}

fn aria_labels(html: &str) -> Vec<&str> {
    html.split(r#"aria-label=""#)
        .skip(1)
        .filter_map(|chunk| chunk.split('"').next())
        .collect()
}

#[test]
fn footer_renders_one_column_per_category_in_order() {
    let menu = MenuMap::new([
        ("Vintage", vec!["Homepage", "Technology"]),
        ("Discover", vec!["Careers", "Blog", "News"]),
        ("Help", vec!["FAQ"]),
    ])
    .unwrap();

    let html = render_footer(menu);

    assert_eq!(headings(&html), ["Vintage", "Discover", "Help"]);
    assert_eq!(items_per_heading(&html), [2, 3, 1]);
}

#[test]
fn footer_help_column_lists_inert_links() {
    let menu = MenuMap::new([("Help", vec!["FAQ", "Support"])]).unwrap();
    let html = render_footer(menu);

    assert_eq!(headings(&html), ["Help"]);
    let faq = html.find(r##"href="#">FAQ</a>"##).expect("FAQ link");
    let support = html.find(r##"href="#">Support</a>"##).expect("Support link");
    assert!(faq < support, "FAQ must precede Support");
    assert_eq!(html.matches("<li").count(), 2);
}

#[test]
fn default_footer_renders_storefront_columns() {
    let html = render(rsx! { Footer {} });

    assert_eq!(headings(&html), ["Vintage", "Discover", "Help", "Community"]);
    assert_eq!(items_per_heading(&html), [4, 4, 4, 4]);
}

#[test]
fn default_footer_renders_four_labelled_social_links() {
    let html = render(rsx! { Footer {} });

    assert_eq!(
        aria_labels(&html),
        ["Twitter", "LinkedIn", "Instagram", "Facebook"]
    );
    assert_eq!(html.matches("<svg").count(), 4);
}

#[test]
fn social_link_targets_come_from_the_entries() {
    let social = SocialLinks::new(vec![
        SocialLink::new(SocialIcon::Instagram, "Instagram", "https://instagram.com/vintage"),
        SocialLink::new(SocialIcon::Facebook, "Facebook", "#"),
    ])
    .unwrap();

    let html = render(rsx! { Footer { social } });

    assert_eq!(aria_labels(&html), ["Instagram", "Facebook"]);
    assert!(html.contains(r#"href="https://instagram.com/vintage""#));
}

#[test]
fn footer_copyright_carries_the_current_year() {
    let year = calendar::current_year();
    let html = render(rsx! { Footer {} });

    let copyright = html
        .split(r#"class="footer__copyright""#)
        .nth(1)
        .and_then(|rest| rest.split("</span>").next())
        .expect("copyright span");
    assert!(copyright.contains(&year.to_string()), "{copyright}");
    assert!(copyright.contains("VINTAGE"));
}

#[test]
fn footer_renders_both_legal_links() {
    let html = render(rsx! { Footer {} });

    assert_eq!(html.matches("footer__legal-link").count(), 2);
    let privacy = html.find(">Privacy Policy</a>").expect("Privacy Policy link");
    let terms = html.find(">Terms of Service</a>").expect("Terms of Service link");
    assert!(privacy < terms);
}

#[test]
fn footer_chrome_text_is_english() {
    let html = render(rsx! { Footer {} });

    assert!(html.contains("Empowering users with a unique vintage shopping experience."));
    assert!(html.contains("VINTAGE. All Rights Reserved."));
}

#[test]
fn navbar_has_one_search_input_and_two_inert_buttons() {
    let html = render(rsx! { Navbar {} });

    assert_eq!(html.matches(r#"type="search""#).count(), 1);
    assert_eq!(html.matches(r#"placeholder="Search for items""#).count(), 1);
    assert_eq!(html.matches("<button").count(), 2);
    assert_eq!(html.matches(r#"type="button""#).count(), 2);
    assert_eq!(html.matches(">Login</button>").count(), 1);
    assert_eq!(html.matches(">Sign up</button>").count(), 1);
    assert!(!html.contains("onclick"));
}

#[test]
fn navbar_language_indicator_is_static_en() {
    let html = render(rsx! { Navbar {} });

    assert_eq!(html.matches(">EN</span>").count(), 1);
    assert!(!html.contains("<select"));
}

#[test]
fn navbar_render_is_idempotent() {
    let first = render(rsx! { Navbar {} });
    for _ in 0..3 {
        assert_eq!(render(rsx! { Navbar {} }), first);
    }
}
