use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::{Footer, Navbar};
use ui::ThemeStylesheet;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {err}");
    }
    info!("starting vintage web shell");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        ThemeStylesheet {}

        Navbar {}
        // Storefront pages mount here once routing lands.
        main { class: "page" }
        Footer {}
    }
}
