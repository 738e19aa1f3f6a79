//! Header with the collapsible navigation menu.

use crate::state::AppState;
use dioxus::prelude::*;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#map", "Map"),
    ("#events", "Events"),
    ("#weather", "Weather"),
];

#[component]
pub fn NavBar() -> Element {
    let mut state = use_context::<AppState>();
    let open = (state.nav_open)();
    let menu_class = if open { "nav-menu active" } else { "nav-menu" };

    rsx! {
        header {
            class: "header",
            nav {
                class: "nav",
                "aria-label": "Main navigation",
                a { class: "logo", href: "#home", "🏖️ ShoreSquad" }
                button {
                    class: "nav-toggle",
                    r#type: "button",
                    "aria-expanded": "{open}",
                    "aria-controls": "nav-menu",
                    "aria-label": "Toggle navigation",
                    onclick: move |_| {
                        let expanded = (state.nav_open)();
                        state.nav_open.set(!expanded);
                    },
                    "☰"
                }
                ul {
                    id: "nav-menu",
                    class: "{menu_class}",
                    for (href, label) in NAV_LINKS {
                        li {
                            key: "{href}",
                            a {
                                href: "{href}",
                                onclick: move |_| state.nav_open.set(false),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
