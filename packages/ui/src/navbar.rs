use dioxus::prelude::*;

use crate::auth::AuthButton;
use crate::gate::LISTING_PATH;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            Link {
                class: "logo",
                to: LISTING_PATH,
                "HBNB"
            }
            nav {
                class: "navbar-links",
                {children}
                AuthButton {}
            }
        }
    }
}
