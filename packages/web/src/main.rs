use dioxus::prelude::*;

use store::HbnbConfig;
use ui::{AuthProvider, Navbar};
use views::{AddReview, Login, NotFound, PlaceDetail, Places, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Places {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/place?:id")]
        PlaceDetail { id: String },
        #[route("/add_review?:id")]
        AddReview { id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Client configuration, fixed at build time.
const CONFIG_TOML: &str = include_str!("../hbnb.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = HbnbConfig::from_toml_or_default(CONFIG_TOML);

    rsx! {
        document::Title { "HBNB" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Navbar above every page.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Places {}, "Places" }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
