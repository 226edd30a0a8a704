use dioxus::prelude::*;

use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting Totes web, profile key `{}`", store::repo::DEFAULT_PROFILE_KEY);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Totes" }
        document::Stylesheet { href: ui::TOTES_CSS }
        document::Stylesheet { href: MAIN_CSS }

        ui::ProfileProvider {
            ui::RegistrationGate {
                Router::<Route> {}
            }
        }
    }
}
