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
    let config = ui::load_config();
    tracing::info!("starting Totes desktop, profile key `{}`", config.storage.key);
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
