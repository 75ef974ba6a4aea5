mod landing;
mod not_found;
mod primitives;
mod reveal;
mod theme;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use landing::Landing;
use not_found::NotFound;
use reveal::RevealIds;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[allow(non_snake_case)]
fn App() -> Element {
    // One id counter for every reveal wrapper on the page
    use_context_provider(RevealIds::default);
    use_hook(|| info!("sweeten landing page mounted"));

    rsx! {
        Router::<Route> {}
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
