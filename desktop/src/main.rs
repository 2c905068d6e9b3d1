use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!(
        "starting desktop widget; set FX_API_BASE_URL to point at the exchange endpoints"
    );
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
