use leptos::*;
use ipo_dashboard::config::DashboardConfig;
use ipo_dashboard::dashboard::DashboardView;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(|| view! { <App/> })
}

#[component]
fn App() -> impl IntoView {
    let config = DashboardConfig::from_location();
    tracing::info!(endpoint = %config.endpoint(), "IPO Dashboard starting");

    view! { <DashboardView config=config/> }
}
