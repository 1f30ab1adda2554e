//! Root Application Component
//!
//! Sets up the global state, decides the initial view from the stored
//! session, and swaps between the login screen and the admin panel.

use leptos::*;
use leptos_meta::*;

use crate::components::admin::AdminPanel;
use crate::components::login::LoginView;
use crate::config::UiConfig;
use crate::controller::View;
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new(UiConfig::from_document());
    provide_context(app_state.clone());

    // Runs once per page load
    app_state.bootstrap();

    let current_view = app_state.view;

    view! {
        <Title text="SKU Admin" />
        {move || match current_view.get() {
            View::LoggedOut => view! { <LoginView /> }.into_view(),
            View::LoggedIn => view! { <AdminPanel /> }.into_view(),
        }}
    }
}
