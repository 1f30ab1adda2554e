//! Admin header

use leptos::*;

use crate::components::common::{LogoutIcon, RefreshIcon};
use crate::state::AppState;

#[component]
pub fn AdminHeader() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let expiry = {
        let app_state = app_state.clone();
        move || {
            app_state
                .claims
                .get()
                .and_then(|claims| claims.expires_at())
                .map(|at| format!("Session expires {} UTC", at.format("%Y-%m-%d %H:%M")))
                .unwrap_or_default()
        }
    };

    let on_refresh = {
        let app_state = app_state.clone();
        move |_| app_state.reload()
    };

    let on_logout = {
        let app_state = app_state.clone();
        move |_| app_state.logout()
    };

    view! {
        <header class="h-14 border-b border-slate-700 bg-slate-800/50 backdrop-blur-sm flex items-center px-4 gap-4">
            <span class="text-white font-bold text-lg">"SKU Admin"</span>

            <Show when=move || app_state.is_busy()>
                <div class="animate-spin w-4 h-4 border-2 border-blue-500 border-t-transparent rounded-full" />
            </Show>

            // Spacer
            <div class="flex-1" />

            <span class="text-xs text-slate-400">{expiry}</span>

            <button
                class="flex items-center gap-2 px-3 py-1.5 bg-slate-700 hover:bg-slate-600 \
                       text-white text-sm rounded-lg transition-colors"
                on:click=on_refresh
            >
                <RefreshIcon class="w-4 h-4" />
                "Refresh"
            </button>
            <button
                id="logout-btn"
                class="flex items-center gap-2 px-3 py-1.5 text-slate-400 hover:text-white \
                       text-sm rounded-lg transition-colors"
                on:click=on_logout
            >
                <LogoutIcon class="w-4 h-4" />
                "Log out"
            </button>
        </header>
    }
}
