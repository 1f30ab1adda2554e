//! Login screen
//!
//! Shown whenever the stored session does not pass the admin gate.

use leptos::*;

use crate::components::common::LockIcon;
use crate::state::AppState;

#[component]
pub fn LoginView() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = {
        let app_state = app_state.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            app_state.login(username.get_untracked(), password.get_untracked());
        }
    };

    view! {
        <div class="min-h-screen bg-slate-900 flex items-center justify-center p-4">
            <div class="max-w-sm w-full">
                <div class="text-center mb-8">
                    <div class="w-14 h-14 rounded-full bg-blue-500/10 flex items-center justify-center mx-auto mb-4">
                        <LockIcon class="w-7 h-7 text-blue-400" />
                    </div>
                    <h1 class="text-2xl font-bold text-white">"SKU Admin"</h1>
                    <p class="text-slate-400 mt-1">"Sign in with a superuser account"</p>
                </div>

                <form
                    class="bg-slate-800 rounded-xl border border-slate-700 p-6 space-y-4"
                    on:submit=on_submit
                >
                    <div class="space-y-1">
                        <label for="username" class="block text-sm font-medium text-slate-300">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            required
                            autocomplete="username"
                            class="w-full px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm \
                                   focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                            prop:value=move || username.get()
                            on:input=move |e| set_username.set(event_target_value(&e))
                        />
                    </div>

                    <div class="space-y-1">
                        <label for="password" class="block text-sm font-medium text-slate-300">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            required
                            autocomplete="current-password"
                            class="w-full px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm \
                                   focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                            prop:value=move || password.get()
                            on:input=move |e| set_password.set(event_target_value(&e))
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full px-4 py-2 text-sm font-medium bg-blue-500 hover:bg-blue-600 \
                               text-white rounded-lg transition-colors"
                    >
                        {move || if app_state.is_busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
