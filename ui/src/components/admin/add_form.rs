//! Add-row form

use leptos::*;
use sku_admin_shared::SkuDraft;

use crate::components::common::PlusIcon;
use crate::state::AppState;

#[component]
pub fn AddSkuForm() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let (sku, set_sku) = create_signal(String::new());
    let (margin, set_margin) = create_signal(String::new());
    let (orders, set_orders) = create_signal(String::new());

    let on_add = move |_| {
        let draft = SkuDraft::new(
            sku.get_untracked(),
            margin.get_untracked(),
            orders.get_untracked(),
        );
        app_state.add(draft, move || {
            set_sku.set(String::new());
            set_margin.set(String::new());
            set_orders.set(String::new());
        });
    };

    let input_class = "w-full px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm \
                       placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";

    view! {
        <div class="bg-slate-800 rounded-xl border border-slate-700 p-6">
            <h2 class="text-lg font-semibold text-white mb-4">"Add SKU"</h2>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-3 items-end">
                <input
                    id="new-sku"
                    type="text"
                    class=input_class
                    placeholder="SKU"
                    prop:value=move || sku.get()
                    on:input=move |e| set_sku.set(event_target_value(&e))
                />
                <input
                    id="new-margin"
                    type="number"
                    step="any"
                    class=input_class
                    placeholder="Plan margin"
                    prop:value=move || margin.get()
                    on:input=move |e| set_margin.set(event_target_value(&e))
                />
                <input
                    id="new-orders"
                    type="number"
                    step="any"
                    class=input_class
                    placeholder="Plan orders"
                    prop:value=move || orders.get()
                    on:input=move |e| set_orders.set(event_target_value(&e))
                />
                <button
                    id="add-btn"
                    class="flex items-center justify-center gap-2 px-4 py-2 bg-blue-500 hover:bg-blue-600 \
                           text-white font-medium rounded-lg transition-colors"
                    on:click=on_add
                >
                    <PlusIcon class="w-4 h-4" />
                    "Add"
                </button>
            </div>
        </div>
    }
}
