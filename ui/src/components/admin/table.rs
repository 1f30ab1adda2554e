//! Editable SKU table
//!
//! The whole body is rebuilt from `AppState::rows` on every load. Each row
//! gets a fresh [`RowEditor`], so edits that were not saved are discarded.

use leptos::*;
use sku_admin_shared::{SkuField, SkuRecord};

use crate::components::common::{SaveIcon, TrashIcon};
use crate::state::{AppState, RowEditor};

#[component]
pub fn SkuTable() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let rows = app_state.rows;

    view! {
        <div class="bg-slate-800 rounded-xl border border-slate-700 overflow-hidden">
            {move || {
                let items = rows.get();

                if items.is_empty() {
                    view! { <EmptyState /> }.into_view()
                } else {
                    view! {
                        <div class="overflow-x-auto">
                            <table id="sku-table" class="w-full">
                                <thead class="bg-slate-800/50 border-b border-slate-700">
                                    <tr>
                                        {SkuField::ALL.into_iter().map(|field| view! {
                                            <th class="px-6 py-4 text-left text-xs font-medium text-slate-400 uppercase tracking-wider">
                                                {field.label()}
                                            </th>
                                        }).collect_view()}
                                        <th class="px-6 py-4 text-right text-xs font-medium text-slate-400 uppercase tracking-wider">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-slate-700">
                                    {items.into_iter().map(|record| view! { <SkuRow record=record /> }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn SkuRow(record: SkuRecord) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let editor = create_rw_signal(RowEditor::new(&record));

    let on_save = {
        let app_state = app_state.clone();
        move |_| {
            let (id, patch) = editor.with_untracked(|e| (e.id().clone(), e.patch()));
            app_state.save(id, patch);
        }
    };

    let on_delete = move |_| {
        let id = editor.with_untracked(|e| e.id().clone());
        app_state.delete(id);
    };

    view! {
        <tr class="hover:bg-slate-700/30 transition-colors">
            {SkuField::ALL.into_iter().map(|field| view! {
                <td class="px-6 py-3">
                    <FieldInput editor=editor field=field />
                </td>
            }).collect_view()}
            <td class="px-6 py-3 whitespace-nowrap text-right">
                <div class="flex items-center justify-end gap-2">
                    <button
                        class="flex items-center gap-1 px-3 py-1.5 text-sm bg-blue-500 hover:bg-blue-600 \
                               text-white rounded-lg transition-colors"
                        title="Save changes"
                        on:click=on_save
                    >
                        <SaveIcon class="w-4 h-4" />
                        "Save"
                    </button>
                    <button
                        class="p-2 text-slate-400 hover:text-red-400 hover:bg-red-500/10 rounded-lg transition-colors"
                        title="Delete record"
                        on:click=on_delete
                    >
                        <TrashIcon class="w-4 h-4" />
                    </button>
                </div>
            </td>
        </tr>
    }
}

#[component]
fn FieldInput(editor: RwSignal<RowEditor>, field: SkuField) -> impl IntoView {
    let input_type = if field.is_numeric() { "number" } else { "text" };

    view! {
        <input
            type=input_type
            step=field.is_numeric().then_some("any")
            class=move || {
                let base = "w-full px-3 py-1.5 rounded-lg bg-slate-900 border text-white text-sm \
                            focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";
                let edited = editor.with(|e| e.is_dirty());
                if edited {
                    format!("{} border-amber-500/60", base)
                } else {
                    format!("{} border-slate-700", base)
                }
            }
            prop:value=move || editor.with(|e| e.value(field).to_string())
            on:input=move |ev| editor.update(|e| e.edit(field, event_target_value(&ev)))
        />
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16">
            <h2 class="text-xl font-semibold text-white mb-2">"No Records"</h2>
            <p class="text-slate-400 text-center max-w-md">
                "Add a SKU below to start planning margins and orders."
            </p>
        </div>
    }
}
