//! SKU management view
//!
//! Layout of the logged-in screen:
//! - Header with session expiry, refresh and logout
//! - Editable table of all records
//! - Form for adding a record

mod add_form;
mod header;
mod table;

pub use add_form::AddSkuForm;
pub use header::AdminHeader;
pub use table::SkuTable;

use leptos::*;

#[component]
pub fn AdminPanel() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-slate-900">
            <AdminHeader />
            <main class="flex-1 overflow-auto p-6">
                <div class="max-w-5xl mx-auto space-y-6">
                    <SkuTable />
                    <AddSkuForm />
                </div>
            </main>
        </div>
    }
}
