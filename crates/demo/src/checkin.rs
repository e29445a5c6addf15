//! Check-in form screen: a table with one row per entry and nested store
//! controls.
//!
//! All business rules live in the core form; the handlers here only dispatch
//! operations and route guard rejections to the notice banner.

use leptos::prelude::*;

use tally::{
    form::{CheckInForm, Entry, EntryField, StoreField, StoreRow},
    notice::Notice,
    options::{PRODUCT_OPTIONS, REASON_OPTIONS, STORE_OPTIONS},
};

use crate::announce;

fn add_entry(form: RwSignal<CheckInForm>, live_message: RwSignal<(u64, String)>) {
    let mut added_id = 0;
    form.update(|form| added_id = form.add_entry());

    announce(live_message, format!("Added entry {added_id}."));
}

fn remove_entry(
    form: RwSignal<CheckInForm>,
    notice: RwSignal<Option<Notice>>,
    live_message: RwSignal<(u64, String)>,
    entry_id: u32,
) {
    let mut outcome = Ok(());
    let mut existed = false;
    form.update(|form| {
        existed = form.entry(entry_id).is_some();
        outcome = form.remove_entry(entry_id);
    });

    match outcome {
        // an unmatched id succeeds without removing anything; stay silent
        Ok(()) if existed => announce(live_message, format!("Removed entry {entry_id}.")),
        Ok(()) => {}
        Err(error) => notice.set(Some(Notice::from_form_error(&error))),
    }
}

fn update_entry_field(form: RwSignal<CheckInForm>, entry_id: u32, field: EntryField) {
    form.update(|form| form.update_entry(entry_id, field));
}

fn add_store(
    form: RwSignal<CheckInForm>,
    live_message: RwSignal<(u64, String)>,
    entry_id: u32,
) {
    let mut added_id = None;
    form.update(|form| added_id = form.add_store(entry_id));

    if let Some(store_id) = added_id {
        announce(
            live_message,
            format!("Added store row {store_id} to entry {entry_id}."),
        );
    }
}

fn remove_store(
    form: RwSignal<CheckInForm>,
    notice: RwSignal<Option<Notice>>,
    live_message: RwSignal<(u64, String)>,
    entry_id: u32,
    store_id: u32,
) {
    let mut outcome = Ok(());
    let mut existed = false;
    form.update(|form| {
        existed = form
            .entry(entry_id)
            .is_some_and(|entry| entry.stores().iter().any(|store| store.id() == store_id));
        outcome = form.remove_store(entry_id, store_id);
    });

    match outcome {
        Ok(()) if existed => announce(
            live_message,
            format!("Removed store row {store_id} from entry {entry_id}."),
        ),
        Ok(()) => {}
        Err(error) => notice.set(Some(Notice::from_form_error(&error))),
    }
}

fn update_store_field(
    form: RwSignal<CheckInForm>,
    entry_id: u32,
    store_id: u32,
    field: StoreField,
) {
    form.update(|form| form.update_store(entry_id, store_id, field));
}

/// The number-input coercion used for quantities: anything unparsable
/// (including the empty string) becomes zero.
fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
fn OptionList(
    /// Options rendered for a select control.
    options: &'static [&'static str],
) -> impl IntoView {
    options
        .iter()
        .map(|option| view! { <option value=*option>{*option}</option> })
        .collect_view()
}

#[component]
fn StoreSelectRow(
    store: StoreRow,
    entry_id: u32,
    form: RwSignal<CheckInForm>,
    notice: RwSignal<Option<Notice>>,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let store_id = store.id();
    let remove_label = format!("Remove store row {store_id}");

    view! {
        <div class="store-row">
            <select
                class="field-select store-select"
                aria-label=format!("Store for row {store_id}")
                prop:value=store.name().to_string()
                on:change=move |ev| {
                    update_store_field(
                        form,
                        entry_id,
                        store_id,
                        StoreField::Name(event_target_value(&ev)),
                    );
                }
            >
                <option value="" disabled=true>"Select store"</option>
                <OptionList options=&STORE_OPTIONS />
            </select>
            <button
                type="button"
                class="button button-destructive button-icon"
                aria-label=remove_label
                on:click=move |_| remove_store(form, notice, live_message, entry_id, store_id)
            >
                "\u{2715}"
            </button>
        </div>
    }
}

#[component]
fn StoresCell(
    entry: Entry,
    form: RwSignal<CheckInForm>,
    notice: RwSignal<Option<Notice>>,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let entry_id = entry.id();

    view! {
        <td class="cell-stores">
            <div class="store-rows">
                {entry
                    .stores()
                    .iter()
                    .map(|store| {
                        view! {
                            <StoreSelectRow
                                store=store.clone()
                                entry_id=entry_id
                                form=form
                                notice=notice
                                live_message=live_message
                            />
                        }
                    })
                    .collect_view()}
                <button
                    type="button"
                    class="button button-outline store-add"
                    on:click=move |_| add_store(form, live_message, entry_id)
                >
                    "Add Store"
                </button>
            </div>
        </td>
    }
}

#[component]
fn QuantitiesCell(entry: Entry, form: RwSignal<CheckInForm>) -> impl IntoView {
    let entry_id = entry.id();

    view! {
        <td class="cell-quantities">
            <div class="quantity-inputs">
                {entry
                    .stores()
                    .iter()
                    .map(|store| {
                        let store_id = store.id();

                        view! {
                            <input
                                type="number"
                                class="field-input quantity-input"
                                placeholder="Qty"
                                aria-label=format!("Quantity for store row {store_id}")
                                prop:value=store.quantity().to_string()
                                on:input=move |ev| {
                                    update_store_field(
                                        form,
                                        entry_id,
                                        store_id,
                                        StoreField::Quantity(parse_quantity(&event_target_value(&ev))),
                                    );
                                }
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </td>
    }
}

#[component]
fn EntryRow(
    index: usize,
    entry: Entry,
    form: RwSignal<CheckInForm>,
    notice: RwSignal<Option<Notice>>,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let entry_id = entry.id();
    let product_selected = !entry.product_name().is_empty();
    let serials_added = entry.serial_numbers_added();

    let serials_class = if serials_added {
        "button button-outline serials-button serials-button-added"
    } else {
        "button button-outline serials-button"
    };

    view! {
        <tr class="entry-row">
            <td class="cell-index">{index + 1}</td>
            <td class="cell-product">
                <div class="product-cell">
                    <select
                        class="field-select"
                        aria-label=format!("Product for entry {entry_id}")
                        prop:value=entry.product_name().to_string()
                        on:change=move |ev| {
                            update_entry_field(
                                form,
                                entry_id,
                                EntryField::ProductName(event_target_value(&ev)),
                            );
                        }
                    >
                        <option value="" disabled=true>"Select product"</option>
                        <OptionList options=&PRODUCT_OPTIONS />
                    </select>
                    <button
                        type="button"
                        class="button button-destructive button-icon"
                        aria-label=format!("Remove entry {entry_id}")
                        on:click=move |_| remove_entry(form, notice, live_message, entry_id)
                    >
                        "\u{1F5D1}"
                    </button>
                </div>
            </td>
            <StoresCell
                entry=entry.clone()
                form=form
                notice=notice
                live_message=live_message
            />
            <QuantitiesCell entry=entry.clone() form=form />
            <td class="cell-reason">
                <select
                    class="field-select"
                    aria-label=format!("Reason for entry {entry_id}")
                    prop:value=entry.reason().to_string()
                    on:change=move |ev| {
                        update_entry_field(
                            form,
                            entry_id,
                            EntryField::Reason(event_target_value(&ev)),
                        );
                    }
                >
                    <option value="" disabled=true>"Select reason"</option>
                    <OptionList options=&REASON_OPTIONS />
                </select>
            </td>
            <td class="cell-usage">
                <input
                    type="text"
                    class="field-input"
                    placeholder="Describe Usage"
                    aria-label=format!("Usage for entry {entry_id}")
                    prop:value=entry.usage().to_string()
                    on:input=move |ev| {
                        update_entry_field(
                            form,
                            entry_id,
                            EntryField::Usage(event_target_value(&ev)),
                        );
                    }
                />
            </td>
            <td class="cell-actions">
                <button
                    type="button"
                    class=serials_class
                    disabled=!product_selected
                    on:click=move |_| {
                        update_entry_field(form, entry_id, EntryField::SerialNumbersAdded(true));
                    }
                >
                    "Add Serial Numbers"
                </button>
            </td>
        </tr>
    }
}

/// Check-in form panel component.
#[component]
pub fn CheckinPanel(
    /// Shared form state.
    form: RwSignal<CheckInForm>,
    /// Guard-rejection notice slot.
    notice: RwSignal<Option<Notice>>,
    /// Screen-reader announcement slot.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    view! {
        <section class="checkin-panel" id="check-in">
            <div class="panel-card">
                <div class="panel-card-header">
                    <h2 class="panel-title">"General Check-In"</h2>
                    <p class="panel-subtitle">
                        "Please provide the necessary details for checking in products."
                    </p>
                </div>
                <div class="checkin-table-scroll">
                    <table class="checkin-table">
                        <thead>
                            <tr>
                                <th class="head-index">"No."</th>
                                <th>"Product"</th>
                                <th>"Stores"</th>
                                <th>"Quantity"</th>
                                <th>"Reason"</th>
                                <th>"Usage"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                form.get()
                                    .entries()
                                    .iter()
                                    .enumerate()
                                    .map(|(index, entry)| {
                                        view! {
                                            <EntryRow
                                                index=index
                                                entry=entry.clone()
                                                form=form
                                                notice=notice
                                                live_message=live_message
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
                <div class="panel-card-footer">
                    <button
                        type="button"
                        class="button button-ghost"
                        on:click=move |_| add_entry(form, live_message)
                    >
                        "Add New Product"
                    </button>
                </div>
            </div>
        </section>
    }
}
