use api::filter::{ALL, PRICE_OPTIONS};
use api::PriceFilter;
use dioxus::prelude::*;

/// The maximum-price select on the listing page.
#[component]
pub fn PriceFilterSelect(value: PriceFilter, on_change: EventHandler<PriceFilter>) -> Element {
    rsx! {
        div {
            class: "filter",
            label { r#for: "max-price", "Max price: " }
            select {
                id: "max-price",
                value: value.control_value(),
                onchange: move |evt: FormEvent| {
                    on_change.call(PriceFilter::from_control_value(&evt.value()));
                },
                for price in PRICE_OPTIONS {
                    option { key: "{price}", value: "{price}", "${price}" }
                }
                option { value: ALL, "All" }
            }
        }
    }
}
