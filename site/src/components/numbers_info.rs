//! Key figure with its caption.

use leptos::prelude::*;

use super::class_list;

/// A big number above a short description.
#[component]
pub fn NumbersInfo(
    #[prop(into)] number: String,
    #[prop(into)] description: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = class_list([("numbers-info", true), (class.as_str(), true)]);

    view! {
        <div class=class>
            <div class="numbers-info__number">{number}</div>
            <div class="numbers-info__description">{description}</div>
        </div>
    }
}
