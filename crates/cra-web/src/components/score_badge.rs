//! Score badge

use cra_core::view::ScoreBand;
use leptos::*;

#[component]
pub fn ScoreBadge(band: ScoreBand, label: String) -> impl IntoView {
    view! {
        <span class=format!(
            "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
            band.badge_classes(),
        )>
            {label}
        </span>
    }
}
