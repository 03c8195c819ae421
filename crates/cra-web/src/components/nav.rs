//! Tab navigation

use leptos::*;
use leptos_router::*;
use crate::session::AppSession;

const DEFAULT_TAB: &str = "/upload";

const TABS: [(&str, &str); 4] = [
    ("/upload", "Upload Resume"),
    ("/analyze", "Analyze Resume"),
    ("/history", "History"),
    ("/about", "About"),
];

/// Unknown paths render the upload page, so its tab is selected for them too.
fn is_selected(path: &str, href: &str) -> bool {
    path == href || (href == DEFAULT_TAB && !TABS.iter().any(|(tab, _)| *tab == path))
}

fn tab_class(selected: bool) -> &'static str {
    if selected {
        "w-full text-center rounded-lg py-2.5 text-sm font-medium leading-5 bg-white text-primary-700 shadow"
    } else {
        "w-full text-center rounded-lg py-2.5 text-sm font-medium leading-5 text-primary-100 hover:bg-white/[0.12] hover:text-white"
    }
}

#[component]
pub fn TabNav() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let pathname = use_location().pathname;

    view! {
        <nav class="flex space-x-1 rounded-xl bg-primary-900/20 p-1">
            {TABS.into_iter().map(|(href, label)| {
                let selected = move || pathname.with(|path| is_selected(path, href));
                view! {
                    <a href=href class=move || tab_class(selected())>{label}</a>
                }
            }).collect_view()}
            <button
                on:click=move |_| session.update(|s| s.logout())
                class="w-full rounded-lg py-2.5 text-sm font-medium leading-5 text-red-600 hover:bg-red-50"
            >
                "Logout"
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_selection() {
        assert!(is_selected("/history", "/history"));
        assert!(!is_selected("/history", "/upload"));
        assert!(is_selected("/", "/upload"));
        assert!(is_selected("/nowhere", "/upload"));
        assert!(!is_selected("/nowhere", "/about"));
    }
}
