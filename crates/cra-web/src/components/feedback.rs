//! Loading, error, success and empty states

use leptos::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center h-64">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-primary-600"></div>
        </div>
    }
}

/// Red page-level banner
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="rounded-md bg-red-50 p-4">
            <div class="flex">
                <div class="ml-3">
                    <h3 class="text-sm font-medium text-red-800">{message}</h3>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="rounded-md bg-green-50 p-4">
            <div class="flex">
                <div class="ml-3">
                    <h3 class="text-sm font-medium text-green-800">{message}</h3>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn EmptyState(
    title: &'static str,
    hint: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <div class="mx-auto h-12 w-12 rounded-full bg-gray-200 flex items-center justify-center">
                <span class="text-gray-400">{icon}</span>
            </div>
            <h3 class="mt-2 text-sm font-medium text-gray-900">{title}</h3>
            <p class="mt-1 text-sm text-gray-500">{hint}</p>
        </div>
    }
}
