//! About page

use cra_core::{ApiClient, ResumeApi};
use leptos::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let (connected, set_connected) = create_signal(None::<bool>);

    create_effect(move |_| {
        let api = api.clone();
        spawn_local(async move {
            set_connected.set(Some(api.test_connection().await.is_ok()));
        });
    });

    let status = move || match connected.get() {
        None => ("text-gray-400", "Backend: checking..."),
        Some(true) => ("text-green-600", "Backend: connected"),
        Some(false) => ("text-red-600", "Backend: unreachable"),
    };

    view! {
        <div class="max-w-3xl mx-auto">
            <div class="bg-white shadow sm:rounded-lg">
                <div class="px-4 py-5 sm:p-6">
                    <h3 class="text-lg leading-6 font-medium text-gray-900">
                        "About Campus Resume Analyzer"
                    </h3>
                    <div class="mt-2 max-w-xl text-sm text-gray-500">
                        <p>
                            "Campus Resume Analyzer is a student-first tool built by and for our college warriors. "
                            "It's designed to help you crush internships, placements, and off-campus dreams."
                        </p>
                    </div>
                    <div class="mt-5">
                        <div class="rounded-md bg-primary-50 p-4">
                            <h3 class="text-sm font-medium text-primary-800">"Built with ❤️ and madness"</h3>
                        </div>
                    </div>
                    <p class=move || format!("mt-5 text-xs {}", status().0)>{move || status().1}</p>
                </div>
            </div>
        </div>
    }
}
