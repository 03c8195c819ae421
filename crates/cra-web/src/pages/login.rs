//! Login gate

use cra_core::view::validate_name;
use cra_core::{ApiClient, ResumeApi};
use leptos::*;
use crate::components::ErrorBanner;
use crate::session::AppSession;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<AppSession>();

    let (name, set_name) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let name = match validate_name(&name.get_untracked()) {
            Ok(name) => name,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_loading.set(true);
        set_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            let result = api.login(&name).await;
            set_loading.set(false);
            match result {
                Ok(user) => session.update(|s| s.login(user)),
                Err(e) => set_error.set(Some(e.user_message("Login failed"))),
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-16">
            <div class="bg-white shadow sm:rounded-lg">
                <div class="px-4 py-5 sm:p-6">
                    <h3 class="text-lg leading-6 font-medium text-gray-900">
                        "Campus Resume Analyzer"
                    </h3>
                    <div class="mt-2 text-sm text-gray-500">
                        <p>"Sign in with your name to upload and track your resumes."</p>
                    </div>
                    <form on:submit=on_submit class="mt-5 space-y-4">
                        <input
                            type="text"
                            placeholder="Your name"
                            class="block w-full px-3 py-2 border rounded-md"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        {move || error.get().map(|message| view! { <ErrorBanner message=message/> })}
                        <button
                            type="submit"
                            disabled=move || loading.get()
                            class="w-full inline-flex justify-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-primary-600 hover:bg-primary-700 disabled:opacity-50"
                        >
                            {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
