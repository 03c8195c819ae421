//! Resume upload page

use cra_core::view::UploadForm;
use cra_core::{ApiClient, ResumeApi, User};
use leptos::*;
use web_sys::HtmlInputElement;
use crate::components::{ErrorBanner, SuccessBanner};
use crate::files::BrowserFile;

#[component]
pub fn UploadPage(user: User) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let form = create_rw_signal(UploadForm::<BrowserFile>::new());
    let input_ref = create_node_ref::<html::Input>();

    let on_change = move |ev: ev::Event| {
        let file = event_target::<HtmlInputElement>(&ev)
            .files()
            .and_then(|files| files.get(0))
            .map(BrowserFile::from);
        form.update(|f| f.select(file));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(file) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let api = api.clone();
        let user_id = user.user_id.clone();
        spawn_local(async move {
            let result = match file.read().await {
                Ok(resume) => api.upload_resume(&resume, &user_id).await,
                Err(e) => Err(e),
            };
            let uploaded = result.is_ok();
            form.update(|f| f.finish(result));

            if uploaded {
                if let Some(input) = input_ref.get_untracked() {
                    input.set_value("");
                }
            }
        });
    };

    view! {
        <div class="max-w-3xl mx-auto">
            <div class="bg-white shadow sm:rounded-lg">
                <div class="px-4 py-5 sm:p-6">
                    <h3 class="text-lg leading-6 font-medium text-gray-900">
                        "Upload Your Resume"
                    </h3>
                    <div class="mt-2 max-w-xl text-sm text-gray-500">
                        <p>"Upload your resume in PDF format for analysis."</p>
                    </div>
                    <form on:submit=on_submit class="mt-5">
                        <div class="mt-1 flex justify-center px-6 pt-5 pb-6 border-2 border-gray-300 border-dashed rounded-md hover:border-primary-500 transition-colors">
                            <div class="space-y-1 text-center">
                                <div class="flex text-sm text-gray-600">
                                    <label
                                        for="file-upload"
                                        class="relative cursor-pointer bg-white rounded-md font-medium text-primary-600 hover:text-primary-500"
                                    >
                                        <span>"Upload a file"</span>
                                        <input
                                            id="file-upload"
                                            name="file-upload"
                                            type="file"
                                            accept=".pdf"
                                            node_ref=input_ref
                                            on:change=on_change
                                            class="absolute inset-0 w-full h-full opacity-0 cursor-pointer"
                                        />
                                    </label>
                                    <p class="pl-1">"or drag and drop"</p>
                                </div>
                                <p class="text-xs text-gray-500">"PDF up to 2MB"</p>
                            </div>
                        </div>

                        {move || form.with(|f| f.selected_name()).map(|name| view! {
                            <div class="mt-4">
                                <p class="text-sm text-gray-500">"Selected file: " {name}</p>
                            </div>
                        })}

                        {move || form.with(|f| f.error().map(str::to_string)).map(|message| view! {
                            <div class="mt-4"><ErrorBanner message=message/></div>
                        })}

                        {move || form.with(|f| f.success().map(str::to_string)).map(|message| view! {
                            <div class="mt-4"><SuccessBanner message=message/></div>
                        })}

                        <div class="mt-5">
                            <button
                                type="submit"
                                disabled=move || form.with(|f| !f.can_submit())
                                class="inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-primary-600 hover:bg-primary-700 disabled:opacity-50"
                            >
                                {move || form.with(|f| f.button_label())}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
