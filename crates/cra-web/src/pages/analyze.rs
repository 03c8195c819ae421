//! Latest analysis page

use cra_core::view::{analyze, AnalysisView, Loadable};
use cra_core::{ApiClient, User};
use leptos::*;
use crate::components::{EmptyState, ErrorBanner, Spinner};

#[component]
pub fn AnalyzePage(user: User) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let (state, set_state) = create_signal(Loadable::<AnalysisView>::Loading);

    // Fetch on mount
    create_effect(move |_| {
        let api = api.clone();
        let user_id = user.user_id.clone();
        spawn_local(async move {
            set_state.set(analyze::load(&api, &user_id).await);
        });
    });

    move || match state.get() {
        Loadable::Loading => view! { <Spinner/> }.into_view(),
        Loadable::Failed(message) => view! { <ErrorBanner message=message/> }.into_view(),
        Loadable::Empty => view! {
            <EmptyState
                title="No analysis available"
                hint="Upload a resume to get started with the analysis."
                icon="doc"
            />
        }
        .into_view(),
        Loadable::Loaded(analysis) => view! { <AnalysisCard analysis=analysis/> }.into_view(),
    }
}

#[component]
fn AnalysisCard(analysis: AnalysisView) -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="bg-white shadow overflow-hidden sm:rounded-lg">
                <div class="px-4 py-5 sm:px-6">
                    <h3 class="text-lg leading-6 font-medium text-gray-900">"Resume Analysis"</h3>
                    <p class="mt-1 max-w-2xl text-sm text-gray-500">"Detailed analysis of your resume"</p>
                </div>
                <div class="border-t border-gray-200">
                    <dl>
                        <div class="bg-gray-50 px-4 py-5 sm:grid sm:grid-cols-3 sm:gap-4 sm:px-6">
                            <dt class="text-sm font-medium text-gray-500">"Overall Score"</dt>
                            <dd class="mt-1 text-sm text-gray-900 sm:mt-0 sm:col-span-2">
                                <span class="text-2xl font-bold">{analysis.score_label}</span>
                            </dd>
                        </div>

                        <div class="bg-white px-4 py-5 sm:grid sm:grid-cols-3 sm:gap-4 sm:px-6">
                            <dt class="text-sm font-medium text-gray-500">"Improvements"</dt>
                            <dd class="mt-1 text-sm text-gray-900 sm:mt-0 sm:col-span-2">
                                <ul class="border border-gray-200 rounded-md divide-y divide-gray-200">
                                    {analysis.improvements.into_iter().map(|improvement| view! {
                                        <li class="pl-3 pr-4 py-3 flex items-center text-sm">
                                            <span class="flex-shrink-0 h-2 w-2 rounded-full bg-yellow-400"></span>
                                            <span class="ml-2 flex-1 w-0 truncate">{improvement}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </dd>
                        </div>

                        <div class="bg-gray-50 px-4 py-5 sm:grid sm:grid-cols-3 sm:gap-4 sm:px-6">
                            <dt class="text-sm font-medium text-gray-500">"Last Updated"</dt>
                            <dd class="mt-1 text-sm text-gray-900 sm:mt-0 sm:col-span-2">
                                {analysis.last_updated}
                            </dd>
                        </div>
                    </dl>
                </div>
            </div>
        </div>
    }
}
