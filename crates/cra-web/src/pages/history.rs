//! Analysis history page

use cra_core::view::history::load_history;
use cra_core::view::{HistoryRow, Loadable};
use cra_core::{ApiClient, User};
use leptos::*;
use crate::components::{EmptyState, ErrorBanner, ScoreBadge, Spinner};

#[component]
pub fn HistoryPage(user: User) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let (state, set_state) = create_signal(Loadable::<Vec<HistoryRow>>::Loading);

    create_effect(move |_| {
        let api = api.clone();
        let user_id = user.user_id.clone();
        spawn_local(async move {
            set_state.set(load_history(&api, &user_id).await);
        });
    });

    move || match state.get() {
        Loadable::Loading => view! { <Spinner/> }.into_view(),
        Loadable::Failed(message) => view! { <ErrorBanner message=message/> }.into_view(),
        Loadable::Empty => view! {
            <EmptyState
                title="No history available"
                hint="Upload a resume to start tracking your progress."
                icon="clock"
            />
        }
        .into_view(),
        Loadable::Loaded(rows) => view! { <HistoryTable rows=rows/> }.into_view(),
    }
}

#[component]
fn HistoryTable(rows: Vec<HistoryRow>) -> impl IntoView {
    view! {
        <div class="shadow overflow-x-auto border-b border-gray-200 sm:rounded-lg">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Score"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Date"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Improvements"</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {rows.into_iter().map(|row| {
                        let more = row.improvements.more_label();
                        view! {
                            <tr>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                    <ScoreBadge band=row.band label=row.score_label/>
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{row.date_label}</td>
                                <td class="px-6 py-4 text-sm text-gray-500">
                                    <ul class="list-disc list-inside">
                                        {row.improvements.shown.into_iter().map(|improvement| view! {
                                            <li class="truncate max-w-xs">{improvement}</li>
                                        }).collect_view()}
                                        {more.map(|label| view! { <li class="text-primary-600">{label}</li> })}
                                    </ul>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
