//! Main application component

use cra_core::{ApiClient, ClientConfig, Session, User};
use leptos::*;
use leptos_router::*;
use crate::components::*;
use crate::pages::*;
use crate::session::{AppSession, BrowserSessionStore};

/// Backend address, overridable at build time with `CRA_API_BASE_URL`
fn client_config() -> ClientConfig {
    option_env!("CRA_API_BASE_URL")
        .map(ClientConfig::with_base_url)
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiClient::new(client_config()));

    let session: AppSession = create_rw_signal(Session::restore(BrowserSessionStore));
    provide_context(session);

    let current_user = create_memo(move |_| session.with(|s| s.user().cloned()));

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    {move || match current_user.get() {
                        Some(user) => view! { <Workspace user=user/> }.into_view(),
                        None => view! { <LoginPage/> }.into_view(),
                    }}
                </div>
            </div>
        </Router>
    }
}

/// Tabbed area shown once logged in
#[component]
fn Workspace(user: User) -> impl IntoView {
    let upload = {
        let user = user.clone();
        move || view! { <UploadPage user=user.clone()/> }
    };
    let analyze = {
        let user = user.clone();
        move || view! { <AnalyzePage user=user.clone()/> }
    };
    let history = move || view! { <HistoryPage user=user.clone()/> };

    view! {
        <TabNav/>
        <div class="mt-8">
            <Routes>
                <Route path="/" view=upload.clone()/>
                <Route path="/upload" view=upload.clone()/>
                <Route path="/analyze" view=analyze/>
                <Route path="/history" view=history/>
                <Route path="/about" view=AboutPage/>
                <Route path="/*any" view=upload/>
            </Routes>
        </div>
    }
}
