use futures::future::{AbortHandle, AbortRegistration, Abortable};
use leptos::*;
use std::future::Future;
use tracing::{debug, error, info};
use crate::api::fetch_records;
use crate::card::IpoCard;
use crate::config::DashboardConfig;
use crate::error::FetchError;
use crate::models::IpoRecord;
use crate::state::{DashboardState, LoadOutcome, Screen, EMPTY_MESSAGE, LOADING_MESSAGE, TITLE};

/// Drives one fetch to completion. Errors are logged and swallowed; `None`
/// means the view went away first and nothing should be written.
pub async fn load_once<F>(fetch: F, registration: AbortRegistration) -> Option<LoadOutcome>
where
    F: Future<Output = Result<Vec<IpoRecord>, FetchError>>,
{
    match Abortable::new(fetch, registration).await {
        Ok(Ok(records)) => {
            info!(count = records.len(), "Loaded IPO records");
            Some(LoadOutcome::Loaded(records))
        }
        Ok(Err(e)) => {
            error!(error = %e, "Error fetching IPOs");
            Some(LoadOutcome::Failed)
        }
        Err(_aborted) => {
            debug!("IPO fetch abandoned after view teardown");
            None
        }
    }
}

/// Runs [`load_once`] and hands the outcome to `apply`. An aborted fetch
/// never calls `apply`, so the view keeps whatever it was showing.
pub async fn drive<F, A>(fetch: F, registration: AbortRegistration, apply: A)
where
    F: Future<Output = Result<Vec<IpoRecord>, FetchError>>,
    A: FnOnce(LoadOutcome),
{
    if let Some(outcome) = load_once(fetch, registration).await {
        apply(outcome);
    }
}

#[component]
pub fn DashboardView(config: DashboardConfig) -> impl IntoView {
    let state = create_rw_signal(DashboardState::default());

    let (abort_handle, registration) = AbortHandle::new_pair();
    on_cleanup(move || abort_handle.abort());

    let url = config.endpoint();
    spawn_local(async move {
        let client = reqwest::Client::new();
        let fetch = async move { fetch_records(&client, &url).await };
        drive(fetch, registration, move |outcome| state.update(|s| s.apply(outcome))).await;
    });

    let screen = move || state.with(DashboardState::screen);
    let cards = move || state.with(DashboardState::keyed_records);

    view! {
        <div class="container">
            <h1 class="title">{TITLE}</h1>
            {move || match screen() {
                Screen::Loading => view! { <p class="loading">{LOADING_MESSAGE}</p> }.into_view(),
                Screen::Empty => view! { <p class="no-data">{EMPTY_MESSAGE}</p> }.into_view(),
                Screen::Cards(_) => view! {
                    <div class="card-container">
                        <For
                            each=cards
                            key=|(key, _)| key.clone()
                            children=|(_, record)| view! { <IpoCard record=record/> }
                        />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
