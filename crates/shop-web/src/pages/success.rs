//! Success Page
//!
//! Re-queries the payment intent and shows the outcome the processor
//! reports, or a generic error when the lookup fails.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::api::{self, SuccessData};

#[component]
pub fn SuccessPage() -> impl IntoView {
    let (details, set_details) = signal(None::<SuccessData>);

    let payment_intent = use_query_map().get_untracked().get("payment_intent");
    leptos::task::spawn_local(async move {
        match api::fetch_success(payment_intent.as_deref()).await {
            Ok(data) => set_details.set(Some(data)),
            Err(e) => set_details.set(Some(SuccessData {
                error: Some(e),
                ..Default::default()
            })),
        }
    });

    view! {
        <div class="success">
            <h1>"Payment Result"</h1>

            {move || details.get().map(|data| match data.error {
                Some(error) => view! { <p class="error">{error}</p> }.into_any(),
                None => {
                    let amount = format!(
                        "{} {}",
                        data.amount.clone().unwrap_or_default(),
                        data.currency.clone().unwrap_or_default(),
                    );
                    let item = data
                        .metadata
                        .as_ref()
                        .and_then(|m| m.get("title").cloned())
                        .unwrap_or_default();

                    view! {
                        <dl class="details">
                            <dt>"Status"</dt>
                            <dd>{data.payment_status.clone().unwrap_or_default()}</dd>
                            <dt>"Amount"</dt>
                            <dd>{amount}</dd>
                            <dt>"Payment method"</dt>
                            <dd>{data.payment_method.clone().unwrap_or_default()}</dd>
                            <dt>"Item"</dt>
                            <dd>{item}</dd>
                            <dt>"Reference"</dt>
                            <dd>{data.payment_intent.clone().unwrap_or_default()}</dd>
                        </dl>
                    }
                    .into_any()
                }
            })}

            <a href="/" class="btn">"Back to the shop"</a>
        </div>
    }
}
