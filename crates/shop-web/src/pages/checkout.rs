//! Checkout Page
//!
//! Shows the selected item, mounts the Stripe Payment Element, and drives
//! the confirmation flow: idle -> submitting -> idle (error shown) or
//! navigated away on success.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::api;
use crate::stripe::{ConfirmError, PaymentSession};

/// How long validation/card errors stay visible
const MESSAGE_TIMEOUT_MS: i32 = 4000;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let (title, set_title) = signal(None::<String>);
    let (amount, set_amount) = signal(None::<String>);
    let (page_error, set_page_error) = signal(None::<String>);
    let (message, set_message) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);
    let session = RwSignal::new_local(None::<PaymentSession>);

    // Item id from the page URL, fixed for the lifetime of the page
    let item_id = use_query_map().get_untracked().get("item");

    // Fetch page data, request a payment intent, and mount the payment UI
    {
        let item_id = item_id.clone();
        leptos::task::spawn_local(async move {
            let data = match api::fetch_checkout(item_id.as_deref()).await {
                Ok(data) => data,
                Err(e) => {
                    set_page_error.set(Some(e));
                    return;
                }
            };

            set_title.set(data.title.clone());
            set_amount.set(data.amount.clone());

            if let Some(error) = data.error {
                set_page_error.set(Some(error));
                return;
            }

            match api::create_payment_intent(item_id.as_deref()).await {
                Ok(client_secret) => {
                    match PaymentSession::mount(
                        &data.publishable_key,
                        &client_secret,
                        "#payment-element",
                    ) {
                        Ok(s) => session.set(Some(s)),
                        Err(_) => {
                            set_message.set(Some("Failed to initialize payment.".into()));
                        }
                    }
                }
                Err(e) => {
                    set_message.set(Some(format!("Failed to initialize payment: {e}")));
                }
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // The disabled control keeps this to one in-flight confirmation
        if submitting.get() {
            return;
        }
        let Some(pay) = session.get() else {
            return;
        };

        set_submitting.set(true);

        leptos::task::spawn_local(async move {
            let origin = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default();

            match pay.confirm(&format!("{origin}/success")).await {
                // On success Stripe navigates to the return URL
                Ok(()) => {}
                Err(ConfirmError::Card(text)) => show_message(set_message, text),
                Err(ConfirmError::Other) => {
                    show_message(set_message, "An unexpected error occurred.".into());
                }
            }

            set_submitting.set(false);
        });
    };

    view! {
        <div class="checkout">
            <h1>"Checkout"</h1>

            <Show when=move || page_error.get().is_some()>
                <p class="error">{move || page_error.get()}</p>
            </Show>

            <Show when=move || page_error.get().is_none()>
                <div class="order">
                    <h2>{move || title.get()}</h2>
                    <p class="amount">{move || amount.get().map(|a| format!("${a}"))}</p>
                </div>

                <form id="payment-form" on:submit=on_submit>
                    <div id="payment-element"></div>
                    <button id="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Processing…" } else { "Pay now" }}
                    </button>
                    <Show when=move || message.get().is_some()>
                        <div id="payment-message">{move || message.get()}</div>
                    </Show>
                </form>
            </Show>
        </div>
    }
}

/// Show a transient message, cleared after four seconds
fn show_message(set_message: WriteSignal<Option<String>>, text: String) {
    set_message.set(Some(text));

    if let Some(window) = web_sys::window() {
        let clear = Closure::once_into_js(move || set_message.set(None));
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            clear.unchecked_ref(),
            MESSAGE_TIMEOUT_MS,
        );
    }
}
