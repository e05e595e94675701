//! Stripe.js Bindings
//!
//! Low-level wasm-bindgen bindings to Stripe.js v3 plus a thin wrapper for
//! the checkout page. Stripe.js itself is loaded from a script tag in
//! index.html; card data never leaves Stripe's iframe.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Object, Promise, Reflect};

#[wasm_bindgen]
extern "C" {
    /// Raw Stripe.js client handle.
    #[wasm_bindgen(js_name = Stripe, js_namespace = window)]
    #[derive(Debug, Clone)]
    pub type JsStripe;

    /// Raw Elements factory handle.
    #[wasm_bindgen(js_name = Elements)]
    #[derive(Debug, Clone)]
    pub type JsElements;

    /// Raw PaymentElement UI component handle.
    #[wasm_bindgen(js_name = PaymentElement)]
    #[derive(Debug, Clone)]
    pub type JsPaymentElement;

    /// `Stripe(publishableKey)` -> `JsStripe`
    #[wasm_bindgen(js_name = Stripe, js_namespace = window)]
    fn new_stripe(publishable_key: &str) -> JsStripe;

    /// `stripe.elements({ clientSecret, appearance })` -> `JsElements`
    #[wasm_bindgen(method, catch, js_name = elements)]
    fn elements(this: &JsStripe, options: JsValue) -> Result<JsElements, JsValue>;

    /// `elements.create("payment", options)` -> `JsPaymentElement`
    #[wasm_bindgen(method, catch, js_name = create)]
    fn create_element(
        this: &JsElements,
        element_type: &str,
        options: JsValue,
    ) -> Result<JsPaymentElement, JsValue>;

    /// `paymentElement.mount(selector)`
    #[wasm_bindgen(method, catch, js_name = mount)]
    fn mount(this: &JsPaymentElement, selector: &str) -> Result<(), JsValue>;

    /// `stripe.confirmPayment(opts)` -> JS `Promise`
    #[wasm_bindgen(method, catch, js_name = confirmPayment)]
    fn confirm_payment(this: &JsStripe, options: JsValue) -> Result<Promise, JsValue>;
}

/// Why a confirmation attempt came back instead of navigating away.
#[derive(Clone, Debug)]
pub enum ConfirmError {
    /// Card or validation problem the user can fix; message comes from Stripe
    Card(String),
    /// Anything else
    Other,
}

/// A live Payment Element session: the Stripe client plus the Elements group
/// holding the mounted payment UI.
#[derive(Clone)]
pub struct PaymentSession {
    stripe: JsStripe,
    elements: JsElements,
}

impl PaymentSession {
    /// Mount the hosted payment UI, bound to a client secret, into the
    /// element matched by `selector`.
    pub fn mount(
        publishable_key: &str,
        client_secret: &str,
        selector: &str,
    ) -> Result<Self, JsValue> {
        let stripe = new_stripe(publishable_key);

        let variables = Object::new();
        Reflect::set(
            &variables,
            &JsValue::from_str("colorPrimary"),
            &JsValue::from_str("#0d6efd"),
        )?;

        let appearance = Object::new();
        Reflect::set(
            &appearance,
            &JsValue::from_str("theme"),
            &JsValue::from_str("stripe"),
        )?;
        Reflect::set(&appearance, &JsValue::from_str("variables"), &variables)?;

        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("clientSecret"),
            &JsValue::from_str(client_secret),
        )?;
        Reflect::set(&options, &JsValue::from_str("appearance"), &appearance)?;

        let elements = stripe.elements(options.into())?;

        let element_options = Object::new();
        Reflect::set(
            &element_options,
            &JsValue::from_str("layout"),
            &JsValue::from_str("tabs"),
        )?;

        let payment_element = elements.create_element("payment", element_options.into())?;
        payment_element.mount(selector)?;

        Ok(Self { stripe, elements })
    }

    /// Confirm the payment, redirecting to `return_url` on success.
    ///
    /// On success Stripe navigates away and this future never resolves, so a
    /// resolved value always describes a failure of some kind.
    pub async fn confirm(&self, return_url: &str) -> Result<(), ConfirmError> {
        let confirm_params = Object::new();
        Reflect::set(
            &confirm_params,
            &JsValue::from_str("return_url"),
            &JsValue::from_str(return_url),
        )
        .map_err(|_| ConfirmError::Other)?;

        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("elements"),
            self.elements.as_ref(),
        )
        .map_err(|_| ConfirmError::Other)?;
        Reflect::set(&options, &JsValue::from_str("confirmParams"), &confirm_params)
            .map_err(|_| ConfirmError::Other)?;

        let promise = self
            .stripe
            .confirm_payment(options.into())
            .map_err(|_| ConfirmError::Other)?;
        let result = JsFuture::from(promise)
            .await
            .map_err(|_| ConfirmError::Other)?;

        let error = Reflect::get(&result, &JsValue::from_str("error"))
            .ok()
            .filter(|e| !e.is_undefined() && !e.is_null());

        match error {
            None => Ok(()),
            Some(error) => {
                let error_type = Reflect::get(&error, &JsValue::from_str("type"))
                    .ok()
                    .and_then(|v| v.as_string());

                match error_type.as_deref() {
                    Some("card_error" | "validation_error") => {
                        let message = Reflect::get(&error, &JsValue::from_str("message"))
                            .ok()
                            .and_then(|v| v.as_string())
                            .unwrap_or_else(|| "Payment failed.".into());
                        Err(ConfirmError::Card(message))
                    }
                    _ => Err(ConfirmError::Other),
                }
            }
        }
    }
}
