//! Payment Confirmation Page

use leptos::prelude::*;

use crate::components::Amount;

#[component]
pub fn SuccessPage(payment_intent_id: String, amount: i64, status: String) -> impl IntoView {
    view! {
        <div class="success" id="payment-details">
            <h1>"Thank you for your order"</h1>
            <dl>
                <dt>"Payment"</dt>
                <dd class="payment-intent">{payment_intent_id}</dd>
                <dt>"Amount"</dt>
                <dd>"SGD " <Amount amount=amount/></dd>
            </dl>
            <p id="payment-status" data-status=status.clone()>
                {format!("Payment Status: {status}")}
            </p>
            <a href="/" class="btn">"Continue shopping"</a>
        </div>
    }
}
