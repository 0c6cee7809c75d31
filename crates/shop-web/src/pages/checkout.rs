//! Checkout Page

use leptos::prelude::*;

use crate::components::Amount;

/// Payment form for one item. Without an item only the way back is shown;
/// the error itself is rendered by the document shell.
#[component]
pub fn CheckoutPage(title: Option<String>, amount: Option<i64>) -> impl IntoView {
    let (Some(title), Some(amount)) = (title, amount) else {
        return view! {
            <div class="checkout">
                <a href="/" class="btn">"Back to the store"</a>
            </div>
        }
        .into_any();
    };

    view! {
        <div class="checkout">
            <h1>"Checkout"</h1>
            <div class="summary">
                <h2 class="title">{title}</h2>
                <p class="price">"SGD " <Amount amount=amount/></p>
            </div>

            <form id="payment-form">
                <div id="payment-element"></div>
                <button id="submit" class="btn btn-primary">
                    <div class="spinner hidden" id="spinner"></div>
                    <span id="button-text">"Pay now"</span>
                </button>
                <div id="payment-message" class="hidden"></div>
            </form>
        </div>
    }
    .into_any()
}
