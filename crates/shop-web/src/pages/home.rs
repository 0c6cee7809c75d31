//! Storefront Page

use leptos::prelude::*;
use shop_catalog::items;

use crate::components::Amount;

#[component]
pub fn StorefrontPage() -> impl IntoView {
    let cards = items()
        .iter()
        .map(|item| {
            view! {
                <div class="item">
                    <h2>{item.title}</h2>
                    <p class="price">"SGD " <Amount amount=item.amount/></p>
                    <a href=format!("/checkout?item={}", item.id) class="btn btn-primary">
                        "Buy Now"
                    </a>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="home">
            <header class="hero">
                <h1>"Books for Engineers"</h1>
                <p class="tagline">"Pick a book and pay securely with Stripe"</p>
            </header>

            <section class="items">{cards}</section>
        </div>
    }
}
