//! UI Components

use leptos::prelude::*;
use shop_catalog::major_units;

/// Shared page shell. `error` is shown above the page content.
#[component]
pub fn Document(
    publishable_key: String,
    #[prop(default = None)] error: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Storefront"</title>
                <link rel="stylesheet" href="/css/style.css"/>
                <script src="https://js.stripe.com/v3/"></script>
            </head>
            <body data-publishable-key=publishable_key>
                <header class="navbar">
                    <a href="/" class="brand">"Storefront"</a>
                </header>
                <main class="container">
                    {error.map(|message| view! {
                        <div class="alert alert-error" role="alert">{message}</div>
                    })}
                    {children()}
                </main>
                <script src="/js/checkout.js"></script>
            </body>
        </html>
    }
}

/// Price in major units; the raw minor-unit amount rides along for the browser script
#[component]
pub fn Amount(amount: i64) -> impl IntoView {
    view! {
        <span class="amount" data-amount=amount.to_string()>
            {major_units(amount).to_string()}
        </span>
    }
}
