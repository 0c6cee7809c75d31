//! Storefront Web Pages
//!
//! Leptos components rendered to HTML strings on the server. The browser side
//! is plain Stripe.js plus `public/js/checkout.js`.

mod components;
mod pages;
mod render;

pub use render::{
    CheckoutView, PageContext, SuccessView, render_checkout, render_error, render_storefront,
    render_success,
};
