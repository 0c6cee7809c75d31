//! Page Rendering
//!
//! Each function returns a complete HTML document.

use leptos::prelude::*;
use shop_catalog::{CatalogItem, ValidationError};

use crate::components::Document;
use crate::pages::{CheckoutPage, ErrorPage, StorefrontPage, SuccessPage};

/// Values shared by every page
#[derive(Clone, Debug, Default)]
pub struct PageContext {
    /// Stripe publishable key handed to Stripe.js
    pub publishable_key: String,
}

/// What the checkout page shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutView {
    pub title: Option<String>,
    pub amount: Option<i64>,
    pub error: Option<String>,
}

impl CheckoutView {
    /// Build from a catalog lookup; a miss becomes an inline error
    pub fn from_lookup(lookup: Result<&CatalogItem, ValidationError>) -> Self {
        match lookup {
            Ok(item) => Self {
                title: Some(item.title.to_string()),
                amount: Some(item.amount),
                error: None,
            },
            Err(e) => Self {
                error: Some(e.to_string()),
                ..Self::default()
            },
        }
    }
}

/// What the confirmation page shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessView {
    pub payment_intent_id: String,
    pub amount: i64,
    pub status: String,
}

pub fn render_storefront(ctx: &PageContext) -> String {
    let publishable_key = ctx.publishable_key.clone();
    render(move || {
        view! {
            <Document publishable_key=publishable_key>
                <StorefrontPage/>
            </Document>
        }
    })
}

pub fn render_checkout(ctx: &PageContext, checkout: CheckoutView) -> String {
    let publishable_key = ctx.publishable_key.clone();
    let CheckoutView { title, amount, error } = checkout;
    render(move || {
        view! {
            <Document publishable_key=publishable_key error=error>
                <CheckoutPage title=title amount=amount/>
            </Document>
        }
    })
}

pub fn render_success(ctx: &PageContext, success: SuccessView) -> String {
    let publishable_key = ctx.publishable_key.clone();
    let SuccessView {
        payment_intent_id,
        amount,
        status,
    } = success;
    render(move || {
        view! {
            <Document publishable_key=publishable_key>
                <SuccessPage payment_intent_id=payment_intent_id amount=amount status=status/>
            </Document>
        }
    })
}

pub fn render_error(ctx: &PageContext, message: &str) -> String {
    let publishable_key = ctx.publishable_key.clone();
    let error = Some(message.to_string());
    render(move || {
        view! {
            <Document publishable_key=publishable_key error=error>
                <ErrorPage/>
            </Document>
        }
    })
}

fn render<V: IntoView>(page: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    let html = owner.with(|| page().to_html());
    format!("<!DOCTYPE html>{html}")
}
