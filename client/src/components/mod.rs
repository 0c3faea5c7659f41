//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and shared widgets while reading and
//! writing shared state from Leptos context providers.

pub mod add_to_basket;
pub mod category_card;
pub mod checkout_form;
pub mod confirm_dialog;
pub mod header;
pub mod image_field;
pub mod load_more;
pub mod product_card;
pub mod quantity_control;
pub mod scroll_to_top;
pub mod search_bar;
pub mod sort_select;
pub mod toast;
