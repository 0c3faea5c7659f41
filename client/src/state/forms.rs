//! Admin edit forms and their conversion to API drafts.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{
    Category, CategoryDraft, DeliveryMethod, MethodDraft, PaymentMethod, Product, ProductDraft,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Price must be a non-negative number")]
    InvalidPrice,
}

fn required(value: &str, label: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(FormError::Missing(label)) } else { Ok(trimmed.to_owned()) }
}

/// Parse a price typed with either `.` or `,` as decimal separator.
///
/// # Errors
///
/// Returns `FormError::InvalidPrice` for non-numeric or negative input.
pub fn parse_price(raw: &str) -> Result<f64, FormError> {
    let value: f64 = raw.trim().replace(',', ".").parse().map_err(|_| FormError::InvalidPrice)?;
    if value.is_finite() && value >= 0.0 { Ok(value) } else { Err(FormError::InvalidPrice) }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub category: Option<i64>,
}

impl ProductForm {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone().unwrap_or_default(),
            image: product.image.clone().unwrap_or_default(),
            category: product.category,
        }
    }

    /// # Errors
    ///
    /// Returns the first missing or malformed field.
    pub fn to_draft(&self) -> Result<ProductDraft, FormError> {
        let name = required(&self.name, "Name")?;
        let price = parse_price(&self.price)?;
        let category = self.category.ok_or(FormError::Missing("Category"))?;
        Ok(ProductDraft {
            name,
            price,
            description: self.description.trim().to_owned(),
            image: self.image.trim().to_owned(),
            category,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    pub image: String,
    pub parent_category: Option<i64>,
}

impl CategoryForm {
    #[must_use]
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            image: category.image.clone().unwrap_or_default(),
            parent_category: category.parent_category,
        }
    }

    /// # Errors
    ///
    /// Returns `FormError::Missing` when the name is blank.
    pub fn to_draft(&self) -> Result<CategoryDraft, FormError> {
        Ok(CategoryDraft {
            name: required(&self.name, "Name")?,
            description: self.description.trim().to_owned(),
            image: self.image.trim().to_owned(),
            parent_category: self.parent_category,
        })
    }
}

/// Shared form for payment and delivery methods.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodForm {
    pub title: String,
    pub description: String,
}

impl MethodForm {
    #[must_use]
    pub fn from_payment(method: &PaymentMethod) -> Self {
        Self { title: method.title.clone(), description: method.description.clone().unwrap_or_default() }
    }

    #[must_use]
    pub fn from_delivery(method: &DeliveryMethod) -> Self {
        Self { title: method.title.clone(), description: method.description.clone().unwrap_or_default() }
    }

    /// # Errors
    ///
    /// Returns `FormError::Missing` when the title is blank.
    pub fn to_draft(&self) -> Result<MethodDraft, FormError> {
        Ok(MethodDraft { title: required(&self.title, "Title")?, description: self.description.trim().to_owned() })
    }
}
