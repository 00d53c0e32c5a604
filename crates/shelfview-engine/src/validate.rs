use shelfview_types::{ItemDraft, ItemPatch};

use crate::{Error, Result};

/// Field limits, matching the page-script form rules.
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Validate a draft before it touches the store. Rejections carry a
/// human-readable reason and leave everything unchanged.
pub fn validate_draft(draft: &ItemDraft) -> Result<()> {
    check_name(&draft.name)?;
    check_description(&draft.description)?;
    if let Some(price) = draft.price {
        check_price(price)?;
    }
    if let Some(rating) = draft.rating {
        check_rating(rating)?;
    }
    if let Some(url) = &draft.image_url {
        check_image_url(url)?;
    }
    Ok(())
}

/// Validate a patch with the same rules, field by field.
pub fn validate_patch(patch: &ItemPatch) -> Result<()> {
    if let Some(name) = &patch.name {
        check_name(name)?;
    }
    if let Some(description) = &patch.description {
        check_description(description)?;
    }
    if let Some(price) = patch.price {
        check_price(price)?;
    }
    if let Some(rating) = patch.rating {
        check_rating(rating)?;
    }
    if let Some(url) = &patch.image_url {
        check_image_url(url)?;
    }
    Ok(())
}

fn check_name(name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "name is required".to_string(),
        });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(Error::Validation {
            field: "name",
            message: format!("name is too long (max {} characters)", MAX_NAME_LEN),
        });
    }
    Ok(())
}

fn check_description(description: &str) -> Result<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(Error::Validation {
            field: "description",
            message: format!(
                "description is too long (max {} characters)",
                MAX_DESCRIPTION_LEN
            ),
        });
    }
    Ok(())
}

fn check_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::Validation {
            field: "price",
            message: "price must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

fn check_rating(rating: f64) -> Result<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(Error::Validation {
            field: "rating",
            message: "rating must be between 0 and 5".to_string(),
        });
    }
    Ok(())
}

fn check_image_url(url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(Error::Validation {
            field: "image_url",
            message: "image URL must start with http:// or https://".to_string(),
        });
    }
    Ok(())
}
