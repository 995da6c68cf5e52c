//! Initial product lists: the built-in catalogue and JSON seed files.

use std::{fs, path::Path};

use anyhow::Context;
use shared::{
    domain::{Product, ProductId},
    error::VoteError,
    protocol::SeedDocument,
};
use url::Url;

use crate::snapshot::ensure_unique_ids;

fn product(
    id: i64,
    title: &str,
    description: &str,
    votes: i64,
    avatar: &str,
    image: &str,
) -> Product {
    Product {
        id: ProductId(id),
        title: title.to_string(),
        description: description.to_string(),
        url: "#".to_string(),
        votes,
        submitter_avatar_url: format!("images/avatars/{avatar}"),
        product_image_url: format!("images/products/{image}"),
    }
}

pub fn builtin_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Yellow Pail",
            "On-demand sand castle construction expertise.",
            24,
            "daniel.jpg",
            "image-aqua.png",
        ),
        product(
            2,
            "Supermajority: The Fantasy Congress League",
            "Earn points when your favorite politicians pass legislation.",
            41,
            "kristy.png",
            "image-rose.png",
        ),
        product(
            3,
            "Tinfoild: Tailored tinfoil hats",
            "We already have your measurements and shipping address.",
            12,
            "veronika.jpg",
            "image-steel.png",
        ),
        product(
            4,
            "Haught or Naught",
            "High-minded or absolutely ridiculous?",
            33,
            "molly.png",
            "image-yellow.png",
        ),
    ]
}

/// Reads a JSON seed file holding either `[...]` or `{ "products": [...] }`.
pub fn load_seed_file(path: &Path) -> anyhow::Result<Vec<Product>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file '{}'", path.display()))?;
    let products = serde_json::from_str::<SeedDocument>(&raw)
        .with_context(|| format!("seed file '{}' is not a product list", path.display()))?
        .into_products();
    validate_seed(&products)
        .with_context(|| format!("seed file '{}' failed validation", path.display()))?;
    tracing::info!(
        path = %path.display(),
        products = products.len(),
        "loaded seed file"
    );
    Ok(products)
}

/// Seed file when one is configured, the built-in catalogue otherwise.
pub fn load_seed(path: Option<&Path>) -> anyhow::Result<Vec<Product>> {
    match path {
        Some(path) => load_seed_file(path),
        None => Ok(builtin_products()),
    }
}

/// Checks id uniqueness and that display fields are usable.
///
/// Links may be relative (`#`, `/items/3`); anything carrying a scheme must be
/// a well-formed absolute URL.
pub fn validate_seed(products: &[Product]) -> Result<(), VoteError> {
    ensure_unique_ids(products)?;
    for product in products {
        let invalid = |reason: &str| VoteError::InvalidSeed {
            id: product.id,
            reason: reason.to_string(),
        };
        if product.title.trim().is_empty() {
            return Err(invalid("title is empty"));
        }
        if product.url.trim().is_empty() {
            return Err(invalid("url is empty"));
        }
        if product.url.contains("://") {
            Url::parse(&product.url)
                .map_err(|err| invalid(&format!("url '{}' is invalid: {err}", product.url)))?;
        }
        if product.product_image_url.trim().is_empty() {
            return Err(invalid("product image url is empty"));
        }
        if product.submitter_avatar_url.trim().is_empty() {
            return Err(invalid("submitter avatar url is empty"));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/seed_tests.rs"]
mod tests;
