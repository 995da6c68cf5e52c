//! Immutable product collections and the vote-ordered views derived from them.

use std::{collections::HashSet, sync::Arc};

use shared::{
    domain::{Product, ProductId},
    error::VoteError,
};

/// One generation of the product list.
///
/// The collection is never edited in place: an update builds a new snapshot in
/// which only the voted product is a fresh allocation and every other entry is
/// the same `Arc` as before. Holders of an older snapshot keep seeing exactly
/// what they saw, on any thread.
#[derive(Debug, Clone)]
pub struct ProductSnapshot {
    products: Arc<[Arc<Product>]>,
    revision: u64,
}

impl ProductSnapshot {
    pub(crate) fn seeded(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(Arc::new).collect(),
            revision: 0,
        }
    }

    /// Builds the next generation with the entry at `index` swapped for `product`.
    pub(crate) fn replace(&self, index: usize, product: Product) -> Self {
        let mut next = self.products.to_vec();
        next[index] = Arc::new(product);
        Self {
            products: next.into(),
            revision: self.revision + 1,
        }
    }

    pub(crate) fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|product| product.id == id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .map(Arc::as_ref)
    }

    /// Products in seed order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().map(Arc::as_ref)
    }

    pub fn entries(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Sorts a copy of the entries by descending score. The sort is stable, so
    /// products with equal scores keep their seed order.
    pub fn ordered(&self) -> OrderedView {
        let mut entries = self.products.to_vec();
        entries.sort_by(|a, b| b.votes.cmp(&a.votes));
        OrderedView {
            entries,
            revision: self.revision,
        }
    }

    /// Ids whose entry is a different allocation than in `older`.
    ///
    /// Only meaningful between generations of the same list; an id missing
    /// from `older` counts as changed.
    pub fn changed_since(&self, older: &ProductSnapshot) -> Vec<ProductId> {
        self.products
            .iter()
            .enumerate()
            .filter(|(index, entry)| {
                let previous = older
                    .products
                    .get(*index)
                    .filter(|previous| previous.id == entry.id)
                    .or_else(|| older.products.iter().find(|p| p.id == entry.id));
                match previous {
                    Some(previous) => !Arc::ptr_eq(previous, *entry),
                    None => true,
                }
            })
            .map(|(_, entry)| entry.id)
            .collect()
    }
}

/// Value equality over the products, ignoring the revision counter.
impl PartialEq for ProductSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.products.len() == other.products.len()
            && self
                .products
                .iter()
                .zip(other.products.iter())
                .all(|(a, b)| Arc::ptr_eq(a, b) || a == b)
    }
}

impl Eq for ProductSnapshot {}

/// Display order of one snapshot: highest score first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedView {
    entries: Vec<Arc<Product>>,
    revision: u64,
}

impl OrderedView {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&Product> {
        self.entries.first().map(Arc::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.entries.iter().map(Arc::as_ref)
    }

    pub fn entries(&self) -> &[Arc<Product>] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.entries.iter().map(|product| product.id).collect()
    }

    pub fn scores(&self) -> Vec<(ProductId, i64)> {
        self.entries
            .iter()
            .map(|product| (product.id, product.votes))
            .collect()
    }

    pub fn is_sorted_desc(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].votes >= pair[1].votes)
    }
}

impl<'a> IntoIterator for &'a OrderedView {
    type Item = &'a Arc<Product>;
    type IntoIter = std::slice::Iter<'a, Arc<Product>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Rejects collections in which an id occurs twice.
pub fn ensure_unique_ids(products: &[Product]) -> Result<(), VoteError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id) {
            return Err(VoteError::DuplicateProduct { id: product.id });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/snapshot_tests.rs"]
mod tests;
