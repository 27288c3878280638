//! Category tree aggregation

use rustc_hash::FxHashMap;

use crate::{
    clover::models::{CloverCategory, CloverItem},
    domain::catalog::records::{Category, Variation, minor_units_to_price},
};

/// Fold Clover items into their categories.
///
/// Categories keep Clover's order. A repeated category id keeps its first
/// position but takes the later name. Items flatten into one variation per
/// variant (`"{item} ({variant})"`), or a single variation named after the
/// item when it has none. References to categories missing from
/// `categories` are skipped, as are items in no category.
#[must_use]
pub fn build_category_tree(categories: Vec<CloverCategory>, items: Vec<CloverItem>) -> Vec<Category> {
    let mut tree: Vec<Category> = Vec::with_capacity(categories.len());
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for category in categories {
        if let Some(existing) = index
            .get(&category.id)
            .and_then(|position| tree.get_mut(*position))
        {
            existing.name = category.name;
            continue;
        }

        index.insert(category.id.clone(), tree.len());

        tree.push(Category {
            id: category.id,
            name: category.name,
            variations: Vec::new(),
        });
    }

    for item in items {
        let category_ids = item.category_ids();

        if category_ids.is_empty() {
            continue;
        }

        let variations = variations(&item);

        for category_id in category_ids {
            let Some(category) = index
                .get(&category_id)
                .and_then(|position| tree.get_mut(*position))
            else {
                continue;
            };

            category.variations.extend(variations.iter().cloned());
        }
    }

    tree
}

fn variations(item: &CloverItem) -> Vec<Variation> {
    let variants = item.variants();

    if variants.is_empty() {
        return vec![Variation {
            id: item.id.clone(),
            name: item.name.clone(),
            price: minor_units_to_price(item.price.unwrap_or_default()),
        }];
    }

    variants
        .into_iter()
        .map(|variant| Variation {
            id: variant.id,
            name: format!("{} ({})", item.name, variant.name),
            price: minor_units_to_price(variant.price),
        })
        .collect()
}
