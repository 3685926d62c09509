// src/services/grouping.rs

use std::collections::BTreeMap;

use crate::models::inventory::{Category, CategoryGroup, GroupedStock, Product};

/// Agrupa os produtos por categoria. Toda categoria conhecida ganha um grupo
/// (mesmo vazio); produto com categoria desconhecida fica de fora de todos
/// os grupos, é logado e contado em `unassigned`.
pub fn group_by_category(products: &[Product], categories: &[Category]) -> GroupedStock {
    let mut groups: BTreeMap<String, CategoryGroup> = categories
        .iter()
        .map(|category| {
            (
                category.id.clone(),
                CategoryGroup {
                    category: category.clone(),
                    products: Vec::new(),
                },
            )
        })
        .collect();

    let mut unassigned = 0;
    for product in products {
        match groups.get_mut(&product.category_id) {
            Some(group) => group.products.push(product.clone()),
            None => {
                unassigned += 1;
                tracing::warn!(
                    product_id = %product.id,
                    category_id = %product.category_id,
                    "Produto com categoria desconhecida ficou fora do agrupamento"
                );
            }
        }
    }

    GroupedStock { groups, unassigned }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    fn product(id: &str, category_id: &str) -> Product {
        Product {
            id: id.into(),
            name: format!("Produto {id}"),
            category_id: category_id.into(),
            ..Default::default()
        }
    }

    fn fixtures() -> (Vec<Product>, Vec<Category>) {
        let categories = vec![category("1", "Beverages"), category("4", "Dairy"), category("7", "Meat")];
        let products = vec![
            product("a", "1"),
            product("b", "4"),
            product("c", "1"),
            product("d", "99"),
        ];
        (products, categories)
    }

    #[test]
    fn products_land_in_their_category() {
        let (products, categories) = fixtures();
        let grouped = group_by_category(&products, &categories);

        let beverages: Vec<&str> = grouped.groups["1"].products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(beverages, vec!["a", "c"]);
        assert_eq!(grouped.groups["4"].products.len(), 1);
        assert_eq!(grouped.groups["1"].category.name, "Beverages");
    }

    #[test]
    fn empty_categories_still_get_a_group() {
        let (products, categories) = fixtures();
        let grouped = group_by_category(&products, &categories);
        assert!(grouped.groups["7"].products.is_empty());
        assert_eq!(grouped.groups.len(), 3);
    }

    #[test]
    fn unknown_category_is_excluded_everywhere() {
        let (products, categories) = fixtures();
        let grouped = group_by_category(&products, &categories);

        assert_eq!(grouped.unassigned, 1);
        assert!(!grouped.groups.contains_key("99"));
        assert!(grouped
            .groups
            .values()
            .all(|group| group.products.iter().all(|p| p.id != "d")));
    }

    #[test]
    fn grouping_is_idempotent() {
        let (products, categories) = fixtures();
        let first = group_by_category(&products, &categories);
        let second = group_by_category(&products, &categories);
        assert_eq!(first, second);
    }

    #[test]
    fn no_categories_drops_everything() {
        let (products, _) = fixtures();
        let grouped = group_by_category(&products, &[]);
        assert!(grouped.groups.is_empty());
        assert_eq!(grouped.unassigned, products.len());
    }
}
