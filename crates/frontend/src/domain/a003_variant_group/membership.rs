//! Pure membership logic for the name-based product/group linkage.
//!
//! The linkage is a denormalized name reference, not a foreign key; all
//! join logic is concentrated here so it can be swapped for an id-based
//! relation without touching the UI.

use contracts::domain::a001_product::aggregate::Product;

/// Split the product cache into members of the given group and everyone
/// else, preserving order.
pub fn partition_members(products: &[Product], group_name: &str) -> (Vec<Product>, Vec<Product>) {
    products
        .iter()
        .cloned()
        .partition(|p| p.in_group(group_name))
}

/// A product can be linked when it is not already in a different group.
pub fn can_link(product: &Product, group_name: &str) -> bool {
    !product.is_grouped() || product.in_group(group_name)
}

/// Local-only cascade after a group delete: clear the membership field on
/// every cached product that referenced the deleted name. Products not in
/// the cache keep a dangling reference until their next fetch.
pub fn clear_group_references(products: &mut [Product], group_name: &str) -> usize {
    let mut cleared = 0;
    for product in products.iter_mut() {
        if product.in_group(group_name) {
            product.variant_group = None;
            cleared += 1;
        }
    }
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, group: Option<&str>) -> Product {
        serde_json::from_str(&format!(
            r#"{{ "_id": "{id}", "name": "p", "variantGroup": {} }}"#,
            match group {
                Some(g) => format!("\"{g}\""),
                None => "null".to_string(),
            }
        ))
        .unwrap()
    }

    #[test]
    fn test_partition_members() {
        let products = vec![
            product("1", Some("Mixers")),
            product("2", None),
            product("3", Some("Kettles")),
            product("4", Some("Mixers")),
        ];
        let (members, others) = partition_members(&products, "Mixers");
        assert_eq!(members.len(), 2);
        assert!(members.iter().all(|p| p.in_group("Mixers")));
        assert_eq!(others.len(), 2);
    }

    #[test]
    fn test_can_link_rejects_products_in_another_group() {
        assert!(can_link(&product("1", None), "Mixers"));
        assert!(can_link(&product("1", Some("")), "Mixers"));
        assert!(can_link(&product("1", Some("Mixers")), "Mixers"));
        assert!(!can_link(&product("1", Some("Kettles")), "Mixers"));
    }

    #[test]
    fn test_membership_is_exclusive() {
        // A product's group field can equal at most one group's name.
        let p = product("1", Some("Mixers"));
        let groups = ["Mixers", "Kettles", "Toasters"];
        let matches = groups.iter().filter(|g| p.in_group(g)).count();
        assert_eq!(matches, 1);
    }

    #[test]
    fn test_clear_group_references_cascades_locally() {
        let mut products = vec![
            product("1", Some("Mixers")),
            product("2", Some("Kettles")),
            product("3", Some("Mixers")),
            product("4", None),
        ];
        let cleared = clear_group_references(&mut products, "Mixers");
        assert_eq!(cleared, 2);
        assert!(products.iter().all(|p| !p.in_group("Mixers")));
        // Other groups are untouched.
        assert!(products[1].in_group("Kettles"));
    }
}
