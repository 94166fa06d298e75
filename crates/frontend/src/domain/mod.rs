pub mod a001_product;
pub mod a002_category;
pub mod a003_variant_group;
pub mod a004_order;
pub mod a005_settings;
