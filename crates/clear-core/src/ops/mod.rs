//! Request-variable builders around the diff engine.

pub mod promo_code_ops;
pub mod update_ops;

pub use promo_code_ops::{
    generate_promo_code, promo_code_create, promo_code_form_from_stored, scholarship_code,
    split_promo_code_update, MetadataSet, PromoCodeUpdate,
};
pub use update_ops::{
    build_create, build_delete, build_update, build_update_for, CreateVariables, DeleteVariables,
    UpdateVariables, WhereUnique,
};
