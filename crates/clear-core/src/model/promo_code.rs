use super::schema::{Entity, EntityKind, Nullable};
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

/// How a promo code discounts the ticket price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    /// Subtract a fixed value
    Subtract,
    /// Percent discount
    Percent,
}

/// Editable promo code attributes.
///
/// `enables_uber` and `enables_laptops` are form-only flags; the backend
/// stores them as metadata entries (see `ops::promo_code_ops`). A `uses` of
/// `Some(None)` is an explicit `null`, which the backend reads as unlimited.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCodeForm {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub code: Nullable<String>,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        with = "double_option"
    )]
    pub discount_type: Nullable<DiscountType>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub amount: Nullable<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub uses: Nullable<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub enables_uber: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub enables_laptops: Nullable<bool>,
}

impl Entity for PromoCodeForm {
    const KIND: EntityKind = EntityKind::PromoCode;
    const FIELDS: &'static [&'static str] = &[
        "code",
        "type",
        "amount",
        "uses",
        "enablesUber",
        "enablesLaptops",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_keys_match_declared_fields() {
        let form = PromoCodeForm {
            code: Some(Some("SPRING10".into())),
            discount_type: Some(Some(DiscountType::Percent)),
            amount: Some(Some(10.0)),
            uses: Some(Some(5)),
            enables_uber: Some(Some(true)),
            enables_laptops: Some(Some(false)),
        };
        let record = form.to_record().unwrap();
        let keys: Vec<&str> = record.iter().map(|(k, _)| k.as_str()).collect();
        let mut declared = PromoCodeForm::FIELDS.to_vec();
        declared.sort_unstable();
        assert_eq!(keys, declared);
    }

    #[test]
    fn test_unset_fields_are_undefined() {
        let record = PromoCodeForm::default().to_record().unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_null_survives_deserialize_and_serialize() {
        let form: PromoCodeForm =
            serde_json::from_value(json!({"code": "A", "uses": null})).unwrap();
        assert_eq!(form.uses, Some(None));
        assert_eq!(form.amount, None);

        let record = form.to_record().unwrap();
        assert_eq!(record.get("uses"), Some(&serde_json::Value::Null));
        assert!(!record.contains("amount"));
    }

    #[test]
    fn test_discount_type_wire_names() {
        assert_eq!(
            serde_json::to_value(DiscountType::Subtract).unwrap(),
            json!("SUBTRACT")
        );
    }
}
