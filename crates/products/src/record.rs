//! Flat product record: the raw shape products have in storage and on the wire.
//!
//! This is the boundary where untyped data enters the domain. An unknown
//! `type` tag (or a record missing the dates its type needs) is rejected here,
//! so everything downstream works with a closed [`ProductKind`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, ProductId};

use crate::product::{Product, ProductKind, ProductType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub available: u32,
    #[serde(default)]
    pub lead_time: i32,
    #[serde(default)]
    pub season_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub season_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let product_type: ProductType = record.product_type.parse()?;

        let kind = match product_type {
            ProductType::Normal => ProductKind::Normal,
            ProductType::Seasonal => {
                let (Some(season_start), Some(season_end)) =
                    (record.season_start_date, record.season_end_date)
                else {
                    return Err(DomainError::validation(format!(
                        "seasonal product {} requires season start and end dates",
                        record.id
                    )));
                };
                ProductKind::Seasonal {
                    season_start,
                    season_end,
                }
            }
            ProductType::Expirable => {
                let Some(expiry_date) = record.expiry_date else {
                    return Err(DomainError::validation(format!(
                        "expirable product {} requires an expiry date",
                        record.id
                    )));
                };
                ProductKind::Expirable { expiry_date }
            }
        };

        Ok(Product::new(record.id, record.name, kind)
            .with_available(record.available)
            .with_lead_time(record.lead_time))
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        let (season_start_date, season_end_date, expiry_date) = match *product.kind() {
            ProductKind::Normal => (None, None, None),
            ProductKind::Seasonal {
                season_start,
                season_end,
            } => (Some(season_start), Some(season_end), None),
            ProductKind::Expirable { expiry_date } => (None, None, Some(expiry_date)),
        };

        Self {
            id: product.id_typed(),
            name: product.name().to_string(),
            product_type: product.product_type().as_str().to_string(),
            available: product.available(),
            lead_time: product.lead_time(),
            season_start_date,
            season_end_date,
            expiry_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(product_type: &str) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(101),
            name: "Test Product".to_string(),
            product_type: product_type.to_string(),
            available: 2,
            lead_time: 5,
            season_start_date: None,
            season_end_date: None,
            expiry_date: None,
        }
    }

    #[test]
    fn normal_record_converts() {
        let product = Product::try_from(record("NORMAL")).unwrap();
        assert_eq!(product.kind(), &ProductKind::Normal);
        assert_eq!(product.available(), 2);
        assert_eq!(product.lead_time(), 5);
    }

    #[test]
    fn unknown_type_is_rejected_at_the_boundary() {
        let err = Product::try_from(record("BUNDLE")).unwrap_err();
        assert_eq!(err, DomainError::validation("unknown product type: BUNDLE"));
    }

    #[test]
    fn lowercase_type_is_not_accepted() {
        assert!(Product::try_from(record("normal")).is_err());
    }

    #[test]
    fn seasonal_record_requires_both_dates() {
        let mut r = record("SEASONAL");
        r.season_start_date = NaiveDate::from_ymd_opt(2024, 6, 1);
        let err = Product::try_from(r).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("season start and end")),
            _ => panic!("Expected Validation error for missing season end"),
        }
    }

    #[test]
    fn expirable_record_requires_expiry_date() {
        assert!(Product::try_from(record("EXPIRABLE")).is_err());
    }

    #[test]
    fn product_maps_back_to_its_record() {
        let expiry = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
        let product = Product::expirable(ProductId::new(7), "Milk", expiry).with_available(3);

        let r = ProductRecord::from(&product);
        assert_eq!(r.product_type, "EXPIRABLE");
        assert_eq!(r.expiry_date, Some(expiry));
        assert_eq!(r.season_start_date, None);
        assert_eq!(Product::try_from(r).unwrap(), product);
    }

    #[test]
    fn record_json_uses_camel_case_and_type_key() {
        let json = serde_json::json!({
            "id": 103,
            "name": "Seasonal Product In Season",
            "type": "SEASONAL",
            "available": 1,
            "seasonStartDate": "2024-06-01",
            "seasonEndDate": "2024-08-31"
        });
        let r: ProductRecord = serde_json::from_value(json).unwrap();
        assert_eq!(r.lead_time, 0);

        let product = Product::try_from(r).unwrap();
        assert_eq!(product.product_type(), ProductType::Seasonal);
    }
}
