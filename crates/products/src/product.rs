use chrono::NaiveDate;

use orderdesk_core::{DomainError, DomainResult, Entity, ProductId};

/// Product type tag as it appears in raw records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    Normal,
    Seasonal,
    Expirable,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Normal => "NORMAL",
            ProductType::Seasonal => "SEASONAL",
            ProductType::Expirable => "EXPIRABLE",
        }
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ProductType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORMAL" => Ok(ProductType::Normal),
            "SEASONAL" => Ok(ProductType::Seasonal),
            "EXPIRABLE" => Ok(ProductType::Expirable),
            other => Err(DomainError::validation(format!("unknown product type: {other}"))),
        }
    }
}

/// Type-specific product data.
///
/// Fields that only make sense for one product type live on that variant, so
/// code matching on the kind can never read a season window off an expirable
/// product (or vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Normal,
    Seasonal {
        season_start: NaiveDate,
        season_end: NaiveDate,
    },
    Expirable {
        expiry_date: NaiveDate,
    },
}

impl ProductKind {
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductKind::Normal => ProductType::Normal,
            ProductKind::Seasonal { .. } => ProductType::Seasonal,
            ProductKind::Expirable { .. } => ProductType::Expirable,
        }
    }
}

/// Entity: Product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    available: u32,
    lead_time: i32,
    kind: ProductKind,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, kind: ProductKind) -> Self {
        Self {
            id,
            name: name.into(),
            available: 0,
            lead_time: 0,
            kind,
        }
    }

    pub fn normal(id: ProductId, name: impl Into<String>) -> Self {
        Self::new(id, name, ProductKind::Normal)
    }

    pub fn seasonal(
        id: ProductId,
        name: impl Into<String>,
        season_start: NaiveDate,
        season_end: NaiveDate,
    ) -> Self {
        Self::new(
            id,
            name,
            ProductKind::Seasonal {
                season_start,
                season_end,
            },
        )
    }

    pub fn expirable(id: ProductId, name: impl Into<String>, expiry_date: NaiveDate) -> Self {
        Self::new(id, name, ProductKind::Expirable { expiry_date })
    }

    pub fn with_available(mut self, available: u32) -> Self {
        self.available = available;
        self
    }

    pub fn with_lead_time(mut self, lead_time: i32) -> Self {
        self.lead_time = lead_time;
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn lead_time(&self) -> i32 {
        self.lead_time
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn product_type(&self) -> ProductType {
        self.kind.product_type()
    }

    pub fn set_available(&mut self, available: u32) {
        self.available = available;
    }

    pub fn set_lead_time(&mut self, lead_time: i32) {
        self.lead_time = lead_time;
    }

    /// Take one unit out of stock, returning the remaining count.
    pub fn take_one(&mut self) -> DomainResult<u32> {
        if self.available == 0 {
            return Err(DomainError::invariant(format!(
                "product {} has no stock to take",
                self.id
            )));
        }
        self.available -= 1;
        Ok(self.available)
    }

    /// Whether `today` falls strictly inside the season window.
    ///
    /// Both boundary dates are outside the season. Non-seasonal products are
    /// never in season.
    pub fn in_season(&self, today: NaiveDate) -> bool {
        match self.kind {
            ProductKind::Seasonal {
                season_start,
                season_end,
            } => today > season_start && today < season_end,
            _ => false,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn take_one_decrements_available() {
        let mut product = Product::normal(ProductId::new(1), "Widget").with_available(2);
        assert_eq!(product.take_one().unwrap(), 1);
        assert_eq!(product.available(), 1);
    }

    #[test]
    fn take_one_rejects_empty_stock() {
        let mut product = Product::normal(ProductId::new(1), "Widget");
        let err = product.take_one().unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation for empty stock"),
        }
        assert_eq!(product.available(), 0);
    }

    #[test]
    fn season_boundaries_are_excluded() {
        let product = Product::seasonal(
            ProductId::new(2),
            "Sunscreen",
            date(2024, 6, 1),
            date(2024, 8, 31),
        );
        assert!(!product.in_season(date(2024, 6, 1)));
        assert!(product.in_season(date(2024, 6, 2)));
        assert!(product.in_season(date(2024, 8, 30)));
        assert!(!product.in_season(date(2024, 8, 31)));
    }

    #[test]
    fn non_seasonal_products_are_never_in_season() {
        let today = date(2024, 1, 1);
        assert!(!Product::normal(ProductId::new(1), "Widget").in_season(today));
        assert!(!Product::expirable(ProductId::new(3), "Milk", today).in_season(today));
    }

    #[test]
    fn product_type_parses_known_tags_only() {
        assert_eq!("SEASONAL".parse::<ProductType>().unwrap(), ProductType::Seasonal);
        let err = "FRAGILE".parse::<ProductType>().unwrap_err();
        assert_eq!(err, DomainError::validation("unknown product type: FRAGILE"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: in season exactly when start < today < end.
            #[test]
            fn in_season_matches_open_interval(
                start_offset in -30i64..30,
                end_offset in -30i64..30,
            ) {
                let today = date(2024, 3, 15);
                let start = today + chrono::Duration::days(start_offset);
                let end = today + chrono::Duration::days(end_offset);
                let product = Product::seasonal(ProductId::new(1), "Seasonal", start, end);

                prop_assert_eq!(product.in_season(today), start_offset < 0 && end_offset > 0);
            }
        }
    }
}
