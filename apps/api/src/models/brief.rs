use serde::{Deserialize, Deserializer, Serialize};

/// The seven free-text fields of an ad brief, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BriefField {
    BrandName,
    Product,
    UserBenefit,
    Promotion,
    Audience,
    Goal,
    Keywords,
}

impl BriefField {
    pub const ALL: [BriefField; 7] = [
        BriefField::BrandName,
        BriefField::Product,
        BriefField::UserBenefit,
        BriefField::Promotion,
        BriefField::Audience,
        BriefField::Goal,
        BriefField::Keywords,
    ];

    /// Label used when the field is listed in the prompt.
    pub fn prompt_label(self) -> &'static str {
        match self {
            BriefField::BrandName => "Brand Name",
            BriefField::Product => "Product",
            BriefField::UserBenefit => "User Benefit or Use",
            BriefField::Promotion => "Promotion or Offer",
            BriefField::Audience => "Audience Segment",
            BriefField::Goal => "Goal or Objective",
            BriefField::Keywords => "Core Keywords",
        }
    }
}

/// An advertising brief: seven campaign fields plus optional reference copy.
///
/// Every key is optional on the wire; missing or `null` values become empty strings.
/// `csv_data` is opaque text and is never split into rows or columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Brief {
    #[serde(deserialize_with = "null_as_empty")]
    pub brand_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub product: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub user_benefit: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub promotion: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub audience: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub goal: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub keywords: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub csv_data: String,
}

/// A `null` brief field reads as an empty string, same as a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Brief {
    pub fn field(&self, field: BriefField) -> &str {
        match field {
            BriefField::BrandName => &self.brand_name,
            BriefField::Product => &self.product,
            BriefField::UserBenefit => &self.user_benefit,
            BriefField::Promotion => &self.promotion,
            BriefField::Audience => &self.audience,
            BriefField::Goal => &self.goal,
            BriefField::Keywords => &self.keywords,
        }
    }

    pub fn set_field(&mut self, field: BriefField, value: impl Into<String>) {
        let slot = match field {
            BriefField::BrandName => &mut self.brand_name,
            BriefField::Product => &mut self.product,
            BriefField::UserBenefit => &mut self.user_benefit,
            BriefField::Promotion => &mut self.promotion,
            BriefField::Audience => &mut self.audience,
            BriefField::Goal => &mut self.goal,
            BriefField::Keywords => &mut self.keywords,
        };
        *slot = value.into();
    }

    /// True when at least one field, CSV blob included, has non-whitespace content.
    pub fn is_submittable(&self) -> bool {
        BriefField::ALL
            .iter()
            .any(|&f| !self.field(f).trim().is_empty())
            || !self.csv_data.trim().is_empty()
    }
}
