//! Drug Record Model
//!
//! Deserialization target for a single entry of the drug catalogue document.
//!
//! The document uses Turkish keys (`İlaç adı`, `Kod bilgileri`, ...). English
//! camelCase names are accepted as aliases so fixtures can be written either way.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// == Drug Record ==
/// A single drug entry from the catalogue.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DrugRecord {
    /// Display name
    #[serde(
        rename = "İlaç adı",
        alias = "name",
        default,
        deserialize_with = "lenient_string"
    )]
    pub name: String,
    /// Barcode and classification codes
    #[serde(
        rename = "Kod bilgileri",
        alias = "codes",
        default,
        deserialize_with = "null_as_default"
    )]
    pub codes: CodeInfo,
    /// Manufacturer information
    #[serde(
        rename = "Firma bilgileri",
        alias = "company",
        default,
        deserialize_with = "null_as_default"
    )]
    pub company: CompanyInfo,
    /// Price information
    #[serde(
        rename = "Fiyat bilgileri",
        alias = "price",
        default,
        deserialize_with = "null_as_default"
    )]
    pub price: PriceInfo,
    /// Active ingredients in document order
    #[serde(
        rename = "Etkin maddeler",
        alias = "activeIngredients",
        default,
        deserialize_with = "null_as_default"
    )]
    pub active_ingredients: Vec<ActiveIngredient>,
}

/// Identifying codes of a drug.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CodeInfo {
    #[serde(
        rename = "Barkod",
        alias = "barcode",
        default,
        deserialize_with = "lenient_string"
    )]
    pub barcode: String,
    #[serde(
        rename = "ATC kodu",
        alias = "atcCode",
        default,
        deserialize_with = "lenient_string"
    )]
    pub atc_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompanyInfo {
    #[serde(
        rename = "Firma adı",
        alias = "name",
        default,
        deserialize_with = "lenient_string"
    )]
    pub name: String,
}

/// Price information. The label price is kept exactly as sourced.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PriceInfo {
    #[serde(
        rename = "Etiket fiyatı",
        alias = "labelPrice",
        default,
        deserialize_with = "lenient_opt_string"
    )]
    pub label_price: Option<String>,
}

// == Active Ingredient ==
/// One active substance with its dosage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveIngredient {
    #[serde(
        rename(deserialize = "Etkin madde"),
        alias = "substance",
        default,
        deserialize_with = "lenient_string"
    )]
    pub substance: String,
    #[serde(
        rename(deserialize = "Miktar"),
        alias = "amount",
        default,
        deserialize_with = "lenient_string"
    )]
    pub amount: String,
    #[serde(
        rename(deserialize = "Birim"),
        alias = "unit",
        default,
        deserialize_with = "lenient_string"
    )]
    pub unit: String,
}

impl ActiveIngredient {
    pub fn new(
        substance: impl Into<String>,
        amount: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            substance: substance.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }
}

impl DrugRecord {
    // == Constructor ==
    /// Creates a record with a name, barcode and company; other fields empty.
    pub fn new(
        name: impl Into<String>,
        barcode: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            codes: CodeInfo {
                barcode: barcode.into(),
                atc_code: String::new(),
            },
            company: CompanyInfo {
                name: company.into(),
            },
            price: PriceInfo::default(),
            active_ingredients: Vec::new(),
        }
    }

    /// Sets the raw label price.
    pub fn with_label_price(mut self, price: impl Into<String>) -> Self {
        self.price.label_price = Some(price.into());
        self
    }

    /// Sets the ATC classification code.
    pub fn with_atc_code(mut self, atc_code: impl Into<String>) -> Self {
        self.codes.atc_code = atc_code.into();
        self
    }

    /// Appends an active ingredient.
    pub fn with_ingredient(mut self, ingredient: ActiveIngredient) -> Self {
        self.active_ingredients.push(ingredient);
        self
    }

    // == Accessors ==
    pub fn barcode(&self) -> &str {
        &self.codes.barcode
    }

    pub fn atc_code(&self) -> &str {
        &self.codes.atc_code
    }

    pub fn company_name(&self) -> &str {
        &self.company.name
    }

    /// Raw label price, if the document carried one.
    pub fn label_price(&self) -> Option<&str> {
        self.price.label_price.as_deref()
    }
}

// == Lenient Field Decoding ==
// The document is hand-maintained: strings occasionally arrive as numbers or null.

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(deserializer)?))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
