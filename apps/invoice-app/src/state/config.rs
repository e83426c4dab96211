//! # Configuration State
//!
//! Defaults for new invoices, loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`INVOICE_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use invoice_core::format::DEFAULT_DUE_DAYS;
use invoice_core::types::default_invoice_number;
use invoice_core::{
    coerce, DocumentSeed, IdGenerator, PaymentTerms, SequentialIds, TaxRate, UuidIds,
};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Issuer name pre-filled on new invoices
    pub issuer_name: String,

    /// Issuer address pre-filled on new invoices
    pub issuer_address: String,

    /// Footer notes pre-filled on new invoices
    pub notes: String,

    /// Default tax rate as a percentage (8.5 = 8.5%)
    pub default_tax_rate: f64,

    /// Days from issue date to the default due date
    pub due_days: u64,

    /// Default payment terms label
    pub payment_terms: String,

    /// Description of the pre-filled first row, if any
    pub first_item: Option<String>,

    /// Prefix of generated invoice numbers (`INV` → `INV-2025-123`)
    pub invoice_number_prefix: String,

    /// How line item ids are generated
    pub id_strategy: IdStrategy,
}

/// Line item id generation strategy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `item-1`, `item-2`, ...
    #[default]
    Sequential,

    /// Random UUID v4
    Uuid,
}

impl IdStrategy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sequential" => Some(IdStrategy::Sequential),
            "uuid" => Some(IdStrategy::Uuid),
            _ => None,
        }
    }

    /// Builds a fresh generator for one document.
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
            IdStrategy::Uuid => Box::new(UuidIds),
        }
    }
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Issuer: "Kenar Tutors"
    /// - Notes: "Thank you for your business!"
    /// - Tax: 8.5%
    /// - Due: 14 days after issue, terms "Net 14"
    /// - First row: "Resume Writing"
    fn default() -> Self {
        ConfigState {
            issuer_name: "Kenar Tutors".to_string(),
            issuer_address: String::new(),
            notes: "Thank you for your business!".to_string(),
            default_tax_rate: 8.5,
            due_days: DEFAULT_DUE_DAYS,
            payment_terms: PaymentTerms::Net14.label().to_string(),
            first_item: Some("Resume Writing".to_string()),
            invoice_number_prefix: "INV".to_string(),
            id_strategy: IdStrategy::Sequential,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `INVOICE_ISSUER_NAME`, `INVOICE_ISSUER_ADDRESS`, `INVOICE_NOTES`
    /// - `INVOICE_TAX_RATE`: e.g. "8.25"
    /// - `INVOICE_DUE_DAYS`: e.g. "30"
    /// - `INVOICE_PAYMENT_TERMS`: e.g. "Net 30"; also sets the due days for
    ///   standard terms unless `INVOICE_DUE_DAYS` is given
    /// - `INVOICE_FIRST_ITEM`: empty string disables the pre-filled row
    /// - `INVOICE_NUMBER_PREFIX`
    /// - `INVOICE_ID_STRATEGY`: "sequential" | "uuid"
    pub fn from_env() -> Self {
        ConfigState::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("INVOICE_ISSUER_NAME") {
            config.issuer_name = name;
        }

        if let Some(address) = lookup("INVOICE_ISSUER_ADDRESS") {
            config.issuer_address = address;
        }

        if let Some(notes) = lookup("INVOICE_NOTES") {
            config.notes = notes;
        }

        if let Some(raw) = lookup("INVOICE_TAX_RATE") {
            match coerce::parse_number(&raw) {
                Ok(rate) if rate >= 0.0 => config.default_tax_rate = rate,
                _ => warn!(value = %raw, "ignoring invalid INVOICE_TAX_RATE"),
            }
        }

        if let Some(terms) = lookup("INVOICE_PAYMENT_TERMS") {
            if let Some(days) = PaymentTerms::from_label(&terms).days() {
                config.due_days = days;
            }
            config.payment_terms = terms;
        }

        if let Some(raw) = lookup("INVOICE_DUE_DAYS") {
            match raw.trim().parse::<u64>() {
                Ok(days) => config.due_days = days,
                Err(_) => warn!(value = %raw, "ignoring invalid INVOICE_DUE_DAYS"),
            }
        }

        if let Some(item) = lookup("INVOICE_FIRST_ITEM") {
            config.first_item = (!item.is_empty()).then_some(item);
        }

        if let Some(prefix) = lookup("INVOICE_NUMBER_PREFIX") {
            config.invoice_number_prefix = prefix;
        }

        if let Some(raw) = lookup("INVOICE_ID_STRATEGY") {
            match IdStrategy::parse(&raw) {
                Some(strategy) => config.id_strategy = strategy,
                None => warn!(value = %raw, "ignoring invalid INVOICE_ID_STRATEGY"),
            }
        }

        config
    }

    /// Starting values for a new invoice issued on `today`.
    pub fn seed<R: Rng + ?Sized>(&self, today: NaiveDate, rng: &mut R) -> DocumentSeed {
        DocumentSeed {
            today,
            invoice_number: default_invoice_number(&self.invoice_number_prefix, today, rng),
            issuer_name: self.issuer_name.clone(),
            issuer_address: self.issuer_address.clone(),
            notes: self.notes.clone(),
            payment_terms: PaymentTerms::from_label(&self.payment_terms),
            tax_rate: TaxRate::new(self.default_tax_rate),
            due_in_days: self.due_days,
            first_item: self.first_item.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.issuer_name, "Kenar Tutors");
        assert_eq!(config.default_tax_rate, 8.5);
        assert_eq!(config.due_days, 14);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("INVOICE_ISSUER_NAME", "Acme Studio"),
            ("INVOICE_TAX_RATE", "7.25"),
            ("INVOICE_DUE_DAYS", "30"),
            ("INVOICE_PAYMENT_TERMS", "Net 30"),
            ("INVOICE_FIRST_ITEM", ""),
            ("INVOICE_ID_STRATEGY", "UUID"),
        ]));
        assert_eq!(config.issuer_name, "Acme Studio");
        assert_eq!(config.default_tax_rate, 7.25);
        assert_eq!(config.due_days, 30);
        assert_eq!(config.payment_terms, "Net 30");
        assert_eq!(config.first_item, None);
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
    }

    #[test]
    fn test_payment_terms_set_due_days() {
        let config = ConfigState::from_lookup(lookup_from(&[("INVOICE_PAYMENT_TERMS", "Net 30")]));
        assert_eq!(config.due_days, 30);

        let config =
            ConfigState::from_lookup(lookup_from(&[("INVOICE_PAYMENT_TERMS", "due on receipt")]));
        assert_eq!(config.due_days, 0);

        let config =
            ConfigState::from_lookup(lookup_from(&[("INVOICE_PAYMENT_TERMS", "50% upfront")]));
        assert_eq!(config.due_days, 14);

        let config = ConfigState::from_lookup(lookup_from(&[
            ("INVOICE_PAYMENT_TERMS", "Net 60"),
            ("INVOICE_DUE_DAYS", "45"),
        ]));
        assert_eq!(config.due_days, 45);

        let today = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let config = ConfigState::from_lookup(lookup_from(&[("INVOICE_PAYMENT_TERMS", "Net 7")]));
        let seed = config.seed(today, &mut StdRng::seed_from_u64(3));
        assert_eq!(seed.payment_terms, PaymentTerms::Net7);
        assert_eq!(seed.due_in_days, 7);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("INVOICE_TAX_RATE", "lots"),
            ("INVOICE_DUE_DAYS", "-3"),
            ("INVOICE_ID_STRATEGY", "random"),
        ]));
        assert_eq!(config.default_tax_rate, 8.5);
        assert_eq!(config.due_days, 14);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);

        let config = ConfigState::from_lookup(lookup_from(&[("INVOICE_TAX_RATE", "-1")]));
        assert_eq!(config.default_tax_rate, 8.5);
    }

    #[test]
    fn test_seed() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let seed = ConfigState::default().seed(today, &mut StdRng::seed_from_u64(1));

        assert!(seed.invoice_number.starts_with("INV-2025-"));
        assert_eq!(seed.issuer_name, "Kenar Tutors");
        assert_eq!(seed.payment_terms, PaymentTerms::Net14);
        assert_eq!(seed.tax_rate.percentage(), 8.5);
        assert_eq!(seed.due_in_days, 14);
        assert_eq!(seed.first_item.as_deref(), Some("Resume Writing"));
    }
}
