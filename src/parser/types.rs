use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One bookkeeping entry as the model is instructed to emit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub amount: f64,
    pub is_income: bool,
    pub category: String,
    pub is_outstanding: bool,
    #[serde(default)]
    pub counterparty: Option<String>,
    pub input_text: String,
}

impl TransactionRecord {
    /// Checks raw model output against the record shape. The caller keeps
    /// relaying the raw text; the decoded value is only proof that it
    /// conforms.
    pub fn from_model_output(content: &str) -> Result<Self> {
        let record: TransactionRecord = serde_json::from_str(content)
            .map_err(|e| Error::contract_violation(format!("invalid transaction record: {}", e)))?;

        if !record.amount.is_finite() {
            return Err(Error::contract_violation("amount is not a finite number"));
        }
        if record.category.trim().is_empty() {
            return Err(Error::contract_violation("category is empty"));
        }

        Ok(record)
    }
}
