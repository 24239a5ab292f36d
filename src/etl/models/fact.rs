use crate::ids::{PartyId, PaymentId};

use chrono::NaiveDateTime;

use serde::Serialize;

/// The central record: one canonical payment per settlement transaction.
/// Created once by the fact builder with settlement date, status, and
/// latency unset; subsequently only enriched (fields filled from `None`),
/// never replaced or removed.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PaymentFact {
    #[serde(rename = "PaymentID")]
    pub payment_id: PaymentId,

    #[serde(rename = "MsgId")]
    pub msg_id: String,

    #[serde(rename = "InstrId")]
    pub instr_id: Option<String>,

    #[serde(rename = "EndToEndId")]
    pub end_to_end_id: Option<String>,

    #[serde(rename = "PaymentDate")]
    pub payment_date: Option<NaiveDateTime>,

    #[serde(rename = "SettlementDate")]
    pub settlement_date: Option<NaiveDateTime>,

    #[serde(rename = "Amount")]
    pub amount: Option<String>,

    #[serde(rename = "CurrencyCode")]
    pub currency_code: Option<String>,

    #[serde(rename = "DebtorID")]
    pub debtor_id: PartyId,

    #[serde(rename = "CreditorID")]
    pub creditor_id: PartyId,

    #[serde(rename = "DebtorAgentBIC")]
    pub debtor_agent_bic: Option<String>,

    #[serde(rename = "CreditorAgentBIC")]
    pub creditor_agent_bic: Option<String>,

    #[serde(rename = "PurposeCode")]
    pub purpose_code: Option<String>,

    #[serde(rename = "StatusCode")]
    pub status_code: Option<String>,

    #[serde(rename = "ChargeBearer")]
    pub charge_bearer: Option<String>,

    #[serde(rename = "ProcessingTimeMinutes")]
    pub processing_time_minutes: Option<f64>,
}
