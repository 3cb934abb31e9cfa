//! Записи элементов pain.001.001.03 (CustomerCreditTransferInitiationV03).
//!
//! Только те элементы, которые заполняет сборщик. Порядок полей в структурах
//! совпадает с порядком sequence в XSD: quick-xml пишет элементы в порядке полей.

use crate::codes::PAIN_001_001_03_NS;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Document")]
pub struct Document {
    #[serde(rename = "@xmlns", default = "default_ns")]
    pub xmlns: String,
    #[serde(rename = "CstmrCdtTrfInitn")]
    pub cstmr_cdt_trf_initn: CustomerCreditTransferInitiation,
}

fn default_ns() -> String {
    PAIN_001_001_03_NS.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerCreditTransferInitiation {
    pub grp_hdr: GroupHeader,
    #[serde(default)]
    pub pmt_inf: Vec<PaymentInstruction>,
}

/// GroupHeader32.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupHeader {
    pub msg_id: String,
    /// ISODateTime.
    pub cre_dt_tm: String,
    pub nb_of_txs: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub ctrl_sum: Option<Decimal>,
    pub initg_pty: PartyIdentification,
}

/// PaymentInstructionInformation3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentInstruction {
    pub pmt_inf_id: String,
    pub pmt_mtd: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub btch_bookg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nb_of_txs: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub ctrl_sum: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmt_tp_inf: Option<PaymentTypeInformation>,
    /// ISODate.
    pub reqd_exctn_dt: String,
    pub dbtr: PartyIdentification,
    pub dbtr_acct: CashAccount,
    pub dbtr_agt: BranchAndFinancialInstitution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrg_br: Option<String>,
    #[serde(default)]
    pub cdt_trf_tx_inf: Vec<CreditTransferTransaction>,
}

/// CreditTransferTransactionInformation10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreditTransferTransaction {
    pub pmt_id: PaymentIdentification,
    pub amt: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdtr_agt: Option<BranchAndFinancialInstitution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdtr: Option<PartyIdentification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdtr_acct: Option<CashAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rmt_inf: Option<RemittanceInformation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartyIdentification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentTypeInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svc_lvl: Option<ServiceLevelChoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceLevelChoice {
    pub cd: String,
}

/// CashAccount16, только IBAN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CashAccount {
    pub id: AccountIdentification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountIdentification {
    #[serde(rename = "IBAN")]
    pub iban: String,
}

/// BranchAndFinancialInstitutionIdentification4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BranchAndFinancialInstitution {
    pub fin_instn_id: FinancialInstitutionIdentification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialInstitutionIdentification {
    #[serde(rename = "BIC", default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentIdentification {
    pub end_to_end_id: String,
}

/// AmountType3Choice, используется только InstdAmt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Amount {
    pub instd_amt: CurrencyAndAmount,
}

/// ActiveOrHistoricCurrencyAndAmount: `<InstdAmt Ccy="EUR">10.00</InstdAmt>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyAndAmount {
    #[serde(rename = "@Ccy")]
    pub ccy: String,
    #[serde(rename = "$text", with = "rust_decimal::serde::str")]
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemittanceInformation {
    #[serde(default)]
    pub ustrd: Vec<String>,
}
