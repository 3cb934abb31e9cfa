//! Доменные модели — запрос на кредитовый перевод в «нормализованном» виде, общий для всех форматов.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub payee_name: String,
    pub payee_iban: String,
    pub payee_bic: String,
    /// Сумма платежа, валюта всегда EUR.
    pub amount: Decimal,
    pub end_to_end_id: Option<String>,
    /// Назначение платежа (попадает в RmtInf/Ustrd).
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferRequest {
    pub message_id: String,
    pub payer_name: String,
    pub payer_iban: String,
    pub payer_bic: String,
    pub execution_date: NaiveDate,
    pub batch_booking: bool,
    /// Итоговая сумма, как её передал вызывающий. Не пересчитывается из `payments`.
    pub total_sum: Decimal,
    pub payments: Vec<Payment>,
}

impl TransferRequest {
    /// Арифметическая сумма по всем платежам.
    pub fn payments_sum(&self) -> Decimal {
        self.payments.iter().map(|p| p.amount).sum()
    }
}
