//! Упрощённый XML (не pain.001!): <TransferRequest><msg_id/>...<payments><payment/>...</payments></TransferRequest>

use crate::{assemble::DATE_FORMAT, error::{Result, SepaError}, model::{Payment, TransferRequest}};
use chrono::NaiveDate;
use quick_xml::{de::from_reader, se::to_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename = "payment")]
struct XmlPayment {
    payee_name: String,
    payee_iban: String,
    payee_bic: String,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_to_end_id: Option<String>,
    #[serde(default)]
    reason: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct XmlPayments {
    #[serde(default)]
    payment: Vec<XmlPayment>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename = "TransferRequest")]
struct XmlTransferRequest {
    msg_id: String,
    payer_name: String,
    payer_iban: String,
    payer_bic: String,
    execution_date: String,
    batch_booking: bool,
    #[serde(with = "rust_decimal::serde::str")]
    total_sum: Decimal,
    #[serde(default)]
    payments: XmlPayments,
}

pub struct SimpleXml;

impl crate::traits::ReadFormat for SimpleXml {
    fn read<R: BufRead>(&self, r: R) -> Result<TransferRequest> {
        let x: XmlTransferRequest = from_reader(r).map_err(|e| SepaError::Xml(format!("{e}")))?;

        let execution_date = NaiveDate::parse_from_str(&x.execution_date, DATE_FORMAT)
            .map_err(|e| SepaError::Parse(format!("execution_date: {e}")))?;

        let payments = x
            .payments
            .payment
            .into_iter()
            .map(|p| Payment {
                payee_name: p.payee_name,
                payee_iban: p.payee_iban,
                payee_bic: p.payee_bic,
                amount: p.amount,
                end_to_end_id: p.end_to_end_id.filter(|id| !id.is_empty()),
                reason: p.reason,
            })
            .collect();

        Ok(TransferRequest {
            message_id: x.msg_id,
            payer_name: x.payer_name,
            payer_iban: x.payer_iban,
            payer_bic: x.payer_bic,
            execution_date,
            batch_booking: x.batch_booking,
            total_sum: x.total_sum,
            payments,
        })
    }
}

impl crate::traits::WriteFormat for SimpleXml {
    fn write<W: Write>(&self, mut w: W, req: &TransferRequest) -> Result<()> {
        let payment = req.payments.iter().map(|p| XmlPayment {
            payee_name: p.payee_name.clone(),
            payee_iban: p.payee_iban.clone(),
            payee_bic: p.payee_bic.clone(),
            amount: p.amount,
            end_to_end_id: p.end_to_end_id.clone(),
            reason: p.reason.clone(),
        }).collect();

        let x = XmlTransferRequest {
            msg_id: req.message_id.clone(),
            payer_name: req.payer_name.clone(),
            payer_iban: req.payer_iban.clone(),
            payer_bic: req.payer_bic.clone(),
            execution_date: req.execution_date.format(DATE_FORMAT).to_string(),
            batch_booking: req.batch_booking,
            total_sum: req.total_sum,
            payments: XmlPayments { payment },
        };

        // сериализуем в String и пишем в io::Write
        let s = to_string(&x).map_err(|e| SepaError::Xml(format!("{e}")))?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
