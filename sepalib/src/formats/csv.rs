//! Плоский CSV: одна строка на платёж, поля запроса повторяются в каждой строке.
//! msg_id,payer_name,payer_iban,payer_bic,execution_date,batch_booking,total_sum,payee_name,payee_iban,payee_bic,amount,end_to_end_id,reason
//!
//! Пустой список платежей в этом формате не выражается.

use crate::{
    assemble::DATE_FORMAT,
    error::{Result, SepaError},
    model::{Payment, TransferRequest},
};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRow {
    msg_id: String,
    payer_name: String,
    payer_iban: String,
    payer_bic: String,
    execution_date: String,
    batch_booking: String,
    total_sum: Option<String>,

    payee_name: String,
    payee_iban: String,
    payee_bic: String,
    amount: String,
    end_to_end_id: Option<String>,
    reason: String,
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    msg_id: &'a str,
    payer_name: &'a str,
    payer_iban: &'a str,
    payer_bic: &'a str,
    execution_date: String,
    batch_booking: bool,
    total_sum: String,

    payee_name: &'a str,
    payee_iban: &'a str,
    payee_bic: &'a str,
    amount: String,
    end_to_end_id: Option<&'a str>,
    reason: &'a str,
}

/// Поля запроса из строки: должны совпадать во всех строках файла.
#[derive(PartialEq)]
struct Header {
    msg_id: String,
    payer_name: String,
    payer_iban: String,
    payer_bic: String,
    execution_date: String,
    batch_booking: String,
    total_sum: Option<String>,
}

pub struct Csv;

impl crate::traits::ReadFormat for Csv {
    fn read<R: BufRead>(&self, r: R) -> Result<TransferRequest> {
        let mut rdr = ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(r);
        let mut header: Option<Header> = None;
        let mut payments = Vec::new();

        for (i, rec) in rdr.deserialize::<CsvRow>().enumerate() {
            let row = rec?;
            let h = Header {
                msg_id: row.msg_id,
                payer_name: row.payer_name,
                payer_iban: row.payer_iban,
                payer_bic: row.payer_bic,
                execution_date: row.execution_date,
                batch_booking: row.batch_booking,
                total_sum: row.total_sum,
            };
            match &header {
                None => header = Some(h),
                Some(first) if *first != h => {
                    return Err(SepaError::Parse(format!(
                        "row {}: request columns differ from the first row",
                        i + 1
                    )))
                }
                Some(_) => {}
            }

            payments.push(Payment {
                payee_name: row.payee_name,
                payee_iban: row.payee_iban,
                payee_bic: row.payee_bic,
                amount: row
                    .amount
                    .parse::<Decimal>()
                    .map_err(|e| SepaError::Parse(format!("amount: {e}")))?,
                end_to_end_id: row.end_to_end_id.filter(|id| !id.is_empty()),
                reason: row.reason,
            });
        }

        let h = header.ok_or_else(|| SepaError::Parse("no payment rows".into()))?;

        let total_sum = match h.total_sum {
            Some(t) => t
                .parse::<Decimal>()
                .map_err(|e| SepaError::Parse(format!("total_sum: {e}")))?,
            None => payments.iter().map(|p| p.amount).sum(),
        };

        Ok(TransferRequest {
            message_id: h.msg_id,
            payer_name: h.payer_name,
            payer_iban: h.payer_iban,
            payer_bic: h.payer_bic,
            execution_date: NaiveDate::parse_from_str(&h.execution_date, DATE_FORMAT)
                .map_err(|e| SepaError::Parse(format!("execution_date: {e}")))?,
            batch_booking: parse_bool(&h.batch_booking)?,
            total_sum,
            payments,
        })
    }
}

fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(SepaError::Parse(format!("batch_booking: {s}"))),
    }
}

impl crate::traits::WriteFormat for Csv {
    fn write<W: Write>(&self, mut w: W, req: &TransferRequest) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for p in &req.payments {
            let out = CsvOutRow {
                msg_id: &req.message_id,
                payer_name: &req.payer_name,
                payer_iban: &req.payer_iban,
                payer_bic: &req.payer_bic,
                execution_date: req.execution_date.format(DATE_FORMAT).to_string(),
                batch_booking: req.batch_booking,
                total_sum: req.total_sum.to_string(),
                payee_name: &p.payee_name,
                payee_iban: &p.payee_iban,
                payee_bic: &p.payee_bic,
                amount: p.amount.to_string(),
                end_to_end_id: p.end_to_end_id.as_deref(),
                reason: &p.reason,
            };
            wrt.serialize(out)?;
        }
        wrt.flush()?;
        Ok(())
    }
}
