//! ISO 20022 pain.001.001.03: запись через сборщик документа, чтение обратно в `TransferRequest`.
//!
//! Десериализатор quick-xml обрезает пробелы по краям текста, поэтому после чтения
//! `" Payer "` становится `"Payer"`. Пробелы внутри значения сохраняются.

use crate::{
    assemble::{build_xml, DATE_FORMAT},
    clock::{Clock, SystemClock},
    codes::{ChargeBearer, Currency, PaymentMethod, ServiceLevel, END_TO_END_NOT_PROVIDED},
    config::BuildOptions,
    error::{Result, SepaError},
    model::{Payment, TransferRequest},
    schema::{CreditTransferTransaction, Document, PartyIdentification},
    traits::{ReadFormat, WriteFormat},
};
use chrono::NaiveDate;
use quick_xml::de::from_reader;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

pub struct Pain001<C = SystemClock> {
    clock: C,
    options: BuildOptions,
}

impl Pain001 {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Pain001 {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Pain001<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            options: BuildOptions::default(),
        }
    }

    pub fn options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }
}

/* ------------------------------- WRITE ---------------------------------- */

impl<C: Clock> WriteFormat for Pain001<C> {
    fn write<W: Write>(&self, mut w: W, req: &TransferRequest) -> Result<()> {
        let s = build_xml(req, &self.clock, &self.options)?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}

/* ------------------------------- READ ----------------------------------- */

impl<C> ReadFormat for Pain001<C> {
    fn read<R: BufRead>(&self, r: R) -> Result<TransferRequest> {
        let doc: Document = from_reader(r).map_err(|e| SepaError::Xml(e.to_string()))?;
        let initn = doc.cstmr_cdt_trf_initn;

        let mut pmt_inf = initn.pmt_inf.into_iter();
        let pi = pmt_inf
            .next()
            .ok_or_else(|| SepaError::Parse("PmtInf missing".into()))?;
        if pmt_inf.next().is_some() {
            return Err(SepaError::Unsupported(
                "more than one PmtInf block".into(),
            ));
        }

        pi.pmt_mtd.parse::<PaymentMethod>()?;
        if let Some(cb) = &pi.chrg_br {
            cb.parse::<ChargeBearer>()?;
        }
        if let Some(svc) = pi.pmt_tp_inf.as_ref().and_then(|t| t.svc_lvl.as_ref()) {
            svc.cd.parse::<ServiceLevel>()?;
        }

        let execution_date = NaiveDate::parse_from_str(pi.reqd_exctn_dt.trim(), DATE_FORMAT)
            .map_err(|e| SepaError::Parse(format!("ReqdExctnDt: {e}")))?;

        let payments = pi
            .cdt_trf_tx_inf
            .into_iter()
            .map(payment)
            .collect::<Result<Vec<_>>>()?;

        // CtrlSum необязателен по схеме
        let total_sum = initn
            .grp_hdr
            .ctrl_sum
            .or(pi.ctrl_sum)
            .unwrap_or_else(|| payments.iter().map(|p| p.amount).sum::<Decimal>());

        Ok(TransferRequest {
            message_id: initn.grp_hdr.msg_id,
            payer_name: name(pi.dbtr),
            payer_iban: pi.dbtr_acct.id.iban,
            payer_bic: pi.dbtr_agt.fin_instn_id.bic.unwrap_or_default(),
            execution_date,
            batch_booking: pi.btch_bookg.unwrap_or(false),
            total_sum,
            payments,
        })
    }
}

fn payment(tx: CreditTransferTransaction) -> Result<Payment> {
    tx.amt.instd_amt.ccy.parse::<Currency>()?;

    let end_to_end_id = match tx.pmt_id.end_to_end_id {
        id if id == END_TO_END_NOT_PROVIDED => None,
        id => Some(id),
    };
    let reason = tx
        .rmt_inf
        .map(|ri| ri.ustrd.join(" "))
        .unwrap_or_default();

    Ok(Payment {
        payee_name: tx.cdtr.map(name).unwrap_or_default(),
        payee_iban: tx
            .cdtr_acct
            .map(|a| a.id.iban)
            .ok_or_else(|| SepaError::Parse("CdtrAcct missing".into()))?,
        payee_bic: tx
            .cdtr_agt
            .and_then(|a| a.fin_instn_id.bic)
            .unwrap_or_default(),
        amount: tx.amt.instd_amt.value,
        end_to_end_id,
        reason,
    })
}

fn name(p: PartyIdentification) -> String {
    p.nm.unwrap_or_default()
}
