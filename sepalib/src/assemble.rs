//! Сборка документа pain.001.001.03 из `TransferRequest`.
//!
//! Document → CstmrCdtTrfInitn → GrpHdr + PmtInf → CdtTrfTxInf (по одному на платёж).

use crate::{
    clock::Clock,
    codes::{
        ChargeBearer, Currency, PaymentMethod, ServiceLevel, END_TO_END_NOT_PROVIDED,
        PAIN_001_001_03_NS,
    },
    config::{BuildOptions, ControlSumPolicy},
    error::{SepaError, Result},
    model::{Payment, TransferRequest},
    schema::{
        AccountIdentification, Amount, BranchAndFinancialInstitution, CashAccount,
        CreditTransferTransaction, CurrencyAndAmount, CustomerCreditTransferInitiation, Document,
        FinancialInstitutionIdentification, GroupHeader, PartyIdentification,
        PaymentIdentification, PaymentInstruction, PaymentTypeInformation,
        RemittanceInformation, ServiceLevelChoice,
    },
};
use chrono::NaiveDateTime;
use quick_xml::{
    events::{BytesDecl, Event},
    se::to_string,
    Reader, Writer,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Полный цикл: время берётся из `clock` один раз, затем сборка и сериализация.
/// При ошибке частичный результат не возвращается.
pub fn build_xml(
    request: &TransferRequest,
    clock: &dyn Clock,
    options: &BuildOptions,
) -> Result<String> {
    let doc = build_document(request, clock.now(), options);
    to_xml(&doc, options.indent)
}

pub fn build_document(
    request: &TransferRequest,
    created_at: NaiveDateTime,
    options: &BuildOptions,
) -> Document {
    let ctrl_sum = control_sum(request, options.control_sum);
    let nb_of_txs = request.payments.len().to_string();
    debug!(
        msg_id = %request.message_id,
        nb_of_txs = %nb_of_txs,
        ctrl_sum = %ctrl_sum,
        "assembling pain.001.001.03 document"
    );

    Document {
        xmlns: PAIN_001_001_03_NS.to_string(),
        cstmr_cdt_trf_initn: CustomerCreditTransferInitiation {
            grp_hdr: group_header(request, created_at, &nb_of_txs, ctrl_sum),
            pmt_inf: vec![payment_instruction(request, &nb_of_txs, ctrl_sum)],
        },
    }
}

/// Сериализация дерева в строку с XML-декларацией; `indent == 0` — без переносов строк.
///
/// Дерево сериализуется одной строкой, отступы расставляет `Writer` при повторном проходе:
/// так текст листовых элементов (`<InstdAmt Ccy="EUR">10.00</InstdAmt>`) остаётся в одной строке.
pub fn to_xml(doc: &Document, indent: usize) -> Result<String> {
    let body = to_string(doc).map_err(xml)?;

    let mut wr = if indent > 0 {
        Writer::new_with_indent(Vec::new(), b' ', indent)
    } else {
        Writer::new(Vec::new())
    };
    wr.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml)?;

    let mut reader = Reader::from_str(&body);
    loop {
        match reader.read_event().map_err(xml)? {
            Event::Eof => break,
            e => wr.write_event(e).map_err(xml)?,
        }
    }

    String::from_utf8(wr.into_inner()).map_err(xml)
}

fn control_sum(request: &TransferRequest, policy: ControlSumPolicy) -> Decimal {
    let computed = request.payments_sum();
    match policy {
        ControlSumPolicy::Trusted => {
            if computed != request.total_sum {
                warn!(
                    msg_id = %request.message_id,
                    supplied = %request.total_sum,
                    computed = %computed,
                    "supplied total differs from the sum of payments, using supplied total"
                );
            }
            request.total_sum
        }
        ControlSumPolicy::Recomputed => computed,
    }
}

fn group_header(
    request: &TransferRequest,
    created_at: NaiveDateTime,
    nb_of_txs: &str,
    ctrl_sum: Decimal,
) -> GroupHeader {
    GroupHeader {
        msg_id: request.message_id.clone(),
        cre_dt_tm: created_at.format(DATE_TIME_FORMAT).to_string(),
        nb_of_txs: nb_of_txs.to_string(),
        ctrl_sum: Some(ctrl_sum),
        initg_pty: party(&request.payer_name),
    }
}

fn payment_instruction(
    request: &TransferRequest,
    nb_of_txs: &str,
    ctrl_sum: Decimal,
) -> PaymentInstruction {
    PaymentInstruction {
        pmt_inf_id: request.message_id.clone(),
        pmt_mtd: PaymentMethod::Transfer.code().to_string(),
        btch_bookg: Some(request.batch_booking),
        nb_of_txs: Some(nb_of_txs.to_string()),
        ctrl_sum: Some(ctrl_sum),
        pmt_tp_inf: Some(PaymentTypeInformation {
            svc_lvl: Some(ServiceLevelChoice {
                cd: ServiceLevel::Sepa.code().to_string(),
            }),
        }),
        reqd_exctn_dt: request.execution_date.format(DATE_FORMAT).to_string(),
        dbtr: party(&request.payer_name),
        dbtr_acct: account(&request.payer_iban),
        dbtr_agt: agent(&request.payer_bic),
        chrg_br: Some(ChargeBearer::Shared.code().to_string()),
        cdt_trf_tx_inf: request.payments.iter().map(transaction).collect(),
    }
}

fn transaction(p: &Payment) -> CreditTransferTransaction {
    let end_to_end_id = match p.end_to_end_id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => END_TO_END_NOT_PROVIDED.to_string(),
    };

    CreditTransferTransaction {
        pmt_id: PaymentIdentification { end_to_end_id },
        amt: Amount {
            instd_amt: CurrencyAndAmount {
                ccy: Currency::Eur.code().to_string(),
                value: p.amount,
            },
        },
        cdtr_agt: Some(agent(&p.payee_bic)),
        cdtr: Some(party(&p.payee_name)),
        cdtr_acct: Some(account(&p.payee_iban)),
        rmt_inf: Some(RemittanceInformation {
            ustrd: vec![p.reason.clone()],
        }),
    }
}

fn party(name: &str) -> PartyIdentification {
    PartyIdentification {
        nm: Some(name.to_string()),
    }
}

fn account(iban: &str) -> CashAccount {
    CashAccount {
        id: AccountIdentification {
            iban: iban.to_string(),
        },
    }
}

fn agent(bic: &str) -> BranchAndFinancialInstitution {
    BranchAndFinancialInstitution {
        fin_instn_id: FinancialInstitutionIdentification {
            bic: Some(bic.to_string()),
        },
    }
}

fn xml<E: std::fmt::Display>(e: E) -> SepaError {
    SepaError::Xml(e.to_string())
}
