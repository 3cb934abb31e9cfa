use chrono::NaiveDate;
use rust_decimal::Decimal;
use sepalib::{
    error::SepaError,
    formats::csv::Csv,
    traits::{ReadFormat, WriteFormat},
};
use std::io::Cursor;

const HEADER: &str = "msg_id,payer_name,payer_iban,payer_bic,execution_date,batch_booking,total_sum,payee_name,payee_iban,payee_bic,amount,end_to_end_id,reason\n";

#[test]
fn csv_roundtrip() {
    let input = format!(
        "{HEADER}\
MSG1,Payer A,DE00123,AAAA,2025-10-02,true,15.00,Payee B,DE11,BBBB,10.00,,Invoice 1
MSG1,Payer A,DE00123,AAAA,2025-10-02,true,15.00,Payee C,DE22,CCCC,5.00,E2E-2,\"Invoice 2, part 1\"
"
    );
    let req = Csv.read(Cursor::new(input)).expect("read csv");
    assert_eq!(req.message_id, "MSG1");
    assert_eq!(req.execution_date, NaiveDate::from_ymd_opt(2025, 10, 2).unwrap());
    assert!(req.batch_booking);
    assert_eq!(req.total_sum, Decimal::new(1500, 2));
    assert_eq!(req.payments.len(), 2);
    assert_eq!(req.payments[0].end_to_end_id, None);
    assert_eq!(req.payments[1].end_to_end_id.as_deref(), Some("E2E-2"));
    assert_eq!(req.payments[1].reason, "Invoice 2, part 1");

    let mut out = Vec::new();
    Csv.write(&mut out, &req).expect("write csv");
    let again = Csv.read(Cursor::new(out)).expect("read csv again");
    assert_eq!(again, req);
}

#[test]
fn csv_missing_total_sums_payments() {
    let input = format!(
        "{HEADER}\
M,P,DE00,AAAA,2025-10-02,false,,B,DE11,BBBB,1.25,,r
M,P,DE00,AAAA,2025-10-02,false,,C,DE22,CCCC,2.50,,r
"
    );
    let req = Csv.read(Cursor::new(input)).expect("read csv");
    assert_eq!(req.total_sum, Decimal::new(375, 2));
    assert!(!req.batch_booking);
}

#[test]
fn csv_rejects_inconsistent_request_columns() {
    let input = format!(
        "{HEADER}\
M1,P,DE00,AAAA,2025-10-02,true,2.00,B,DE11,BBBB,1.00,,r
M2,P,DE00,AAAA,2025-10-02,true,2.00,C,DE22,CCCC,1.00,,r
"
    );
    let err = Csv.read(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, SepaError::Parse(_)), "{err}");
}

#[test]
fn csv_without_rows_is_an_error() {
    let err = Csv.read(Cursor::new(HEADER)).unwrap_err();
    assert!(matches!(err, SepaError::Parse(_)), "{err}");
}

#[test]
fn csv_bad_amount_is_parse_error() {
    let input = format!("{HEADER}M,P,DE00,AAAA,2025-10-02,true,1,B,DE11,BBBB,ten,,r\n");
    let err = Csv.read(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, SepaError::Parse(_)), "{err}");
}

#[test]
fn csv_keeps_whitespace_in_values() {
    let input = format!(
        "{HEADER}M,P,DE00,AAAA,2025-10-02,Yes,1.00,B,DE11,BBBB,1.00,,\"  padded \"\n"
    );
    let req = Csv.read(Cursor::new(input)).expect("read csv");
    assert_eq!(req.payments[0].reason, "  padded ");
    assert!(req.batch_booking);
}

#[test]
fn csv_batch_booking_ignores_case() {
    for (flag, expected) in [("TRUE", true), ("No", false), ("YES", true), ("False", false)] {
        let input = format!("{HEADER}M,P,DE00,AAAA,2025-10-02,{flag},1.00,B,DE11,BBBB,1.00,,r\n");
        let req = Csv.read(Cursor::new(input)).expect("read csv");
        assert_eq!(req.batch_booking, expected, "{flag}");
    }

    let input = format!("{HEADER}M,P,DE00,AAAA,2025-10-02,maybe,1.00,B,DE11,BBBB,1.00,,r\n");
    assert!(matches!(Csv.read(Cursor::new(input)), Err(SepaError::Parse(_))));
}
