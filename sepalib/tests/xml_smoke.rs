use chrono::NaiveDate;
use rust_decimal::Decimal;
use sepalib::{
    formats::xml::SimpleXml,
    model::{Payment, TransferRequest},
    traits::{ReadFormat, WriteFormat},
};
use std::io::Cursor;

fn request(payments: Vec<Payment>) -> TransferRequest {
    TransferRequest {
        message_id: "X1".into(),
        payer_name: "Payer".into(),
        payer_iban: "DE00".into(),
        payer_bic: "AAAA".into(),
        execution_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        batch_booking: true,
        total_sum: Decimal::from_str_exact("2.50").unwrap(),
        payments,
    }
}

#[test]
fn simple_xml_roundtrip() {
    let req = request(vec![Payment {
        payee_name: "Payee".into(),
        payee_iban: "DE11".into(),
        payee_bic: "BBBB".into(),
        amount: Decimal::from_str_exact("2.50").unwrap(),
        end_to_end_id: Some("E2E".into()),
        reason: "Test".into(),
    }]);

    let mut out = Vec::new();
    SimpleXml.write(&mut out, &req).expect("write simple xml");
    let back = SimpleXml.read(Cursor::new(out)).expect("read simple xml");
    assert_eq!(back, req);
}

#[test]
fn simple_xml_reads_handwritten_document() {
    let doc = r#"<TransferRequest>
  <msg_id>X2</msg_id>
  <payer_name>Payer</payer_name>
  <payer_iban>DE00</payer_iban>
  <payer_bic>AAAA</payer_bic>
  <execution_date>2025-11-03</execution_date>
  <batch_booking>false</batch_booking>
  <total_sum>7</total_sum>
  <payments>
    <payment>
      <payee_name>A</payee_name>
      <payee_iban>DE11</payee_iban>
      <payee_bic>BBBB</payee_bic>
      <amount>3</amount>
      <reason>one</reason>
    </payment>
    <payment>
      <payee_name>B</payee_name>
      <payee_iban>DE22</payee_iban>
      <payee_bic>CCCC</payee_bic>
      <amount>4</amount>
      <end_to_end_id>E-B</end_to_end_id>
      <reason>two</reason>
    </payment>
  </payments>
</TransferRequest>"#;
    let req = SimpleXml.read(Cursor::new(doc)).expect("read simple xml");
    assert_eq!(req.message_id, "X2");
    assert!(!req.batch_booking);
    assert_eq!(req.payments.len(), 2);
    assert_eq!(req.payments[0].end_to_end_id, None);
    assert_eq!(req.payments[1].end_to_end_id.as_deref(), Some("E-B"));
    assert_eq!(req.total_sum, Decimal::new(7, 0));
}

#[test]
fn simple_xml_empty_payment_list() {
    let mut req = request(vec![]);
    req.total_sum = Decimal::ZERO;

    let mut out = Vec::new();
    SimpleXml.write(&mut out, &req).expect("write simple xml");
    let back = SimpleXml.read(Cursor::new(out)).expect("read simple xml");
    assert!(back.payments.is_empty());
    assert_eq!(back, req);
}
