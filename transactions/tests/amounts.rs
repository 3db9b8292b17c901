use transactions::{
    CurrencyConverter, CurrencyInfo, Error, OperationAmount, Transaction, transaction_amount,
};

/// Заглушка коллаборатора: фиксированный курс 90 руб. без сети
struct FixedRate {
    available: bool,
}

impl CurrencyConverter for FixedRate {
    fn convert(&self, amount: f64, _from: &str, _to: &str) -> (bool, String) {
        if self.available {
            (true, format!("{:.2}", amount * 90.0))
        } else {
            (false, "Service Unavailable".to_string())
        }
    }
}

fn tx(amount: &str, code: &str) -> Transaction {
    Transaction {
        id: Some(1),
        operation_amount: Some(OperationAmount {
            amount: amount.to_string(),
            currency: CurrencyInfo {
                name: code.to_string(),
                code: code.to_string(),
            },
        }),
        ..Transaction::default()
    }
}

#[test]
fn rub_amount_bypasses_the_converter() {
    struct Unreachable;
    impl CurrencyConverter for Unreachable {
        fn convert(&self, _: f64, _: &str, _: &str) -> (bool, String) {
            panic!("converter must not be called for RUB");
        }
    }

    let amount = transaction_amount(&tx("43318.34", "RUB"), &Unreachable).unwrap();
    assert_eq!(amount, 43318.34);
}

#[test]
fn foreign_amount_goes_through_the_converter() {
    let amount = transaction_amount(&tx("100.00", "USD"), &FixedRate { available: true }).unwrap();
    assert_eq!(amount, 9000.00);
}

#[test]
fn converter_failure_surfaces_its_message() {
    let err = transaction_amount(&tx("100.00", "USD"), &FixedRate { available: false }).unwrap_err();
    assert!(
        matches!(err, Error::Exchange(ref msg) if msg == "Service Unavailable"),
        "got: {err}"
    );
}

#[test]
fn record_without_operation_amount_is_rejected() {
    let record = Transaction::default();

    let err = transaction_amount(&record, &FixedRate { available: true }).unwrap_err();
    assert!(matches!(err, Error::MissingField("operationAmount")), "got: {err}");
}

#[test]
fn non_numeric_amount_is_rejected() {
    let err = transaction_amount(&tx("сто рублей", "RUB"), &FixedRate { available: true })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidAmount(_)), "got: {err}");
}
