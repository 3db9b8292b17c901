use std::path::PathBuf;

use transactions::{
    State, read_transactions_from_csv, read_transactions_from_json, read_transactions_from_xlsx,
};

fn fixture_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel)
}

#[test]
fn json_fixture_parses_into_transaction_list() {
    let transactions = read_transactions_from_json(fixture_path("operations.json"));

    assert_eq!(transactions.len(), 5);

    let first = &transactions[0];
    assert_eq!(first.id, Some(939719570));
    assert_eq!(first.state, State::Executed);
    assert_eq!(first.date.as_deref(), Some("2018-06-30T02:08:58.425572"));
    assert_eq!(first.description.as_deref(), Some("Перевод организации"));
    assert_eq!(first.from_account.as_deref(), Some("Счет 75106830613657916952"));
    assert_eq!(first.to_account.as_deref(), Some("Счет 11776614605963066702"));

    let amount = first.operation_amount.as_ref().expect("amount present");
    assert_eq!(amount.amount, "9824.07");
    assert_eq!(amount.currency.code, "USD");

    // у последней записи нет отправителя
    assert!(transactions[4].from_account.is_none());
}

#[test]
fn missing_json_file_gives_empty_list() {
    assert!(read_transactions_from_json(fixture_path("no_such_file.json")).is_empty());
}

#[test]
fn malformed_json_gives_empty_list() {
    assert!(read_transactions_from_json(fixture_path("malformed.json")).is_empty());
}

#[test]
fn non_list_json_root_gives_empty_list() {
    assert!(read_transactions_from_json(fixture_path("not_a_list.json")).is_empty());
}

#[test]
fn csv_fixture_parses_into_transaction_list() {
    let transactions = read_transactions_from_csv(fixture_path("transactions.csv"));

    assert_eq!(transactions.len(), 5);

    let first = &transactions[0];
    assert_eq!(first.id, Some(650703));
    assert_eq!(first.state, State::Executed);
    assert_eq!(first.date.as_deref(), Some("2023-09-05T11:30:32Z"));

    let amount = first.operation_amount.as_ref().expect("amount present");
    assert_eq!(amount.amount, "16210");
    assert_eq!(amount.currency.name, "Sol");
    assert_eq!(amount.currency.code, "PEN");

    // пустая ячейка означает отсутствующее поле
    assert!(transactions[4].from_account.is_none());
    assert_eq!(
        transactions[4].to_account.as_deref(),
        Some("Счет 23294994494356835683")
    );
}

#[test]
fn missing_csv_file_gives_empty_list() {
    assert!(read_transactions_from_csv(fixture_path("no_such_file.csv")).is_empty());
}

#[test]
fn missing_xlsx_file_gives_empty_list() {
    assert!(read_transactions_from_xlsx(fixture_path("no_such_file.xlsx")).is_empty());
}
