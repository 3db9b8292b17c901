use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use csv::ReaderBuilder;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::model::{CurrencyInfo, OperationAmount, State, Transaction};

/// Плоская строка CSV/XLSX-файла с операциями.
///
/// Табличные форматы хранят сумму и валюту отдельными колонками;
/// при преобразовании в [`Transaction`] они сворачиваются в
/// `operationAmount`. Пустые ячейки означают отсутствующие поля.
#[derive(Debug, Default, Deserialize)]
struct FlatRecord {
    id: Option<i64>,
    state: Option<String>,
    date: Option<String>,
    amount: Option<String>,
    currency_name: Option<String>,
    currency_code: Option<String>,
    description: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

impl From<FlatRecord> for Transaction {
    fn from(rec: FlatRecord) -> Self {
        let operation_amount = match (rec.amount, rec.currency_name, rec.currency_code) {
            (Some(amount), name, code) => Some(OperationAmount {
                amount,
                currency: CurrencyInfo {
                    name: name.unwrap_or_default(),
                    code: code.unwrap_or_default(),
                },
            }),
            _ => None,
        };

        let state = rec.state.map(State::from).unwrap_or_default();

        Transaction {
            id: rec.id,
            state,
            date: rec.date,
            operation_amount,
            description: rec.description,
            from_account: rec.from,
            to_account: rec.to,
        }
    }
}

/// Читает список операций из JSON-файла.
///
/// Любой сбой поглощается адаптером: отсутствующий файл, синтаксически
/// некорректный JSON и несписочный корень дают пустой список, а не ошибку.
/// Элементы массива, не подходящие под модель, пропускаются.
pub fn read_transactions_from_json<P: AsRef<Path>>(path: P) -> Vec<Transaction> {
    let path = path.as_ref();
    info!(path = %path.display(), "чтение JSON-файла с операциями");

    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            error!(path = %path.display(), %err, "не удалось открыть JSON-файл");
            return Vec::new();
        }
    };

    let root: Value = match serde_json::from_reader(BufReader::new(file)) {
        Ok(v) => v,
        Err(err) => {
            error!(path = %path.display(), %err, "не удалось разобрать JSON");
            return Vec::new();
        }
    };

    let Value::Array(items) = root else {
        warn!(path = %path.display(), "корень JSON-файла не является списком");
        return Vec::new();
    };

    let mut transactions = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<Transaction>(item) {
            Ok(tx) => transactions.push(tx),
            Err(err) => warn!(%err, "элемент списка операций пропущен"),
        }
    }

    info!(count = transactions.len(), "JSON-файл прочитан");
    transactions
}

/// Читает список операций из CSV-файла с разделителем `;`.
///
/// Первая строка файла — заголовок с именами колонок. Нечитаемые строки
/// пропускаются; отсутствующий или нечитаемый файл даёт пустой список.
pub fn read_transactions_from_csv<P: AsRef<Path>>(path: P) -> Vec<Transaction> {
    let path = path.as_ref();
    info!(path = %path.display(), "чтение CSV-файла с операциями");

    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            error!(path = %path.display(), %err, "не удалось открыть CSV-файл");
            return Vec::new();
        }
    };

    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut transactions = Vec::new();
    for result in rdr.deserialize::<FlatRecord>() {
        match result {
            Ok(rec) => transactions.push(Transaction::from(normalize_empty(rec))),
            Err(err) => warn!(%err, "строка CSV-файла пропущена"),
        }
    }

    info!(count = transactions.len(), "CSV-файл прочитан");
    transactions
}

/// Читает список операций с первого листа XLSX-файла.
///
/// Первая строка листа — заголовок; колонки сопоставляются полям по имени.
/// Отсутствующий или нечитаемый файл даёт пустой список.
pub fn read_transactions_from_xlsx<P: AsRef<Path>>(path: P) -> Vec<Transaction> {
    let path = path.as_ref();
    info!(path = %path.display(), "чтение XLSX-файла с операциями");

    let mut workbook: Xlsx<_> = match open_workbook(path) {
        Ok(wb) => wb,
        Err(err) => {
            error!(path = %path.display(), %err, "не удалось открыть XLSX-файл");
            return Vec::new();
        }
    };

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        warn!(path = %path.display(), "в XLSX-файле нет листов");
        return Vec::new();
    };

    let range = match workbook.worksheet_range(&sheet_name) {
        Ok(r) => r,
        Err(err) => {
            error!(path = %path.display(), %err, "не удалось прочитать лист XLSX-файла");
            return Vec::new();
        }
    };

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Vec::new();
    };

    let headers: Vec<String> = header.iter().map(cell_to_string).collect();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let cell = |row: &[Data], idx: Option<usize>| -> Option<String> {
        let value = cell_to_string(row.get(idx?)?);
        (!value.is_empty()).then_some(value)
    };

    let id_col = column("id");
    let state_col = column("state");
    let date_col = column("date");
    let amount_col = column("amount");
    let currency_name_col = column("currency_name");
    let currency_code_col = column("currency_code");
    let description_col = column("description");
    let from_col = column("from");
    let to_col = column("to");

    let mut transactions = Vec::new();
    for row in rows {
        let rec = FlatRecord {
            id: cell(row, id_col).and_then(|v| v.parse().ok()),
            state: cell(row, state_col),
            date: cell(row, date_col),
            amount: cell(row, amount_col),
            currency_name: cell(row, currency_name_col),
            currency_code: cell(row, currency_code_col),
            description: cell(row, description_col),
            from: cell(row, from_col),
            to: cell(row, to_col),
        };

        transactions.push(Transaction::from(rec));
    }

    info!(count = transactions.len(), "XLSX-файл прочитан");
    transactions
}

/// Переводит ячейку листа в строку; числа без дробной части — без хвоста `.0`
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

/// Пустые строки из табличных форматов означают отсутствующее поле
fn normalize_empty(mut rec: FlatRecord) -> FlatRecord {
    let clear = |field: &mut Option<String>| {
        if field.as_deref().is_some_and(|s| s.trim().is_empty()) {
            *field = None;
        }
    };

    clear(&mut rec.state);
    clear(&mut rec.date);
    clear(&mut rec.amount);
    clear(&mut rec.currency_name);
    clear(&mut rec.currency_code);
    clear(&mut rec.description);
    clear(&mut rec.from);
    clear(&mut rec.to);

    rec
}
