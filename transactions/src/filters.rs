use tracing::warn;

use crate::dates::parse_transaction_date;
use crate::error::{Error, Result};
use crate::model::{State, Transaction};

/// Оставляет операции с заданным статусом, сохраняя исходный порядок
pub fn filter_by_state(transactions: Vec<Transaction>, state: State) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|tx| tx.state == state)
        .collect()
}

/// Сортирует операции по дате.
///
/// Сравнение лексикографическое по исходной строке даты; сортировка
/// стабильная, при `descending` порядок сравнения обращается.
///
/// Операция без поля `date` отклоняется с ошибкой. Строка даты,
/// не подошедшая ни под один допустимый формат, сортировку не прерывает:
/// такие значения только попадают в лог.
pub fn sort_by_date(transactions: Vec<Transaction>, descending: bool) -> Result<Vec<Transaction>> {
    for tx in &transactions {
        match tx.date.as_deref() {
            None => return Err(Error::MissingDate(format!("{tx:?}"))),
            Some(raw) => {
                if parse_transaction_date(raw).is_none() {
                    warn!(date = raw, "строка даты не подошла ни под один формат");
                }
            }
        }
    }

    let mut sorted = transactions;
    if descending {
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
    } else {
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
    }

    Ok(sorted)
}
