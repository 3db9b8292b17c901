use std::ops::RangeInclusive;
use std::vec;

use crate::error::Error;
use crate::model::Transaction;

/// Коды валют, допустимые для фильтрации
pub const SUPPORTED_CURRENCY_CODES: [&str; 2] = ["USD", "RUB"];

/// Ленивый фильтр операций по коду валюты.
///
/// Проверка кода валюты выполняется не при создании, а на первом
/// продвижении итератора: пустой источник молча даёт пустую
/// последовательность, непустой источник с неподдерживаемым кодом
/// отдаёт одну ошибку и после этого исчерпывается.
///
/// Однопроходный итератор; одновременное продвижение из нескольких
/// потоков не поддерживается.
pub struct CurrencyFilter {
    inner: vec::IntoIter<Transaction>,
    code: String,
    failed: bool,
}

/// Отбирает операции, чья валюта совпадает с `code`
pub fn filter_by_currency(transactions: Vec<Transaction>, code: &str) -> CurrencyFilter {
    CurrencyFilter {
        inner: transactions.into_iter(),
        code: code.to_string(),
        failed: false,
    }
}

impl Iterator for CurrencyFilter {
    type Item = Result<Transaction, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let tx = self.inner.next()?;

            // валидация кода откладывается до первого продвижения
            if !SUPPORTED_CURRENCY_CODES.contains(&self.code.as_str()) {
                self.failed = true;
                return Some(Err(Error::UnsupportedCurrency(self.code.clone())));
            }

            if tx.currency_code() == self.code {
                return Some(Ok(tx));
            }
        }
    }
}

/// Итератор по описаниям операций в исходном порядке.
///
/// Отсутствующее описание отдаётся пустой строкой. Конечный,
/// однопроходный: исчерпывается после длины источника.
pub struct Descriptions<'a> {
    inner: std::slice::Iter<'a, Transaction>,
}

/// Создаёт итератор по описаниям операций
pub fn transaction_descriptions(transactions: &[Transaction]) -> Descriptions<'_> {
    Descriptions {
        inner: transactions.iter(),
    }
}

impl Iterator for Descriptions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|tx| tx.description.clone().unwrap_or_default())
    }
}

/// Генератор номеров банковских карт для диапазона `[start, end]`.
///
/// Каждый номер дополняется нулями до 16 цифр и группируется
/// блоками по 4: `1 -> "0000 0000 0000 0001"`. Исчерпывается на `end`.
pub struct CardNumbers {
    range: RangeInclusive<u64>,
}

/// Создаёт генератор отформатированных номеров карт
pub fn card_numbers(start: u64, end: u64) -> CardNumbers {
    CardNumbers { range: start..=end }
}

impl Iterator for CardNumbers {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.range.next()?;
        let digits = format!("{n:016}");

        Some(
            digits
                .as_bytes()
                .chunks(4)
                .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default().to_string())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}
