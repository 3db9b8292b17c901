use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// Допустимые текстовые форматы даты операции:
/// ISO-8601 с дробными секундами и ISO-8601 с суффиксом `Z` без дробной части
pub const ACCEPTED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%SZ"];

/// Пытается разобрать строку даты в одном из допустимых форматов
pub fn parse_transaction_date(raw: &str) -> Option<NaiveDateTime> {
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Переводит строку даты операции в вид `dd.mm.yyyy`.
///
/// Пустой вход возвращается пустой строкой; строка, не подошедшая
/// ни под один допустимый формат, отклоняется с ошибкой.
pub fn format_date(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    let date = parse_transaction_date(raw).ok_or_else(|| Error::DateFormat(raw.to_string()))?;

    Ok(date.format("%d.%m.%Y").to_string())
}
