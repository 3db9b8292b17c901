//! transactions — библиотека анализа банковских операций:
//! чтение списков операций из JSON/CSV/XLSX, фильтрация и сортировка,
//! поиск по описанию, маскирование номеров карт и счетов,
//! расчёт рублёвого эквивалента через внешний сервис курсов.

pub mod dates;
pub mod error;
pub mod exchange;
pub mod filters;
pub mod generators;
pub mod masks;
pub mod model;
pub mod readers;
pub mod search;

pub use crate::dates::format_date;
pub use crate::error::{Error, Result};
pub use crate::exchange::{CurrencyConverter, ExchangeClient, transaction_amount};
pub use crate::filters::{filter_by_state, sort_by_date};
pub use crate::generators::{card_numbers, filter_by_currency, transaction_descriptions};
pub use crate::masks::{
    DEFAULT_VISIBLE_DIGITS, mask_account_number, mask_card_number, mask_identifier,
};
pub use crate::model::{CurrencyInfo, OperationAmount, State, Transaction};
pub use crate::readers::{
    read_transactions_from_csv, read_transactions_from_json, read_transactions_from_xlsx,
};
pub use crate::search::{analyze_categories, search_by_description};
