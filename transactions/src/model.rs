use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус банковской операции
///
/// Закрытый набор статусов; любое неизвестное значение из входных данных
/// попадает в [`State::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum State {
    /// Исполнена
    #[serde(rename = "EXECUTED")]
    Executed,
    /// Отменена
    #[serde(rename = "CANCELED")]
    Canceled,
    /// В обработке
    #[serde(rename = "PENDING")]
    Pending,
    /// Статус отсутствует или не распознан
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl From<String> for State {
    fn from(raw: String) -> Self {
        // сравнение точное, с учётом регистра
        match raw.as_str() {
            "EXECUTED" => State::Executed,
            "CANCELED" => State::Canceled,
            "PENDING" => State::Pending,
            _ => State::Unknown,
        }
    }
}

impl State {
    /// Разбирает статус из пользовательского ввода (без учёта регистра)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "EXECUTED" => Some(State::Executed),
            "CANCELED" => Some(State::Canceled),
            "PENDING" => Some(State::Pending),
            _ => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            State::Executed => "EXECUTED",
            State::Canceled => "CANCELED",
            State::Pending => "PENDING",
            State::Unknown => "UNKNOWN",
        };
        write!(f, "{s}")
    }
}

/// Валюта операции: человекочитаемое имя и трёхбуквенный код
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    /// имя валюты ("руб.", "USD")
    pub name: String,
    /// код валюты ("RUB", "USD")
    pub code: String,
}

/// Сумма операции вместе с валютой
///
/// Сумма хранится строкой, как приходит из входных данных;
/// численное значение извлекается только при расчёте рублёвого эквивалента.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationAmount {
    pub amount: String,
    pub currency: CurrencyInfo,
}

/// Центральная структура библиотеки, содержащая одну банковскую операцию.
///
/// Записи неизменяемы внутри конвейера: каждая стадия забирает список
/// во владение и возвращает новый.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// идентификатор операции
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// статус операции
    #[serde(default)]
    pub state: State,
    /// дата операции в исходном текстовом виде
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// сумма с валютой
    #[serde(
        rename = "operationAmount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_amount: Option<OperationAmount>,
    /// текстовое описание
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// идентификатор отправителя ("Visa Platinum 7000792289606361", "Счет 736...")
    #[serde(rename = "from", default, skip_serializing_if = "Option::is_none")]
    pub from_account: Option<String>,
    /// идентификатор получателя
    #[serde(rename = "to", default, skip_serializing_if = "Option::is_none")]
    pub to_account: Option<String>,
}

impl Transaction {
    /// Код валюты операции; пустая строка, если сумма отсутствует
    pub fn currency_code(&self) -> &str {
        self.operation_amount
            .as_ref()
            .map(|op| op.currency.code.as_str())
            .unwrap_or("")
    }
}
