use std::env;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::Transaction;

/// Адрес сервиса обменных курсов по умолчанию
pub const DEFAULT_API_URL: &str = "https://api.apilayer.com/exchangerates_data";

/// Валюта, к которой приводятся суммы операций
pub const HOME_CURRENCY: &str = "RUB";

/// Контракт коллаборатора конвертации валют.
///
/// Результат — пара (успех, строка): при успехе строка содержит
/// сконвертированную сумму с двумя знаками после запятой,
/// при неудаче — сообщение об ошибке. Никаких повторных попыток.
pub trait CurrencyConverter {
    fn convert(&self, amount: f64, from: &str, to: &str) -> (bool, String);
}

/// Клиент внешнего сервиса обменных курсов.
///
/// Единственный блокирующий вызов во всей библиотеке: один синхронный
/// GET-запрос на конвертацию без повторных попыток.
pub struct ExchangeClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ExchangeClient {
    pub fn new(api_url: String, api_key: String) -> Self {
        ExchangeClient {
            client: Client::new(),
            api_url,
            api_key,
        }
    }

    /// Собирает клиент из переменных окружения `API_URL` и `API_KEY`
    pub fn from_env() -> Self {
        let api_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_key = env::var("API_KEY").unwrap_or_default();

        ExchangeClient::new(api_url, api_key)
    }
}

impl CurrencyConverter for ExchangeClient {
    fn convert(&self, amount: f64, from: &str, to: &str) -> (bool, String) {
        let url = format!("{}/convert?to={to}&from={from}&amount={amount}", self.api_url);

        let response = match self.client.get(&url).header("apikey", &self.api_key).send() {
            Ok(resp) => resp,
            Err(err) => return (false, err.to_string()),
        };

        let status = response.status();
        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            return (false, reason.to_string());
        }

        let body: Value = match response.json() {
            Ok(v) => v,
            Err(err) => return (false, err.to_string()),
        };

        match body.get("result").and_then(Value::as_f64) {
            Some(result) => (true, format!("{result:.2}")),
            None => (false, "no 'result' field in response".to_string()),
        }
    }
}

/// Рублёвый эквивалент суммы операции.
///
/// Рублёвые суммы возвращаются как есть; для остальных валют сумма
/// прогоняется через коллаборатора, и его ответ разбирается обратно
/// в число.
pub fn transaction_amount(tx: &Transaction, converter: &impl CurrencyConverter) -> Result<f64> {
    let op = tx
        .operation_amount
        .as_ref()
        .ok_or(Error::MissingField("operationAmount"))?;

    let amount: f64 = op
        .amount
        .parse()
        .map_err(|_| Error::InvalidAmount(op.amount.clone()))?;

    if op.currency.code == HOME_CURRENCY {
        info!(id = tx.id, "операция уже в рублях");
        return Ok(amount);
    }

    info!(id = tx.id, currency = %op.currency.code, "расчёт рублёвого эквивалента");
    let (ok, result) = converter.convert(amount, &op.currency.code, HOME_CURRENCY);

    if !ok {
        return Err(Error::Exchange(result));
    }

    result
        .parse()
        .map_err(|_| Error::InvalidAmount(result.clone()))
}
