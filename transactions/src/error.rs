use thiserror::Error;

/// Ошибки валидации и обработки транзакций
#[derive(Debug, Error)]
pub enum Error {
    // логические ошибки

    /// нецифровые символы в номере карты
    #[error("card number must contain only digits")]
    CardNonDigit,

    /// неверная длина номера карты
    #[error("card number must be exactly 16 digits, got {0}")]
    CardLength(usize),

    /// нецифровые символы в номере счёта
    #[error("account number must contain only digits")]
    AccountNonDigit,

    /// неверная длина номера счёта
    #[error("account number must be exactly 20 digits, got {0}")]
    AccountLength(usize),

    /// идентификатор без метки платёжной системы или слова "Счет"
    #[error("identifier must start with a payment system name or the word 'Счет'")]
    BadIdentifier,

    /// отсутствует обязательное поле date; содержит дамп транзакции
    #[error("transaction has no 'date' field: {0}")]
    MissingDate(String),

    /// запрошенная валюта вне поддерживаемого набора
    #[error("currency must be one of: USD, RUB")]
    UnsupportedCurrency(String),

    /// строка даты не подошла ни под один допустимый формат
    #[error("date string '{0}' matches none of the accepted formats")]
    DateFormat(String),

    /// сумма не распарсилась в число
    #[error("invalid amount: '{0}'")]
    InvalidAmount(String),

    /// ошибка отсутствия обязательного поля
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// конвертация валюты не удалась; содержит сообщение коллаборатора
    #[error("exchange rate lookup failed: {0}")]
    Exchange(String),

    // обёртки

    /// обёртка regex::Error (невалидный поисковый шаблон)
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
