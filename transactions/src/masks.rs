use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{error, info};

use crate::error::{Error, Result};

/// Сколько последних цифр номера остаётся видимым по умолчанию
pub const DEFAULT_VISIBLE_DIGITS: usize = 4;

/// Метка, с которой начинается идентификатор банковского счёта
pub const ACCOUNT_LABEL: &str = "Счет";

// только ASCII-цифры: номера карт и счетов не содержат других знаков
static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Маскирует номер банковской карты.
///
/// Видимыми остаются первые 6 цифр и `visible` последних; остальное
/// закрывается звёздочками, после чего строка группируется слева направо
/// блоками по `visible` символов:
/// `7000792289606361` -> `7000 79** **** 6361`.
///
/// Пустой вход возвращается пустой строкой без ошибки.
pub fn mask_card_number(card_number: &str, visible: usize) -> Result<String> {
    if card_number.is_empty() {
        return Ok(String::new());
    }

    info!("маскирование номера банковской карты");

    if NON_DIGIT_RE.is_match(card_number) {
        error!("нецифровые символы в номере банковской карты");
        return Err(Error::CardNonDigit);
    }

    let len = card_number.chars().count();
    if len != 16 {
        error!(length = len, "недопустимая длина номера банковской карты");
        return Err(Error::CardLength(len));
    }

    let masked = format!(
        "{}******{}",
        &card_number[..6],
        &card_number[len.saturating_sub(visible)..]
    );

    Ok(group_by(&masked, visible))
}

/// Маскирует номер банковского счёта.
///
/// Возвращает `**` и `visible` последних цифр: `73654108430135874305` -> `**4305`.
/// Пустой вход возвращается пустой строкой без ошибки.
pub fn mask_account_number(account_number: &str, visible: usize) -> Result<String> {
    if account_number.is_empty() {
        return Ok(String::new());
    }

    info!("маскирование номера счёта");

    if NON_DIGIT_RE.is_match(account_number) {
        error!("нецифровые символы в номере счёта");
        return Err(Error::AccountNonDigit);
    }

    let len = account_number.chars().count();
    if len != 20 {
        error!(length = len, "недопустимая длина номера счёта");
        return Err(Error::AccountLength(len));
    }

    Ok(format!("**{}", &account_number[len.saturating_sub(visible)..]))
}

/// Маскирует идентификатор вида "Visa Platinum 7000792289606361"
/// или "Счет 73654108430135874305".
///
/// Всё до первой цифры считается меткой и сохраняется в выводе как есть;
/// цифровой хвост маскируется как карта или как счёт в зависимости от метки.
///
/// Вход, в котором цифра не найдена вовсе или стоит на нулевой позиции,
/// неразличим для этой эвристики и отклоняется одной и той же ошибкой.
pub fn mask_identifier(card_or_account: &str, visible: usize) -> Result<String> {
    let mut first_digit_pos = 0;

    for (idx, ch) in card_or_account.char_indices() {
        if ch.is_ascii_digit() {
            first_digit_pos = idx;
            break;
        }
    }

    if first_digit_pos == 0 {
        return Err(Error::BadIdentifier);
    }

    let label = &card_or_account[..first_digit_pos];
    let tail = &card_or_account[first_digit_pos..];

    if label.trim_end() == ACCOUNT_LABEL {
        if NON_DIGIT_RE.is_match(tail) {
            return Err(Error::AccountNonDigit);
        }
        Ok(format!("{label}{}", mask_account_number(tail, visible)?))
    } else {
        if NON_DIGIT_RE.is_match(tail) {
            return Err(Error::CardNonDigit);
        }
        Ok(format!("{label}{}", mask_card_number(tail, visible)?))
    }
}

/// Группирует строку слева направо блоками по `size` символов через пробел
fn group_by(s: &str, size: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    chars
        .chunks(size.max(1))
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_by_splits_from_the_left() {
        assert_eq!(group_by("700079******6361", 4), "7000 79** **** 6361");
        assert_eq!(group_by("70007", 3), "700 07");
    }
}
