use std::collections::HashMap;

use lazy_regex::regex_replace_all;
use regex::RegexBuilder;

use crate::error::Result;
use crate::model::Transaction;

/// Ищет операции, в описании которых встречается строка запроса.
///
/// Поиск не учитывает регистр и не зависит от глагольных окончаний:
/// перед сопоставлением из запроса вырезаются все вхождения
/// подстрок `ть`, `сти` и `вать`, остаток экранируется как литерал,
/// а последний его символ делается необязательным. Отсутствующее
/// описание считается пустой строкой и не совпадает с непустым запросом.
///
/// Возвращает совпавшие операции в исходном порядке; пустой результат
/// не является ошибкой.
pub fn search_by_description(
    transactions: Vec<Transaction>,
    query: &str,
) -> Result<Vec<Transaction>> {
    let stemmed = regex_replace_all!("ть|сти|вать", query, "");
    let pattern = format!("{}?.*", regex::escape(&stemmed));

    let re = RegexBuilder::new(&pattern).case_insensitive(true).build()?;

    Ok(transactions
        .into_iter()
        .filter(|tx| re.is_match(tx.description.as_deref().unwrap_or("")))
        .collect())
}

/// Считает, сколько раз каждая категория встречается среди описаний операций.
///
/// Категория совпадает только с описанием целиком. Результат повторяет
/// порядок входного списка категорий; невстреченные категории получают 0.
pub fn analyze_categories(
    transactions: &[Transaction],
    categories: &[String],
) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for tx in transactions {
        if let Some(description) = tx.description.as_deref() {
            *counts.entry(description).or_insert(0) += 1;
        }
    }

    categories
        .iter()
        .map(|category| {
            let count = counts.get(category.as_str()).copied().unwrap_or(0);
            (category.clone(), count)
        })
        .collect()
}
