use transactions::{Transaction, analyze_categories, search_by_description};

fn tx(id: i64, description: Option<&str>) -> Transaction {
    Transaction {
        id: Some(id),
        description: description.map(str::to_string),
        ..Transaction::default()
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx(1, Some("Перевод организации")),
        tx(2, Some("Перевод со счета на счет")),
        tx(3, Some("Открытие вклада")),
        tx(4, Some("Перевод с карты на карту")),
        tx(5, None),
    ]
}

#[test]
fn search_finds_all_descriptions_containing_the_query_in_order() {
    let found = search_by_description(sample(), "Перевод").expect("valid query");

    let ids: Vec<_> = found.iter().map(|t| t.id).collect();
    assert_eq!(ids, [Some(1), Some(2), Some(4)]);
}

#[test]
fn search_is_case_insensitive() {
    let found = search_by_description(sample(), "перевод организации").expect("valid query");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, Some(1));
}

#[test]
fn search_ignores_verbal_endings_in_the_query() {
    // "открыть" -> вырезано "ть" -> "откры" совпадает с "Открытие вклада"
    let found = search_by_description(sample(), "открыть").expect("valid query");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, Some(3));
}

#[test]
fn search_with_no_matches_returns_empty_list() {
    let found = search_by_description(sample(), "несуществующее").expect("valid query");
    assert!(found.is_empty());
}

#[test]
fn record_without_description_never_matches_non_empty_query() {
    let no_descriptions = vec![tx(1, None), tx(2, None)];

    let found =
        search_by_description(no_descriptions, "Перевод организации").expect("valid query");
    assert!(found.is_empty());
}

#[test]
fn query_reduced_to_nothing_by_stemming_is_an_error() {
    // запрос целиком состоит из глагольного окончания
    assert!(search_by_description(sample(), "ть").is_err());
}

#[test]
fn categories_are_counted_by_exact_description_match() {
    let categories = vec![
        "Перевод организации".to_string(),
        "Перевод со счета на счет".to_string(),
        "Открытие вклада".to_string(),
    ];

    let records = vec![
        tx(1, Some("Перевод организации")),
        tx(2, Some("Открытие вклада")),
        tx(3, Some("Перевод организации")),
    ];

    let counts = analyze_categories(&records, &categories);
    assert_eq!(
        counts,
        [
            ("Перевод организации".to_string(), 2),
            ("Перевод со счета на счет".to_string(), 0),
            ("Открытие вклада".to_string(), 1),
        ]
    );
}

#[test]
fn unseen_category_maps_to_zero() {
    let counts = analyze_categories(&sample(), &["Not existing category".to_string()]);
    assert_eq!(counts, [("Not existing category".to_string(), 0)]);
}

#[test]
fn categories_over_records_without_descriptions_all_map_to_zero() {
    let records = vec![tx(1, None), tx(2, None)];
    let categories = vec!["Перевод организации".to_string()];

    let counts = analyze_categories(&records, &categories);
    assert_eq!(counts, [("Перевод организации".to_string(), 0)]);
}
