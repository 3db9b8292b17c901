use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use transactions::{
    Error, State, Transaction, filter_by_currency, filter_by_state, format_date, mask_identifier,
    read_transactions_from_csv, read_transactions_from_json, read_transactions_from_xlsx,
    search_by_description, sort_by_date, transaction_descriptions,
};

/// Дата-заглушка для операций без поля date
const FALLBACK_DATE: &str = "1900-01-01T00:00:00.000000";

#[derive(Parser, Debug)]
#[command(
    name = "cli_analyzer",
    version,
    about = "Консольное приложение по анализу банковских транзакций.",
    long_about = None,
)]
struct Args {
    /// Каталог с файлами операций
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Сколько последних цифр номера оставлять видимыми при маскировании
    #[arg(long, default_value_t = transactions::DEFAULT_VISIBLE_DIGITS)]
    visible_digits: usize,
}

/// Поддерживаемые форматы файлов с операциями
#[derive(Copy, Clone, Debug)]
enum Format {
    Json,
    Csv,
    Xlsx,
}

impl Format {
    /// Сопоставляет пункт меню формату
    fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Format::Json),
            "2" => Some(Format::Csv),
            "3" => Some(Format::Xlsx),
            _ => None,
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            Format::Json => "operations.json",
            Format::Csv => "transactions.csv",
            Format::Xlsx => "transactions_excel.xlsx",
        }
    }

    fn read(self, path: &Path) -> Vec<Transaction> {
        match self {
            Format::Json => read_transactions_from_json(path),
            Format::Csv => read_transactions_from_csv(path),
            Format::Xlsx => read_transactions_from_xlsx(path),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let args = Args::parse();

    loop {
        println!(
            "Добро пожаловать в консольное приложение по анализу банковских транзакций.\n\
             Выберите цифру пункта меню:\n\
             1. Получить информацию о транзакциях из JSON-файла\n\
             2. Получить информацию о транзакциях из CSV-файла\n\
             3. Получить информацию о транзакциях из XLSX-файла\n\
             4. Выход."
        );

        let choice = ask("\nВаш выбор: ")?;
        if choice == "4" {
            println!("До свидания.");
            break;
        }

        let Some(format) = Format::from_menu_choice(&choice) else {
            println!("Запрошена недопустимая операция.");
            return Ok(());
        };

        let file_path = args.data_dir.join(format.file_name());
        println!("Для обработки выбран файл {}.\n", file_path.display());

        let transactions = format.read(&file_path);

        let state = ask_state()?;
        println!("\nТранзакции отфильтрованы по статусу {state}");
        let mut filtered = filter_by_state(transactions, state);

        if ask("\nОтсортировать транзакции по дате? (Да/Нет): ")?.to_lowercase() == "да" {
            let descending =
                ask("\nОтсортировать по возрастанию или по убыванию? ")?.to_lowercase()
                    != "по возрастанию";

            filtered = match sort_by_date(filtered, descending) {
                Ok(sorted) => sorted,
                Err(err) => {
                    println!("Сортировка невозможна: {err}");
                    continue;
                }
            };
        }

        if ask("\nВыводить только рублевые транзакции? (Да/Нет): ")?.to_lowercase() == "да" {
            filtered = match filter_by_currency(filtered, "RUB").collect::<Result<_, Error>>() {
                Ok(rub_only) => rub_only,
                Err(err) => {
                    println!("Фильтрация по валюте невозможна: {err}");
                    continue;
                }
            };
        }

        if ask("\nФильтровать транзакции по определенному слову в описании? (Да/Нет): ")?
            .to_lowercase()
            == "да"
        {
            let input = ask("\nВведите слово для поиска: ")?;
            let word = input.split_whitespace().next().unwrap_or("");

            filtered = match search_by_description(filtered, word) {
                Ok(found) => found,
                Err(err) => {
                    println!("Поиск невозможен: {err}");
                    continue;
                }
            };
        }

        println!("\nИтоговый список транзакций ...");

        if filtered.is_empty() {
            println!("\nНе найдено ни одной транзакции, подходящей под ваши условия отбора.");
            continue;
        }

        println!("\nВсего транзакций в выборке: {}\n", filtered.len());
        render(&filtered, args.visible_digits);
    }

    Ok(())
}

/// Печатает приглашение и читает одну строку ввода
fn ask(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Запрашивает статус операции, пока не введён допустимый
fn ask_state() -> io::Result<State> {
    println!(
        "Введите статус, по которому необходимо выполнить фильтрацию.\n\
         Доступные для фильтровки статусы: EXECUTED, CANCELED, PENDING\n"
    );

    loop {
        let raw = ask("Выбор статуса: ")?;

        match State::parse(&raw) {
            Some(state) => return Ok(state),
            None => {
                println!("Статус операции \"{raw}\" недоступен.");
                println!(
                    "Введите статус, по которому необходимо выполнить фильтрацию.\n\
                     Доступные статусы: EXECUTED, CANCELED, PENDING\n"
                );
            }
        }
    }
}

/// Печатает итоговый список операций с маскированными номерами
fn render(transactions: &[Transaction], visible_digits: usize) {
    let mut descriptions = transaction_descriptions(transactions);

    for tx in transactions {
        let raw_date = tx.date.as_deref().unwrap_or(FALLBACK_DATE);
        let date = format_date(raw_date).unwrap_or_else(|err| {
            warn!(%err, "дата операции не отформатирована");
            raw_date.to_string()
        });

        let description = descriptions.next().unwrap_or_default();

        let amount = tx
            .operation_amount
            .as_ref()
            .map(|op| format!("{} {}", op.amount, op.currency.name))
            .unwrap_or_default();

        let to_masked = tx.to_account.as_deref().map(|to| mask(to, visible_digits));

        match (&tx.from_account, to_masked) {
            (Some(from), Some(to)) => {
                println!("{date} {description}\n{} -> {to}", mask(from, visible_digits));
            }
            (None, Some(to)) => println!("{date} {description}\n{to}"),
            (_, None) => println!("{date} {description}"),
        }

        println!("Сумма: {amount}\n");
    }
}

/// Маскирует идентификатор; при ошибке валидации показывает его как есть
fn mask(identifier: &str, visible_digits: usize) -> String {
    mask_identifier(identifier, visible_digits).unwrap_or_else(|err| {
        warn!(%err, identifier, "идентификатор не замаскирован");
        identifier.to_string()
    })
}
