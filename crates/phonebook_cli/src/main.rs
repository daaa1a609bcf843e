//! Interactive phone book REPL.
//!
//! # Responsibility
//! - Drive the line-oriented menu loop and dispatch into `phonebook_core`.
//! - Snapshot the book after every mutating action when a file was given.
//!
//! # Invariants
//! - Indices shown at prompts are 1-based; the core addresses 0-based.
//! - Every index from user input is bounds-checked before reaching core.

use log::warn;
use phonebook_core::{
    default_log_level, init_logging, load_book_or_empty, save_book, BookService, ListEntry,
    OrganizationInput, PersonInput, PhoneBook, SetFieldOutcome,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

struct App {
    service: BookService,
    snapshot_path: Option<PathBuf>,
}

impl App {
    fn open(snapshot_path: Option<PathBuf>) -> Self {
        let book = match &snapshot_path {
            Some(path) => {
                let book = load_book_or_empty(path);
                if !path.exists() {
                    // A missing backing file is created up front so later
                    // saves cannot surprise the user.
                    persist(path, &book);
                }
                book
            }
            None => PhoneBook::new(),
        };
        Self {
            service: BookService::with_book(book),
            snapshot_path,
        }
    }

    /// Saves the book and prints "Saved" when a snapshot file is in use.
    fn save_and_report(&self) {
        if let Some(path) = &self.snapshot_path {
            persist(path, self.service.book());
            println!("Saved");
        }
    }
}

fn persist(path: &Path, book: &PhoneBook) {
    if let Err(err) = save_book(path, book) {
        warn!(
            "event=snapshot_save module=cli status=error path={} error={}",
            path.display(),
            err
        );
        eprintln!("Could not save {}: {err}", path.display());
    }
}

fn main() {
    let log_dir = std::env::temp_dir().join("phonebook-logs");
    if let Some(dir) = log_dir.to_str() {
        // Logging is best-effort; the REPL works fine without it.
        let _ = init_logging(default_log_level(), dir);
    }

    let snapshot_path = std::env::args().nth(1).map(PathBuf::from);
    let mut app = App::open(snapshot_path);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    // EOF anywhere ends the program, like typing `exit` at the top menu.
    let _ = menu_loop(&mut app, &mut input);
}

fn menu_loop(app: &mut App, input: &mut impl BufRead) -> Option<()> {
    loop {
        let action = prompt_trimmed(input, "[menu] Enter action (add, list, search, count, exit): ")?;
        match action.as_str() {
            "add" => add(app, input)?,
            "list" => list_menu(app, input)?,
            "search" => search_menu(app, input)?,
            "count" => println!("The Phone Book has {} records.", app.service.count()),
            "exit" => return Some(()),
            _ => {}
        }
        println!();
    }
}

fn add(app: &mut App, input: &mut impl BufRead) -> Option<()> {
    let kind = prompt_trimmed(input, "Enter the type (person, organization): ")?;

    let outcome = match kind.as_str() {
        "person" => {
            let request = PersonInput {
                name: prompt_raw(input, "Enter the name: ")?,
                surname: prompt_raw(input, "Enter the surname: ")?,
                birth_date: prompt_raw(input, "Enter the birth date: ")?,
                gender: prompt_raw(input, "Enter the gender (M, F): ")?,
                number: prompt_raw(input, "Enter the number: ")?,
            };
            Some(app.service.add_person(&request))
        }
        "organization" => {
            let request = OrganizationInput {
                name: prompt_raw(input, "Enter the organization name: ")?,
                address: prompt_raw(input, "Enter the address: ")?,
                number: prompt_raw(input, "Enter the number: ")?,
            };
            Some(app.service.add_organization(&request))
        }
        _ => None,
    };

    if let Some(outcome) = outcome {
        for issue in &outcome.issues {
            println!("{issue}");
        }
        println!("The record added.");
        app.save_and_report();
    }
    Some(())
}

fn list_menu(app: &mut App, input: &mut impl BufRead) -> Option<()> {
    print_entries(&app.service.list());

    loop {
        let command = prompt_trimmed(input, "[list] Enter action ([number], back): ")?;
        if command == "back" {
            return Some(());
        }
        if let Some(selected) = parse_index(&command) {
            if selected < app.service.count() {
                record_menu(app, input, selected)?;
                println!();
                return Some(());
            }
        }
    }
}

fn search_menu(app: &mut App, input: &mut impl BufRead) -> Option<()> {
    let mut results = run_search(app, input)?;

    loop {
        let command = prompt_trimmed(input, "[search] Enter action ([number], back, again): ")?;
        if command == "back" {
            return Some(());
        }
        if command == "again" {
            results = run_search(app, input)?;
            continue;
        }
        if let Some(position) = parse_index(&command) {
            if let Some(entry) = results.get(position) {
                let record_index = entry.index;
                record_menu(app, input, record_index)?;
                println!();
                return Some(());
            }
        }
    }
}

fn run_search(app: &App, input: &mut impl BufRead) -> Option<Vec<ListEntry>> {
    let query = prompt_raw(input, "Enter search query: ")?;
    let results = app.service.search(&query);
    println!("Found {} results:", results.len());
    print_entries(&results);
    Some(results)
}

fn record_menu(app: &mut App, input: &mut impl BufRead, index: usize) -> Option<()> {
    print_record(app, index);
    println!();

    loop {
        let action = prompt_trimmed(input, "[record] Enter action (edit, delete, menu): ")?;
        match action.as_str() {
            "menu" => return Some(()),
            "delete" => {
                app.service.delete(index);
                println!("The record removed!");
                app.save_and_report();
                return Some(());
            }
            "edit" => {
                edit_record(app, input, index)?;
                app.save_and_report();
                print_record(app, index);
                println!();
            }
            _ => {}
        }
    }
}

fn edit_record(app: &mut App, input: &mut impl BufRead, index: usize) -> Option<()> {
    let fields = app.service.editable_fields(index)?;
    let field = prompt_trimmed(input, &format!("Select a field ({}): ", fields.join(", ")))?;
    let value = prompt_raw(input, &format!("Enter {field}: "))?;

    if let Some(SetFieldOutcome::Rejected(issue)) = app.service.edit_field(index, &field, &value) {
        println!("{issue}");
    }
    println!("The record updated!");
    Some(())
}

fn print_entries(entries: &[ListEntry]) {
    for (position, entry) in entries.iter().enumerate() {
        println!("{}. {}", position + 1, entry.name);
    }
}

fn print_record(app: &App, index: usize) {
    if let Some(lines) = app.service.record_details(index) {
        for (label, value) in lines {
            println!("{label}: {value}");
        }
    }
}

/// Prints `text` and reads one line verbatim (trailing newline stripped).
/// Returns `None` on EOF.
fn prompt_raw(input: &mut impl BufRead, text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            Some(line)
        }
    }
}

fn prompt_trimmed(input: &mut impl BufRead, text: &str) -> Option<String> {
    prompt_raw(input, text).map(|line| line.trim().to_string())
}

/// Accepts plain decimal input only, converted to a 0-based index.
fn parse_index(command: &str) -> Option<usize> {
    if command.is_empty() || !command.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let selected: usize = command.parse().ok()?;
    selected.checked_sub(1)
}
