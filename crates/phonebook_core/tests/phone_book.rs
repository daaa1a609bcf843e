use phonebook_core::{Organization, Person, PhoneBook, Record};

fn sample_book() -> PhoneBook {
    let mut book = PhoneBook::new();
    let (john, _) = Person::new("John", "Smith", "1990-05-01", "M", "123 456");
    let (acme, _) = Organization::new("Acme", "12 Main St", "");
    book.add(Record::Person(john));
    book.add(Record::Organization(acme));
    book
}

#[test]
fn new_book_is_empty() {
    let book = PhoneBook::new();
    assert!(book.is_empty());
    assert_eq!(book.len(), 0);
    assert!(book.get(0).is_none());
}

#[test]
fn add_appends_in_insertion_order() {
    let book = sample_book();
    assert_eq!(book.len(), 2);
    assert_eq!(book.get(0).unwrap().list_name(), "John Smith");
    assert_eq!(book.get(1).unwrap().list_name(), "Acme");
}

#[test]
fn removing_the_first_record_shifts_the_second_down() {
    let mut book = sample_book();
    let removed = book.remove_at(0).expect("index 0 should exist");
    assert_eq!(removed.list_name(), "John Smith");

    assert_eq!(book.len(), 1);
    assert_eq!(book.get(0).unwrap().list_name(), "Acme");
    assert!(book.get(1).is_none());
}

#[test]
fn out_of_bounds_removal_is_refused() {
    let mut book = sample_book();
    assert!(book.remove_at(2).is_none());
    assert_eq!(book.len(), 2);
}

#[test]
fn get_mut_allows_in_place_edits() {
    let mut book = sample_book();
    book.get_mut(1).unwrap().set_field("name", "Acme West");
    assert_eq!(book.get(1).unwrap().list_name(), "Acme West");
}
