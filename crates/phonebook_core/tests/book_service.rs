use phonebook_core::{
    BookService, FieldError, OrganizationInput, PersonInput, SetFieldOutcome, NO_DATA,
};

fn seeded_service() -> BookService {
    let mut service = BookService::new();
    service.add_person(&PersonInput {
        name: "John".into(),
        surname: "Smith".into(),
        birth_date: "1990-05-01".into(),
        gender: "M".into(),
        number: "123 456".into(),
    });
    service.add_organization(&OrganizationInput {
        name: "Acme".into(),
        address: "12 Main St".into(),
        number: "".into(),
    });
    service
}

#[test]
fn adding_records_returns_their_positions() {
    let mut service = BookService::new();
    let first = service.add_person(&PersonInput::default());
    let second = service.add_organization(&OrganizationInput::default());
    assert_eq!(first.index, 0);
    assert_eq!(second.index, 1);
    assert_eq!(service.count(), 2);
}

#[test]
fn add_surfaces_validation_issues_but_still_adds() {
    let mut service = BookService::new();
    let outcome = service.add_person(&PersonInput {
        name: "Jane".into(),
        surname: "Doe".into(),
        birth_date: "1999-13-40".into(),
        gender: "yes".into(),
        number: "++1".into(),
    });

    assert_eq!(
        outcome.issues,
        vec![
            FieldError::BadNumber,
            FieldError::BadBirthDate,
            FieldError::BadGender,
        ]
    );
    assert_eq!(service.count(), 1);

    let details = service.record_details(0).unwrap();
    let birth = details.iter().find(|(label, _)| *label == "Birth date");
    assert_eq!(birth.unwrap().1, NO_DATA);
}

#[test]
fn list_returns_ordered_index_name_pairs() {
    let service = seeded_service();
    let entries = service.list();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].index, 0);
    assert_eq!(entries[0].name, "John Smith");
    assert_eq!(entries[1].index, 1);
    assert_eq!(entries[1].name, "Acme");
}

#[test]
fn search_returns_matching_entries_in_book_order() {
    let service = seeded_service();
    let hits = service.search("acme|smith");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].name, "John Smith");
    assert_eq!(hits[1].name, "Acme");
}

#[test]
fn edit_field_routes_to_the_selected_record() {
    let mut service = seeded_service();
    assert_eq!(
        service.edit_field(1, "name", "Acme West"),
        Some(SetFieldOutcome::Updated)
    );
    assert_eq!(service.list()[1].name, "Acme West");

    assert_eq!(
        service.edit_field(0, "gender", "person"),
        Some(SetFieldOutcome::Rejected(FieldError::BadGender))
    );
    assert_eq!(
        service.edit_field(0, "nickname", "JJ"),
        Some(SetFieldOutcome::Ignored)
    );
    assert_eq!(service.edit_field(7, "name", "x"), None);
}

#[test]
fn editable_fields_follow_the_record_variant() {
    let service = seeded_service();
    assert_eq!(
        service.editable_fields(0).unwrap(),
        ["name", "surname", "birth", "gender", "number"]
    );
    assert_eq!(service.editable_fields(1).unwrap(), ["name", "address", "number"]);
    assert!(service.editable_fields(9).is_none());
}

#[test]
fn delete_reports_removed_versus_not_found() {
    let mut service = seeded_service();
    assert!(!service.delete(5));
    assert!(service.delete(0));
    assert_eq!(service.count(), 1);
    assert_eq!(service.list()[0].name, "Acme");
}

#[test]
fn record_details_are_bounds_checked() {
    let service = seeded_service();
    assert!(service.record_details(0).is_some());
    assert!(service.record_details(2).is_none());
}

#[test]
fn session_book_round_trips_through_with_book() {
    let service = seeded_service();
    let book = service.into_book();
    let restored = BookService::with_book(book);
    assert_eq!(restored.count(), 2);
    assert_eq!(restored.list()[0].name, "John Smith");
}
