use phonebook_core::{
    FieldError, Organization, Person, Record, SetFieldOutcome, NO_DATA, NO_NUMBER,
};
use std::thread::sleep;
use std::time::Duration;

fn person() -> Record {
    let (person, issues) = Person::new("John", "Smith", "1990-05-01", "M", "123 456");
    assert!(issues.is_empty(), "fixture input should be clean: {issues:?}");
    Record::Person(person)
}

fn organization() -> Record {
    let (org, issues) = Organization::new("Acme", "12 Main St", "+1 800 123");
    assert!(issues.is_empty(), "fixture input should be clean: {issues:?}");
    Record::Organization(org)
}

#[test]
fn person_construction_reports_every_bad_field() {
    let (person, issues) = Person::new("Jane", "Doe", "1999-13-40", "X", "++1");
    assert_eq!(
        issues,
        vec![
            FieldError::BadNumber,
            FieldError::BadBirthDate,
            FieldError::BadGender,
        ]
    );
    let record = Record::Person(person);
    assert_eq!(record.field_value("birth"), NO_DATA);
    assert_eq!(record.field_value("gender"), NO_DATA);
    assert_eq!(record.field_value("number"), NO_NUMBER);
}

#[test]
fn editable_field_order_is_fixed_per_variant() {
    assert_eq!(
        person().editable_fields(),
        ["name", "surname", "birth", "gender", "number"]
    );
    assert_eq!(organization().editable_fields(), ["name", "address", "number"]);
}

#[test]
fn list_names_differ_by_variant() {
    assert_eq!(person().list_name(), "John Smith");
    assert_eq!(organization().list_name(), "Acme");
}

#[test]
fn unknown_field_reads_as_empty_string() {
    assert_eq!(person().field_value("address"), "");
    assert_eq!(organization().field_value("surname"), "");
}

#[test]
fn unknown_field_write_is_a_silent_untouched_no_op() {
    let mut record = person();
    let edited_before = record.meta().last_edited_at();

    sleep(Duration::from_millis(5));
    assert_eq!(record.set_field("salary", "lots"), SetFieldOutcome::Ignored);

    assert_eq!(record.meta().last_edited_at(), edited_before);
    assert_eq!(record.field_value("name"), "John");
}

#[test]
fn free_text_fields_accept_anything_verbatim() {
    let mut record = organization();
    assert_eq!(record.set_field("address", ""), SetFieldOutcome::Updated);
    assert_eq!(record.field_value("address"), "");
    assert_eq!(
        record.set_field("name", "  Acme / SF  "),
        SetFieldOutcome::Updated
    );
    assert_eq!(record.field_value("name"), "  Acme / SF  ");
}

#[test]
fn clearing_the_number_is_legal_and_unreported() {
    let mut record = person();
    assert_eq!(record.set_field("number", ""), SetFieldOutcome::Updated);
    assert_eq!(record.field_value("number"), NO_NUMBER);
}

#[test]
fn invalid_number_is_rejected_and_cleared_not_kept() {
    let mut record = person();
    assert_eq!(record.field_value("number"), "123 456");

    let outcome = record.set_field("number", "not a number!");
    assert_eq!(outcome, SetFieldOutcome::Rejected(FieldError::BadNumber));
    // The previous valid value is gone, not restored.
    assert_eq!(record.field_value("number"), NO_NUMBER);
}

#[test]
fn rejected_edits_still_bump_the_edit_timestamp() {
    let mut record = person();
    let edited_before = record.meta().last_edited_at();

    sleep(Duration::from_millis(5));
    let outcome = record.set_field("birth", "1999-13-40");
    assert_eq!(outcome, SetFieldOutcome::Rejected(FieldError::BadBirthDate));

    assert!(record.meta().last_edited_at() > edited_before);
    assert_eq!(record.field_value("birth"), NO_DATA);
}

#[test]
fn created_at_never_changes_after_construction() {
    let mut record = person();
    let created = record.meta().created_at();

    sleep(Duration::from_millis(5));
    record.set_field("name", "Johnny");
    record.set_field("number", "bad number!");

    assert_eq!(record.meta().created_at(), created);
    assert!(record.meta().last_edited_at() > created);
}

#[test]
fn birth_date_is_stored_verbatim_after_trimming() {
    let mut record = person();
    assert_eq!(
        record.set_field("birth", "  2000-01-02  "),
        SetFieldOutcome::Updated
    );
    assert_eq!(record.field_value("birth"), "2000-01-02");

    assert_eq!(
        record.set_field("birth", ""),
        SetFieldOutcome::Rejected(FieldError::BadBirthDate)
    );
    assert_eq!(record.field_value("birth"), NO_DATA);
}

#[test]
fn unpadded_birth_dates_are_rejected() {
    let mut record = person();
    for input in ["1999-1-1", "1999-01-1", "1999-1-01"] {
        assert_eq!(
            record.set_field("birth", input),
            SetFieldOutcome::Rejected(FieldError::BadBirthDate),
            "should reject {input}"
        );
        assert_eq!(record.field_value("birth"), NO_DATA);
    }
}

#[test]
fn gender_is_case_normalized_and_restricted() {
    let mut record = person();
    assert_eq!(record.set_field("gender", " f "), SetFieldOutcome::Updated);
    assert_eq!(record.field_value("gender"), "F");

    assert_eq!(
        record.set_field("gender", "female"),
        SetFieldOutcome::Rejected(FieldError::BadGender)
    );
    assert_eq!(record.field_value("gender"), NO_DATA);
}

#[test]
fn search_text_is_lowercased_and_includes_sentinels() {
    let (person, _) = Person::new("John", "Smith", "", "", "");
    let record = Record::Person(person);
    let text = record.search_text();
    assert_eq!(text, "john smith [no data] [no data] [no number]");
}

#[test]
fn info_lines_use_variant_specific_labels() {
    let labels: Vec<&str> = person().info_lines().iter().map(|(l, _)| *l).collect();
    assert_eq!(
        labels,
        [
            "Name",
            "Surname",
            "Birth date",
            "Gender",
            "Number",
            "Time created",
            "Time last edit",
        ]
    );

    let labels: Vec<&str> = organization().info_lines().iter().map(|(l, _)| *l).collect();
    assert_eq!(
        labels,
        [
            "Organization name",
            "Address",
            "Number",
            "Time created",
            "Time last edit",
        ]
    );
}
