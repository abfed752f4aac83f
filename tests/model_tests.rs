use phonelist::error::PhonelistError;
use phonelist::model::*;

// ==========================================================================
// SECTOR TESTS
// ==========================================================================

#[test]
fn sector_labels() {
    assert_eq!(Sector::Work.label(), "arbetet");
    assert_eq!(Sector::Private.label(), "privat");
}

#[test]
fn sector_defaults_to_private() {
    assert_eq!(Sector::default(), Sector::Private);
}

// ==========================================================================
// ADDRESS TESTS
// ==========================================================================

#[test]
fn phone_renders_sector_label() {
    assert_eq!(
        Address::phone("08-1234567", Sector::Work).render(),
        "telefon arbetet: 08-1234567"
    );
    assert_eq!(
        Address::phone("070-1112233", Sector::Private).render(),
        "telefon privat: 070-1112233"
    );
}

#[test]
fn email_renders_sector_label() {
    assert_eq!(
        Address::email("anna@work.se", Sector::Work).render(),
        "epost arbetet: anna@work.se"
    );
    assert_eq!(
        Address::email("anna@home.se", Sector::Private).render(),
        "epost privat: anna@home.se"
    );
}

#[test]
fn postal_address_never_shows_sector() {
    for sector in [Sector::Work, Sector::Private] {
        let address = Address::postal("Storgatan 1, 12345, Stockholm", sector).unwrap();
        let rendered = address.render();
        assert_eq!(rendered, "adress: Storgatan 1, 12345, Stockholm");
        assert!(!rendered.contains("arbetet"));
        assert!(!rendered.contains("privat"));
        assert_eq!(address.sector(), sector);
    }
}

#[test]
fn postal_address_trims_components() {
    let address = Address::postal("  Storgatan 1 ,12345 ,   Stockholm ", Sector::Private).unwrap();
    assert_eq!(
        address,
        Address::Postal {
            street: "Storgatan 1".into(),
            postal_code: "12345".into(),
            city: "Stockholm".into(),
            sector: Sector::Private,
        }
    );
}

#[test]
fn postal_address_with_two_parts_is_an_error() {
    let err = Address::postal("Storgatan 1, Stockholm", Sector::Private).unwrap_err();
    assert!(matches!(err, PhonelistError::PostalArity { found: 2, .. }));
}

#[test]
fn postal_address_with_four_parts_is_an_error() {
    let err = Address::postal("a, b, c, d", Sector::Private).unwrap_err();
    assert!(matches!(err, PhonelistError::PostalArity { found: 4, .. }));
}

#[test]
fn address_type_tags() {
    assert_eq!(Address::phone("1", Sector::Work).type_tag(), "Phone");
    assert_eq!(Address::email("a@b", Sector::Work).type_tag(), "Email");
    assert_eq!(
        Address::postal("a, b, c", Sector::Work).unwrap().type_tag(),
        "PostalAddress"
    );
}

// ==========================================================================
// PERSON TESTS
// ==========================================================================

#[test]
fn display_name_excludes_middle_names() {
    let mut person = Person::new("Anna", "Svensson");
    person.add_middle_name("Britta");
    assert_eq!(person.display_name(), "Anna Svensson");
    assert_eq!(person.to_string(), "Anna Svensson");
}

#[test]
fn full_record_without_addresses() {
    let person = Person::new("Erik", "Nilsson");
    assert_eq!(person.full_record(), "NAMN: Erik Nilsson\n  ADRESSER:\n--\n");
}

#[test]
fn full_record_lists_middle_names_in_order() {
    let mut person = Person::new("Lisa", "Berg");
    person.add_middle_name("Maria");
    person.add_middle_name("Karin");
    assert!(person.full_record().starts_with("NAMN: Lisa Maria Karin Berg\n"));
}

#[test]
fn full_record_has_one_line_per_address_in_insertion_order() {
    let mut person = Person::new("Olle", "Karlsson");
    person.add_phone("070-1112233", Sector::Private);
    person.add_street("Storgatan 1, 12345, Stockholm", Sector::Private).unwrap();
    person.add_email("olle@jobb.se", Sector::Work);

    assert_eq!(
        person.full_record(),
        "NAMN: Olle Karlsson\n\
         \x20 ADRESSER:\n\
         \x20   telefon privat: 070-1112233\n\
         \x20   adress: Storgatan 1, 12345, Stockholm\n\
         \x20   epost arbetet: olle@jobb.se\n"
    );
}

#[test]
fn add_street_with_bad_arity_leaves_person_unchanged() {
    let mut person = Person::new("Olle", "Karlsson");
    assert!(person.add_street("Storgatan 1", Sector::Private).is_err());
    assert!(person.addresses().is_empty());
}
