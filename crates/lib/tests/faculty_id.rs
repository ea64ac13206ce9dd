use faculty_id::{Building, Error, FacultyId, OfficeNumber, Role, compose};
use serde_json::json;

#[test]
fn every_role_and_building_produces_an_eight_digit_id() {
    let office: OfficeNumber = "215".parse().unwrap();
    for role in Role::ALL {
        for building in Building::ALL {
            let id = compose(role, building, office);
            assert_eq!(id.as_str().len(), FacultyId::LEN);
            assert!(id.as_str().starts_with(role.code()));
            assert!(id.as_str().ends_with("215"));
            assert_eq!(&id.as_str()[3..5], building.code());
        }
    }
}

#[test]
fn parses_id_from_string() {
    let id: FacultyId = "50022215".parse().unwrap();
    assert_eq!(id.role(), Role::BuildingManager);
    assert_eq!(id.building(), Building::Martin);
    assert_eq!(id.office().to_string(), "215");
}

#[test]
fn invalid_names_never_reach_composition() {
    assert!(matches!("Janitor".parse::<Role>(), Err(Error::UnknownRole(_))));
    assert!(matches!(
        "Crosby".parse::<Building>(),
        Err(Error::UnknownBuilding(_))
    ));
}

#[test]
fn serializes_parts_alongside_id() {
    let id = compose(Role::Professor, Building::Graham, OfficeNumber::new(1).unwrap());
    let value = serde_json::to_value(&id).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "10039001",
            "role": "Professor",
            "building": "Graham",
            "office": "001",
        })
    );
}

#[test]
fn office_number_deserializes_from_three_digit_string() {
    let office: OfficeNumber = serde_json::from_str("\"042\"").unwrap();
    assert_eq!(office.get(), 42);
    assert!(serde_json::from_str::<OfficeNumber>("\"42\"").is_err());
}

#[test]
fn error_messages_name_the_offending_input() {
    let err = faculty_id::decompose("1234").unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed faculty ID '1234': expected exactly 8 digits"
    );
    assert_eq!(
        OfficeNumber::new(1000).unwrap_err().to_string(),
        "invalid office number '1000': expected three digits (000-999)"
    );
}

#[test]
fn json_names_match_display_names() {
    let id = compose(
        Role::BuildingManager,
        Building::McNair,
        OfficeNumber::new(215).unwrap(),
    );
    let value = serde_json::to_value(&id).unwrap();
    assert_eq!(value["role"], "Building Manager");
    assert_eq!(value["role"], Role::BuildingManager.to_string());
    assert_eq!(value["building"], "McNair");

    let role: Role = serde_json::from_str("\"Building Manager\"").unwrap();
    assert_eq!(role, Role::BuildingManager);
    assert!(serde_json::from_str::<Building>("\"Crosby\"").is_err());
}
