use log::{debug, trace};

use crate::{Building, Error, FacultyId, OfficeNumber, Role};

/// Builds the faculty ID for the given role, building and office.
///
/// The result is always [`FacultyId::LEN`] characters: the 3-digit classification code, the
/// 2-digit building code and the 3-digit office number.
pub fn compose(role: Role, building: Building, office: OfficeNumber) -> FacultyId {
    let mut id = String::with_capacity(FacultyId::LEN);
    id.push_str(role.code());
    id.push_str(building.code());
    id.push_str(&office.to_string());

    debug!("Composed faculty ID {id} for {role} in {building}, office {office}");
    FacultyId {
        id,
        role,
        building,
        office,
    }
}

/// Splits an ID at its fixed offsets and recovers the role, building and office number.
pub fn decompose(id: &str) -> Result<FacultyId, Error> {
    trace!("Decomposing faculty ID {id:?}");
    if id.len() != FacultyId::LEN {
        return Err(Error::malformed_id(id, "expected exactly 8 digits"));
    }
    if !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed_id(id, "only digits are allowed"));
    }

    let (role_code, rest) = id.split_at(3);
    let (building_code, office) = rest.split_at(2);

    let role =
        Role::from_code(role_code).ok_or_else(|| Error::UnknownRole(role_code.to_string()))?;
    let building = Building::from_code(building_code)
        .ok_or_else(|| Error::UnknownBuilding(building_code.to_string()))?;
    let office: OfficeNumber = office.parse()?;

    debug!("Decomposed faculty ID {id} into {role}, {building}, office {office}");
    Ok(FacultyId {
        id: id.to_string(),
        role,
        building,
        office,
    })
}

impl std::str::FromStr for FacultyId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decompose(s)
    }
}
