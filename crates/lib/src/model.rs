use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Lowercases and strips separators so "Building Manager", "building-manager" and
/// "BuildingManager" all compare equal.
fn normalize_name(source: &str) -> String {
    source
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Position held by a faculty member. Encoded as the first three digits of a [`FacultyId`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub enum Role {
    BuildingManager,
    Dean,
    Admin,
    Researcher,
    Professor,
}

impl Role {
    /// Every role, highest classification code first.
    pub const ALL: [Role; 5] = [
        Role::BuildingManager,
        Role::Dean,
        Role::Admin,
        Role::Researcher,
        Role::Professor,
    ];

    /// The 3-digit classification code.
    pub const fn code(self) -> &'static str {
        match self {
            Role::BuildingManager => "500",
            Role::Dean => "400",
            Role::Admin => "300",
            Role::Researcher => "200",
            Role::Professor => "100",
        }
    }

    /// Looks up the role assigned to a classification code, if any.
    pub fn from_code(code: &str) -> Option<Role> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Role::BuildingManager => "Building Manager",
            Role::Dean => "Dean",
            Role::Admin => "Admin",
            Role::Researcher => "Researcher",
            Role::Professor => "Professor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "buildingmanager" | "manager" => Ok(Role::BuildingManager),
            "dean" => Ok(Role::Dean),
            "admin" => Ok(Role::Admin),
            "researcher" => Ok(Role::Researcher),
            "professor" => Ok(Role::Professor),
            _ => Err(Error::UnknownRole(s.to_string())),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.name().to_string()
    }
}

impl TryFrom<String> for Role {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Building whose access rules apply. Encoded as the middle two digits of a [`FacultyId`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub enum Building {
    Martin,
    Monroe,
    McNair,
    Graham,
}

impl Building {
    /// Every building, in the order the codes were assigned.
    pub const ALL: [Building; 4] = [
        Building::Martin,
        Building::Monroe,
        Building::McNair,
        Building::Graham,
    ];

    /// The 2-digit building code.
    pub const fn code(self) -> &'static str {
        match self {
            Building::Martin => "22",
            Building::Monroe => "21",
            Building::McNair => "87",
            Building::Graham => "39",
        }
    }

    /// Looks up the building assigned to a 2-digit code, if any.
    pub fn from_code(code: &str) -> Option<Building> {
        Self::ALL.into_iter().find(|building| building.code() == code)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Building::Martin => "Martin",
            Building::Monroe => "Monroe",
            Building::McNair => "McNair",
            Building::Graham => "Graham",
        }
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Building {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|building| normalize_name(building.name()) == wanted)
            .ok_or_else(|| Error::UnknownBuilding(s.to_string()))
    }
}

impl From<Building> for String {
    fn from(building: Building) -> Self {
        building.name().to_string()
    }
}

impl TryFrom<String> for Building {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Office number of the holder, used as the last three digits of a [`FacultyId`].
///
/// Always in `0..=999` and always rendered zero-padded to three digits.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(into = "String", try_from = "String")]
pub struct OfficeNumber(u16);

impl OfficeNumber {
    pub const MAX: u16 = 999;

    pub fn new(number: u16) -> Result<Self, Error> {
        if number > Self::MAX {
            return Err(Error::InvalidOfficeNumber(number.to_string()));
        }
        Ok(OfficeNumber(number))
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for OfficeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl FromStr for OfficeNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidOfficeNumber(s.to_string()));
        }
        s.parse::<u16>()
            .map(OfficeNumber)
            .map_err(|_| Error::InvalidOfficeNumber(s.to_string()))
    }
}

impl From<OfficeNumber> for String {
    fn from(office: OfficeNumber) -> Self {
        office.to_string()
    }
}

impl TryFrom<String> for OfficeNumber {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An 8-character faculty identifier: classification code, building code and office number,
/// in that order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FacultyId {
    pub(crate) id: String,
    pub(crate) role: Role,
    pub(crate) building: Building,
    pub(crate) office: OfficeNumber,
}

impl FacultyId {
    pub const LEN: usize = 8;

    pub fn as_str(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn building(&self) -> Building {
        self.building
    }

    pub fn office(&self) -> OfficeNumber {
        self.office
    }
}

impl fmt::Display for FacultyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl AsRef<str> for FacultyId {
    fn as_ref(&self) -> &str {
        &self.id
    }
}
