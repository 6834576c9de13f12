use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for accepted registrations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolunteerId(pub String);

/// Role catalogue offered on the registration form, grouped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolunteerRole {
    Ushering,
    Greeter,
    #[serde(rename = "Welcome Desk")]
    WelcomeDesk,
    #[serde(rename = "Food Service")]
    FoodService,
    #[serde(rename = "Water Station")]
    WaterStation,
    Hospitality,
    #[serde(rename = "Tech Support (Audio/Video)")]
    TechSupport,
    #[serde(rename = "Stage Crew")]
    StageCrew,
    Logistics,
}

impl VolunteerRole {
    pub const fn label(self) -> &'static str {
        match self {
            VolunteerRole::Ushering => "Ushering",
            VolunteerRole::Greeter => "Greeter",
            VolunteerRole::WelcomeDesk => "Welcome Desk",
            VolunteerRole::FoodService => "Food Service",
            VolunteerRole::WaterStation => "Water Station",
            VolunteerRole::Hospitality => "Hospitality",
            VolunteerRole::TechSupport => "Tech Support (Audio/Video)",
            VolunteerRole::StageCrew => "Stage Crew",
            VolunteerRole::Logistics => "Logistics",
        }
    }

    pub const fn category(self) -> RoleCategory {
        match self {
            VolunteerRole::Ushering | VolunteerRole::Greeter | VolunteerRole::WelcomeDesk => {
                RoleCategory::FrontOfHouse
            }
            VolunteerRole::FoodService
            | VolunteerRole::WaterStation
            | VolunteerRole::Hospitality => RoleCategory::GuestSupport,
            VolunteerRole::TechSupport | VolunteerRole::StageCrew | VolunteerRole::Logistics => {
                RoleCategory::Operations
            }
        }
    }

    pub const fn catalogue() -> [VolunteerRole; 9] {
        [
            VolunteerRole::Ushering,
            VolunteerRole::Greeter,
            VolunteerRole::WelcomeDesk,
            VolunteerRole::FoodService,
            VolunteerRole::WaterStation,
            VolunteerRole::Hospitality,
            VolunteerRole::TechSupport,
            VolunteerRole::StageCrew,
            VolunteerRole::Logistics,
        ]
    }
}

/// Grouping headers used when presenting the role catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleCategory {
    FrontOfHouse,
    GuestSupport,
    Operations,
}

impl RoleCategory {
    pub const fn label(self) -> &'static str {
        match self {
            RoleCategory::FrontOfHouse => "Front of House",
            RoleCategory::GuestSupport => "Guest Support",
            RoleCategory::Operations => "Operations",
        }
    }
}

/// Location catalogue offered on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventLocation {
    #[serde(rename = "Main Auditorium")]
    MainAuditorium,
    #[serde(rename = "Outdoor Stage")]
    OutdoorStage,
    #[serde(rename = "Kids Activity Zone")]
    KidsActivityZone,
    #[serde(rename = "Parking & Traffic")]
    ParkingAndTraffic,
    #[serde(rename = "Registration Desk")]
    RegistrationDesk,
    #[serde(rename = "Backstage / Green Room")]
    BackstageGreenRoom,
}

impl EventLocation {
    pub const fn label(self) -> &'static str {
        match self {
            EventLocation::MainAuditorium => "Main Auditorium",
            EventLocation::OutdoorStage => "Outdoor Stage",
            EventLocation::KidsActivityZone => "Kids Activity Zone",
            EventLocation::ParkingAndTraffic => "Parking & Traffic",
            EventLocation::RegistrationDesk => "Registration Desk",
            EventLocation::BackstageGreenRoom => "Backstage / Green Room",
        }
    }

    pub const fn catalogue() -> [EventLocation; 6] {
        [
            EventLocation::MainAuditorium,
            EventLocation::OutdoorStage,
            EventLocation::KidsActivityZone,
            EventLocation::ParkingAndTraffic,
            EventLocation::RegistrationDesk,
            EventLocation::BackstageGreenRoom,
        ]
    }
}

/// Whether the volunteer has served at a similar event before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorExperience {
    Yes,
    No,
}

/// The three retreat days a volunteer may make themselves available for.
pub fn event_dates() -> [NaiveDate; 3] {
    [event_day(28), event_day(29), event_day(30)]
}

fn event_day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, day).unwrap_or_default()
}

/// Persisted registration document, created exactly once per submission and
/// never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerRegistration {
    pub volunteer_id: VolunteerId,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    /// Whole elapsed years between `date_of_birth` and `created_at`'s date.
    pub age: i32,
    pub email: String,
    pub phone: String,
    pub preferred_role: VolunteerRole,
    pub prior_experience: PriorExperience,
    pub preferred_location: EventLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tshirt_size: Option<String>,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub available_dates: Vec<NaiveDate>,
    pub agreement_accepted: bool,
    pub signature: String,
    pub created_at: DateTime<Utc>,
}
