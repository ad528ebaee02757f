use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_TIMEZONE, SCHEDULES_FILE};
use crate::models::Platform;
use crate::store::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    Once,
    Daily,
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// When a post should go out: `{ type, time: "HH:MM", day? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    #[serde(rename = "type")]
    pub kind: ScheduleType,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<DayOfWeek>,
}

impl ScheduleSpec {
    /// Check the time format and the weekly/day pairing
    ///
    /// A `day` on a non-weekly schedule carries no meaning and is dropped.
    pub fn validate(mut self) -> Result<Self, String> {
        if self.time.len() != 5 || NaiveTime::parse_from_str(&self.time, "%H:%M").is_err() {
            return Err(format!(
                "Invalid schedule time '{}': expected HH:MM (24-hour)",
                self.time
            ));
        }

        match self.kind {
            ScheduleType::Weekly if self.day.is_none() => {
                return Err("Weekly schedules require a day".to_string());
            }
            ScheduleType::Weekly => {}
            ScheduleType::Once | ScheduleType::Daily => self.day = None,
        }

        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Scheduled,
}

/// Stored intent to publish a design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    /// Not checked against the designs collection
    pub design_id: String,
    pub platform: Platform,
    pub schedule: ScheduleSpec,
    /// IANA timezone name
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub status: ScheduleStatus,
}

impl Schedule {
    pub fn new(
        design_id: String,
        platform: Platform,
        schedule: ScheduleSpec,
        timezone: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            design_id,
            platform,
            schedule,
            timezone: timezone_or_default(timezone),
            created_at: now,
            status: ScheduleStatus::Scheduled,
        }
    }

    /// Overwrite the fields present in `update`; id, createdAt and status are kept
    pub fn apply(&mut self, update: ScheduleUpdate) {
        if let Some(design_id) = update.design_id.filter(|s| !s.is_empty()) {
            self.design_id = design_id;
        }
        if let Some(platform) = update.platform {
            self.platform = platform;
        }
        if let Some(schedule) = update.schedule {
            self.schedule = schedule;
        }
        if let Some(timezone) = update.timezone.filter(|s| !s.is_empty()) {
            self.timezone = timezone;
        }
    }
}

/// Partial schedule accepted by the update endpoint
///
/// `id`, `createdAt` and `status` have no field here, so any value sent for
/// them is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdate {
    pub design_id: Option<String>,
    pub platform: Option<Platform>,
    pub schedule: Option<ScheduleSpec>,
    pub timezone: Option<String>,
}

fn timezone_or_default(timezone: Option<String>) -> String {
    timezone
        .filter(|tz| !tz.is_empty())
        .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string())
}

/// Persisted schedules collection: `{ schedules: [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulesDocument {
    pub schedules: Vec<Schedule>,
}

impl Document for SchedulesDocument {
    const FILE_NAME: &'static str = SCHEDULES_FILE;

    fn empty() -> Self {
        Self {
            schedules: Vec::new(),
        }
    }
}

impl SchedulesDocument {
    pub fn find(&self, id: &str) -> Option<&Schedule> {
        self.schedules.iter().find(|s| s.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Schedule> {
        self.schedules.iter_mut().find(|s| s.id == id)
    }

    /// Remove a schedule by id, returning it
    pub fn remove(&mut self, id: &str) -> Option<Schedule> {
        let index = self.schedules.iter().position(|s| s.id == id)?;
        Some(self.schedules.remove(index))
    }

    /// Schedules still waiting to fire
    pub fn active(&self) -> impl Iterator<Item = &Schedule> {
        self.schedules
            .iter()
            .filter(|s| s.status == ScheduleStatus::Scheduled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: ScheduleType, time: &str, day: Option<DayOfWeek>) -> ScheduleSpec {
        ScheduleSpec {
            kind,
            time: time.to_string(),
            day,
        }
    }

    #[test]
    fn test_validate_time_format() {
        assert!(spec(ScheduleType::Once, "09:00", None).validate().is_ok());
        assert!(spec(ScheduleType::Daily, "23:59", None).validate().is_ok());

        assert!(spec(ScheduleType::Once, "9:00", None).validate().is_err());
        assert!(spec(ScheduleType::Once, "24:00", None).validate().is_err());
        assert!(spec(ScheduleType::Once, "12:60", None).validate().is_err());
        assert!(spec(ScheduleType::Once, "noon", None).validate().is_err());
    }

    #[test]
    fn test_weekly_requires_day() {
        let err = spec(ScheduleType::Weekly, "09:00", None).validate();
        assert!(err.is_err());

        let ok = spec(ScheduleType::Weekly, "09:00", Some(DayOfWeek::Friday)).validate();
        assert_eq!(ok.unwrap().day, Some(DayOfWeek::Friday));
    }

    #[test]
    fn test_day_dropped_for_non_weekly() {
        let validated = spec(ScheduleType::Daily, "07:30", Some(DayOfWeek::Monday))
            .validate()
            .unwrap();
        assert_eq!(validated.day, None);
    }

    #[test]
    fn test_new_schedule_defaults() {
        let now = Utc::now();
        let schedule = Schedule::new(
            "d1".to_string(),
            Platform::Instagram,
            spec(ScheduleType::Once, "09:00", None),
            None,
            now,
        );

        assert_eq!(schedule.timezone, "UTC");
        assert_eq!(schedule.status, ScheduleStatus::Scheduled);
        assert_eq!(schedule.created_at, now);
        assert!(!schedule.id.is_empty());

        let with_empty_tz = Schedule::new(
            "d1".to_string(),
            Platform::Email,
            spec(ScheduleType::Once, "09:00", None),
            Some(String::new()),
            now,
        );
        assert_eq!(with_empty_tz.timezone, "UTC");
    }

    #[test]
    fn test_apply_update_keeps_identity() {
        let now = Utc::now();
        let mut schedule = Schedule::new(
            "d1".to_string(),
            Platform::Instagram,
            spec(ScheduleType::Once, "09:00", None),
            None,
            now,
        );
        let id = schedule.id.clone();

        // id/createdAt in the body are unknown fields and get dropped
        let update: ScheduleUpdate = serde_json::from_value(serde_json::json!({
            "id": "hijacked",
            "createdAt": "2000-01-01T00:00:00Z",
            "platform": "facebook",
            "timezone": "Europe/London"
        }))
        .unwrap();
        schedule.apply(update);

        assert_eq!(schedule.id, id);
        assert_eq!(schedule.created_at, now);
        assert_eq!(schedule.platform, Platform::Facebook);
        assert_eq!(schedule.timezone, "Europe/London");
        assert_eq!(schedule.design_id, "d1");
    }

    #[test]
    fn test_remove_returns_record() {
        let now = Utc::now();
        let first = Schedule::new(
            "d1".to_string(),
            Platform::Instagram,
            spec(ScheduleType::Once, "09:00", None),
            None,
            now,
        );
        let mut doc = SchedulesDocument {
            schedules: vec![first.clone()],
        };

        assert_eq!(doc.remove(&first.id), Some(first.clone()));
        assert!(doc.find(&first.id).is_none());
        assert!(doc.remove(&first.id).is_none());
    }

    #[test]
    fn test_schedule_wire_format() {
        let schedule = Schedule::new(
            "d1".to_string(),
            Platform::Instagram,
            spec(ScheduleType::Weekly, "18:15", Some(DayOfWeek::Sunday)),
            Some("America/New_York".to_string()),
            Utc::now(),
        );
        let value = serde_json::to_value(&schedule).unwrap();

        assert_eq!(value["designId"], "d1");
        assert_eq!(value["schedule"]["type"], "weekly");
        assert_eq!(value["schedule"]["day"], "sunday");
        assert_eq!(value["status"], "scheduled");
    }
}
