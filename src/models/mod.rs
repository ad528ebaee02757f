pub mod design;
pub mod export;
pub mod history;
pub mod platform;
pub mod schedule;

pub use design::{placeholder_designs, Design, DesignStatus, DesignsDocument};
pub use export::{ExportDescriptor, ExportFormat};
pub use history::{HistoryDocument, HistoryRecord, HistoryStatus};
pub use platform::Platform;
pub use schedule::{
    DayOfWeek, Schedule, ScheduleSpec, ScheduleStatus, ScheduleType, ScheduleUpdate,
    SchedulesDocument,
};
