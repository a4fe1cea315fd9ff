//! Lookup-and-format responders behind the form UI.
//!
//! Each responder is a pure function from a small request struct to a markdown
//! string. Values come from a static [`NestedTable`]; unknown keys fall back to
//! the table's defaults instead of failing.

pub mod about;
pub mod health;
pub mod plan;
pub mod schedule;
pub mod table;
pub mod weather;

use serde::Serialize;

pub use about::about;
pub use health::{health, HealthRequest};
pub use plan::{plan, PlanRequest};
pub use schedule::{schedule, ScheduleRequest};
pub use table::NestedTable;
pub use weather::{weather, WeatherRequest};

/// The panels shown by the form UI, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Plan,
    Schedule,
    Weather,
    Health,
    About,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Plan,
        Panel::Schedule,
        Panel::Weather,
        Panel::Health,
        Panel::About,
    ];

    /// Path segment and template identifier
    pub fn slug(self) -> &'static str {
        match self {
            Panel::Plan => "plan",
            Panel::Schedule => "schedule",
            Panel::Weather => "weather",
            Panel::Health => "health",
            Panel::About => "about",
        }
    }

    /// Tab label
    pub fn title(self) -> &'static str {
        match self {
            Panel::Plan => "训练计划",
            Panel::Schedule => "日程安排",
            Panel::Weather => "天气建议",
            Panel::Health => "健康分析",
            Panel::About => "关于",
        }
    }
}
