//! Health data panel.
//!
//! Weight is echoed only. Steps and calories are bucketed into activity and
//! intake levels, which key the advice table.

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use super::table::NestedTable;

pub const DEFAULT_WEIGHT_KG: f64 = 65.0;
pub const DEFAULT_STEPS: u32 = 8000;
pub const DEFAULT_CALORIES: u32 = 2000;

/// Below this many steps a day counts as low activity
const STEPS_LOW: u32 = 5000;
/// From this many steps a day counts as high activity
const STEPS_HIGH: u32 = 10000;
/// Below this intake counts as low
const CALORIES_LOW: u32 = 1500;
/// Above this intake counts as high
const CALORIES_HIGH: u32 = 2500;

/// Activity level → intake level → advice
pub static HEALTH_ADVICE: NestedTable<&str> = NestedTable::<&str>::new(&[
    (
        "活动不足",
        &[
            ("摄入偏低", "活动量和摄入都偏少，建议先从每天多走 2000 步开始，并保证三餐规律。"),
            ("摄入适中", "饮食较合理，但活动不足，建议每天增加 30 分钟快走。"),
            ("摄入偏高", "摄入超出消耗，建议减少高油高糖食物，同时逐步提高日常步数。"),
        ],
    ),
    (
        "活动适中",
        &[
            ("摄入偏低", "活动量不错，但摄入可能不足，注意补充优质蛋白和复合碳水。"),
            ("摄入适中", "活动与饮食都比较均衡，继续保持，可每周加入 2 次力量训练。"),
            ("摄入偏高", "活动量适中但摄入偏多，建议控制晚餐分量并减少零食。"),
        ],
    ),
    (
        "活动充足",
        &[
            ("摄入偏低", "运动量大而摄入偏少，容易疲劳，建议适当增加主食和蛋白质。"),
            ("摄入适中", "状态很好，注意运动后拉伸和充足睡眠，预防运动损伤。"),
            ("摄入偏高", "高活动量配合较高摄入，适合增肌阶段，注意饮食质量。"),
        ],
    ),
])
.default_row(1)
.default_column("摄入适中");

/// Inputs of the health panel
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(from = "HealthForm")]
pub struct HealthRequest {
    pub weight: f64,
    pub steps: u32,
    pub calories: u32,
}

/// Health inputs as submitted. Blank fields count as absent.
#[derive(Deserialize)]
struct HealthForm {
    #[serde(default, deserialize_with = "blank_as_none")]
    weight: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    steps: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    calories: Option<u32>,
}

impl From<HealthForm> for HealthRequest {
    fn from(form: HealthForm) -> Self {
        Self {
            weight: form
                .weight
                .filter(|w| w.is_finite())
                .unwrap_or_else(Self::default_weight),
            steps: form.steps.unwrap_or_else(Self::default_steps),
            calories: form.calories.unwrap_or_else(Self::default_calories),
        }
    }
}

/// Query strings carry numbers as text, JSON bodies as numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum FormNumber<T> {
    Number(T),
    Text(String),
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match FormNumber::<T>::deserialize(deserializer)? {
        FormNumber::Number(n) => Ok(Some(n)),
        FormNumber::Text(text) if text.trim().is_empty() => Ok(None),
        FormNumber::Text(text) => text.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

impl Default for HealthRequest {
    fn default() -> Self {
        Self {
            weight: Self::default_weight(),
            steps: Self::default_steps(),
            calories: Self::default_calories(),
        }
    }
}

impl HealthRequest {
    fn default_weight() -> f64 {
        DEFAULT_WEIGHT_KG
    }

    fn default_steps() -> u32 {
        DEFAULT_STEPS
    }

    fn default_calories() -> u32 {
        DEFAULT_CALORIES
    }
}

/// Activity level key for a daily step count
pub fn activity_level(steps: u32) -> &'static str {
    match steps {
        s if s < STEPS_LOW => "活动不足",
        s if s < STEPS_HIGH => "活动适中",
        _ => "活动充足",
    }
}

/// Intake level key for a daily calorie count
pub fn intake_level(calories: u32) -> &'static str {
    match calories {
        c if c < CALORIES_LOW => "摄入偏低",
        c if c <= CALORIES_HIGH => "摄入适中",
        _ => "摄入偏高",
    }
}

pub fn health(request: &HealthRequest) -> String {
    let activity = activity_level(request.steps);
    let intake = intake_level(request.calories);
    let advice = HEALTH_ADVICE.get(activity, intake);

    format!(
        "### 健康数据分析\n\n\
         - 体重：{} kg\n\
         - 步数：{} 步（{}）\n\
         - 热量摄入：{} 千卡（{}）\n\n\
         **建议：** {}\n",
        request.weight, request.steps, activity, request.calories, intake, advice
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_at_boundaries() {
        assert_eq!(activity_level(0), "活动不足");
        assert_eq!(activity_level(4999), "活动不足");
        assert_eq!(activity_level(5000), "活动适中");
        assert_eq!(activity_level(9999), "活动适中");
        assert_eq!(activity_level(10000), "活动充足");

        assert_eq!(intake_level(1499), "摄入偏低");
        assert_eq!(intake_level(1500), "摄入适中");
        assert_eq!(intake_level(2500), "摄入适中");
        assert_eq!(intake_level(2501), "摄入偏高");
    }

    #[test]
    fn test_default_request() {
        let out = health(&HealthRequest::default());
        assert_eq!(
            out,
            "### 健康数据分析\n\n\
             - 体重：65 kg\n\
             - 步数：8000 步（活动适中）\n\
             - 热量摄入：2000 千卡（摄入适中）\n\n\
             **建议：** 活动与饮食都比较均衡，继续保持，可每周加入 2 次力量训练。\n"
        );
    }

    #[test]
    fn test_every_level_pair_has_advice() {
        for activity in HEALTH_ADVICE.outer_keys() {
            for intake in HEALTH_ADVICE.inner_keys() {
                assert!(!HEALTH_ADVICE.get(activity, intake).is_empty());
            }
        }
    }

    #[test]
    fn test_fractional_weight_is_echoed() {
        let req = HealthRequest {
            weight: 72.5,
            steps: 12000,
            calories: 3000,
        };
        let out = health(&req);
        assert!(out.contains("- 体重：72.5 kg"));
        assert!(out.contains("适合增肌阶段"));
    }

    #[test]
    fn test_blank_fields_use_defaults() {
        let req: HealthRequest =
            serde_json::from_str(r#"{"weight": "", "steps": " ", "calories": 1800}"#).unwrap();
        assert_eq!(req.weight, DEFAULT_WEIGHT_KG);
        assert_eq!(req.steps, DEFAULT_STEPS);
        assert_eq!(req.calories, 1800);
    }

    #[test]
    fn test_numeric_text_is_parsed() {
        let req: HealthRequest =
            serde_json::from_str(r#"{"weight": "70.5", "steps": "12000"}"#).unwrap();
        assert_eq!(req.weight, 70.5);
        assert_eq!(req.steps, 12000);
        assert_eq!(req.calories, DEFAULT_CALORIES);
    }

    #[test]
    fn test_non_finite_weight_uses_default() {
        for weight in ["NaN", "inf", "-inf"] {
            let body = format!(r#"{{"weight": "{weight}"}}"#);
            let req: HealthRequest = serde_json::from_str(&body).unwrap();
            assert_eq!(req.weight, DEFAULT_WEIGHT_KG, "weight {weight}");
        }
    }

    #[test]
    fn test_non_numeric_text_is_rejected() {
        assert!(serde_json::from_str::<HealthRequest>(r#"{"steps": "many"}"#).is_err());
    }
}
