//! Weather panel: exercise advice for a city and weather condition.
//!
//! No forecast is fetched. The advice is a fixed sentence per pair.

use serde::{Deserialize, Serialize};

use super::table::NestedTable;

/// City → weather type → advice
pub static WEATHER_ADVICE: NestedTable<&str> = NestedTable::<&str>::new(&[
    (
        "北京",
        &[
            ("晴天", "北京晴天紫外线较强且空气干燥，建议傍晚在奥森等公园慢跑，注意补水。"),
            ("多云", "多云天气气温适中，适合去户外骑行或快走，运动时长可适当延长。"),
            ("雨天", "雨天路面湿滑，建议改为室内力量训练或跳绳。"),
            ("雪天", "雪天气温低，外出注意防滑保暖，推荐室内瑜伽或健身房训练。"),
        ],
    ),
    (
        "上海",
        &[
            ("晴天", "上海晴天湿度较高，建议早晨沿滨江慢跑，避开正午高温。"),
            ("多云", "多云天气体感舒适，适合在世纪公园进行 40 分钟有氧。"),
            ("雨天", "梅雨季节降水频繁，建议游泳或在室内进行 HIIT。"),
            ("雪天", "少见的降雪天气路面易结冰，今天以室内拉伸和核心训练为主。"),
        ],
    ),
    (
        "广州",
        &[
            ("晴天", "广州晴天闷热，户外运动请安排在早上 8 点前或傍晚，及时补充电解质。"),
            ("多云", "多云天气依然潮湿，建议选择通风良好的场地进行羽毛球等运动。"),
            ("雨天", "雷阵雨多发，避免户外空旷场地运动，改为室内训练。"),
            ("雪天", "广州几乎不会下雪，如遇寒潮请做好热身后再进行室内训练。"),
        ],
    ),
    (
        "深圳",
        &[
            ("晴天", "深圳晴天适合去深圳湾公园骑行或慢跑，注意防晒。"),
            ("多云", "多云天气适合登山，推荐梧桐山或塘朗山轻徒步。"),
            ("雨天", "雨天建议在家进行自重训练，或去室内泳池游泳。"),
            ("雪天", "深圳几乎不会下雪，如遇低温天气请在室内完成训练。"),
        ],
    ),
    (
        "杭州",
        &[
            ("晴天", "杭州晴天适合环西湖慢跑或骑行，傍晚景色更佳。"),
            ("多云", "多云天气适合九溪一带徒步，注意补充水分。"),
            ("雨天", "雨天山路湿滑，建议在室内完成力量或柔韧训练。"),
            ("雪天", "雪后西湖景色优美，但路面湿滑，散步即可，避免剧烈运动。"),
        ],
    ),
]);

/// Inputs of the weather panel
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherRequest {
    #[serde(default = "WeatherRequest::default_city")]
    pub city: String,
    #[serde(default = "WeatherRequest::default_weather")]
    pub weather: String,
}

impl Default for WeatherRequest {
    fn default() -> Self {
        Self {
            city: Self::default_city(),
            weather: Self::default_weather(),
        }
    }
}

impl WeatherRequest {
    fn default_city() -> String {
        WEATHER_ADVICE.default_outer().to_string()
    }

    fn default_weather() -> String {
        WEATHER_ADVICE.default_inner().to_string()
    }
}

pub fn weather(request: &WeatherRequest) -> String {
    let advice = WEATHER_ADVICE.get(&request.city, &request.weather);
    format!(
        "### {}天气运动建议（{}）\n\n{}\n",
        request.city, request.weather, advice
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(city: &str, weather: &str) -> WeatherRequest {
        WeatherRequest {
            city: city.to_string(),
            weather: weather.to_string(),
        }
    }

    #[test]
    fn test_hangzhou_rain() {
        let out = weather(&request("杭州", "雨天"));
        assert_eq!(
            out,
            "### 杭州天气运动建议（雨天）\n\n雨天山路湿滑，建议在室内完成力量或柔韧训练。\n"
        );
    }

    #[test]
    fn test_unknown_city_falls_back_to_beijing() {
        let out = weather(&request("拉萨", "雪天"));
        assert!(out.starts_with("### 拉萨天气运动建议（雪天）"));
        assert!(out.contains("推荐室内瑜伽或健身房训练"));
    }

    #[test]
    fn test_unknown_weather_falls_back_to_sunny() {
        let out = weather(&request("深圳", "台风"));
        assert!(out.contains("深圳湾公园"));
    }

    #[test]
    fn test_all_cities_cover_all_weather_types() {
        let weather_types: Vec<_> = WEATHER_ADVICE.inner_keys().collect();
        for city in WEATHER_ADVICE.outer_keys() {
            for kind in &weather_types {
                let exact = *WEATHER_ADVICE.get(city, kind);
                let out = weather(&request(city, kind));
                assert!(out.contains(exact));
            }
        }
    }
}
