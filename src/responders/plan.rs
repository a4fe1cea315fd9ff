//! Training plan panel: goal and intensity pick three fixed plan items.

use serde::{Deserialize, Serialize};

use super::table::NestedTable;

/// Weeks preselected on the duration slider
pub const DEFAULT_DURATION_WEEKS: u32 = 4;
/// Duration slider bounds, in weeks
pub const DURATION_RANGE: (u32, u32) = (1, 12);

/// Goal → intensity → plan items
pub static PLANS: NestedTable<&[&str]> = NestedTable::<&[&str]>::new(&[
    (
        "减脂",
        &[
            (
                "低强度",
                &[
                    "每天快走 40 分钟，心率保持在最大心率的 60% 左右",
                    "每周 2 次全身拉伸与瑜伽，每次 30 分钟",
                    "晚餐减少精制碳水，主食替换为粗粮",
                ],
            ),
            (
                "中强度",
                &[
                    "每周 4 次有氧训练（慢跑或单车），每次 45 分钟",
                    "每周 2 次全身力量训练，以复合动作为主",
                    "控制每日热量缺口在 300-500 千卡",
                ],
            ),
            (
                "高强度",
                &[
                    "每周 3 次 HIIT 间歇训练，每次 25 分钟",
                    "每周 3 次分化力量训练，组间休息不超过 60 秒",
                    "保证每天 7 小时睡眠以支持恢复",
                ],
            ),
        ],
    ),
    (
        "增肌",
        &[
            (
                "低强度",
                &[
                    "每周 3 次自重训练：俯卧撑、深蹲、平板支撑",
                    "每餐摄入一掌心大小的优质蛋白",
                    "训练后 30 分钟内补充蛋白质和碳水",
                ],
            ),
            (
                "中强度",
                &[
                    "每周 4 次上下肢分化训练，每个动作 4 组 8-12 次",
                    "每日蛋白质摄入达到每公斤体重 1.6 克",
                    "每两周适度增加训练重量",
                ],
            ),
            (
                "高强度",
                &[
                    "每周 5 次推拉腿分化训练，主项采用大重量低次数",
                    "每日热量盈余 300 千卡，蛋白质每公斤体重 2 克",
                    "每 6 周安排一次减量周",
                ],
            ),
        ],
    ),
    (
        "塑形",
        &[
            (
                "低强度",
                &[
                    "每周 3 次普拉提，重点强化核心",
                    "每天 10 分钟体态矫正练习",
                    "保持规律作息与充足饮水",
                ],
            ),
            (
                "中强度",
                &[
                    "每周 3 次器械塑形训练，针对臀腿和肩背",
                    "每周 2 次 30 分钟中速有氧",
                    "饮食以高蛋白、高纤维为主",
                ],
            ),
            (
                "高强度",
                &[
                    "每周 4 次超级组训练，提升肌肉线条",
                    "每周 2 次 20 分钟 HIIT",
                    "记录每周围度变化，及时调整计划",
                ],
            ),
        ],
    ),
    (
        "提升耐力",
        &[
            (
                "低强度",
                &[
                    "每周 3 次 30 分钟慢跑，配速以能说话为准",
                    "每周 1 次 60 分钟徒步或骑行",
                    "训练前后充分热身与拉伸",
                ],
            ),
            (
                "中强度",
                &[
                    "每周 4 次跑步，其中 1 次为长距离慢跑",
                    "每周 1 次节奏跑，保持 20 分钟稳定配速",
                    "每周 1 次游泳或单车作为交叉训练",
                ],
            ),
            (
                "高强度",
                &[
                    "每周 2 次间歇跑：400 米 × 8 组",
                    "每周 1 次 90 分钟以上长距离训练",
                    "监测静息心率，出现疲劳及时降量",
                ],
            ),
        ],
    ),
])
.default_column("中强度");

/// Inputs of the plan panel
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlanRequest {
    #[serde(default = "PlanRequest::default_goal")]
    pub goal: String,
    #[serde(default = "PlanRequest::default_duration")]
    pub duration: u32,
    #[serde(default = "PlanRequest::default_intensity")]
    pub intensity: String,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            goal: Self::default_goal(),
            duration: Self::default_duration(),
            intensity: Self::default_intensity(),
        }
    }
}

impl PlanRequest {
    fn default_goal() -> String {
        PLANS.default_outer().to_string()
    }

    fn default_duration() -> u32 {
        DEFAULT_DURATION_WEEKS
    }

    fn default_intensity() -> String {
        PLANS.default_inner().to_string()
    }
}

/// Render the plan for `request`. The header echoes the raw input.
pub fn plan(request: &PlanRequest) -> String {
    let items = PLANS.get(&request.goal, &request.intensity);

    let mut out = format!(
        "### {}计划 ({}周，{}强度)\n\n",
        request.goal, request.duration, request.intensity
    );
    for item in items.iter() {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
    out
}
