//! Daily schedule panel: activity and preferred time of day.

use serde::{Deserialize, Serialize};

use super::table::NestedTable;

/// Activity → time preference → time slots
pub static SCHEDULES: NestedTable<&[&str]> = NestedTable::<&[&str]>::new(&[
    (
        "健身",
        &[
            (
                "早晨",
                &[
                    "06:30 起床，喝一杯温水",
                    "07:00 - 07:45 晨跑或动态热身训练",
                    "08:00 高蛋白早餐",
                ],
            ),
            (
                "下午",
                &[
                    "15:30 补充一份水果或坚果",
                    "16:30 - 17:30 力量训练",
                    "17:45 拉伸放松 15 分钟",
                ],
            ),
            (
                "晚上",
                &[
                    "18:30 清淡晚餐",
                    "19:30 - 20:30 有氧或核心训练",
                    "22:30 前入睡，保证恢复",
                ],
            ),
        ],
    ),
    (
        "学习",
        &[
            (
                "早晨",
                &[
                    "07:00 - 08:30 记忆类内容，效率最高",
                    "08:30 休息 10 分钟，远眺放松眼睛",
                    "08:40 - 10:00 攻克难点章节",
                ],
            ),
            (
                "下午",
                &[
                    "14:00 午休后先做 5 分钟拉伸",
                    "14:30 - 16:00 练习题与复盘",
                    "16:00 - 16:30 散步整理思路",
                ],
            ),
            (
                "晚上",
                &[
                    "19:30 - 21:00 阅读与整理笔记",
                    "21:00 - 21:30 回顾当天内容",
                    "23:00 前放下电子设备",
                ],
            ),
        ],
    ),
    (
        "工作",
        &[
            (
                "早晨",
                &[
                    "08:30 列出当天三件最重要的事",
                    "09:00 - 11:00 专注处理最难的任务",
                    "11:00 起身活动 5 分钟",
                ],
            ),
            (
                "下午",
                &[
                    "13:30 - 15:00 会议与沟通",
                    "15:00 站立办公或短暂散步",
                    "15:30 - 17:30 处理邮件与收尾工作",
                ],
            ),
            (
                "晚上",
                &[
                    "19:00 - 20:30 安排非紧急的整理工作",
                    "20:30 写下明天的待办清单",
                    "21:00 之后不再处理工作消息",
                ],
            ),
        ],
    ),
    (
        "休息",
        &[
            (
                "早晨",
                &[
                    "07:30 自然醒，不设闹钟",
                    "08:00 - 08:30 轻度瑜伽或冥想",
                    "09:00 慢慢享用早餐",
                ],
            ),
            (
                "下午",
                &[
                    "13:00 - 13:30 午睡不超过 30 分钟",
                    "15:00 户外散步或晒太阳",
                    "16:00 与朋友或家人相处",
                ],
            ),
            (
                "晚上",
                &[
                    "20:00 泡脚或热水澡",
                    "21:00 阅读纸质书",
                    "22:00 准备入睡",
                ],
            ),
        ],
    ),
]);

/// Inputs of the schedule panel
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleRequest {
    #[serde(default = "ScheduleRequest::default_activity")]
    pub activity: String,
    #[serde(default = "ScheduleRequest::default_time")]
    pub time: String,
}

impl Default for ScheduleRequest {
    fn default() -> Self {
        Self {
            activity: Self::default_activity(),
            time: Self::default_time(),
        }
    }
}

impl ScheduleRequest {
    fn default_activity() -> String {
        SCHEDULES.default_outer().to_string()
    }

    fn default_time() -> String {
        SCHEDULES.default_inner().to_string()
    }
}

pub fn schedule(request: &ScheduleRequest) -> String {
    let slots = SCHEDULES.get(&request.activity, &request.time);

    let mut out = format!("### {}日程安排（{}）\n\n", request.activity, request.time);
    for slot in slots.iter() {
        out.push_str("- ");
        out.push_str(slot);
        out.push('\n');
    }
    out
}
