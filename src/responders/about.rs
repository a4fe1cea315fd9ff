//! Static about panel.

use crate::config::{APP_NAME, APP_VERSION};

pub fn about() -> String {
    format!(
        "### 关于 {APP_NAME}\n\n\
         版本：{APP_VERSION}\n\n\
         {APP_NAME} 是一个健身与生活助手演示应用，包含以下功能：\n\n\
         - **训练计划**：根据目标、周期和强度给出训练建议\n\
         - **日程安排**：根据活动类型和时间偏好生成作息建议\n\
         - **天气建议**：根据城市和天气给出运动建议\n\
         - **健康分析**：根据体重、步数和热量摄入给出健康建议\n\n\
         所有建议均为固定示例内容，仅供参考。\n"
    )
}
