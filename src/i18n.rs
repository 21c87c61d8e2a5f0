//! User-facing strings
//!
//! Every message shown to the user comes from a [`Messages`] table so that
//! views never build error text from internal error values.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-CN", alias = "zh")]
    ZhCn,
    #[serde(rename = "en", alias = "en-US")]
    En,
}

/// Localized message table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub app_name: &'static str,

    pub record_title: &'static str,
    pub record_hint: &'static str,
    pub record_start: &'static str,
    pub recording: &'static str,
    pub processing: &'static str,
    pub transcription: &'static str,
    pub capture_failed: &'static str,
    pub location_pending: &'static str,
    pub location_unavailable: &'static str,
    pub location_label: &'static str,

    pub history_title: &'static str,
    pub history_failed: &'static str,
    pub history_empty: &'static str,

    pub locations_title: &'static str,
    pub locations_failed: &'static str,
    pub locations_empty: &'static str,
    pub records_suffix: &'static str,

    pub search_title: &'static str,
    pub search_prompt: &'static str,
    pub searching: &'static str,
    pub search_failed: &'static str,
    pub search_empty: &'static str,
    pub search_empty_hint: &'static str,
    pub search_results: &'static str,
    pub similarity_label: &'static str,

    pub empty_hint: &'static str,
    pub loading: &'static str,
    pub unknown_location: &'static str,
}

const ZH_CN: Messages = Messages {
    app_name: "MemoBread",

    record_title: "语音记录",
    record_hint: "点击麦克风按钮开始录音，系统会自动记录时间和位置",
    record_start: "点击开始录音",
    recording: "正在录音...",
    processing: "正在处理...",
    transcription: "识别结果",
    capture_failed: "处理录音失败，请重试",
    location_pending: "正在获取...",
    location_unavailable: "无法获取位置",
    location_label: "位置",

    history_title: "历史记录",
    history_failed: "获取历史记录失败，请重试",
    history_empty: "暂无历史记录",

    locations_title: "地点",
    locations_failed: "获取地点数据失败，请重试",
    locations_empty: "暂无地点数据",
    records_suffix: "条记录",

    search_title: "记忆检索",
    search_prompt: "搜索你的记忆...",
    searching: "搜索中...",
    search_failed: "搜索失败，请重试",
    search_empty: "没有找到匹配的记忆",
    search_empty_hint: "尝试使用不同的关键词",
    search_results: "搜索结果",
    similarity_label: "匹配度",

    empty_hint: "使用录音功能记录你的想法",
    loading: "加载中...",
    unknown_location: "未知位置",
};

const EN: Messages = Messages {
    app_name: "MemoBread",

    record_title: "Voice memo",
    record_hint: "Start recording; time and location are captured automatically",
    record_start: "Press start to record",
    recording: "Recording...",
    processing: "Processing...",
    transcription: "Transcription",
    capture_failed: "Failed to process the recording, please try again",
    location_pending: "locating...",
    location_unavailable: "unavailable",
    location_label: "Location",

    history_title: "History",
    history_failed: "Failed to load history, please try again",
    history_empty: "No recordings yet",

    locations_title: "Locations",
    locations_failed: "Failed to load locations, please try again",
    locations_empty: "No location data yet",
    records_suffix: "recordings",

    search_title: "Memory search",
    search_prompt: "Search your memories...",
    searching: "Searching...",
    search_failed: "Search failed, please try again",
    search_empty: "No matching memories",
    search_empty_hint: "Try different keywords",
    search_results: "Results",
    similarity_label: "Match",

    empty_hint: "Record a memo to get started",
    loading: "Loading...",
    unknown_location: "Unknown location",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::ZhCn => &ZH_CN,
            Locale::En => &EN,
        }
    }
}
