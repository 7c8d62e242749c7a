pub const GENERATE_PRIZES_ENDPOINT: &str = "/api/prizes/generate";
pub const HEALTH_CHECK_ENDPOINT: &str = "/api/health_check";

pub const DEFAULT_GENERATE_COUNT: usize = 8;
pub const MIN_GENERATE_COUNT: usize = 2;
pub const MAX_GENERATE_COUNT: usize = 12;
pub const MAX_THEME_CHARS: usize = 50;
pub const FALLBACK_THEME: &str = "有趣的主题";

pub const MIN_PRIZES_ERROR: &str = "至少需要保留2个选项！";
pub const GENERATE_FAILED_ERROR: &str = "生成失败，请检查 API Key 或重试。";
pub const GENERATOR_UPSTREAM_ERROR: &str = "生成奖项失败，请重试。";
pub const INVALID_THEME_ERROR: &str = "主题过长，请控制在50个字以内";
pub const INVALID_COUNT_ERROR: &str = "生成数量需要在2到12之间";
pub const RATE_LIMIT_ERROR: &str = "请求过于频繁，请稍后再试";
pub const NETWORK_ERROR: &str = "网络错误，请重试";
