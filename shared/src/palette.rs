use crate::prize::Prize;

/// Vibrant palette for wheel segments, assigned cyclically by position.
pub const SEGMENT_COLORS: [&str; 8] = [
    "#EF476F", // Red/Pink
    "#FFD166", // Yellow
    "#06D6A0", // Green
    "#118AB2", // Blue
    "#073B4C", // Dark Blue
    "#9D4EDD", // Purple
    "#FF9F1C", // Orange
    "#4CC9F0", // Light Blue
];

pub const DEFAULT_PRIZE_TEXTS: [&str; 8] = [
    "谢谢惠顾",
    "好运奖",
    "现金大奖",
    "倒霉奖",
    "神秘大礼",
    "坏运奖",
    "再来一次",
    "必须请客",
];

/// Suggested themes for generated lists. The UI shows the first four as chips.
pub const DEFAULT_THEMES: [&str; 6] = [
    "周末去哪玩",
    "今晚吃什么",
    "真心话大冒险",
    "家务分配",
    "公司年会抽奖",
    "健身挑战项目",
];

pub const RANDOM_THEME: &str = "随机有趣";

pub fn color_for_index(index: usize) -> &'static str {
    SEGMENT_COLORS[index % SEGMENT_COLORS.len()]
}

pub fn default_prizes() -> Vec<Prize> {
    DEFAULT_PRIZE_TEXTS
        .iter()
        .enumerate()
        .map(|(i, text)| Prize::with_id((i + 1).to_string(), *text, color_for_index(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_wraps() {
        assert_eq!(color_for_index(0), SEGMENT_COLORS[0]);
        assert_eq!(color_for_index(8), SEGMENT_COLORS[0]);
        assert_eq!(color_for_index(11), SEGMENT_COLORS[3]);
    }

    #[test]
    fn test_default_prizes() {
        let prizes = default_prizes();
        assert_eq!(prizes.len(), 8);
        assert_eq!(prizes[1].text, "好运奖");
        assert_eq!(prizes[1].id, "2");
        assert_eq!(prizes[7].color, "#4CC9F0");
    }
}
