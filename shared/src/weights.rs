use crate::prize::Prize;

/// Total probability mass (in percentage points) shared out between prizes.
pub const TOTAL_PERCENT: f64 = 100.0;

/// Weight used for every prize when no keyword rule matches anything.
pub const UNIFORM_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightRule {
    pub keyword: &'static str,
    pub weight: f64,
}

/// Keyword rules in priority order. A prize takes the first rule it matches.
pub const KEYWORD_RULES: [WeightRule; 3] = [
    WeightRule { keyword: "好运", weight: 33.0 },
    WeightRule { keyword: "神秘", weight: 33.0 },
    WeightRule { keyword: "现金", weight: 33.0 },
];

pub fn assigned_weight(text: &str) -> Option<f64> {
    KEYWORD_RULES
        .iter()
        .find(|rule| text.contains(rule.keyword))
        .map(|rule| rule.weight)
}

/// Builds the weight vector for one draw, aligned with `prizes`.
///
/// Keyword prizes keep their rule weight. The remaining prizes split
/// `max(0, 100 - assigned)` evenly. When nothing matches, every prize gets
/// weight 1. Over-allocation (several prizes hitting rules) is not
/// renormalized: the remainder just clamps to zero.
pub fn compute_weights(prizes: &[Prize]) -> Vec<f64> {
    let assigned: Vec<Option<f64>> = prizes.iter().map(|p| assigned_weight(&p.text)).collect();
    let total_assigned: f64 = assigned.iter().flatten().sum();

    if total_assigned <= 0.0 {
        return vec![UNIFORM_WEIGHT; prizes.len()];
    }

    let others_count = assigned.iter().filter(|w| w.is_none()).count();
    let remainder = (TOTAL_PERCENT - total_assigned).max(0.0);
    let share = if others_count > 0 {
        remainder / others_count as f64
    } else {
        0.0
    };

    assigned
        .into_iter()
        .map(|w| w.unwrap_or(share))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prizes(texts: &[&str]) -> Vec<Prize> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Prize::with_id(i.to_string(), *t, "#000000"))
            .collect()
    }

    #[test]
    fn test_rule_priority() {
        assert_eq!(assigned_weight("好运奖"), Some(33.0));
        assert_eq!(assigned_weight("神秘现金"), Some(33.0));
        assert_eq!(assigned_weight("倒霉奖"), None);
    }

    #[test]
    fn test_two_keywords_two_others() {
        let weights = compute_weights(&prizes(&["好运奖", "现金大奖", "倒霉奖", "坏运奖"]));
        assert_eq!(weights, vec![33.0, 33.0, 17.0, 17.0]);
    }

    #[test]
    fn test_no_keywords_is_uniform() {
        let weights = compute_weights(&prizes(&["a", "b", "c"]));
        assert_eq!(weights, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_default_list_leaves_one_percent() {
        let weights = compute_weights(&crate::palette::default_prizes());
        // 好运奖, 现金大奖, 神秘大礼 take 33 each; five others share 1
        assert_eq!(weights[1], 33.0);
        assert_eq!(weights[2], 33.0);
        assert_eq!(weights[4], 33.0);
        for i in [0, 3, 5, 6, 7] {
            assert!((weights[i] - 0.2).abs() < 1e-9);
        }
    }

    #[test]
    fn test_over_allocation_starves_others() {
        let weights = compute_weights(&prizes(&["好运1", "好运2", "好运3", "好运4", "其他"]));
        assert_eq!(weights, vec![33.0, 33.0, 33.0, 33.0, 0.0]);
    }

    #[test]
    fn test_all_keywords_discards_remainder() {
        let weights = compute_weights(&prizes(&["好运奖", "神秘大礼"]));
        assert_eq!(weights, vec![33.0, 33.0]);
    }
}
