//! 分值分配
//!
//! 每道题总分为 1 分。按子项数均分并保留两位小数，最后一个子项吸收舍入误差，
//! 保证总分恰好为 1。

/// 保留两位小数，恰好为 5 时远离零进位（0.125 → 0.13）
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 子项编号 → 分值
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreAllocation {
    points: Vec<f64>,
}

impl ScoreAllocation {
    /// 每个子项的基础分值
    pub fn base_share(count: usize) -> f64 {
        round2(1.0 / count as f64)
    }

    /// 均分 1 分给 `count` 个子项，最后一个子项得 1 减去之前已分配的分数
    pub fn uniform(count: usize) -> Self {
        let share = Self::base_share(count);
        let mut points = Vec::with_capacity(count);
        let mut assigned = 0.0;

        for index in 0..count {
            let value = if index + 1 == count { 1.0 - assigned } else { share };
            assigned += value;
            points.push(value);
        }

        Self { points }
    }

    pub fn points(&self, index: usize) -> f64 {
        self.points.get(index).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.points.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_rounds_up() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(1.0 / 8.0), 0.13);
        assert_eq!(round2(1.0 / 40.0), 0.03);
        assert_eq!(round2(1.0 / 200.0), 0.01);
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(0.5), 0.5);
    }

    #[test]
    fn test_eight_items_share() {
        let allocation = ScoreAllocation::uniform(8);
        for index in 0..7 {
            assert_eq!(allocation.points(index), 0.13);
        }
        assert!((allocation.points(7) - 0.09).abs() < 1e-9);
        assert_eq!(allocation.points(8), 0.0);
    }

    #[test]
    fn test_single_item_gets_everything() {
        let allocation = ScoreAllocation::uniform(1);
        assert_eq!(allocation.points(0), 1.0);
    }

    #[test]
    fn test_last_item_absorbs_remainder() {
        let allocation = ScoreAllocation::uniform(3);
        assert_eq!(allocation.points(0), 0.33);
        assert_eq!(allocation.points(1), 0.33);
        assert!((allocation.points(2) - 0.34).abs() < 1e-9);
    }

    #[test]
    fn test_total_is_one_for_many_counts() {
        for count in 1..=40 {
            let allocation = ScoreAllocation::uniform(count);
            assert!(
                (allocation.total() - 1.0).abs() < 1e-9,
                "count {} totals {}",
                count,
                allocation.total()
            );
        }
    }

    #[test]
    fn test_out_of_range_is_zero() {
        let allocation = ScoreAllocation::uniform(2);
        assert_eq!(allocation.points(5), 0.0);
    }
}
