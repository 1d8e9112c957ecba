//! Per-level summary statistics.

use serde::Serialize;

use crate::field::Field;

/// Summary of one z-level of a [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelStats {
    /// 1-based level number (`z + 1`)
    pub level: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl LevelStats {
    /// `<level> <mean> <min> <max>` with six decimals per value.
    pub fn report_line(&self) -> String {
        format!(
            "{} {:.6} {:.6} {:.6}",
            self.level, self.mean, self.min, self.max
        )
    }
}

/// Compute mean, min and max for every level, in ascending `z`.
///
/// Note: `min` and `max` are seeded with `0.0`, not with the first sample,
/// as if every level held an extra zero. A level of strictly positive values
/// therefore reports `min = 0.0`, and a level of strictly negative values
/// reports `max = 0.0`. Existing report consumers depend on this, so it is
/// kept. `mean` is the plain average of the level's samples.
pub fn aggregate_levels(field: &Field) -> Vec<LevelStats> {
    field
        .levels()
        .enumerate()
        .map(|(z, samples)| {
            let mut min = 0.0_f64;
            let mut max = 0.0_f64;
            let mut sum = 0.0_f64;

            for &sample in samples {
                let d = f64::from(sample);
                if d < min {
                    min = d;
                }
                if d > max {
                    max = d;
                }
                sum += d;
            }

            LevelStats {
                level: z + 1,
                mean: sum / samples.len() as f64,
                min,
                max,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seeded_min() {
        let field = Field::from_values(2, 1, 1, vec![10.0, 20.0]).unwrap();
        let stats = aggregate_levels(&field);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].level, 1);
        assert_eq!(stats[0].min, 0.0);
        assert_eq!(stats[0].max, 20.0);
        assert_eq!(stats[0].mean, 15.0);
    }

    #[test]
    fn test_zero_seeded_max() {
        let field = Field::from_values(2, 1, 1, vec![-4.0, -2.0]).unwrap();
        let stats = aggregate_levels(&field);

        assert_eq!(stats[0].min, -4.0);
        assert_eq!(stats[0].max, 0.0);
        assert_eq!(stats[0].mean, -3.0);
    }

    #[test]
    fn test_one_record_per_level() {
        let field = Field::from_values(1, 2, 3, vec![1.0, 3.0, -1.0, 5.0, 7.0, 9.0]).unwrap();
        let stats = aggregate_levels(&field);

        let levels: Vec<usize> = stats.iter().map(|s| s.level).collect();
        assert_eq!(levels, vec![1, 2, 3]);
        assert_eq!(stats[0].mean, 2.0);
        assert_eq!(stats[1].min, -1.0);
        assert_eq!(stats[1].max, 5.0);
        assert_eq!(stats[2].mean, 8.0);
    }

    #[test]
    fn test_report_line() {
        let stats = LevelStats {
            level: 1,
            mean: 25.0,
            min: 0.0,
            max: 40.0,
        };
        assert_eq!(stats.report_line(), "1 25.000000 0.000000 40.000000");
    }

    #[test]
    fn test_serializes_field_names() {
        let stats = LevelStats {
            level: 2,
            mean: 1.5,
            min: -1.0,
            max: 4.0,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["level"], 2);
        assert_eq!(json["mean"], 1.5);
        assert_eq!(json["min"], -1.0);
        assert_eq!(json["max"], 4.0);
    }
}
