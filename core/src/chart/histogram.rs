use crate::theme::Rgb;

/// A histogram bin; `upper` is exclusive except for the last bin
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl Bin {
    pub fn label(&self) -> String {
        format!("{}-{}", trim_float(self.lower), trim_float(self.upper))
    }
}

fn trim_float(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.1}", v)
    }
}

/// Distribution of integer samples over equal-width bins
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub label: String,
    pub samples: Vec<i64>,
    pub bins: usize,
    pub color: Rgb,
}

impl Histogram {
    /// Count samples into `bins` equal-width bins spanning `[min, max]`
    pub fn bin_counts(&self) -> Vec<Bin> {
        let bins = self.bins.max(1);

        let (lo, hi) = match (self.samples.iter().min(), self.samples.iter().max()) {
            (Some(&min), Some(&max)) if min == max => (min as f64 - 0.5, max as f64 + 0.5),
            (Some(&min), Some(&max)) => (min as f64, max as f64),
            _ => (0.0, 1.0),
        };
        let width = (hi - lo) / bins as f64;

        let mut out: Vec<Bin> = (0..bins)
            .map(|i| Bin {
                lower: lo + width * i as f64,
                upper: if i + 1 == bins {
                    hi
                } else {
                    lo + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for &sample in &self.samples {
            let idx = (((sample as f64) - lo) / width).floor() as usize;
            out[idx.min(bins - 1)].count += 1;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::infection_rates;
    use crate::theme::theme;

    fn hist(samples: Vec<i64>, bins: usize) -> Histogram {
        Histogram {
            label: "Infection Rate".into(),
            samples,
            bins,
            color: theme().histogram,
        }
    }

    #[test]
    fn test_infection_rate_bins() {
        let bins = hist(infection_rates(), 5).bin_counts();
        assert_eq!(bins.len(), 5);
        let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 2, 2, 2, 3]);
        assert_eq!(bins[0].lower, 2.0);
        assert_eq!(bins[4].upper, 7.0);
        assert_eq!(bins[0].label(), "2-3");
    }

    #[test]
    fn test_degenerate_range() {
        let bins = hist(vec![4, 4, 4], 5).bin_counts();
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
        assert_eq!(bins[0].lower, 3.5);
        assert_eq!(bins[4].upper, 4.5);
    }

    #[test]
    fn test_empty_and_zero_bins() {
        let bins = hist(vec![], 5).bin_counts();
        assert_eq!(bins.len(), 5);
        assert!(bins.iter().all(|b| b.count == 0));

        let bins = hist(vec![1, 2, 3], 0).bin_counts();
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
    }
}
