//! Credit-weighted cumulative grade point average.

/// Running totals for a CGPA computation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cgpa {
    total_credits: f64,
    weighted_points: f64,
}

impl Cgpa {
    pub fn add(&mut self, credits: f64, grade_point: f64) {
        self.total_credits += credits;
        self.weighted_points += credits * grade_point;
    }

    /// Two-decimal CGPA, `"0.00"` when no credits were accumulated.
    pub fn format(&self) -> String {
        if self.total_credits == 0.0 {
            return "0.00".to_string();
        }

        format!("{:.2}", self.weighted_points / self.total_credits)
    }
}

impl FromIterator<(f64, f64)> for Cgpa {
    /// Accumulates `(credits, grade_point)` pairs.
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut cgpa = Self::default();
        for (credits, grade_point) in iter {
            cgpa.add(credits, grade_point);
        }
        cgpa
    }
}
