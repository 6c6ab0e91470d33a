use serde::{Deserialize, Serialize};

/// Risk tier assigned from the rounded credit score and the applicant's age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    HighValue,
    Standard,
    Risk,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::HighValue => "high-value",
            Classification::Standard => "standard",
            Classification::Risk => "risk",
        }
    }

    /// Fixed rationale returned to callers alongside the label.
    pub fn reason(&self) -> &'static str {
        match self {
            Classification::HighValue => {
                "Điểm cao và độ tuổi trong ngưỡng ổn định thu nhập/tiêu dùng."
            }
            Classification::Standard => "Điểm khá và độ tuổi phù hợp, rủi ro trung bình.",
            Classification::Risk => "Điểm thấp hoặc độ tuổi ngoài ngưỡng ưu tiên, rủi ro cao hơn.",
        }
    }
}

/// Score thresholds and inclusive age bands, evaluated top-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationPolicy {
    pub high_value_min_score: i64,
    pub high_value_min_age: u64,
    pub high_value_max_age: u64,
    pub standard_min_score: i64,
    pub standard_min_age: u64,
    pub standard_max_age: u64,
}

impl ClassificationPolicy {
    pub fn standard() -> Self {
        Self {
            high_value_min_score: 720,
            high_value_min_age: 25,
            high_value_max_age: 65,
            standard_min_score: 640,
            standard_min_age: 21,
            standard_max_age: 70,
        }
    }

    pub fn classify(&self, credit_score: i64, age: u64) -> Classification {
        if credit_score >= self.high_value_min_score
            && (self.high_value_min_age..=self.high_value_max_age).contains(&age)
        {
            Classification::HighValue
        } else if credit_score >= self.standard_min_score
            && (self.standard_min_age..=self.standard_max_age).contains(&age)
        {
            Classification::Standard
        } else {
            Classification::Risk
        }
    }

    /// Human-readable rule summary echoed in `classify_customer` reasons.
    pub fn rule_description(&self) -> String {
        format!(
            "high-value nếu score ≥ {} và {}–{}; standard nếu score ≥ {} và {}–{}; else risk.",
            self.high_value_min_score,
            self.high_value_min_age,
            self.high_value_max_age,
            self.standard_min_score,
            self.standard_min_age,
            self.standard_max_age
        )
    }
}

impl Default for ClassificationPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
