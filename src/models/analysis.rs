use serde::Serialize;

/// Scores strictly above this value are reported as a possible deepfake.
pub const DEEPFAKE_THRESHOLD: u8 = 65;

/// Highest confidence the scorer can produce.
pub const MAX_CONFIDENCE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    PossibleDeepfake,
    LikelyReal,
}

impl Verdict {
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence > DEEPFAKE_THRESHOLD {
            Verdict::PossibleDeepfake
        } else {
            Verdict::LikelyReal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::PossibleDeepfake => "Possible Deepfake ⚠️",
            Verdict::LikelyReal => "Likely Real ✅",
        }
    }

    pub fn details(self) -> &'static str {
        match self {
            Verdict::PossibleDeepfake => "Irregular lighting, texture mismatches detected.",
            Verdict::LikelyReal => "No major digital artifacts detected.",
        }
    }
}

/// Body of a successful `/analyze` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub confidence: u8,
    pub result: &'static str,
    pub details: &'static str,
}

impl AnalysisResult {
    pub fn from_confidence(confidence: u8) -> Self {
        let verdict = Verdict::from_confidence(confidence);
        Self {
            confidence,
            result: verdict.label(),
            details: verdict.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(Verdict::from_confidence(65), Verdict::LikelyReal);
        assert_eq!(Verdict::from_confidence(66), Verdict::PossibleDeepfake);
    }

    #[test]
    fn extremes_classify() {
        assert_eq!(Verdict::from_confidence(0), Verdict::LikelyReal);
        assert_eq!(
            Verdict::from_confidence(MAX_CONFIDENCE),
            Verdict::PossibleDeepfake
        );
    }

    #[test]
    fn details_follow_result() {
        for confidence in 0..=MAX_CONFIDENCE {
            let result = AnalysisResult::from_confidence(confidence);
            let expected = if confidence > 65 {
                (
                    "Possible Deepfake ⚠️",
                    "Irregular lighting, texture mismatches detected.",
                )
            } else {
                ("Likely Real ✅", "No major digital artifacts detected.")
            };
            assert_eq!((result.result, result.details), expected);
        }
    }

    #[test]
    fn serializes_three_fields() {
        let value = serde_json::to_value(AnalysisResult::from_confidence(80)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "confidence": 80,
                "result": "Possible Deepfake ⚠️",
                "details": "Irregular lighting, texture mismatches detected."
            })
        );
    }
}
