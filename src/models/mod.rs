pub mod analysis;

pub use analysis::{AnalysisResult, DEEPFAKE_THRESHOLD, MAX_CONFIDENCE, Verdict};
