pub mod analysis;
pub mod segmenter;

pub use analysis::AnalysisService;
pub use segmenter::SentenceSegmenter;
