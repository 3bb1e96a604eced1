mod masker;
mod recognizer;

pub use masker::IMasker;
pub use recognizer::IRecognizer;
