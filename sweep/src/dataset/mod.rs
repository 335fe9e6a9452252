mod dataset_error;
mod generation_config;
mod generator;
mod synthesizer;
mod vocabulary;
mod work_request;
mod writer;

pub use dataset_error::DatasetError;
pub use generation_config::{GenerationConfig, GenerationSeed};
pub use generator::{DatasetGenerator, build_dataset, generate_requests};
pub use synthesizer::{PromptSynthesizer, TOKENS_PER_WORD, words_for_tokens};
pub use vocabulary::{DEFAULT_VOCABULARY, default_vocabulary, load_vocabulary};
pub use work_request::WorkRequest;
pub use writer::{DatasetWriter, read_dataset};
