use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::dataset::{
    DatasetError, GenerationConfig, PromptSynthesizer, WorkRequest,
};

/// Lazily yields `count` requests with task ids `1..=count`, in order.
pub fn generate_requests<R: Rng>(
    synthesizer: &PromptSynthesizer,
    count: u64,
    input_length: u64,
    output_length: u64,
    mut rng: R,
) -> impl Iterator<Item = WorkRequest> {
    (1..=count).map(move |task_id| WorkRequest {
        task_id,
        prompt: synthesizer.generate(input_length, &mut rng),
        output_tokens: output_length,
    })
}

pub fn build_dataset<R: Rng>(
    synthesizer: &PromptSynthesizer,
    count: u64,
    input_length: u64,
    output_length: u64,
    rng: R,
) -> Vec<WorkRequest> {
    generate_requests(synthesizer, count, input_length, output_length, rng)
        .collect()
}

pub struct DatasetGenerator {
    synthesizer: PromptSynthesizer,
    num_requests: u64,
    input_length: u64,
    output_length: u64,
    seed: u64,
}

impl DatasetGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self, DatasetError> {
        let synthesizer = PromptSynthesizer::new(config.vocabulary)?;
        let seed = config.seed.resolve();
        log::debug!(
            "Dataset generator: {} requests, input {} tokens, output {} tokens, seed {}",
            config.num_requests,
            config.input_length,
            config.output_length,
            seed
        );

        Ok(Self {
            synthesizer,
            num_requests: config.num_requests,
            input_length: config.input_length,
            output_length: config.output_length,
            seed,
        })
    }

    pub fn num_requests(&self) -> u64 {
        self.num_requests
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Every call replays the same sequence for the resolved seed.
    pub fn requests(&self) -> impl Iterator<Item = WorkRequest> {
        generate_requests(
            &self.synthesizer,
            self.num_requests,
            self.input_length,
            self.output_length,
            StdRng::seed_from_u64(self.seed),
        )
    }
}
