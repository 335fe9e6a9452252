use rand::prelude::*;

use crate::dataset::default_vocabulary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationSeed {
    Default,
    Custom(u64),
}

impl Default for GenerationSeed {
    fn default() -> Self {
        GenerationSeed::Default
    }
}

impl GenerationSeed {
    pub fn resolve(&self) -> u64 {
        match self {
            GenerationSeed::Default => rand::rng().random::<u64>(),
            GenerationSeed::Custom(seed) => *seed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub num_requests: u64,
    pub input_length: u64,
    pub output_length: u64,
    pub seed: GenerationSeed,
    pub vocabulary: Vec<String>,
}

impl GenerationConfig {
    pub fn new(
        num_requests: u64,
        input_length: u64,
        output_length: u64,
    ) -> Self {
        Self {
            num_requests,
            input_length,
            output_length,
            seed: GenerationSeed::default(),
            vocabulary: default_vocabulary(),
        }
    }

    pub fn num_requests(
        mut self,
        num_requests: u64,
    ) -> Self {
        self.num_requests = num_requests;
        self
    }

    pub fn input_length(
        mut self,
        input_length: u64,
    ) -> Self {
        self.input_length = input_length;
        self
    }

    pub fn output_length(
        mut self,
        output_length: u64,
    ) -> Self {
        self.output_length = output_length;
        self
    }

    pub fn seed(
        mut self,
        seed: GenerationSeed,
    ) -> Self {
        self.seed = seed;
        self
    }

    pub fn vocabulary(
        mut self,
        vocabulary: Vec<String>,
    ) -> Self {
        self.vocabulary = vocabulary;
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(1, 128, 128)
    }
}
