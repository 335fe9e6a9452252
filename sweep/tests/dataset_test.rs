use std::io::{BufReader, Cursor};

use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use sweep::dataset::{
    DatasetGenerator, DatasetWriter, GenerationConfig, GenerationSeed,
    PromptSynthesizer, TOKENS_PER_WORD, WorkRequest, build_dataset,
    default_vocabulary, read_dataset,
};

const TEST_SEED: u64 = 1234;

fn synthesizer() -> PromptSynthesizer {
    PromptSynthesizer::new(default_vocabulary()).unwrap()
}

fn word_count(prompt: &str) -> usize {
    prompt.split(' ').count()
}

proptest! {
    #[test]
    fn test_prompt_word_count_follows_token_ratio(
        target in 1u64..20_000,
        seed in any::<u64>(),
    ) {
        let prompt = synthesizer()
            .generate(target, &mut StdRng::seed_from_u64(seed));
        let expected = ((target as f64 / TOKENS_PER_WORD).floor() as usize).max(1);
        prop_assert_eq!(word_count(&prompt), expected);
    }
}

#[test]
fn test_tiny_targets_produce_one_word() {
    let synthesizer = synthesizer();
    let mut rng = StdRng::seed_from_u64(TEST_SEED);

    assert_eq!(word_count(&synthesizer.generate(0, &mut rng)), 1);
    assert_eq!(word_count(&synthesizer.generate(1, &mut rng)), 1);
}

#[test]
fn test_build_dataset_assigns_sequential_ids() {
    let dataset = build_dataset(
        &synthesizer(),
        25,
        64,
        512,
        StdRng::seed_from_u64(TEST_SEED),
    );

    assert_eq!(dataset.len(), 25);
    for (index, request) in dataset.iter().enumerate() {
        assert_eq!(request.task_id, index as u64 + 1);
        assert_eq!(request.output_tokens, 512);
        assert_eq!(word_count(&request.prompt), 49);
    }
}

#[test]
fn test_output_tokens_pass_through_unchanged() {
    let dataset =
        build_dataset(&synthesizer(), 3, 0, 0, StdRng::seed_from_u64(TEST_SEED));
    assert!(dataset.iter().all(|request| request.output_tokens == 0));

    let dataset = build_dataset(
        &synthesizer(),
        3,
        10,
        u64::MAX,
        StdRng::seed_from_u64(TEST_SEED),
    );
    assert!(dataset.iter().all(|request| request.output_tokens == u64::MAX));
}

#[test]
fn test_generator_is_reproducible_with_custom_seed() {
    let config = GenerationConfig::default()
        .num_requests(5)
        .input_length(32)
        .output_length(16)
        .seed(GenerationSeed::Custom(TEST_SEED));

    let first = DatasetGenerator::new(config.clone()).unwrap();
    let second = DatasetGenerator::new(config).unwrap();
    assert_eq!(first.seed(), TEST_SEED);
    let replayed = first.requests().collect::<Vec<WorkRequest>>();
    assert_eq!(replayed.len(), 5);
    assert_eq!(replayed, second.requests().collect::<Vec<WorkRequest>>());
    assert_eq!(replayed, first.requests().collect::<Vec<WorkRequest>>());
}

#[test]
fn test_generator_uses_configured_vocabulary() {
    let generator = DatasetGenerator::new(
        GenerationConfig::new(3, 40, 8)
            .seed(GenerationSeed::Custom(TEST_SEED))
            .vocabulary(vec!["lorem".to_string(), "ipsum".to_string()]),
    )
    .unwrap();

    for request in generator.requests() {
        assert!(
            request
                .prompt
                .split(' ')
                .all(|word| word == "lorem" || word == "ipsum")
        );
    }
}

#[test]
fn test_generator_rejects_empty_vocabulary() {
    let result =
        DatasetGenerator::new(GenerationConfig::default().vocabulary(Vec::new()));
    assert!(result.is_err());
}

#[test]
fn test_json_lines_round_trip() {
    let dataset = build_dataset(
        &synthesizer(),
        10,
        200,
        128,
        StdRng::seed_from_u64(TEST_SEED),
    );

    let mut writer = DatasetWriter::new(Vec::new());
    for request in &dataset {
        writer.write(request).unwrap();
    }
    assert_eq!(writer.written(), 10);
    let bytes = writer.finish().unwrap();

    let text = String::from_utf8(bytes.clone()).unwrap();
    assert_eq!(text.lines().count(), 10);
    assert!(text.lines().next().unwrap().starts_with("{\"task_id\":1,\"prompt\":"));

    let parsed = read_dataset(BufReader::new(Cursor::new(bytes))).unwrap();
    assert_eq!(parsed, dataset);
}

#[test]
fn test_read_dataset_rejects_invalid_line() {
    let input = "{\"task_id\":1,\"prompt\":\"a\",\"output_tokens\":3}\nnot json\n";
    assert!(read_dataset(Cursor::new(input)).is_err());
}
