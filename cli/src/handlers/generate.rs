use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use indicatif::ProgressBar;
use sweep::dataset::{DatasetGenerator, DatasetWriter, GenerationConfig};

pub fn write_requests<W, F>(
    generator: &DatasetGenerator,
    output: W,
    mut on_request: F,
) -> Result<u64, Box<dyn std::error::Error>>
where
    W: Write,
    F: FnMut(),
{
    let mut writer = DatasetWriter::new(output);
    for request in generator.requests() {
        writer.write(&request)?;
        on_request();
    }
    let written = writer.written();
    writer.finish()?;
    Ok(written)
}

pub fn handle_generate(
    config: GenerationConfig,
    output_file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let generator = DatasetGenerator::new(config)?;

    match output_file {
        Some(output_file) => {
            let file = BufWriter::new(File::create(&output_file)?);
            let progress_bar = ProgressBar::new(generator.num_requests());
            progress_bar.set_position(0);
            let written = write_requests(&generator, file, || {
                progress_bar.inc(1);
            })?;
            progress_bar.finish_and_clear();

            println!(
                "Wrote {} requests to {} (seed {})",
                written,
                output_file.display(),
                generator.seed()
            );
        },
        None => {
            let stdout = io::stdout();
            write_requests(&generator, stdout.lock(), || {})?;
        },
    }

    Ok(())
}
