use clap::Parser;
use quire::{ExecutorImpl, PipelineBuilder, PipelineError};
use std::path::PathBuf;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Render Markdown documents to paginated PDF.
#[derive(Parser, Debug)]
#[command(name = "quire", version, about)]
struct Cli {
    /// Input files: Markdown (.md) or a JSON block list (.json).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output path. Only valid with a single input; otherwise each input is
    /// written next to itself with a .pdf extension.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON stylesheet.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document title for the PDF metadata.
    #[arg(long)]
    title: Option<String>,

    /// Draw "Page N of M" footers.
    #[arg(long)]
    page_numbers: bool,

    /// Render several inputs in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel (defaults to the number of cores).
    #[arg(long, requires = "parallel")]
    workers: Option<usize>,
}

impl Cli {
    fn jobs(&self) -> Result<Vec<(PathBuf, PathBuf)>, PipelineError> {
        match (&self.output, self.inputs.as_slice()) {
            (Some(output), [input]) => Ok(vec![(input.clone(), output.clone())]),
            (Some(_), _) => Err(PipelineError::Config(
                "--output can only be used with a single input".to_string(),
            )),
            (None, inputs) => Ok(inputs
                .iter()
                .map(|input| (input.clone(), input.with_extension("pdf")))
                .collect()),
        }
    }

    fn pipeline(&self) -> Result<quire::DocumentPipeline, PipelineError> {
        let mut builder = PipelineBuilder::new().with_page_numbers(self.page_numbers);
        if let Some(config) = &self.config {
            builder = builder.with_stylesheet_file(config)?;
        }
        if let Some(title) = &self.title {
            builder = builder.with_title(title.clone());
        }
        builder = match (self.parallel, self.workers) {
            (false, _) => builder.with_executor(ExecutorImpl::sequential()),
            (true, Some(workers)) => builder.with_worker_count(workers)?,
            (true, None) => builder.with_executor(ExecutorImpl::parallel()),
        };
        builder.build()
    }
}

fn run(cli: &Cli) -> Result<usize, PipelineError> {
    let jobs = cli.jobs()?;
    let pipeline = cli.pipeline()?;
    let outputs: Vec<PathBuf> = jobs.iter().map(|(_, output)| output.clone()).collect();

    let mut failures = 0;
    for (result, output) in pipeline.generate_files(jobs).into_iter().zip(outputs) {
        match result {
            Ok(()) => println!("Generated {}", output.display()),
            Err(e) => {
                eprintln!("Failed to generate {}: {}", output.display(), e);
                failures += 1;
            }
        }
    }
    Ok(failures)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
