// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod document;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use document::{ScheduleDocument, ScheduleModel, TranslationOutput};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;
use yearsched::{Translator, TranslatorConfig, WeekPartition, YearTranslation};
use yearsched_domain::YearDescription;
use yearsched_report::{Severity, TranslationReport};

/// yearsched - converts `Schedule:Year` week schedules into rulesets and back
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON schedule document to translate
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the translated document. Prints to stdout if not provided.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Calendar year used for leap days and weekdays. Overrides the document's
    /// `assumed_year`; defaults to 2009.
    #[arg(short = 'y', long)]
    assumed_year: Option<i32>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v/-q
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let text: String = std::fs::read_to_string(&args.input)
        .wrap_err_with(|| format!("Failed to read {}", args.input.display()))?;
    let document: ScheduleDocument = serde_json::from_str(&text)
        .wrap_err_with(|| format!("Failed to parse {}", args.input.display()))?;

    let assumed_year: YearDescription = match args.assumed_year.or(document.assumed_year) {
        Some(calendar_year) => YearDescription::new(calendar_year)?,
        None => YearDescription::default(),
    };
    info!(
        input = %args.input.display(),
        assumed_year = assumed_year.calendar_year(),
        schedule_years = document.schedule_years.len(),
        rulesets = document.rulesets.len(),
        "Translating schedule document"
    );

    let mut model: ScheduleModel = document
        .to_model()
        .wrap_err("Schedule document is inconsistent")?;
    let mut translator: Translator = Translator::new(TranslatorConfig { assumed_year });
    let translations: Vec<YearTranslation> =
        translator.translate_schedule_years(&model.schedule_years, &mut model.catalog);
    let partitions: Vec<WeekPartition> = translator.translate_rulesets(&model.rulesets);
    let report: TranslationReport = translator.into_report();

    let failed: usize = report.count(Severity::Error);
    let warnings: usize = report.count(Severity::Warning);
    let output: TranslationOutput = TranslationOutput::build(
        &document,
        &model.catalog,
        &assumed_year,
        &translations,
        &partitions,
        report,
    )?;
    let json: String = serde_json::to_string_pretty(&output)?;

    match &args.output {
        Some(path) => std::fs::write(path, json)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?,
        None => println!("{json}"),
    }

    if warnings > 0 {
        warn!(warnings, "Some day schedule references could not be resolved");
    }
    if failed > 0 {
        return Err(eyre!("{failed} schedule(s) could not be translated"));
    }
    info!(
        schedule_years = translations.len(),
        week_partitions = partitions.len(),
        "Translation complete"
    );
    Ok(())
}
