mod chart;
mod cli;
mod error;
mod ingest;
mod pipeline;
mod prelude;
mod quantity;
mod series;
mod sizing;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    chart::ChartPayload,
    cli::{AnalyzeArgs, Args, Command},
    error::PipelineError,
    ingest::InputFormat,
    prelude::*,
    tables::{build_daily_peak_table, build_sizing_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    match args.command {
        Command::Analyze(args) => analyze(*args).await?,
    }

    info!("done!");
    Ok(())
}

async fn analyze(args: AnalyzeArgs) -> Result {
    let path = args.path.as_deref().ok_or(PipelineError::MissingInput)?;
    let format = args.format.unwrap_or_else(|| InputFormat::sniff(path));
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    // Everything after the read is synchronous and pure.
    let table = ingest::parse(&content, format)?;
    let analysis = pipeline::analyze(&table, args.policy, &args.bess.to_config())?;

    println!("{}", build_daily_peak_table(&analysis.days));
    println!("{}", build_sizing_table(&analysis.rows));

    if let Some(chart_out) = &args.chart_out {
        let series = if args.sorted { analysis.series.sorted() } else { analysis.series };
        let payload = ChartPayload::from_series(&series, args.peak_window.as_range());
        std::fs::write(chart_out, serde_json::to_string_pretty(&payload)?)
            .with_context(|| format!("failed to write `{}`", chart_out.display()))?;
        info!(path = %chart_out.display(), "chart payload written");
    }

    Ok(())
}
