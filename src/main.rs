use freq_report::pipeline::{PipelineError, ReportPipeline};

fn main() -> Result<(), PipelineError> {
    let report = ReportPipeline::default().build()?;
    report.show();
    Ok(())
}
