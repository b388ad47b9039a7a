use std::fs;
use std::path::Path;

use freq_report::count::count_words;
use freq_report::pipeline::{PipelineError, ReportPipeline};
use freq_report::table::{FrequencyRow, FrequencyTable};
use tempfile::tempdir;

fn write_as_csv(table: &FrequencyTable, path: &Path) {
    let mut contents = String::from("word,frequency\n");
    for row in table.iter() {
        contents.push_str(&format!("{},{}\n", row.word, row.frequency));
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn corpus_to_chart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("word_frequencies.txt");

    let corpus = "alpha alpha alpha beta beta gamma\nALPHA beta! gamma delta\n";
    write_as_csv(&count_words(corpus), &path);

    let report = ReportPipeline::new(&path).with_limit(3).build().unwrap();

    let words: Vec<&str> = report
        .selection
        .rows
        .iter()
        .map(|r| r.word.as_str())
        .collect();
    assert_eq!(words, ["alpha", "beta", "gamma"]);
    assert_eq!(report.selection.rows[0], FrequencyRow::new("alpha", 4));
    assert_eq!(report.selection.summary.rows_excluded, 1, "delta falls below the cut");

    // Headless render: the fragment embeds the category labels and the title.
    let html = report.to_inline_html(Some("report"));
    assert!(html.contains("alpha"));
    assert!(html.contains("Top 50 Most Frequent Words"));
}

#[test]
fn pipeline_surfaces_load_failure_before_rendering() {
    let dir = tempdir().unwrap();

    let err = ReportPipeline::new(dir.path().join("absent.txt"))
        .build()
        .unwrap_err();

    assert!(matches!(err, PipelineError::Load(_)), "got {err:?}");
}

#[test]
fn report_debug_output_elides_the_figure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("word_frequencies.txt");
    write_as_csv(&count_words("alpha alpha beta"), &path);

    let report = ReportPipeline::new(&path).build().unwrap();
    let rendered = format!("{report:?}");

    assert!(rendered.starts_with("FrequencyReport"));
    assert!(rendered.contains("alpha"));
    assert!(!rendered.contains("plot"), "the figure must not leak into Debug output");
}

#[test]
fn running_the_pipeline_twice_produces_the_same_selection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("word_frequencies.txt");
    write_as_csv(&count_words("one two two three three three"), &path);

    let pipeline = ReportPipeline::new(&path);
    let first = pipeline.build().unwrap();
    let second = pipeline.build().unwrap();

    assert_eq!(first.selection, second.selection);
}
