mod common;

use std::fs;

use catalog_insights::cli::{ChartArgs, ChartFormat, ChartKind, RenderArgs, ReportArgs};
use catalog_insights::report;

use common::TestWorkspace;

fn render_args(workspace: &TestWorkspace) -> RenderArgs {
    RenderArgs {
        input: workspace.write_sample_catalog(),
        out_dir: workspace.path().join("charts"),
        format: ChartFormat::Svg,
        delimiter: None,
        input_encoding: None,
        limit: 0,
        top_genres: 10,
        trend_top: 5,
        top_countries: 10,
    }
}

#[test]
fn report_renders_all_five_charts() {
    let workspace = TestWorkspace::new();
    let args = ReportArgs {
        render: render_args(&workspace),
        dump_tables: false,
    };

    report::execute(&args).expect("report succeeds");

    let out_dir = workspace.path().join("charts");
    for name in [
        "type_ratio.svg",
        "year_distribution.svg",
        "genre_popularity.svg",
        "genre_trend.svg",
        "genre_by_country.svg",
    ] {
        let path = out_dir.join(name);
        assert!(path.exists(), "missing chart {path:?}");
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }
}

#[test]
fn report_dumps_summary_tables_when_requested() {
    let workspace = TestWorkspace::new();
    let args = ReportArgs {
        render: render_args(&workspace),
        dump_tables: true,
    };

    report::execute(&args).expect("report succeeds");

    let out_dir = workspace.path().join("charts");
    let type_ratio = fs::read_to_string(out_dir.join("type_ratio.csv")).expect("table dump");
    assert!(type_ratio.contains("\"title_type\""));
    assert!(type_ratio.contains("\"Movie\""));
    assert!(type_ratio.contains("\"5\""));

    for name in [
        "year_distribution.csv",
        "genre_popularity.csv",
        "genre_trend.csv",
        "genre_by_country.csv",
    ] {
        assert!(out_dir.join(name).exists(), "missing table {name}");
    }
}

#[test]
fn single_chart_renders_only_the_requested_kind() {
    let workspace = TestWorkspace::new();
    let args = ChartArgs {
        kind: ChartKind::GenreTrend,
        render: render_args(&workspace),
    };

    report::execute_single(&args).expect("chart succeeds");

    let out_dir = workspace.path().join("charts");
    assert!(out_dir.join("genre_trend.svg").exists());
    assert!(!out_dir.join("type_ratio.svg").exists());
}

#[test]
fn report_fails_on_missing_input_file() {
    let workspace = TestWorkspace::new();
    let mut render = render_args(&workspace);
    render.input = workspace.path().join("absent.csv");
    let args = ReportArgs {
        render,
        dump_tables: false,
    };

    let err = report::execute(&args).unwrap_err();
    assert!(format!("{err:#}").contains("Loading catalog"));
}
