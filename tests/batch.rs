pub mod test_utils;

use gpx_trace::Config;
use gpx_trace::batch;
use gpx_trace::renderers::OutputFormat;
use std::fs;
use std::path::Path;
use test_utils::*;

fn config_for(input: &Path, output: &Path) -> Config {
    Config {
        input_dir: input.to_path_buf(),
        output_dir: output.join("images"),
        ..Config::default()
    }
}

#[test]
fn morning_run_end_to_end_png() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_file(input.path(), "run.gpx", &morning_run());

    let config = config_for(input.path(), output.path());
    let report = batch::run(&config).unwrap();

    assert_eq!(report.generated.len(), 1);
    assert!(report.failures.is_empty());
    assert_eq!(
        output_files(&config.output_dir, "png"),
        vec!["2023_08_01_07_00_00.png"]
    );
    let png = fs::read(config.output_dir.join("2023_08_01_07_00_00.png")).unwrap();
    let pixmap = tiny_skia::Pixmap::decode_png(&png).unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (800, 600));
    assert!(pixmap.pixels().iter().any(|p| p.alpha() > 0));

    assert_eq!(
        read_log(&config.output_dir),
        vec!["2023_08_01_07_00_00.png - Morning Run"]
    );
}

#[test]
fn morning_run_end_to_end_svg_with_totals() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_file(input.path(), "run.gpx", &morning_run());

    let config = Config {
        format: OutputFormat::Svg,
        totals: true,
        ..config_for(input.path(), output.path())
    };
    batch::run(&config).unwrap();

    let svg = fs::read_to_string(config.output_dir.join("2023_08_01_07_00_00.svg")).unwrap();
    assert!(svg.contains("<path d=\"M"));

    let log = read_log(&config.output_dir);
    assert_eq!(log.len(), 1);
    assert!(
        log[0].starts_with("2023_08_01_07_00_00.svg - Morning Run - Total Time: 600s - Total Distance: "),
        "unexpected log line: {}",
        log[0]
    );
    assert!(log[0].ends_with('m'));
}

#[test]
fn one_malformed_file_does_not_stop_the_batch() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_file(input.path(), "a.gpx", &morning_run());
    let broken = write_file(input.path(), "b.gpx", "<gpx><trk><trkseg><trkpt lat=");
    write_file(
        input.path(),
        "c.gpx",
        &gpx_document(
            Some("Evening Ride"),
            Some("2023-08-02T18:30:00Z"),
            &[(46.0, 7.0, None), (46.1, 7.2, None)],
        ),
    );

    let config = config_for(input.path(), output.path());
    let report = batch::run(&config).unwrap();

    assert_eq!(report.generated.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].source, broken);
    assert_eq!(output_files(&config.output_dir, "png").len(), 2);
    assert_eq!(
        read_log(&config.output_dir),
        vec![
            "2023_08_01_07_00_00.png - Morning Run",
            "2023_08_02_18_30_00.png - Evening Ride",
        ]
    );
}

#[test]
fn missing_metadata_is_reported_per_file() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_file(
        input.path(),
        "nameless.gpx",
        &gpx_document(None, Some("2023-08-01T07:00:00Z"), &[(1.0, 1.0, None), (1.1, 1.1, None)]),
    );

    let config = config_for(input.path(), output.path());
    let report = batch::run(&config).unwrap();

    assert!(report.generated.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].message.contains("name"));
    assert!(read_log(&config.output_dir).is_empty());
    assert!(output_files(&config.output_dir, "png").is_empty());
}

#[test]
fn log_is_truncated_at_batch_start() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_file(input.path(), "run.gpx", &morning_run());

    let config = config_for(input.path(), output.path());
    batch::run(&config).unwrap();
    batch::run(&config).unwrap();

    assert_eq!(read_log(&config.output_dir).len(), 1);
}

#[test]
fn ignores_other_files_and_subdirectories() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_file(input.path(), "run.gpx", &morning_run());
    write_file(input.path(), "notes.txt", "not a track");
    let nested = input.path().join("2022");
    fs::create_dir(&nested).unwrap();
    write_file(
        &nested,
        "old.gpx",
        &gpx_document(Some("Old"), Some("2022-05-05T05:05:05Z"), &[(0.0, 0.0, None), (0.1, 0.1, None)]),
    );

    let config = config_for(input.path(), output.path());
    let report = batch::run(&config).unwrap();
    assert_eq!(report.generated.len(), 1);
    assert!(report.failures.is_empty());

    let recursive = Config {
        recursive: true,
        ..config
    };
    let report = batch::run(&recursive).unwrap();
    assert_eq!(report.generated.len(), 2);
    assert_eq!(read_log(&recursive.output_dir).len(), 2);
}

#[test]
fn parallel_mode_keeps_input_order() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    for day in 1..=9 {
        write_file(
            input.path(),
            &format!("day{}.gpx", day),
            &gpx_document(
                Some(&format!("Day {}", day)),
                Some(&format!("2023-08-0{}T07:00:00Z", day)),
                &[(45.0, 6.0, None), (45.0 + day as f64 / 100.0, 6.05, None)],
            ),
        );
    }
    write_file(input.path(), "day5b.gpx", "garbage");

    let config = Config {
        parallel: true,
        ..config_for(input.path(), output.path())
    };
    let report = batch::run(&config).unwrap();

    assert_eq!(report.generated.len(), 9);
    assert_eq!(report.failures.len(), 1);
    let expected: Vec<String> = (1..=9)
        .map(|day| format!("2023_08_0{}_07_00_00.png - Day {}", day, day))
        .collect();
    assert_eq!(read_log(&config.output_dir), expected);
}

#[test]
fn degenerate_tracks_still_render() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_file(
        input.path(),
        "meridian.gpx",
        &gpx_document(
            Some("Due North"),
            Some("2023-09-09T09:00:00Z"),
            &[(10.0, 20.0, None), (10.5, 20.0, None), (11.0, 20.0, None)],
        ),
    );
    write_file(
        input.path(),
        "standing.gpx",
        &gpx_document(Some("Standing Still"), Some("2023-09-10T09:00:00Z"), &[(10.0, 20.0, None)]),
    );

    let config = Config {
        format: OutputFormat::Svg,
        ..config_for(input.path(), output.path())
    };
    let report = batch::run(&config).unwrap();
    assert_eq!(report.generated.len(), 2);

    for name in ["2023_09_09_09_00_00.svg", "2023_09_10_09_00_00.svg"] {
        let svg = fs::read_to_string(config.output_dir.join(name)).unwrap();
        assert!(!svg.contains("NaN") && !svg.contains("inf"), "{}", svg);
    }
}

#[test]
fn missing_input_directory_is_a_setup_error() {
    let output = tempfile::tempdir().unwrap();
    let config = config_for(&output.path().join("does-not-exist"), output.path());
    assert!(batch::run(&config).is_err());
}
