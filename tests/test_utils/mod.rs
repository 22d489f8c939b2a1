use std::fs;
use std::path::{Path, PathBuf};

/// (lat, lon, optional RFC 3339 time)
pub type Fix<'a> = (f64, f64, Option<&'a str>);

pub fn gpx_document(name: Option<&str>, time: Option<&str>, points: &[Fix]) -> String {
    let mut metadata = String::new();
    if let Some(name) = name {
        metadata.push_str(&format!("<name>{}</name>", name));
    }
    if let Some(time) = time {
        metadata.push_str(&format!("<time>{}</time>", time));
    }

    let trkpts: String = points
        .iter()
        .map(|(lat, lon, time)| match time {
            Some(t) => format!(r#"<trkpt lat="{}" lon="{}"><time>{}</time></trkpt>"#, lat, lon, t),
            None => format!(r#"<trkpt lat="{}" lon="{}"></trkpt>"#, lat, lon),
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="gpx-trace tests" xmlns="http://www.topografix.com/GPX/1/1">
  <metadata>{}</metadata>
  <trk>
    <name>track</name>
    <trkseg>
      {}
    </trkseg>
  </trk>
</gpx>
"#,
        metadata, trkpts
    )
}

pub fn morning_run() -> String {
    gpx_document(
        Some("Morning Run"),
        Some("2023-08-01T07:00:00Z"),
        &[
            (47.370, 8.540, Some("2023-08-01T07:00:00Z")),
            (47.375, 8.545, Some("2023-08-01T07:05:00Z")),
            (47.380, 8.550, Some("2023-08-01T07:10:00Z")),
        ],
    )
}

pub fn write_file(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, contents).unwrap();
    path
}

pub fn read_log(output_dir: &Path) -> Vec<String> {
    fs::read_to_string(output_dir.join("log.txt"))
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

pub fn output_files(output_dir: &Path, extension: &str) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(output_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(&format!(".{}", extension)))
        .collect();
    names.sort();
    names
}
