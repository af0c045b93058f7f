#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// A small catalog covering both title types, multi-genre cells,
/// a multi-country cell, and missing genre/country values.
pub const SAMPLE_CATALOG: &str = r#"show_id,type,title,director,country,release_year,listed_in
s1,Movie,Dust Roads,Ann Chu,United States,2019,"Dramas, Comedies"
s2,Movie,Night Ferry,Luis Ortega,"United States, Mexico",2019,Dramas
s3,TV Show,Harbor Lights,,United Kingdom,2020,"British TV Shows, Dramas"
s4,Movie,Paper Kites,Mira Sen,India,2018,"Comedies, Dramas, Independent Movies"
s5,TV Show,Static,,,2020,Docuseries
s6,Movie,Silent Orchard,,France,2017,
s7,TV Show,Two Rivers,,United States,2019,"Docuseries, Science & Nature TV"
s8,Movie,Glass Harvest,,India,2020,Dramas
"#;

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }

    /// Writes the standard sample catalog and returns its path.
    pub fn write_sample_catalog(&self) -> PathBuf {
        self.write("titles.csv", SAMPLE_CATALOG)
    }
}
