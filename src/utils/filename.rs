use std::path::{Path, PathBuf};

/// Generate the default output filename for a converted CSV, derived from
/// the input name: `stations.csv` -> `stations-converted.csv`.
pub fn generate_default_output_filename(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let filename = format!("{}-converted.csv", stem);

    match input.parent() {
        Some(parent) => parent.join(filename),
        None => PathBuf::from(filename),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_filename() {
        let path = generate_default_output_filename(Path::new("data/stations.csv"));
        assert_eq!(path, PathBuf::from("data/stations-converted.csv"));
    }

    #[test]
    fn test_default_output_filename_bare() {
        let path = generate_default_output_filename(Path::new("rows.csv"));
        assert_eq!(path, PathBuf::from("rows-converted.csv"));
    }
}
