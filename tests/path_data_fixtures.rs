//! Parse every `tests/fixtures/*.path` file, re-serialize it and compare with
//! the neighbouring `.expected` file.
//!
//! Expected files hold the path string on the first line and the traced
//! `viewBox` on the second, or a single `error: ...` line.

use camino::Utf8PathBuf;
use datatest_stable::Utf8Path;
use turtlepath::PathAccumulator;

fn render_fixture(source: &str) -> String {
    match PathAccumulator::from_path_data(source) {
        Ok(path) => format!(
            "{}\nviewBox: {}\n",
            path.build_path_string(),
            path.bounds().view_box()
        ),
        Err(e) => format!("error: {e}\n"),
    }
}

/// Format a colored inline diff using dissimilar
fn format_inline_diff(expected: &str, actual: &str) -> String {
    use dissimilar::Chunk;

    let mut output = String::from("\n=== Inline Diff (expected vs actual) ===\n");
    for chunk in dissimilar::diff(expected, actual) {
        match chunk {
            Chunk::Equal(s) => output.push_str(s),
            Chunk::Delete(s) => {
                output.push_str("\x1b[31m[-");
                output.push_str(s);
                output.push_str("-]\x1b[0m");
            }
            Chunk::Insert(s) => {
                output.push_str("\x1b[32m[+");
                output.push_str(s);
                output.push_str("+]\x1b[0m");
            }
        }
    }
    output
}

fn test_path_data_file(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let expected_path: Utf8PathBuf = path.with_extension("expected");
    let expected = std::fs::read_to_string(&expected_path)
        .map_err(|e| format!("missing {expected_path}: {e}"))?;

    let actual = render_fixture(&source);
    if actual.trim_end() != expected.trim_end() {
        return Err(format!(
            "output mismatch for {path}:{}",
            format_inline_diff(expected.trim_end(), actual.trim_end())
        )
        .into());
    }
    Ok(())
}

datatest_stable::harness! {
    {
        test = test_path_data_file,
        root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"),
        pattern = r"\.path$"
    },
}
