use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read a bulk input file; `-` reads stdin.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::NamedTempFile;

    use super::read_input;

    #[test]
    fn reads_file_contents() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "p1,Ada,Lovelace\n").unwrap();
        assert_eq!(read_input(file.path()).unwrap(), "p1,Ada,Lovelace\n");
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = read_input(Path::new("/nonexistent/people.csv")).unwrap_err();
        assert!(error.to_string().contains("people.csv"));
    }
}
