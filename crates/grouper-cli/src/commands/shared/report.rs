use grouper_engine::ValidationReport;

/// Validator warnings as display strings for command output.
pub fn warnings(report: &ValidationReport) -> Vec<String> {
    report.warnings.iter().map(ToString::to_string).collect()
}

/// Validator errors as display strings for command output.
pub fn errors(report: &ValidationReport) -> Vec<String> {
    report.errors.iter().map(ToString::to_string).collect()
}
