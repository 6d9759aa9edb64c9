//! Free-text search over the admin result list.

use crate::{model::search::ResultFilter, server::model::admin::AdminResult};

/// Keeps the results matching `search` under `filter`, preserving order.
///
/// The trimmed, lowercased term must appear in the roll number, student name, subject
/// code or name, or the student's branch code. A named filter additionally requires the
/// term in that dimension. An empty term matches everything.
pub fn filter_results(
    results: Vec<AdminResult>,
    search: &str,
    filter: ResultFilter,
) -> Vec<AdminResult> {
    let term = search.trim().to_lowercase();

    results
        .into_iter()
        .filter(|result| matches_term(result, &term) && matches_filter(result, &term, filter))
        .collect()
}

fn contains(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

fn branch_code(result: &AdminResult) -> &str {
    result
        .student
        .as_ref()
        .map(|s| s.student.branch_code.as_str())
        .unwrap_or("")
}

fn subject_code(result: &AdminResult) -> &str {
    result
        .offering
        .as_ref()
        .and_then(|o| o.subject.as_ref())
        .map(|s| s.subject_code.as_str())
        .unwrap_or("")
}

fn matches_term(result: &AdminResult, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let student = result.student.as_ref().map(|s| &s.student);
    let subject_name = result
        .offering
        .as_ref()
        .and_then(|o| o.subject.as_ref())
        .map(|s| s.subject_name.as_str())
        .unwrap_or("");

    contains(&result.result.roll_no, term)
        || student.is_some_and(|s| contains(&s.first_name, term) || contains(&s.last_name, term))
        || contains(subject_code(result), term)
        || contains(subject_name, term)
        || contains(branch_code(result), term)
}

fn matches_filter(result: &AdminResult, term: &str, filter: ResultFilter) -> bool {
    match filter {
        ResultFilter::All => true,
        ResultFilter::Branch => contains(branch_code(result), term),
        ResultFilter::Subject => contains(subject_code(result), term),
        ResultFilter::Status => contains(&result.result.status, term),
    }
}
