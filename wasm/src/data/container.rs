use serde_json::Value;

/// Where a song document keeps its submission array.
///
/// Named fields are tried in [`SubmissionContainer::PRECEDENCE`] order; a field
/// only counts when it holds an array. A document that is itself an array is
/// the last resort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionContainer {
    Submissions,
    Records,
    Entries,
    Payload,
}

impl SubmissionContainer {
    pub const PRECEDENCE: [SubmissionContainer; 3] = [
        SubmissionContainer::Submissions,
        SubmissionContainer::Records,
        SubmissionContainer::Entries,
    ];

    pub fn field_name(self) -> Option<&'static str> {
        match self {
            SubmissionContainer::Submissions => Some("submissions"),
            SubmissionContainer::Records => Some("records"),
            SubmissionContainer::Entries => Some("entries"),
            SubmissionContainer::Payload => None,
        }
    }

    /// Find the container and its raw records, if any
    pub fn locate(document: &Value) -> Option<(SubmissionContainer, &[Value])> {
        if let Value::Object(fields) = document {
            return Self::PRECEDENCE.iter().find_map(|container| {
                let name = container.field_name()?;
                match fields.get(name) {
                    Some(Value::Array(items)) => Some((*container, items.as_slice())),
                    _ => None,
                }
            });
        }

        match document {
            Value::Array(items) => Some((SubmissionContainer::Payload, items.as_slice())),
            _ => None,
        }
    }
}

/// Raw submission records of a song document; empty when none are found
pub fn file_records(document: &Value) -> &[Value] {
    SubmissionContainer::locate(document)
        .map(|(_, records)| records)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submissions_take_precedence() {
        let doc = json!({
            "entries": [{ "user": "e" }],
            "records": [{ "user": "r" }],
            "submissions": [{ "user": "s" }]
        });
        let (container, records) = SubmissionContainer::locate(&doc).unwrap();
        assert_eq!(container, SubmissionContainer::Submissions);
        assert_eq!(records[0]["user"], "s");
    }

    #[test]
    fn non_array_field_is_skipped() {
        let doc = json!({ "submissions": { "user": "s" }, "entries": [{ "user": "e" }] });
        let (container, _) = SubmissionContainer::locate(&doc).unwrap();
        assert_eq!(container, SubmissionContainer::Entries);
    }

    #[test]
    fn bare_array_payload_is_accepted() {
        let doc = json!([{ "user": "a" }, { "user": "b" }]);
        let (container, records) = SubmissionContainer::locate(&doc).unwrap();
        assert_eq!(container, SubmissionContainer::Payload);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn object_without_container_is_empty() {
        assert!(file_records(&json!({ "difficulty": "Hard" })).is_empty());
        assert!(file_records(&json!("nope")).is_empty());
        assert!(file_records(&json!(null)).is_empty());
    }
}
