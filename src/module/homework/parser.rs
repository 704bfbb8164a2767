///! Poll response validation and status parsing
///!
///! `check_response` asserts the shape of the decoded body and
///! `parse_status` turns the newest homework record into the message
///! delivered to the chat.

use serde_json::Value;

use crate::error::BotError;

use super::types::{HomeworkRecord, HomeworkStatus, PollResponse};

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validate the decoded poll body into a [`PollResponse`].
///
/// Checks run in a fixed order: top-level must be an object, `current_date`
/// must be present (and an integer), `homeworks` must be present and an
/// array. The array may be empty.
pub fn check_response(body: &Value) -> Result<PollResponse, BotError> {
    let map = body.as_object().ok_or(BotError::WrongType {
        expected: "object",
        found: json_type(body),
    })?;

    let current_date = map
        .get("current_date")
        .ok_or(BotError::MissingKey("current_date"))?;
    let current_date = current_date.as_i64().ok_or(BotError::WrongType {
        expected: "integer",
        found: json_type(current_date),
    })?;

    let homeworks = map.get("homeworks").ok_or(BotError::MissingKey("homeworks"))?;
    let list = homeworks.as_array().ok_or(BotError::WrongType {
        expected: "array",
        found: json_type(homeworks),
    })?;

    // Record-level problems are left for `parse_status`; an entry that is
    // not even an object degrades to an all-empty record.
    let homeworks = list
        .iter()
        .map(|entry| serde_json::from_value(entry.clone()).unwrap_or_default())
        .collect();

    Ok(PollResponse {
        current_date,
        homeworks,
    })
}

/// Build the status-change message for one homework record.
pub fn parse_status(record: &HomeworkRecord) -> Result<String, BotError> {
    let name = record
        .homework_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(BotError::MissingKey("homework_name"))?;

    let status = record
        .status
        .as_deref()
        .filter(|status| !status.is_empty())
        .ok_or(BotError::MissingKey("status"))?;

    let verdict = HomeworkStatus::from_api(status)
        .ok_or_else(|| BotError::UnknownStatus(status.to_owned()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        verdict.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, status: &str) -> HomeworkRecord {
        HomeworkRecord {
            homework_name: (!name.is_empty()).then(|| name.to_string()),
            status: (!status.is_empty()).then(|| status.to_string()),
        }
    }

    #[test]
    fn check_response_accepts_empty_homework_list() {
        let response = check_response(&json!({"homeworks": [], "current_date": 1})).unwrap();
        assert_eq!(response.current_date, 1);
        assert!(response.homeworks.is_empty());
    }

    #[test]
    fn check_response_extracts_records_in_order() {
        let body = json!({
            "current_date": 1_700_000_000,
            "homeworks": [
                {"homework_name": "hw2", "status": "reviewing", "lesson_name": "x"},
                {"homework_name": "hw1", "status": "approved"}
            ]
        });
        let response = check_response(&body).unwrap();
        assert_eq!(response.homeworks.len(), 2);
        assert_eq!(response.homeworks[0].homework_name.as_deref(), Some("hw2"));
        assert_eq!(response.homeworks[1].status.as_deref(), Some("approved"));
    }

    #[test]
    fn check_response_rejects_non_object_top_level() {
        let err = check_response(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, BotError::WrongType { expected: "object", .. }));
    }

    #[test]
    fn check_response_requires_current_date() {
        let err = check_response(&json!({"homeworks": []})).unwrap_err();
        assert!(matches!(err, BotError::MissingKey("current_date")));
    }

    #[test]
    fn check_response_requires_homeworks() {
        let err = check_response(&json!({"current_date": 1})).unwrap_err();
        assert!(matches!(err, BotError::MissingKey("homeworks")));
    }

    #[test]
    fn check_response_rejects_non_array_homeworks() {
        let err = check_response(&json!({"current_date": 1, "homeworks": "none"})).unwrap_err();
        assert!(matches!(err, BotError::WrongType { expected: "array", .. }));
    }

    #[test]
    fn parse_status_embeds_name_and_verdict() {
        let message = parse_status(&record("hw1", "approved")).unwrap();
        assert!(message.contains("hw1"));
        assert!(message.contains(HomeworkStatus::Approved.verdict()));
    }

    #[test]
    fn parse_status_covers_all_verdicts() {
        for (status, verdict) in [
            ("approved", HomeworkStatus::Approved),
            ("reviewing", HomeworkStatus::Reviewing),
            ("rejected", HomeworkStatus::Rejected),
        ] {
            let message = parse_status(&record("hw1", status)).unwrap();
            assert!(message.contains(verdict.verdict()), "status {status}");
        }
    }

    #[test]
    fn parse_status_rejects_missing_or_empty_name() {
        let err = parse_status(&record("", "approved")).unwrap_err();
        assert!(matches!(err, BotError::MissingKey("homework_name")));
    }

    #[test]
    fn parse_status_rejects_missing_or_empty_status() {
        let err = parse_status(&record("hw1", "")).unwrap_err();
        assert!(matches!(err, BotError::MissingKey("status")));
    }

    #[test]
    fn parse_status_rejects_unknown_status() {
        let err = parse_status(&record("hw1", "bogus")).unwrap_err();
        match err {
            BotError::UnknownStatus(status) => assert_eq!(status, "bogus"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }
}
