//! HTTP status classification.

/// Map an HTTP status code to a stable classification label.
///
/// Labels are part of the error surface: they appear in
/// [`crate::Error::HttpStatus`] display output and structured logs, and
/// give callers something cheaper to branch on than raw status codes.
pub fn class_for_status(status: u16) -> &'static str {
    match status {
        400 => "invalid_request",
        401 => "authentication",
        403 => "permission_denied",
        404 => "not_found",
        408 | 504 => "timeout",
        409 => "conflict",
        413 => "request_too_large",
        429 => "rate_limited",
        500 => "server_error",
        502 | 503 => "overloaded",
        s if (400..500).contains(&s) => "invalid_request",
        s if (500..600).contains(&s) => "server_error",
        _ => "other",
    }
}

/// Whether a status is worth retrying.
///
/// The dispatcher itself never retries; any retry policy lives with the
/// caller, and this helper keeps that decision consistent across callers.
pub fn is_transient(status: u16) -> bool {
    matches!(
        class_for_status(status),
        "rate_limited" | "overloaded" | "server_error" | "timeout" | "conflict"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_classes() {
        let cases = [
            (400, "invalid_request"),
            (401, "authentication"),
            (403, "permission_denied"),
            (404, "not_found"),
            (408, "timeout"),
            (409, "conflict"),
            (413, "request_too_large"),
            (429, "rate_limited"),
            (500, "server_error"),
            (502, "overloaded"),
            (503, "overloaded"),
            (504, "timeout"),
        ];
        for (status, expected) in cases {
            assert_eq!(
                class_for_status(status),
                expected,
                "status {} should classify as {}",
                status,
                expected
            );
        }
    }

    #[test]
    fn test_unlisted_statuses_fall_back_by_range() {
        assert_eq!(class_for_status(418), "invalid_request");
        assert_eq!(class_for_status(507), "server_error");
        assert_eq!(class_for_status(302), "other");
    }

    #[test]
    fn test_transient_statuses() {
        for status in [408, 409, 429, 500, 502, 503, 504] {
            assert!(is_transient(status), "status {} should be transient", status);
        }
        for status in [400, 401, 403, 404, 413] {
            assert!(!is_transient(status), "status {} should not be transient", status);
        }
    }
}
