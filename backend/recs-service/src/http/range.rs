//! Resource-range pagination protocol.
//!
//! Requests carry a `Range: resources=<begin>-<end>` header (inclusive
//! bounds, single range); responses mirror the served slice in a
//! `Content-Range` header. The unit token `resources` distinguishes
//! item-count pagination from byte ranges.

use actix_web::http::header;
use actix_web::HttpRequest;

use crate::error::AppError;
use crate::models::Scope;

/// Pagination unit carried in range and content-range headers.
pub const RANGE_UNIT: &str = "resources";

/// Scope for the request, from its `Range` header. No header means
/// everything from offset 0.
pub fn scope_from_request(req: &HttpRequest) -> Result<Scope, AppError> {
    match req.headers().get(header::RANGE) {
        None => Ok(Scope::ALL),
        Some(value) => {
            let raw = value.to_str().map_err(|_| {
                AppError::MalformedRange("range header is not valid ASCII".to_string())
            })?;
            parse_range(raw)
        }
    }
}

/// Parse a range header value into a scope.
///
/// Rejected as malformed: a unit other than `resources`, more than one
/// range, suffix ranges (`resources=-5`, there is no begin to anchor ranks
/// to), inverted bounds, and anything unparsable.
pub fn parse_range(raw: &str) -> Result<Scope, AppError> {
    let malformed = || AppError::MalformedRange(raw.to_string());

    let (unit, window) = raw.trim().split_once('=').ok_or_else(malformed)?;
    if unit.trim() != RANGE_UNIT {
        return Err(malformed());
    }

    let window = window.trim();
    if window.contains(',') {
        // Only a single contiguous range is meaningful here.
        return Err(malformed());
    }

    let (begin, end) = window.split_once('-').ok_or_else(malformed)?;
    if begin.is_empty() {
        return Err(malformed());
    }
    let offset: usize = begin.parse().map_err(|_| malformed())?;

    let count = if end.is_empty() {
        None
    } else {
        let last: usize = end.parse().map_err(|_| malformed())?;
        if last < offset {
            return Err(malformed());
        }
        Some(last - offset + 1)
    };

    Ok(Scope::new(offset, count))
}

/// Render the content-range header for a served slice.
///
/// An empty result yields the explicit empty-range marker `resources */0`.
/// Otherwise the total is `begin + result_len`, derived from the served
/// slice rather than a store-side count: it under-reports whenever more
/// data exists beyond the page. Preserved for API compatibility.
pub fn content_range(scope: Scope, result_len: usize) -> String {
    if result_len == 0 {
        return format!("{} */0", RANGE_UNIT);
    }

    let begin = scope.offset;
    format!(
        "{} {}-{}/{}",
        RANGE_UNIT,
        begin,
        begin + result_len - 1,
        begin + result_len
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounded_range() {
        assert_eq!(parse_range("resources=0-4").unwrap(), Scope::new(0, Some(5)));
        assert_eq!(
            parse_range("resources=20-24").unwrap(),
            Scope::new(20, Some(5))
        );
        assert_eq!(parse_range("resources=7-7").unwrap(), Scope::new(7, Some(1)));
    }

    #[test]
    fn test_parse_open_ended_range() {
        assert_eq!(parse_range("resources=10-").unwrap(), Scope::new(10, None));
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(
            parse_range(" resources=0-4 ").unwrap(),
            Scope::new(0, Some(5))
        );
    }

    #[test]
    fn test_parse_rejects_foreign_unit() {
        assert!(matches!(
            parse_range("bytes=0-4"),
            Err(AppError::MalformedRange(_))
        ));
    }

    #[test]
    fn test_parse_rejects_multiple_ranges() {
        assert!(matches!(
            parse_range("resources=0-4,10-14"),
            Err(AppError::MalformedRange(_))
        ));
    }

    #[test]
    fn test_parse_rejects_suffix_range() {
        assert!(matches!(
            parse_range("resources=-5"),
            Err(AppError::MalformedRange(_))
        ));
    }

    #[test]
    fn test_parse_rejects_inverted_bounds() {
        assert!(matches!(
            parse_range("resources=5-2"),
            Err(AppError::MalformedRange(_))
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for raw in ["resources", "resources=", "resources=a-b", "resources=1-2-3"] {
            assert!(
                matches!(parse_range(raw), Err(AppError::MalformedRange(_))),
                "expected {:?} to be malformed",
                raw
            );
        }
    }

    #[test]
    fn test_content_range_mirrors_served_slice() {
        assert_eq!(content_range(Scope::new(0, Some(5)), 5), "resources 0-4/5");
        assert_eq!(content_range(Scope::new(10, None), 3), "resources 10-12/13");
    }

    #[test]
    fn test_content_range_empty_marker() {
        // Never `begin..begin` for an empty page.
        assert_eq!(content_range(Scope::new(20, Some(5)), 0), "resources */0");
        assert_eq!(content_range(Scope::ALL, 0), "resources */0");
    }

    #[test]
    fn test_round_trip_recovers_begin_and_served_count() {
        for (scope, len) in [
            (Scope::new(0, Some(5)), 5),
            (Scope::new(0, Some(16)), 9),
            (Scope::new(4, None), 12),
        ] {
            let rendered = content_range(scope, len);
            let range_part = rendered.split('/').next().unwrap();
            let reparsed = parse_range(&range_part.replacen(' ', "=", 1)).unwrap();
            assert_eq!(reparsed.offset, scope.offset);
            assert_eq!(reparsed.count, Some(len));
        }
    }
}
