//! Reserved JSON-RPC 2.0 error codes and their canonical messages
//!
//! The codes from and including -32768 to -32000 are reserved for
//! pre-defined errors. The table below is a `const` slice, so it lives for the
//! whole program and needs no initialization or locking.
//!
//! | code             | message          |
//! |------------------|------------------|
//! | -32700           | Parse error      |
//! | -32600           | Invalid Request  |
//! | -32601           | Method not found |
//! | -32602           | Invalid params   |
//! | -32603           | Internal error   |
//! | -32000 to -32099 | Server error     |

/// Invalid JSON was received
pub const PARSE_ERROR: i64 = -32700;
/// The JSON sent is not a valid Request object
pub const INVALID_REQUEST: i64 = -32600;
/// The method does not exist / is not available
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Invalid method parameter(s)
pub const INVALID_PARAMS: i64 = -32602;
/// Internal JSON-RPC error
pub const INTERNAL_ERROR: i64 = -32603;
/// Upper bound of the implementation-defined server error range
pub const SERVER_ERROR: i64 = -32000;
/// Lower bound of the implementation-defined server error range
pub const SERVER_ERROR_MIN: i64 = -32099;

/// Lower bound of the whole protocol-reserved range
pub const RESERVED_MIN: i64 = -32768;
/// Upper bound of the whole protocol-reserved range
pub const RESERVED_MAX: i64 = -32000;

const CANONICAL_MESSAGES: &[(i64, &str)] = &[
    (PARSE_ERROR, "Parse error"),
    (INVALID_REQUEST, "Invalid Request"),
    (METHOD_NOT_FOUND, "Method not found"),
    (INVALID_PARAMS, "Invalid params"),
    (INTERNAL_ERROR, "Internal error"),
];

/// Look up the canonical message for a reserved code
///
/// Returns `None` for codes without a predefined meaning, including reserved
/// codes that the JSON-RPC 2.0 specification keeps for future use.
///
/// # Examples
///
/// ```rust
/// use jrpc_core::codes;
///
/// assert_eq!(codes::canonical_message(-32601), Some("Method not found"));
/// assert_eq!(codes::canonical_message(-32042), Some("Server error"));
/// assert_eq!(codes::canonical_message(101), None);
/// ```
pub fn canonical_message(code: i64) -> Option<&'static str> {
    if is_server_error(code) {
        return Some("Server error");
    }

    CANONICAL_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
}

/// Whether `code` falls in the -32099..=-32000 server error range
pub fn is_server_error(code: i64) -> bool {
    (SERVER_ERROR_MIN..=SERVER_ERROR).contains(&code)
}

/// Whether `code` falls in the protocol-reserved -32768..=-32000 range
pub fn is_reserved(code: i64) -> bool {
    (RESERVED_MIN..=RESERVED_MAX).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_messages() {
        assert_eq!(canonical_message(PARSE_ERROR), Some("Parse error"));
        assert_eq!(canonical_message(INVALID_REQUEST), Some("Invalid Request"));
        assert_eq!(canonical_message(METHOD_NOT_FOUND), Some("Method not found"));
        assert_eq!(canonical_message(INVALID_PARAMS), Some("Invalid params"));
        assert_eq!(canonical_message(INTERNAL_ERROR), Some("Internal error"));
    }

    #[test]
    fn test_server_error_range() {
        assert_eq!(canonical_message(-32000), Some("Server error"));
        assert_eq!(canonical_message(-32099), Some("Server error"));
        assert_eq!(canonical_message(-32100), None);
        assert!(is_server_error(-32050));
        assert!(!is_server_error(-31999));
    }

    #[test]
    fn test_reserved_but_undefined() {
        // Reserved for future use, no canonical text
        assert!(is_reserved(-32768));
        assert_eq!(canonical_message(-32768), None);
        assert!(!is_reserved(0));
    }
}
