//! Wire types for the contact submission endpoint.
//!
//! The request body is `crate::state::contact::ContactFormData` serialized as
//! `{ "name", "email", "message" }`. Responses are classified into a
//! `ContactReply`; only the optional `error` string of a rejection is read.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Well-formed response from the contact endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactReply {
    /// The endpoint accepted the message. The body is ignored.
    Accepted,
    /// The endpoint rejected the message, optionally explaining why.
    Rejected { error: Option<String> },
}

impl ContactReply {
    /// Build a rejection from a parsed body. A missing, non-string, or empty
    /// `error` field yields `None`.
    #[must_use]
    pub fn rejected_from(body: &serde_json::Value) -> Self {
        let error = body
            .get("error")
            .and_then(serde_json::Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
        Self::Rejected { error }
    }
}
