use serde::Serialize;

/// What a visitor typed into the consultation form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ContactRequest {
    pub fn new(name: &str, phone: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: optional(email),
            message: optional(message),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Acknowledged,
}

/// Hands a request to the submission endpoint.
///
/// No endpoint exists yet, so every request is acknowledged locally and nothing leaves
/// the browser.
pub fn submit(request: &ContactRequest) -> Submission {
    log::debug!("contact request from {} acknowledged locally", request.name);
    Submission::Acknowledged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_empty_optionals() {
        let request = ContactRequest::new("  Aisha ", "+971 50 000 0000", "   ", "");
        assert_eq!(request.name, "Aisha");
        assert_eq!(request.email, None);
        assert_eq!(request.message, None);
    }

    #[test]
    fn serializes_only_provided_fields() {
        let request = ContactRequest::new("Omar", "050", "omar@example.com", "");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "omar@example.com");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn every_submission_is_acknowledged() {
        assert_eq!(submit(&ContactRequest::default()), Submission::Acknowledged);
        assert_eq!(submit(&ContactRequest::new("a", "b", "c", "d")), Submission::Acknowledged);
    }
}
