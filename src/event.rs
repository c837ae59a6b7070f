use serde::{Deserialize, Serialize};

/// The `detail` part of the EventBridge envelope for a CloudTrail
/// `CreateUser` record. Only the fields the notifier reads are declared,
/// everything else in the record is ignored by serde.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountCreationDetail {
    /// E.g. `iam.amazonaws.com`
    pub event_source: Option<String>,
    /// E.g. `CreateUser`
    pub event_name: Option<String>,
    pub request_parameters: Option<RequestParameters>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestParameters {
    /// The name of the account that was created upstream
    pub user_name: Option<String>,
}

impl AccountCreationDetail {
    /// Returns the new account's name if it is present in the event and is not empty.
    /// Events without a usable name are expected and should be ignored by the caller.
    pub fn account_name(&self) -> Option<&str> {
        match &self.request_parameters {
            Some(params) => match &params.user_name {
                Some(name) if !name.trim().is_empty() => Some(name.trim()),
                _ => None,
            },
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // the detail part of a real CloudTrail CreateUser record, trimmed down
    const CREATE_USER_DETAIL: &str = r#"{
        "eventVersion": "1.08",
        "eventSource": "iam.amazonaws.com",
        "eventName": "CreateUser",
        "awsRegion": "us-east-1",
        "requestParameters": {
            "userName": "jane"
        },
        "responseElements": {
            "user": {
                "userName": "jane",
                "arn": "arn:aws:iam::512295225992:user/jane"
            }
        }
    }"#;

    #[test]
    fn parses_create_user_detail() {
        let detail: AccountCreationDetail = serde_json::from_str(CREATE_USER_DETAIL).unwrap();

        assert_eq!(detail.event_source.as_deref(), Some("iam.amazonaws.com"));
        assert_eq!(detail.event_name.as_deref(), Some("CreateUser"));
        assert_eq!(detail.account_name(), Some("jane"));
    }

    #[test]
    fn missing_request_parameters_yields_no_name() {
        let detail: AccountCreationDetail = serde_json::from_str(r#"{"eventName": "CreateUser"}"#).unwrap();
        assert_eq!(detail.account_name(), None);
    }

    #[test]
    fn empty_user_name_yields_no_name() {
        let detail: AccountCreationDetail =
            serde_json::from_str(r#"{"requestParameters": {"userName": "  "}}"#).unwrap();
        assert_eq!(detail.account_name(), None);
    }
}
