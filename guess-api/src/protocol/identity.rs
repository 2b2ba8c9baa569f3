use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GetUserRequest<'a> {
    pub access_token: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "UserAttributes", default)]
    pub attributes: Vec<Attribute>,
}
impl User {
    /// First attribute called `name`, if any.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let body = serde_json::to_string(&GetUserRequest {
            access_token: "abc",
        })
        .unwrap();
        assert_eq!(body, r#"{"AccessToken":"abc"}"#);
    }

    #[test]
    fn test_attribute_first_match_wins() {
        let user: User = serde_json::from_str(
            r#"{"Username":"u","UserAttributes":[
                {"Name":"sub","Value":"1234"},
                {"Name":"given_name","Value":"Ethan"},
                {"Name":"given_name","Value":"Nathan"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(user.attribute("given_name"), Some("Ethan"));
        assert_eq!(user.attribute("family_name"), None);
    }
}
