use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Server-assigned user identifier.
///
/// REST backends disagree on whether ids are numbers or strings, so both are
/// accepted and the id is carried as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id.to_string())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}

impl Serialize for UserId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        text_or_number(deserializer).map(UserId)
    }
}

/// Accepts `"30"` as well as `30`
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(n) => n.to_string(),
        TextOrNumber::Float(n) => n.to_string(),
    })
}

/// Gender options offered by the form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn parse(s: &str) -> Option<Gender> {
        match s {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// `None` travels as `""`, unknown values decode as unset.
mod gender_field {
    use super::Gender;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(gender: &Option<Gender>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(gender.map(|g| g.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Gender>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Gender::parse))
    }
}

/// A user record as returned by the remote store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(rename = "url", default)]
    pub avatar_url: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub age: String,
    #[serde(default, with = "gender_field")]
    pub gender: Option<Gender>,
}

impl User {
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        User {
            id,
            name: draft.name,
            surname: draft.surname,
            avatar_url: draft.avatar_url,
            age: draft.age,
            gender: draft.gender,
        }
    }

    /// Copy the descriptive fields into an editable draft
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            surname: self.surname.clone(),
            avatar_url: self.avatar_url.clone(),
            age: self.age.clone(),
            gender: self.gender,
        }
    }
}

/// An in-progress user record, not yet submitted
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub surname: String,
    #[serde(rename = "url")]
    pub avatar_url: String,
    pub age: String,
    #[serde(with = "gender_field")]
    pub gender: Option<Gender>,
}

impl UserDraft {
    /// True when every field carries a value
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.surname.is_empty()
            && !self.avatar_url.is_empty()
            && !self.age.is_empty()
            && self.gender.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> UserDraft {
        UserDraft {
            name: "Ann".into(),
            surname: "Lee".into(),
            avatar_url: "x.png".into(),
            age: "30".into(),
            gender: Some(Gender::Female),
        }
    }

    #[test]
    fn test_decode_numeric_id_and_age() {
        let json = r#"{"id":1,"name":"Ann","surname":"Lee","url":"x.png","age":30,"gender":"Female"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::from(1));
        assert_eq!(user.age, "30");
        assert_eq!(user.gender, Some(Gender::Female));
        assert_eq!(user.avatar_url, "x.png");
    }

    #[test]
    fn test_decode_string_id_and_unset_gender() {
        let json = r#"{"id":"7","name":"Bo","surname":"Ek","url":"","age":"","gender":""}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_str(), "7");
        assert_eq!(user.gender, None);
    }

    #[test]
    fn test_unknown_gender_decodes_as_unset() {
        let json = r#"{"id":"1","gender":"Other"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.gender, None);
        assert!(user.name.is_empty());
    }

    #[test]
    fn test_draft_wire_format() {
        let value = serde_json::to_value(ann()).unwrap();
        assert_eq!(value["url"], "x.png");
        assert_eq!(value["gender"], "Female");
        assert_eq!(value["age"], "30");

        let unset = serde_json::to_value(UserDraft::default()).unwrap();
        assert_eq!(unset["gender"], "");
    }

    #[test]
    fn test_draft_completeness() {
        assert!(ann().is_complete());
        assert!(!UserDraft::default().is_complete());

        let mut missing_gender = ann();
        missing_gender.gender = None;
        assert!(!missing_gender.is_complete());

        let mut missing_url = ann();
        missing_url.avatar_url.clear();
        assert!(!missing_url.is_complete());
    }

    #[test]
    fn test_draft_round_trips_through_record() {
        let user = User::from_draft(UserId::from("3"), ann());
        assert_eq!(user.to_draft(), ann());
    }
}
