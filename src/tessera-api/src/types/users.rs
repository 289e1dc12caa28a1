use serde::{Deserialize, Serialize};

/// Social platform an imported identity originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Reddit,
}

/// Imported social-platform identity attached to a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct People {
    /// Unique people record identifier
    pub id: String,
    /// Display name on the originating platform
    pub name: String,
    /// Handle on the originating platform
    pub username: String,
    /// Originating platform
    pub platform: SocialPlatform,
    /// Avatar URL, when the platform exposes one
    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: Option<String>,
}

/// Platform account identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Unique handle
    pub username: String,
    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: Option<String>,
    #[serde(rename = "bannerImageURL")]
    pub banner_image_url: Option<String>,
    pub bio: Option<String>,
    /// ISO 8601 creation timestamp
    pub created_at: Option<String>,
    /// ISO 8601 last-updated timestamp
    pub updated_at: Option<String>,
    /// Wallet association, present when the `wallets` relation is expanded
    pub wallets: Option<Vec<super::wallets::Wallet>>,
    /// Imported identities, present when the `people` relation is expanded
    pub people: Option<Vec<People>>,
    /// Set when the caller has blocked this user or vice versa
    pub blocked: Option<bool>,
    /// ISO 8601 deletion timestamp for soft-deleted accounts
    pub deleted_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_platform_lowercase_on_wire() {
        let json = serde_json::to_string(&SocialPlatform::Twitter).unwrap();
        assert_eq!(json, "\"twitter\"");
        let platform: SocialPlatform = serde_json::from_str("\"reddit\"").unwrap();
        assert_eq!(platform, SocialPlatform::Reddit);
    }

    #[test]
    fn test_user_minimal_payload() {
        let json = r#"{"id": "u-1", "name": "Alice", "username": "alice"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u-1");
        assert!(user.wallets.is_none());
        assert!(user.people.is_none());
        assert!(user.blocked.is_none());
    }

    #[test]
    fn test_user_with_expanded_relations() {
        let json = r#"{
            "id": "u-1",
            "name": "Alice",
            "username": "alice",
            "profilePictureURL": "https://cdn.example/alice.png",
            "wallets": [{"id": "0xabc", "networkId": "ethereum", "primary": true}],
            "people": [{
                "id": "p-1",
                "name": "Alice T",
                "username": "alice_t",
                "platform": "twitter",
                "profilePictureURL": null
            }]
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        let wallets = user.wallets.unwrap();
        assert_eq!(wallets.len(), 1);
        assert!(wallets[0].primary);
        let people = user.people.unwrap();
        assert_eq!(people[0].platform, SocialPlatform::Twitter);
    }
}
