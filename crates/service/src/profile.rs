use serde::{Deserialize, Serialize};


#[derive(Clone, Serialize, Deserialize)]
pub struct UserMe {
    pub id: String,                  // 사용자 고유 ID
    pub username: String,
    pub avatar_url: Option<String>,  // 프로필 이미지 URL (없으면 null)
}

pub trait CurrentUserStore: Clone + Send + Sync + 'static {

    fn current_user(&self) -> UserMe;
}

// The one record the whole process serves. Built once at startup,
// handed to the router as state, never written to afterwards.
#[derive(Clone)]
pub struct MockUserStore {
    me: UserMe,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self {
            me: UserMe {
                id: "user-1".to_string(),
                username: "槇野ジェリエル".to_string(),
                avatar_url: None,
            },
        }
    }
}

impl CurrentUserStore for MockUserStore {
    fn current_user(&self) -> UserMe {
        self.me.clone()
    }
}
