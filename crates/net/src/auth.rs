use axum::extract::State;
use axum::Json;
use serde::Serialize;
use gram_service::profile::{CurrentUserStore, UserMe};

// Response struct for the logout endpoint
#[derive(Serialize)]
pub struct LogoutResponse {
    ok: bool,
}

// 현재 로그인 중인 사용자 반환. 프론트의 Header가 username 표시에 사용
pub async fn get_me<T: CurrentUserStore>(
    State(store): State<T>,
) -> Json<UserMe> {
    Json(store.current_user())
}

// 로그아웃. 무효화할 세션이 없으므로 상태 변경 없음
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse { ok: true })
}
