use serde::Deserialize;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 邮箱
    pub email: String,
    /// 密码
    pub password: String,
}

// 刷新 / 注销请求，携带 refresh token
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh: Option<String>,
}
