pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RefreshTokenRequest};
pub use responses::{LoginResponse, RefreshTokenResponse};
