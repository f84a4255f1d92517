//! refresh token 黑名单存储操作

use super::{SeaOrmStorage, is_unique_violation};
use crate::entity::token_blacklist::{ActiveModel, Column, Entity as TokenBlacklist};
use crate::errors::{CampusError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 加入黑名单，重复注销视为成功
    pub async fn blacklist_token_impl(&self, jti: &str, user_id: i64, expires_at: i64) -> Result<()> {
        let model = ActiveModel {
            jti: Set(jti.to_string()),
            user_id: Set(user_id),
            expires_at: Set(expires_at),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Ok(()),
            Err(e) => Err(CampusError::database_operation(format!(
                "写入 token 黑名单失败: {e}"
            ))),
        }
    }

    pub async fn is_token_blacklisted_impl(&self, jti: &str) -> Result<bool> {
        let count = TokenBlacklist::find()
            .filter(Column::Jti.eq(jti))
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询 token 黑名单失败: {e}")))?;

        Ok(count > 0)
    }

    /// 删除已过期的记录，过期 token 本身已无法通过校验
    pub async fn purge_expired_tokens_impl(&self) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();

        let result = TokenBlacklist::delete_many()
            .filter(Column::ExpiresAt.lt(now))
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("清理 token 黑名单失败: {e}")))?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support;

    #[tokio::test]
    async fn test_blacklist_is_idempotent() {
        let storage = test_support::storage().await;
        let user = test_support::user(&storage, "alice").await;
        let exp = chrono::Utc::now().timestamp() + 3600;

        assert!(!storage.is_token_blacklisted_impl("jti-1").await.unwrap());
        storage.blacklist_token_impl("jti-1", user.id, exp).await.unwrap();
        storage.blacklist_token_impl("jti-1", user.id, exp).await.unwrap();
        assert!(storage.is_token_blacklisted_impl("jti-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_purge_only_removes_expired() {
        let storage = test_support::storage().await;
        let user = test_support::user(&storage, "alice").await;
        let now = chrono::Utc::now().timestamp();

        storage.blacklist_token_impl("old", user.id, now - 10).await.unwrap();
        storage.blacklist_token_impl("live", user.id, now + 3600).await.unwrap();

        assert_eq!(storage.purge_expired_tokens_impl().await.unwrap(), 1);
        assert!(!storage.is_token_blacklisted_impl("old").await.unwrap());
        assert!(storage.is_token_blacklisted_impl("live").await.unwrap());
    }
}
