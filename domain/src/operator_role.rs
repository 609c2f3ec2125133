use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_shared::discord::{GuildId, RoleId};
use thiserror::Error;
use tracing::instrument;

/// The role a guild has designated as grantable and revocable through `/deop` and `/reop`.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorRole {
    pub guild_id: GuildId,
    pub role_id: RoleId,
    pub assigned_at: DateTime<Utc>,
}

#[instrument(level = "info")]
pub fn assign_operator_role(guild_id: GuildId, role_id: RoleId) -> OperatorRole {
    OperatorRole {
        guild_id,
        role_id,
        assigned_at: Utc::now(),
    }
}

/// At most one operator role is stored per guild. Saving overwrites.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait OperatorRoleRepository {
    async fn save(&self, operator_role: &OperatorRole) -> Result<(), OperatorRoleRepositoryError>;
    async fn find_by_guild_id(
        &self,
        guild_id: &GuildId,
    ) -> Result<Option<OperatorRole>, OperatorRoleRepositoryError>;
}

#[derive(Debug, Error)]
pub enum OperatorRoleRepositoryError {
    #[error("Service unavailable")]
    ServiceUnavailable,
}
