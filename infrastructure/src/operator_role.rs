use async_trait::async_trait;
use chrono::NaiveDateTime;
use domain::operator_role::{OperatorRole, OperatorRoleRepository, OperatorRoleRepositoryError};
use domain_shared::discord::{GuildId, RoleId};
use sqlx::{query, query_as, PgPool};
use tracing::{instrument, warn};

pub struct PostgresOperatorRoleRepository {
    pool: PgPool,
}

impl PostgresOperatorRoleRepository {
    #[instrument(level = "trace", skip_all)]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OperatorRoleRepository for PostgresOperatorRoleRepository {
    #[instrument(level = "debug", err, skip_all)]
    async fn save(&self, operator_role: &OperatorRole) -> Result<(), OperatorRoleRepositoryError> {
        query(
            "INSERT INTO operator_roles (guild_id, role_id, assigned_at) VALUES ($1, $2, $3) ON CONFLICT (guild_id) DO UPDATE SET role_id = $2, assigned_at = $3",
        )
        .bind(&operator_role.guild_id.0)
        .bind(&operator_role.role_id.0)
        .bind(operator_role.assigned_at.naive_utc())
        .execute(&self.pool)
        .await
        .map_err(|err| {
            warn!(error = ?err, "Failed to save operator role");
            OperatorRoleRepositoryError::ServiceUnavailable
        })?;

        Ok(())
    }

    #[instrument(level = "debug", err, skip_all)]
    async fn find_by_guild_id(
        &self,
        guild_id: &GuildId,
    ) -> Result<Option<OperatorRole>, OperatorRoleRepositoryError> {
        let row = query_as::<_, (String, String, NaiveDateTime)>(
            "SELECT guild_id, role_id, assigned_at FROM operator_roles WHERE guild_id = $1",
        )
        .bind(&guild_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            warn!(error = ?err, "Failed to fetch operator role");
            OperatorRoleRepositoryError::ServiceUnavailable
        })?;

        Ok(row.map(|(guild_id, role_id, assigned_at)| OperatorRole {
            guild_id: GuildId(guild_id),
            role_id: RoleId(role_id),
            assigned_at: assigned_at.and_utc(),
        }))
    }
}
