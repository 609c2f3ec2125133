use super::operator::{LOAD_FAILED, MEMBER_MISSING, NO_OPERATOR_ROLE};
use super::setup::{OPTIONS_REQUIRED, ROLE_ASSERTION_FAILED, SAVE_FAILED};
use super::*;
use application_ports::command::{CommandOptionDto, CommandOptionValue, InvokingMemberDto};
use domain::operator_role::{
    assign_operator_role, MockOperatorRoleRepository, OperatorRole, OperatorRoleRepositoryError,
};
use domain::ports::discord::{DiscordError, MockDiscordPort};
use domain_shared::discord::{GuildId, RoleId, UserId};
use std::collections::HashMap;
use std::sync::Mutex;

fn service(
    discord_port: MockDiscordPort,
    operator_role_repository: impl OperatorRoleRepository + Send + Sync + 'static,
) -> CommandService {
    CommandService::new(Arc::new(discord_port), Arc::new(operator_role_repository))
}

fn invocation(name: &str) -> CommandInvocation {
    CommandInvocation {
        name: name.to_string(),
        guild_id: Some(GuildId("guild".to_string())),
        member: Some(InvokingMemberDto {
            user_id: UserId("user".to_string()),
        }),
        options: None,
    }
}

fn role_option(role_id: &str) -> CommandOptionDto {
    CommandOptionDto {
        name: "role".to_string(),
        value: CommandOptionValue::Role(RoleId(role_id.to_string())),
    }
}

fn stored_role(guild_id: &GuildId) -> Option<OperatorRole> {
    Some(assign_operator_role(
        guild_id.clone(),
        RoleId("operator".to_string()),
    ))
}

#[derive(Default)]
struct InMemoryOperatorRoleRepository {
    roles: Mutex<HashMap<GuildId, OperatorRole>>,
}

#[async_trait]
impl OperatorRoleRepository for InMemoryOperatorRoleRepository {
    async fn save(&self, operator_role: &OperatorRole) -> Result<(), OperatorRoleRepositoryError> {
        self.roles
            .lock()
            .unwrap()
            .insert(operator_role.guild_id.clone(), operator_role.clone());
        Ok(())
    }

    async fn find_by_guild_id(
        &self,
        guild_id: &GuildId,
    ) -> Result<Option<OperatorRole>, OperatorRoleRepositoryError> {
        Ok(self.roles.lock().unwrap().get(guild_id).cloned())
    }
}

#[tokio::test]
async fn unknown_command_is_not_dispatched() {
    let service = service(MockDiscordPort::new(), MockOperatorRoleRepository::new());

    let reply = service.dispatch(invocation("op")).await;

    assert_eq!(reply, UNRECOGNIZED_COMMAND);
}

#[tokio::test]
async fn setup_requires_guild() {
    let service = service(MockDiscordPort::new(), MockOperatorRoleRepository::new());
    let mut invocation = invocation("setup");
    invocation.guild_id = None;
    invocation.options = Some(vec![role_option("operator")]);

    assert_eq!(service.dispatch(invocation).await, GUILD_ONLY);
}

#[tokio::test]
async fn setup_requires_options() {
    let service = service(MockDiscordPort::new(), MockOperatorRoleRepository::new());

    assert_eq!(service.dispatch(invocation("setup")).await, OPTIONS_REQUIRED);
}

#[tokio::test]
async fn setup_requires_role_option() {
    let service = service(MockDiscordPort::new(), MockOperatorRoleRepository::new());
    let mut invocation = invocation("setup");
    invocation.options = Some(vec![CommandOptionDto {
        name: "role".to_string(),
        value: CommandOptionValue::String("operator".to_string()),
    }]);

    assert_eq!(service.dispatch(invocation).await, ROLE_ASSERTION_FAILED);
}

#[tokio::test]
async fn setup_with_empty_options_requires_options() {
    let service = service(MockDiscordPort::new(), MockOperatorRoleRepository::new());
    let mut invocation = invocation("setup");
    invocation.options = Some(vec![]);

    assert_eq!(service.dispatch(invocation).await, OPTIONS_REQUIRED);
}

#[tokio::test]
async fn setup_saves_first_role_option() {
    let mut repository = MockOperatorRoleRepository::new();
    repository
        .expect_save()
        .withf(|operator_role| {
            operator_role.guild_id.0 == "guild" && operator_role.role_id.0 == "first"
        })
        .times(1)
        .returning(|_| Ok(()));
    let service = service(MockDiscordPort::new(), repository);
    let mut invocation = invocation("setup");
    invocation.options = Some(vec![
        CommandOptionDto {
            name: "note".to_string(),
            value: CommandOptionValue::Integer(3),
        },
        role_option("first"),
        role_option("second"),
    ]);

    let reply = service.dispatch(invocation).await;

    assert!(reply.contains("<@&first>"), "unexpected reply: {reply}");
}

#[tokio::test]
async fn setup_reports_save_failure() {
    let mut repository = MockOperatorRoleRepository::new();
    repository
        .expect_save()
        .times(1)
        .returning(|_| Err(OperatorRoleRepositoryError::ServiceUnavailable));
    let service = service(MockDiscordPort::new(), repository);
    let mut invocation = invocation("setup");
    invocation.options = Some(vec![role_option("operator")]);

    assert_eq!(service.dispatch(invocation).await, SAVE_FAILED);
}

#[tokio::test]
async fn setup_overwrites_previous_operator_role() {
    let repository = Arc::new(InMemoryOperatorRoleRepository::default());
    let service = CommandService::new(Arc::new(MockDiscordPort::new()), repository.clone());

    for role_id in ["old", "new"] {
        let mut invocation = invocation("setup");
        invocation.options = Some(vec![role_option(role_id)]);
        service.dispatch(invocation).await;
    }

    let roles = repository.roles.lock().unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(
        roles[&GuildId("guild".to_string())].role_id,
        RoleId("new".to_string()),
    );
}

#[tokio::test]
async fn deop_requires_guild() {
    let service = service(MockDiscordPort::new(), MockOperatorRoleRepository::new());
    let mut invocation = invocation("deop");
    invocation.guild_id = None;

    assert_eq!(service.dispatch(invocation).await, GUILD_ONLY);
}

#[tokio::test]
async fn reop_requires_member() {
    let service = service(MockDiscordPort::new(), MockOperatorRoleRepository::new());
    let mut invocation = invocation("reop");
    invocation.member = None;

    assert_eq!(service.dispatch(invocation).await, MEMBER_MISSING);
}

#[tokio::test]
async fn deop_without_operator_role_does_not_call_discord() {
    let mut discord_port = MockDiscordPort::new();
    discord_port.expect_remove_member_role().never();
    let mut repository = MockOperatorRoleRepository::new();
    repository
        .expect_find_by_guild_id()
        .times(1)
        .returning(|_| Ok(None));
    let service = service(discord_port, repository);

    assert_eq!(service.dispatch(invocation("deop")).await, NO_OPERATOR_ROLE);
}

#[tokio::test]
async fn reop_without_operator_role_does_not_call_discord() {
    let mut discord_port = MockDiscordPort::new();
    discord_port.expect_add_member_role().never();
    let service = service(discord_port, InMemoryOperatorRoleRepository::default());

    assert_eq!(service.dispatch(invocation("reop")).await, NO_OPERATOR_ROLE);
}

#[tokio::test]
async fn deop_reports_repository_failure() {
    let mut discord_port = MockDiscordPort::new();
    discord_port.expect_remove_member_role().never();
    let mut repository = MockOperatorRoleRepository::new();
    repository
        .expect_find_by_guild_id()
        .returning(|_| Err(OperatorRoleRepositoryError::ServiceUnavailable));
    let service = service(discord_port, repository);

    assert_eq!(service.dispatch(invocation("deop")).await, LOAD_FAILED);
}

#[tokio::test]
async fn deop_removes_operator_role() {
    let mut discord_port = MockDiscordPort::new();
    discord_port
        .expect_remove_member_role()
        .withf(|guild_id, user_id, role_id, _| {
            guild_id.0 == "guild" && user_id.0 == "user" && role_id.0 == "operator"
        })
        .times(1)
        .returning(|_, _, _, _| Ok(()));
    let mut repository = MockOperatorRoleRepository::new();
    repository
        .expect_find_by_guild_id()
        .returning(|guild_id| Ok(stored_role(guild_id)));
    let service = service(discord_port, repository);

    assert_eq!(
        service.dispatch(invocation("deop")).await,
        "Successfully removed role",
    );
}

#[tokio::test]
async fn deop_reports_discord_failure() {
    let mut discord_port = MockDiscordPort::new();
    discord_port
        .expect_remove_member_role()
        .times(1)
        .returning(|_, _, _, _| Err(DiscordError::RequestRejected));
    let mut repository = MockOperatorRoleRepository::new();
    repository
        .expect_find_by_guild_id()
        .returning(|guild_id| Ok(stored_role(guild_id)));
    let service = service(discord_port, repository);

    assert_eq!(
        service.dispatch(invocation("deop")).await,
        "Failed to delete role",
    );
}

#[tokio::test]
async fn reop_adds_operator_role() {
    let mut discord_port = MockDiscordPort::new();
    discord_port.expect_remove_member_role().never();
    discord_port
        .expect_add_member_role()
        .withf(|guild_id, user_id, role_id, _| {
            guild_id.0 == "guild" && user_id.0 == "user" && role_id.0 == "operator"
        })
        .times(1)
        .returning(|_, _, _, _| Ok(()));
    let mut repository = MockOperatorRoleRepository::new();
    repository
        .expect_find_by_guild_id()
        .returning(|guild_id| Ok(stored_role(guild_id)));
    let service = service(discord_port, repository);

    assert_eq!(
        service.dispatch(invocation("reop")).await,
        "Successfully added role",
    );
}

#[tokio::test]
async fn reop_reports_discord_failure() {
    let mut discord_port = MockDiscordPort::new();
    discord_port
        .expect_add_member_role()
        .times(1)
        .returning(|_, _, _, _| Err(DiscordError::DiscordUnavailable));
    let mut repository = MockOperatorRoleRepository::new();
    repository
        .expect_find_by_guild_id()
        .returning(|guild_id| Ok(stored_role(guild_id)));
    let service = service(discord_port, repository);

    assert_eq!(
        service.dispatch(invocation("reop")).await,
        "Failed to add role",
    );
}
