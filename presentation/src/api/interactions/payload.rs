use application_ports::command::{
    CommandInvocation, CommandOptionDto, CommandOptionValue, InvokingMemberDto,
};
use domain_shared::discord::{GuildId, RoleId, UserId};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

pub const INTERACTION_APPLICATION_COMMAND: u64 = 2;

pub const COMMAND_CHAT_INPUT: u64 = 1;

const OPTION_STRING: u64 = 3;
const OPTION_INTEGER: u64 = 4;
const OPTION_BOOLEAN: u64 = 5;
const OPTION_USER: u64 = 6;
const OPTION_ROLE: u64 = 8;
const OPTION_NUMBER: u64 = 10;

/// The subset of Discord's interaction object the commands read.
///
/// Everything beyond `type` is optional so that component and modal
/// interactions still parse and fall through to the acknowledgment.
#[derive(Debug, Deserialize)]
pub struct InteractionPayload {
    #[serde(rename = "type")]
    pub kind: u64,
    pub data: Option<CommandDataPayload>,
    pub guild_id: Option<String>,
    pub member: Option<MemberPayload>,
}

#[derive(Debug, Deserialize)]
pub struct CommandDataPayload {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<u64>,
    pub options: Option<Vec<CommandOptionPayload>>,
}

#[derive(Debug, Deserialize)]
pub struct MemberPayload {
    pub user: Option<UserPayload>,
}

#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct CommandOptionPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u64,
    pub value: Option<Value>,
}

impl InteractionPayload {
    /// Returns the invocation when this is a chat input (slash) command.
    #[instrument(level = "trace", skip_all)]
    pub fn into_command_invocation(self) -> Option<CommandInvocation> {
        if self.kind != INTERACTION_APPLICATION_COMMAND {
            return None;
        }

        let data = self.data?;
        if data.kind.is_some_and(|kind| kind != COMMAND_CHAT_INPUT) {
            return None;
        }

        Some(CommandInvocation {
            name: data.name?,
            guild_id: self.guild_id.map(GuildId),
            member: self
                .member
                .and_then(|member| member.user)
                .map(|user| InvokingMemberDto {
                    user_id: UserId(user.id),
                }),
            options: data.options.map(|options| {
                options
                    .into_iter()
                    .map(CommandOptionPayload::into_dto)
                    .collect()
            }),
        })
    }
}

impl CommandOptionPayload {
    fn into_dto(self) -> CommandOptionDto {
        let value = match (self.kind, self.value) {
            (OPTION_STRING, Some(Value::String(value))) => CommandOptionValue::String(value),
            (OPTION_INTEGER, Some(value)) => value
                .as_i64()
                .map_or(CommandOptionValue::Unsupported, CommandOptionValue::Integer),
            (OPTION_BOOLEAN, Some(Value::Bool(value))) => CommandOptionValue::Boolean(value),
            (OPTION_USER, Some(Value::String(value))) => CommandOptionValue::User(UserId(value)),
            (OPTION_ROLE, Some(Value::String(value))) => CommandOptionValue::Role(RoleId(value)),
            (OPTION_NUMBER, Some(value)) => value
                .as_f64()
                .map_or(CommandOptionValue::Unsupported, CommandOptionValue::Number),
            _ => CommandOptionValue::Unsupported,
        };

        CommandOptionDto {
            name: self.name,
            value,
        }
    }
}
