use async_trait::async_trait;
use domain_shared::discord::{GuildId, RoleId, UserId};

#[async_trait]
pub trait CommandPort {
    /// Runs the named command and returns the text shown to the invoking user.
    ///
    /// Always yields a message, failures included; unknown names yield
    /// [`UNRECOGNIZED_COMMAND`].
    async fn dispatch(&self, invocation: CommandInvocation) -> String;
}

pub const UNRECOGNIZED_COMMAND: &str = "Unrecognized command";

#[derive(Debug, Clone, PartialEq)]
pub struct CommandInvocation {
    pub name: String,
    pub guild_id: Option<GuildId>,
    pub member: Option<InvokingMemberDto>,
    pub options: Option<Vec<CommandOptionDto>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvokingMemberDto {
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOptionDto {
    pub name: String,
    pub value: CommandOptionValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOptionValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    User(UserId),
    Role(RoleId),
    Number(f64),
    /// Channels, mentionables, attachments and sub-commands, none of which
    /// any command here reads.
    Unsupported,
}

impl CommandOptionDto {
    pub fn role_id(&self) -> Option<&RoleId> {
        match &self.value {
            CommandOptionValue::Role(role_id) => Some(role_id),
            _ => None,
        }
    }
}
