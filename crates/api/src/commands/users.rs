//! User commands

use agendaia_domain::{AccountType, NewUser, User};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Payload for registering a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub account_type: AccountType,
}

/// Persist a new user and open its agenda
pub async fn register_user(ctx: &AppContext, request: RegisterUserRequest) -> Result<User, String> {
    execute_logged("users::register_user", async move {
        let params =
            NewUser::new(request.name, request.email).with_account_type(request.account_type);
        let user = ctx.users.create_user(params).await?;
        ctx.agendas.register(user.clone()).await?;
        Ok(user)
    })
    .await
}

/// Current state of a user, agenda included
pub async fn get_user(ctx: &AppContext, user_id: &str) -> Result<User, String> {
    execute_logged("users::get_user", async move {
        if ctx.agendas.is_registered(user_id).await {
            ctx.agendas.user(user_id).await
        } else {
            ctx.users.get_user(user_id).await
        }
    })
    .await
}
