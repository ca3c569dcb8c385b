// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Accounts, users and domains

use cloudstack_api::commands::account::*;
use cloudstack_api::options::{
    CreateAccountOptions, CreateUserOptions, ListAccountsOptions, ListDomainsOptions,
    ListUsersOptions, UpdateAccountOptions, UpdateUserOptions,
};
use cloudstack_api::{
    Account, AccountType, ApiKeyPair, AsyncCreateResponse, Domain, Options, QueryParams, User,
};

use super::{api_accessor, by_id};
use crate::error::Error;

/// Fields every new user needs
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser<'p> {
    pub username: &'p str,
    /// Clear-text password; hashed server-side
    pub password: &'p str,
    pub email: &'p str,
    pub first_name: &'p str,
    pub last_name: &'p str,
}

impl NewUser<'_> {
    fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("username", self.username)
            .with("password", self.password)
            .with("email", self.email)
            .with("firstname", self.first_name)
            .with("lastname", self.last_name)
    }
}

api_accessor! {
    /// Account commands
    AccountApi
}

impl AccountApi<'_> {
    pub async fn list_accounts(&self, options: ListAccountsOptions) -> Result<Vec<Account>, Error> {
        self.client.list(&LIST_ACCOUNTS, options.into_params()).await
    }

    pub async fn get_account(&self, id: &str) -> Result<Option<Account>, Error> {
        self.client.get(&GET_ACCOUNT, by_id(id)).await
    }

    /// Create an account with its first user
    pub async fn create_account(
        &self,
        account_type: AccountType,
        user: &NewUser<'_>,
        options: CreateAccountOptions,
    ) -> Result<Account, Error> {
        let mut params = user.params();
        params.set("accounttype", account_type.code().to_string());
        params.merge(options.into_params());
        self.client.object(&CREATE_ACCOUNT, params).await
    }

    /// Rename an account, or change its network domain or role
    pub async fn update_account(&self, options: UpdateAccountOptions) -> Result<Account, Error> {
        self.client.object(&UPDATE_ACCOUNT, options.into_params()).await
    }

    /// Delete an account and everything it owns
    pub async fn delete_account(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        self.client.job(&DELETE_ACCOUNT, by_id(id)).await
    }

    pub async fn enable_account(&self, id: &str) -> Result<Account, Error> {
        self.client.object(&ENABLE_ACCOUNT, by_id(id)).await
    }

    /// Disable an account
    ///
    /// With `lock`, the account's users can no longer log in but its
    /// resources keep running.
    pub async fn disable_account(&self, id: &str, lock: bool) -> Result<AsyncCreateResponse, Error> {
        let params = by_id(id).with("lock", lock.to_string());
        self.client.job(&DISABLE_ACCOUNT, params).await
    }

    pub async fn lock_account(&self, account: &str, domain_id: &str) -> Result<Account, Error> {
        let params = QueryParams::new()
            .with("account", account)
            .with("domainid", domain_id);
        self.client.object(&LOCK_ACCOUNT, params).await
    }
}

api_accessor! {
    /// User commands
    UserApi
}

impl UserApi<'_> {
    pub async fn list_users(&self, options: ListUsersOptions) -> Result<Vec<User>, Error> {
        self.client.list(&LIST_USERS, options.into_params()).await
    }

    pub async fn get_user(&self, id: &str) -> Result<Option<User>, Error> {
        self.client.get(&GET_USER, by_id(id)).await
    }

    /// Add a user to an existing account
    pub async fn create_user(
        &self,
        account: &str,
        user: &NewUser<'_>,
        options: CreateUserOptions,
    ) -> Result<User, Error> {
        let mut params = user.params().with("account", account);
        params.merge(options.into_params());
        self.client.object(&CREATE_USER, params).await
    }

    pub async fn update_user(&self, id: &str, options: UpdateUserOptions) -> Result<User, Error> {
        let params = options.into_params().with("id", id);
        self.client.object(&UPDATE_USER, params).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), Error> {
        self.client.unit(&DELETE_USER, by_id(id)).await
    }

    pub async fn enable_user(&self, id: &str) -> Result<User, Error> {
        self.client.object(&ENABLE_USER, by_id(id)).await
    }

    pub async fn disable_user(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        self.client.job(&DISABLE_USER, by_id(id)).await
    }

    /// Generate a new API key and secret for a user
    pub async fn register_user_keys(&self, id: &str) -> Result<ApiKeyPair, Error> {
        self.client.object(&REGISTER_USER_KEYS, by_id(id)).await
    }
}

api_accessor! {
    /// Domain commands
    DomainApi
}

impl DomainApi<'_> {
    pub async fn list_domains(&self, options: ListDomainsOptions) -> Result<Vec<Domain>, Error> {
        self.client.list(&LIST_DOMAINS, options.into_params()).await
    }

    pub async fn get_domain(&self, id: &str) -> Result<Option<Domain>, Error> {
        self.client.get(&GET_DOMAIN, by_id(id)).await
    }

    /// Direct children of a domain, or of the root when `id` is `None`
    pub async fn list_domain_children(
        &self,
        id: Option<&str>,
        recursive: bool,
    ) -> Result<Vec<Domain>, Error> {
        let mut params = QueryParams::new().with("isrecursive", recursive.to_string());
        if let Some(id) = id {
            params.set("id", id);
        }
        self.client.list(&LIST_DOMAIN_CHILDREN, params).await
    }
}
