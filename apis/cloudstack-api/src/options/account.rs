// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account, user and domain options

use super::{account_in_domain, paged_options, query_options};
use crate::types::AccountType;

paged_options! {
    /// Options for `listAccounts`
    pub struct ListAccountsOptions {
        id => "id",
        name => "name",
        state => "state",
        domain_id => "domainid",
        is_cleanup_required => "iscleanuprequired",
        is_recursive => "isrecursive",
        list_all => "listall",
    }
}

impl ListAccountsOptions {
    /// Only accounts of this role
    pub fn account_type(mut self, account_type: AccountType) -> Self {
        self.params
            .set("accounttype", account_type.code().to_string());
        self
    }
}

query_options! {
    /// Options for `createAccount`
    pub struct CreateAccountOptions {
        /// Account name; defaults to the username
        account => "account",
        account_id => "accountid",
        domain_id => "domainid",
        network_domain => "networkdomain",
        role_id => "roleid",
        timezone => "timezone",
        user_id => "userid",
    }
}

query_options! {
    /// Options for `updateAccount`
    pub struct UpdateAccountOptions {
        id => "id",
        new_name => "newname",
        network_domain => "networkdomain",
        role_id => "roleid",
    }
}

paged_options! {
    /// Options for `listUsers`
    pub struct ListUsersOptions {
        id => "id",
        username => "username",
        state => "state",
        domain_id => "domainid",
        is_recursive => "isrecursive",
        list_all => "listall",
    }
}

impl ListUsersOptions {
    /// Only users whose account has this role
    pub fn account_type(mut self, account_type: AccountType) -> Self {
        self.params
            .set("accounttype", account_type.code().to_string());
        self
    }
}

query_options! {
    /// Options for `createUser`
    pub struct CreateUserOptions {
        domain_id => "domainid",
        timezone => "timezone",
        user_id => "userid",
    }
}

query_options! {
    /// Options for `updateUser`
    pub struct UpdateUserOptions {
        email => "email",
        first_name => "firstname",
        last_name => "lastname",
        /// Clear-text password; hashed server-side
        password => "password",
        timezone => "timezone",
        username => "username",
        user_api_key => "userapikey",
        user_secret_key => "usersecretkey",
    }
}

paged_options! {
    /// Options for `listDomains`
    pub struct ListDomainsOptions {
        id => "id",
        name => "name",
        level => "level",
        list_all => "listall",
    }
}

account_in_domain!(ListUsersOptions, CreateUserOptions, UpdateAccountOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    #[test]
    fn test_account_type_is_sent_as_code() {
        let opts = ListAccountsOptions::new()
            .account_type(AccountType::DomainAdmin)
            .state(crate::types::AccountState::Enabled);
        assert_eq!(opts.params().get("accounttype"), Some("2"));
        assert_eq!(opts.params().get("state"), Some("enabled"));
    }

    #[test]
    fn test_update_user_options() {
        let opts = UpdateUserOptions::new().first_name("Jane").email("jane@example.com");
        assert_eq!(opts.params().get("firstname"), Some("Jane"));
        assert_eq!(opts.params().len(), 2);
    }
}
