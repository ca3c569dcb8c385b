// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Security group options

use super::{account_in_domain, join_ids, paged_options, query_options, tag_filter};

paged_options! {
    /// Options for `listSecurityGroups`
    pub struct ListSecurityGroupsOptions {
        id => "id",
        name => "securitygroupname",
        virtual_machine_id => "virtualmachineid",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `authorizeSecurityGroupIngress`
    pub struct AuthorizeIngressOptions {
        protocol => "protocol",
        start_port => "startport",
        end_port => "endport",
        icmp_type => "icmptype",
        icmp_code => "icmpcode",
    }
}

impl AuthorizeIngressOptions {
    /// Admit traffic from these CIDRs
    pub fn cidr_list<I, S>(mut self, cidrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.params.set("cidrlist", join_ids(cidrs));
        self
    }

    /// Admit traffic from members of other security groups
    ///
    /// Each entry is `(account, group name)`.
    pub fn user_security_groups<I, A, G>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = (A, G)>,
        A: AsRef<str>,
        G: AsRef<str>,
    {
        for (i, (account, group)) in groups.into_iter().enumerate() {
            self.params
                .set(format!("usersecuritygrouplist[{}].account", i), account.as_ref());
            self.params
                .set(format!("usersecuritygrouplist[{}].group", i), group.as_ref());
        }
        self
    }
}

account_in_domain!(ListSecurityGroupsOptions, AuthorizeIngressOptions);
tag_filter!(ListSecurityGroupsOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;
    use crate::types::FirewallProtocol;

    #[test]
    fn test_authorize_ingress_options() {
        let opts = AuthorizeIngressOptions::new()
            .protocol(FirewallProtocol::Tcp)
            .start_port(22)
            .end_port(22)
            .cidr_list(["1.1.1.1/24", "2.2.2.2/16"])
            .user_security_groups([("adrian", "group1"), ("adrian", "group2")]);
        let params = opts.params();
        assert_eq!(params.get("protocol"), Some("tcp"));
        assert_eq!(params.get("cidrlist"), Some("1.1.1.1/24,2.2.2.2/16"));
        assert_eq!(params.get("usersecuritygrouplist[1].group"), Some("group2"));
        assert_eq!(params.get("usersecuritygrouplist[0].account"), Some("adrian"));
    }
}
