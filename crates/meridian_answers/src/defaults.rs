//! The canonical built-in answer document.
//!
//! These are the values an unattended installation falls back to. The
//! administrative group is deliberately the unassigned placeholder; the
//! bootstrap process assigns a real group later.

use crate::document::{AnswerSet, Section, SectionName};
use meridian_ids::GroupId;

const DB_HOST: &str = "localhost";
const DB_PORT: &str = "3306";
const DB_NAME: &str = "meridian";
const DB_USER: &str = "meridian";
const DB_PASSWORD: &str = "secret";

const API_HOST: &str = "localhost";
const API_PORT: &str = "10550";
const PORTAL_HOST: &str = "localhost";
const PORTAL_PORT: &str = "80";
const SOCKET_HOST: &str = "localhost";
const SOCKET_PORT: &str = "10551";
const SOCKET_BIND_IPADDR: &str = "127.0.0.1";

const ADMIN_USER: &str = "meridian";
const ADMIN_EMAIL: &str = "user@email.com";

fn section(pairs: &[(&str, &str)]) -> Section {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Build the default answer document.
pub fn default_document() -> AnswerSet {
    let admin_group = GroupId::unassigned();

    let mut doc = AnswerSet {
        engine: section(&[
            ("db_host", DB_HOST),
            ("db_port", DB_PORT),
            ("db_name", DB_NAME),
            ("db_user", DB_USER),
            ("db_user_password", DB_PASSWORD),
            ("db_root_password", DB_PASSWORD),
            ("api_admin_password", DB_PASSWORD),
            ("api_admin_email", ADMIN_EMAIL),
            ("api_host", API_HOST),
            ("api_port", API_PORT),
            ("portal_host", PORTAL_HOST),
            ("portal_port", PORTAL_PORT),
            ("socket_host", SOCKET_HOST),
            ("socket_port", SOCKET_PORT),
        ]),
        portal: section(&[
            ("db_host", DB_HOST),
            ("db_port", DB_PORT),
            ("db_name", DB_NAME),
            ("db_user", DB_USER),
            ("db_user_password", DB_PASSWORD),
            ("engine_host", API_HOST),
            ("engine_port", API_PORT),
            ("portal_host", PORTAL_HOST),
            ("portal_port", PORTAL_PORT),
            ("socket_host", SOCKET_HOST),
            ("socket_port", SOCKET_PORT),
            ("admin_user", ADMIN_USER),
        ]),
        client: section(&[("admin_user", ADMIN_USER)]),
        socket: section(&[
            ("admin_user", ADMIN_USER),
            ("engine_host", API_HOST),
            ("engine_port", API_PORT),
            ("socket_host", SOCKET_HOST),
            ("socket_port", SOCKET_PORT),
            ("socket_bind_ipaddr", SOCKET_BIND_IPADDR),
        ]),
    };

    for name in [SectionName::Portal, SectionName::Client, SectionName::Socket] {
        doc.set(name, "admin_group", admin_group.as_str());
    }

    doc
}
