// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

/// Record types looked up if none are given.
pub static DEFAULT_RECORD_TYPES: &[&str] = &["A", "AAAA", "MX", "NS", "TXT", "SOA"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTypeInfo {
    pub record_type: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Well-known record types in the order they are explained to users.
pub static WELL_KNOWN_RECORD_TYPES: &[RecordTypeInfo] = &[
    RecordTypeInfo {
        record_type: "A",
        name: "Address record",
        description: "Maps a domain name to an IPv4 address.",
    },
    RecordTypeInfo {
        record_type: "AAAA",
        name: "IPv6 address record",
        description: "Maps a domain name to an IPv6 address.",
    },
    RecordTypeInfo {
        record_type: "CNAME",
        name: "Canonical name record",
        description: "Maps an alias name to the canonical domain name.",
    },
    RecordTypeInfo {
        record_type: "MX",
        name: "Mail exchange record",
        description: "Names the mail servers responsible for the domain.",
    },
    RecordTypeInfo {
        record_type: "NS",
        name: "Name server record",
        description: "Names the DNS servers authoritative for the domain.",
    },
    RecordTypeInfo {
        record_type: "PTR",
        name: "Pointer record",
        description: "Maps an address back to a name for reverse lookups.",
    },
    RecordTypeInfo {
        record_type: "SRV",
        name: "Service locator record",
        description: "Locates the servers providing a service.",
    },
    RecordTypeInfo {
        record_type: "TXT",
        name: "Text record",
        description: "Carries free-form text about the domain, e.g., SPF policies or domain verifications.",
    },
    RecordTypeInfo {
        record_type: "SOA",
        name: "Start of authority record",
        description: "Names the primary DNS server and the zone's administrative parameters.",
    },
];

/// Default record types followed by all other well-known record types.
pub fn all_record_types() -> Vec<&'static str> {
    let others = WELL_KNOWN_RECORD_TYPES
        .iter()
        .map(|x| x.record_type)
        .filter(|x| !DEFAULT_RECORD_TYPES.contains(x));

    DEFAULT_RECORD_TYPES.iter().copied().chain(others).collect()
}
