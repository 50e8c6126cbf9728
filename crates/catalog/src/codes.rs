use foundation::{CountryCode, CountryId};

const fn entry(id: u16, code: [u8; 3]) -> (CountryId, CountryCode) {
    (CountryId(id), CountryCode::new(code))
}

/// Process-wide immutable numeric-id → alpha-3 table.
///
/// Deliberately covers only a small subset of world features; everything
/// else renders in the neutral "no data" color. Sorted by id for binary
/// search.
pub static COUNTRY_CODES: &[(CountryId, CountryCode)] = &[
    entry(32, *b"ARG"),
    entry(36, *b"AUS"),
    entry(76, *b"BRA"),
    entry(124, *b"CAN"),
    entry(156, *b"CHN"),
    entry(250, *b"FRA"),
    entry(276, *b"DEU"),
    entry(356, *b"IND"),
    entry(380, *b"ITA"),
    entry(392, *b"JPN"),
    entry(410, *b"KOR"),
    entry(484, *b"MEX"),
    entry(499, *b"MNE"),
    entry(554, *b"NZL"),
    entry(643, *b"RUS"),
    entry(682, *b"SAU"),
    entry(688, *b"SRB"),
    entry(710, *b"ZAF"),
    entry(724, *b"ESP"),
    entry(728, *b"SSD"),
    entry(780, *b"TTO"),
    entry(807, *b"MKD"),
    entry(818, *b"EGY"),
    entry(826, *b"GBR"),
    entry(840, *b"USA"),
];

/// Resolves a geometry id to its alpha-3 code, if mapped.
pub fn code_for(id: CountryId) -> Option<CountryCode> {
    COUNTRY_CODES
        .binary_search_by_key(&id, |&(table_id, _)| table_id)
        .ok()
        .map(|idx| COUNTRY_CODES[idx].1)
}

#[cfg(test)]
mod tests {
    use super::{COUNTRY_CODES, code_for};
    use foundation::{CountryCode, CountryId};

    #[test]
    fn table_is_sorted_by_id() {
        for pair in COUNTRY_CODES.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn known_ids_resolve() {
        assert_eq!(code_for(CountryId(840)), Some(CountryCode::new(*b"USA")));
        assert_eq!(code_for(CountryId(36)), Some(CountryCode::new(*b"AUS")));
        assert_eq!(code_for(CountryId(392)), Some(CountryCode::new(*b"JPN")));
    }

    #[test]
    fn unmapped_ids_resolve_to_none() {
        // Antarctica has geometry in the atlas but no table entry.
        assert_eq!(code_for(CountryId(10)), None);
        assert_eq!(code_for(CountryId(9999)), None);
    }
}
