//! Static code-to-description mappings consumed by dimension derivation.
//! Codes outside these tables pass through with the raw code as their own
//! description.

/// ISO 20022 payment transaction status codes
pub const STATUS_DESCRIPTIONS: &[(&str, &str)] = &[
    ("ACCC", "Accepted, settlement completed on creditor account"),
    ("ACCP", "Accepted customer profile"),
    ("ACSC", "Accepted, settlement completed"),
    ("ACSP", "Accepted, settlement in process"),
    ("ACTC", "Accepted technical validation"),
    ("ACWC", "Accepted with change"),
    ("PDNG", "Pending"),
    ("RCVD", "Received"),
    ("RJCT", "Rejected"),
];

/// Common external purpose codes
pub const PURPOSE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("CASH", "Cash management transfer"),
    ("CBFF", "Capital building"),
    ("DIVI", "Dividend payment"),
    ("GDDS", "Purchase or sale of goods"),
    ("INTC", "Intra-company payment"),
    ("LOAN", "Loan"),
    ("PENS", "Pension payment"),
    ("RENT", "Rent"),
    ("SALA", "Salary payment"),
    ("SERV", "Services"),
    ("SUPP", "Supplier payment"),
    ("TAXS", "Tax payment"),
    ("TRAD", "Trade services"),
];

pub fn status_description(code: &str) -> Option<&'static str> {
    return lookup(STATUS_DESCRIPTIONS, code);
}

pub fn purpose_description(code: &str) -> Option<&'static str> {
    return lookup(PURPOSE_DESCRIPTIONS, code);
}

fn lookup(table: &'static [(&str, &str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, description)| *description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(status_description("ACSC"), Some("Accepted, settlement completed"));
        assert_eq!(purpose_description("SALA"), Some("Salary payment"));
    }

    #[test]
    fn unknown_codes_are_none() {
        assert_eq!(status_description("ZZZZ"), None);
        assert_eq!(purpose_description(""), None);
    }
}
