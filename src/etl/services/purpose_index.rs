use crate::document::Node;
use crate::extract::normalize_reference;

use std::collections::HashMap;

/// Lookup from a normalized end-to-end reference to a purpose classification,
/// built once from the initiation-message (pain.001) stream. Consulted by the
/// fact builder when a settlement transaction omits its purpose code.
/// Duplicate references are last-write-wins, which is deterministic because
/// the document stream is filename-sorted upstream.
#[derive(Debug, Default)]
pub struct PurposeIndex {
    map: HashMap<String, String>,
}

impl PurposeIndex {
    pub fn build(documents: &[Node]) -> Self {
        let mut map = HashMap::new();

        for document in documents {
            for transaction in document.find_all("CdtTrfTxInf") {
                let reference = transaction.text("PmtId/EndToEndId");
                let purpose = transaction.text("Purp/Cd");

                if let (Some(reference), Some(purpose)) = (reference, purpose) {
                    map.insert(normalize_reference(reference), purpose.to_string());
                }
            }
        }

        log::debug!("Purpose index built with {} references", map.len());

        return Self { map };
    }

    pub fn lookup(&self, reference: &str) -> Option<&str> {
        self.map
            .get(&normalize_reference(reference))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document;

    fn initiation_document(reference: &str, purpose: &str) -> Node {
        document::parse(&format!(
            r#"<Document><CstmrCdtTrfInitn><PmtInf>
                <CdtTrfTxInf>
                    <PmtId><EndToEndId>{reference}</EndToEndId></PmtId>
                    <Purp><Cd>{purpose}</Cd></Purp>
                </CdtTrfTxInf>
            </PmtInf></CstmrCdtTrfInitn></Document>"#
        ))
        .unwrap()
    }

    #[test]
    fn lookup_normalizes_both_sides() {
        let index = PurposeIndex::build(&[initiation_document("  e2e-001 ", "SALA")]);

        assert_eq!(index.lookup("E2E-001"), Some("SALA"));
        assert_eq!(index.lookup(" e2e-001"), Some("SALA"));
        assert_eq!(index.lookup("E2E-404"), None);
    }

    #[test]
    fn duplicate_references_are_last_write_wins() {
        let index = PurposeIndex::build(&[
            initiation_document("E2E-001", "SALA"),
            initiation_document("E2E-001", "SUPP"),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("E2E-001"), Some("SUPP"));
    }

    #[test]
    fn transactions_missing_either_field_are_ignored() {
        let no_purpose = document::parse(
            r#"<Document><CdtTrfTxInf>
                <PmtId><EndToEndId>E2E-001</EndToEndId></PmtId>
            </CdtTrfTxInf></Document>"#,
        )
        .unwrap();
        let no_reference = document::parse(
            r#"<Document><CdtTrfTxInf>
                <Purp><Cd>SALA</Cd></Purp>
            </CdtTrfTxInf></Document>"#,
        )
        .unwrap();

        let index = PurposeIndex::build(&[no_purpose, no_reference]);

        assert!(index.is_empty());
    }
}
