use super::{PartyRegistry, PartyRole, PurposeIndex};

use crate::document::Node;
use crate::extract;
use crate::ids::PaymentId;
use crate::models::PaymentFact;

use chrono::NaiveDateTime;

/// Consumes the settlement-message (pacs.008) stream and emits one canonical
/// payment fact per transaction. Identity resolution and purpose fallback go
/// through explicitly injected collaborators, so the builder has no ambient
/// state of its own.
pub struct FactBuilder<'a> {
    registry: &'a mut PartyRegistry,
    purposes: &'a PurposeIndex,
}

impl<'a> FactBuilder<'a> {
    pub fn new(registry: &'a mut PartyRegistry, purposes: &'a PurposeIndex) -> Self {
        return Self { registry, purposes };
    }

    pub fn build(&mut self, documents: &[Node]) -> Vec<PaymentFact> {
        let mut facts = vec![];

        for document in documents {
            let Some(msg_id) = document.text("GrpHdr/MsgId") else {
                log::warn!("Skipping settlement document without GrpHdr/MsgId");
                continue;
            };
            let msg_id = msg_id.to_string();

            let payment_date = document
                .text("GrpHdr/CreDtTm")
                .and_then(extract::parse_timestamp);

            for transaction in document.find_all("CdtTrfTxInf") {
                facts.push(self.build_fact(document, transaction, &msg_id, payment_date));
            }
        }

        log::debug!("Built {} payment facts", facts.len());

        return facts;
    }

    fn build_fact(
        &mut self,
        document: &Node,
        transaction: &Node,
        msg_id: &str,
        payment_date: Option<NaiveDateTime>,
    ) -> PaymentFact {
        let instr_id = transaction.text("PmtId/InstrId").map(str::to_string);
        let end_to_end_id = transaction.text("PmtId/EndToEndId").map(str::to_string);

        let payer = extract::payer_triplet(document, transaction);
        let debtor_id = self.registry.resolve(PartyRole::Debtor, payer);

        let payee = extract::payee_triplet(transaction);
        let creditor_id = self.registry.resolve(PartyRole::Creditor, payee);

        let (amount, currency_code) = extract::amount_and_currency(transaction);

        let purpose_code = transaction
            .text("Purp/Cd")
            .map(str::to_string)
            .or_else(|| {
                end_to_end_id
                    .as_deref()
                    .and_then(|reference| self.purposes.lookup(reference))
                    .map(str::to_string)
            });

        let debtor_agent_bic = extract::agent_bic(transaction, "DbtrAgt")
            .or_else(|| extract::agent_bic(document, "DbtrAgt"));
        let creditor_agent_bic = extract::agent_bic(transaction, "CdtrAgt");

        let charge_bearer = transaction
            .text("ChrgBr")
            .or_else(|| document.text("ChrgBr"))
            .map(str::to_string);

        return PaymentFact {
            payment_id: PaymentId::new(msg_id, instr_id.as_deref().unwrap_or_default()),
            msg_id: msg_id.to_string(),
            instr_id,
            end_to_end_id,
            payment_date,
            settlement_date: None,
            amount,
            currency_code,
            debtor_id,
            creditor_id,
            debtor_agent_bic,
            creditor_agent_bic,
            purpose_code,
            status_code: None,
            charge_bearer,
            processing_time_minutes: None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document;
    use crate::ids::PartyId;

    const SOME_SETTLEMENT_DOCUMENT: &str = r#"
        <Document xmlns="urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08">
          <FIToFICstmrCdtTrf>
            <GrpHdr>
              <MsgId>MSG-1</MsgId>
              <CreDtTm>2025-09-24T10:00:00Z</CreDtTm>
            </GrpHdr>
            <ChrgBr>SLEV</ChrgBr>
            <Dbtr><Nm>A Corp</Nm><PstlAdr><Ctry>PT</Ctry></PstlAdr></Dbtr>
            <DbtrAcct><Id><IBAN>PT501</IBAN></Id></DbtrAcct>
            <DbtrAgt><FinInstnId><BICFI>BCOMPTPLXXX</BICFI></FinInstnId></DbtrAgt>
            <CdtTrfTxInf>
              <PmtId><InstrId>INSTR-1</InstrId><EndToEndId>E2E-001</EndToEndId></PmtId>
              <IntrBkSttlmAmt Ccy="EUR">100.00</IntrBkSttlmAmt>
              <Cdtr><Nm>B GmbH</Nm></Cdtr>
              <CdtrAcct><Id><IBAN>DE713</IBAN></Id></CdtrAcct>
              <CdtrAgt><FinInstnId><BICFI>HYVEDEMMXXX</BICFI></FinInstnId></CdtrAgt>
              <Purp><Cd>SALA</Cd></Purp>
            </CdtTrfTxInf>
            <CdtTrfTxInf>
              <PmtId><InstrId>INSTR-2</InstrId><EndToEndId>E2E-002</EndToEndId></PmtId>
              <InstdAmt Ccy="EUR">250.00</InstdAmt>
              <Cdtr><Nm>C SARL</Nm></Cdtr>
              <CdtrAcct><Id><IBAN>FR140</IBAN></Id></CdtrAcct>
            </CdtTrfTxInf>
          </FIToFICstmrCdtTrf>
        </Document>"#;

    fn build_facts(purposes: &PurposeIndex, xml: &str) -> Vec<PaymentFact> {
        let documents = vec![document::parse(xml).unwrap()];
        let mut registry = PartyRegistry::new(true);

        FactBuilder::new(&mut registry, purposes).build(&documents)
    }

    #[test]
    fn one_fact_per_transaction_with_composite_id() {
        let facts = build_facts(&PurposeIndex::default(), SOME_SETTLEMENT_DOCUMENT);

        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].payment_id, PaymentId("MSG-1-INSTR-1".to_string()));
        assert_eq!(facts[1].payment_id, PaymentId("MSG-1-INSTR-2".to_string()));
        assert_eq!(facts[0].msg_id, "MSG-1");
        assert_eq!(facts[1].end_to_end_id.as_deref(), Some("E2E-002"));
    }

    #[test]
    fn payer_is_shared_and_payees_are_distinct() {
        let facts = build_facts(&PurposeIndex::default(), SOME_SETTLEMENT_DOCUMENT);

        assert_eq!(facts[0].debtor_id, facts[1].debtor_id);
        assert_eq!(facts[0].debtor_id, PartyId("D00001".to_string()));
        assert_eq!(facts[0].creditor_id, PartyId("C00001".to_string()));
        assert_eq!(facts[1].creditor_id, PartyId("C00002".to_string()));
    }

    #[test]
    fn purpose_falls_back_to_the_initiation_index() {
        let initiation = document::parse(
            r#"<Document><CdtTrfTxInf>
                <PmtId><EndToEndId>E2E-002</EndToEndId></PmtId>
                <Purp><Cd>SUPP</Cd></Purp>
            </CdtTrfTxInf></Document>"#,
        )
        .unwrap();
        let purposes = PurposeIndex::build(&[initiation]);

        let facts = build_facts(&purposes, SOME_SETTLEMENT_DOCUMENT);

        // Direct code on the transaction wins; index fills the gap
        assert_eq!(facts[0].purpose_code.as_deref(), Some("SALA"));
        assert_eq!(facts[1].purpose_code.as_deref(), Some("SUPP"));
    }

    #[test]
    fn enrichable_fields_start_unset() {
        let facts = build_facts(&PurposeIndex::default(), SOME_SETTLEMENT_DOCUMENT);

        for fact in &facts {
            assert!(fact.settlement_date.is_none());
            assert!(fact.status_code.is_none());
            assert!(fact.processing_time_minutes.is_none());
        }
        assert!(facts[0].payment_date.is_some());
    }

    #[test]
    fn agents_and_charge_bearer_fall_back_to_the_document() {
        let facts = build_facts(&PurposeIndex::default(), SOME_SETTLEMENT_DOCUMENT);

        assert_eq!(facts[0].debtor_agent_bic.as_deref(), Some("BCOMPTPLXXX"));
        assert_eq!(facts[0].creditor_agent_bic.as_deref(), Some("HYVEDEMMXXX"));
        assert!(facts[1].creditor_agent_bic.is_none());
        assert_eq!(facts[0].charge_bearer.as_deref(), Some("SLEV"));
        assert_eq!(facts[1].charge_bearer.as_deref(), Some("SLEV"));
    }

    #[test]
    fn document_without_msg_id_is_skipped() {
        let facts = build_facts(
            &PurposeIndex::default(),
            r#"<Document><FIToFICstmrCdtTrf>
                <GrpHdr><CreDtTm>2025-09-24T10:00:00Z</CreDtTm></GrpHdr>
                <CdtTrfTxInf>
                    <PmtId><InstrId>INSTR-1</InstrId></PmtId>
                </CdtTrfTxInf>
            </FIToFICstmrCdtTrf></Document>"#,
        );

        assert!(facts.is_empty());
    }
}
