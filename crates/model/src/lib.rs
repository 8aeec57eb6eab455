//! # isomsg-model
//!
//! Typed ISO 20022 message components.
//!
//! Every type here is plain data: optional fields are `Option<T>`, repeated
//! fields are `Vec<T>` and choices are enums. Constraints live in each
//! type's [`Schema`](isomsg_validator::schema::Schema), so validation, XML
//! and JSON all go through the generic machinery of `isomsg-validator` and
//! `isomsg-codec`.
//!
//! Shipped message definitions:
//!
//! - [`FIToFICustomerCreditTransferV08`] (`pacs.008.001.08`)
//! - [`BusinessApplicationHeaderV02`] (`head.001.001.02`)
//!
//! ## Quick Start
//!
//! ```
//! use isomsg_model::prelude::*;
//!
//! let mut debtor = PartyIdentification135::named("ACME Corp");
//! debtor.country_of_residence = Some("de".into());
//!
//! let errors = debtor.validate().unwrap_err();
//! assert_eq!(errors.paths(), ["CountryOfResidence"]);
//! ```

pub mod account;
pub mod agent;
pub mod amount;
pub mod codes;
pub mod head001;
pub mod pacs008;
pub mod party;
pub mod payment;

pub use head001::BusinessApplicationHeaderV02;
pub use pacs008::FIToFICustomerCreditTransferV08;

/// Message types, their components and the validator prelude.
pub mod prelude {
    pub use isomsg_codec::MessageDefinition;
    pub use isomsg_validator::prelude::*;

    pub use crate::account::{
        AccountIdentification4Choice, CashAccount38, GenericAccountIdentification1,
        ProxyAccountIdentification1,
    };
    pub use crate::agent::{
        BranchAndFinancialInstitutionIdentification6, BranchData3,
        ClearingSystemMemberIdentification2, FinancialInstitutionIdentification18,
    };
    pub use crate::amount::ActiveCurrencyAndAmount;
    pub use crate::codes::CodeOrProprietary;
    pub use crate::head001::{
        BusinessApplicationHeader5, BusinessApplicationHeaderV02, ImplementationSpecification1,
        Party44Choice,
    };
    pub use crate::pacs008::{
        CreditTransferTransaction39, FIToFICustomerCreditTransferV08, GroupHeader93,
    };
    pub use crate::party::{
        Contact4, DateAndPlaceOfBirth1, GenericIdentification, OrganisationIdentification29,
        Party38Choice, PartyIdentification135, PersonIdentification13, PostalAddress24,
    };
    pub use crate::payment::{
        Charges7, InstructionForCreditorAgent1, InstructionForNextAgent1, PaymentIdentification7,
        PaymentTypeInformation28, RemittanceInformation16, SettlementDateTimeIndication1,
        SettlementInstruction7,
    };
}
