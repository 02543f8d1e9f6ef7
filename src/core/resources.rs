use crate::domain::ports::{MediaType, UpstreamQuery};
use url::form_urlencoded;

/// The upstream resources the portal can reach, one per inbound endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Login,
    Profile,
    GoodsReceipts,
    Invoices,
    InvoicePdf,
    Memos,
    PurchaseOrders,
    Rfqs,
    Aging,
}

/// What a collection endpoint answers when the mapped result is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    NotFound(&'static str),
    EmptyList,
}

impl Resource {
    /// Label used in logs and in the `error` field of error envelopes.
    pub fn context(self) -> &'static str {
        match self {
            Resource::Login => "SAP Login Error",
            Resource::Profile => "SAP Profile Error",
            Resource::GoodsReceipts => "SAP Goods Receipt Error",
            Resource::Invoices => "SAP Invoice Error",
            Resource::InvoicePdf => "SAP Invoice PDF Error",
            Resource::Memos => "SAP Memo Error",
            Resource::PurchaseOrders => "SAP Purchase Order Error",
            Resource::Rfqs => "SAP RFQ Error",
            Resource::Aging => "SAP Aging Error",
        }
    }

    pub fn entity_set(self) -> &'static str {
        match self {
            Resource::Login => "ZVENDOR_ATCLOGINSet",
            Resource::Profile => "ZATC_VENDORPROFILESet",
            Resource::GoodsReceipts => "ZATC_GOODSSet",
            Resource::Invoices => "ZATC_INVOICETABLESet",
            Resource::InvoicePdf => "ZATC_OINVSet",
            Resource::Memos => "ZATC_MEMOSet",
            Resource::PurchaseOrders => "ZATC_PURCHASESet",
            Resource::Rfqs => "ZATC_RFQSet",
            Resource::Aging => "ZATC_V_AGINGSet",
        }
    }

    // Goods receipts and invoices answer 404 on empty; the others return [].
    pub fn empty_policy(self) -> EmptyPolicy {
        match self {
            Resource::GoodsReceipts => EmptyPolicy::NotFound("No goods receipts found"),
            Resource::Invoices => EmptyPolicy::NotFound("No invoices found"),
            _ => EmptyPolicy::EmptyList,
        }
    }

    /// Builds the upstream request for `key`. Vendor keys must already be padded.
    pub fn query(self, key: &str) -> UpstreamQuery {
        let key = encode_key(key);
        let set = self.entity_set();

        let (path, filter, accept) = match self {
            Resource::Login => (format!("{set}(Lifnr='{key}')"), None, MediaType::Json),
            Resource::Profile => (format!("{set}(VendorId='{key}')"), None, MediaType::Json),
            Resource::InvoicePdf => (format!("{set}('{key}')/$value"), None, MediaType::Pdf),
            Resource::Rfqs => (
                set.to_string(),
                Some(format!("(Lifnr eq '{key}')")),
                MediaType::Json,
            ),
            Resource::GoodsReceipts
            | Resource::Invoices
            | Resource::Memos
            | Resource::PurchaseOrders
            | Resource::Aging => (
                set.to_string(),
                Some(format!("(VendorId eq '{key}')")),
                MediaType::Json,
            ),
        };

        UpstreamQuery {
            path,
            filter,
            accept,
        }
    }
}

/// Escapes a key for use inside an OData string literal in a URL.
///
/// Quotes are doubled per OData, then every byte outside `[A-Za-z0-9*-._]` is
/// percent-encoded so the key stays inside its literal in both path and query.
fn encode_key(raw: &str) -> String {
    let literal = raw.replace('\'', "''");
    form_urlencoded::byte_serialize(literal.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
