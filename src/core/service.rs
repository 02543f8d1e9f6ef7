use crate::core::mapping::placeholder_rfqs;
use crate::core::resources::{EmptyPolicy, Resource};
use crate::domain::model::{
    Aging, AgingEntity, Collection, Envelope, GoodsReceipt, GoodsReceiptEntity, Invoice,
    InvoiceDocument, InvoiceEntity, LoginEntity, LoginRequest, Memo, MemoEntity, Profile,
    ProfileEntity, PurchaseOrder, PurchaseOrderEntity, Rfq, VendorId,
};
use crate::domain::ports::ErpGateway;
use crate::utils::error::{AdapterError, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub const LOGIN_SUCCESS: &str = "Login successful";

/// One method per portal endpoint. Each performs exactly one upstream call.
#[derive(Clone)]
pub struct VendorService {
    gateway: Arc<dyn ErpGateway>,
}

impl VendorService {
    pub fn new(gateway: Arc<dyn ErpGateway>) -> Self {
        Self { gateway }
    }

    /// Compares the supplied password with the one stored upstream, verbatim.
    /// Compares the supplied password with the one stored upstream. Both must
    /// be the same JSON value, so a numeric password never matches a string.
    pub async fn login(&self, request: LoginRequest) -> Result<&'static str> {
        let (lifnr, password) = request
            .credentials()
            .ok_or_else(|| AdapterError::bad_request("Lifnr and password are required"))?;

        let entity: LoginEntity = self
            .fetch_entity(Resource::Login, &lifnr)
            .await?
            .ok_or_else(|| AdapterError::not_found("Vendor not found"))?;

        if entity.password.as_ref() == Some(password) {
            tracing::info!(lifnr = %lifnr, "Vendor login succeeded");
            Ok(LOGIN_SUCCESS)
        } else {
            Err(AdapterError::unauthorized("Invalid password"))
        }
    }

    pub async fn profile(&self, vendor_id: &str) -> Result<Profile> {
        let vendor_id = VendorId::parse(vendor_id)?;
        let entity: ProfileEntity = self
            .fetch_entity(Resource::Profile, vendor_id.as_str())
            .await?
            .ok_or_else(|| AdapterError::not_found("Profile not found"))?;
        Ok(entity.into())
    }

    pub async fn goods_receipts(&self, vendor_id: &str) -> Result<Vec<GoodsReceipt>> {
        self.vendor_collection::<GoodsReceiptEntity, _>(Resource::GoodsReceipts, vendor_id)
            .await
    }

    pub async fn invoices(&self, vendor_id: &str) -> Result<Vec<Invoice>> {
        self.vendor_collection::<InvoiceEntity, _>(Resource::Invoices, vendor_id)
            .await
    }

    pub async fn memos(&self, vendor_id: &str) -> Result<Vec<Memo>> {
        self.vendor_collection::<MemoEntity, _>(Resource::Memos, vendor_id)
            .await
    }

    pub async fn purchase_orders(&self, vendor_id: &str) -> Result<Vec<PurchaseOrder>> {
        self.vendor_collection::<PurchaseOrderEntity, _>(Resource::PurchaseOrders, vendor_id)
            .await
    }

    pub async fn aging(&self, vendor_id: &str) -> Result<Vec<Aging>> {
        self.vendor_collection::<AgingEntity, _>(Resource::Aging, vendor_id)
            .await
    }

    /// Calls `ZATC_RFQSet` so upstream failures still surface, then answers
    /// with placeholder rows regardless of what came back.
    pub async fn rfqs(&self, vendor_id: &str) -> Result<Vec<Rfq>> {
        let vendor_id = VendorId::parse(vendor_id)?;
        let query = Resource::Rfqs.query(vendor_id.as_str());
        let _discarded = self.gateway.fetch_json(&query).await?;

        tracing::warn!(
            vendor_id = %vendor_id,
            "RFQ endpoint is serving placeholder data; upstream rows are ignored"
        );
        Ok(placeholder_rfqs())
    }

    pub async fn invoice_pdf(&self, invoice_id: &str) -> Result<InvoiceDocument> {
        if invoice_id.is_empty() {
            return Err(AdapterError::bad_request("Invoice ID is required"));
        }
        let query = Resource::InvoicePdf.query(invoice_id);
        let bytes = self.gateway.fetch_bytes(&query).await?;
        tracing::debug!("Downloaded invoice {} ({} bytes)", invoice_id, bytes.len());

        Ok(InvoiceDocument {
            file_name: format!("Invoice_{}.pdf", invoice_id),
            bytes,
        })
    }

    async fn fetch_entity<T: DeserializeOwned>(
        &self,
        resource: Resource,
        key: &str,
    ) -> Result<Option<T>> {
        let value = self.gateway.fetch_json(&resource.query(key)).await?;
        let envelope: Envelope<T> =
            serde_json::from_value(value).map_err(|e| AdapterError::decode(e.to_string()))?;
        Ok(envelope.d)
    }

    async fn vendor_collection<E, R>(&self, resource: Resource, vendor_id: &str) -> Result<Vec<R>>
    where
        E: DeserializeOwned,
        R: From<E>,
    {
        let vendor_id = VendorId::parse(vendor_id)?;
        let collection: Option<Collection<E>> =
            self.fetch_entity(resource, vendor_id.as_str()).await?;

        let records: Vec<R> = collection
            .map(Collection::into_results)
            .unwrap_or_default()
            .into_iter()
            .map(R::from)
            .collect();

        tracing::debug!(
            "{:?}: mapped {} records for vendor {}",
            resource,
            records.len(),
            vendor_id
        );

        match resource.empty_policy() {
            EmptyPolicy::NotFound(message) if records.is_empty() => {
                Err(AdapterError::not_found(message))
            }
            _ => Ok(records),
        }
    }
}
