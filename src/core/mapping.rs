use crate::core::date::normalize_date;
use crate::domain::model::{
    Aging, AgingEntity, GoodsReceipt, GoodsReceiptEntity, Invoice, InvoiceEntity, Memo,
    MemoEntity, Profile, ProfileEntity, PurchaseOrder, PurchaseOrderEntity, Rfq,
};

impl From<ProfileEntity> for Profile {
    fn from(e: ProfileEntity) -> Self {
        Self {
            vendor_id: e.vendor_id,
            name: e.name,
            city: e.city,
            country: e.country,
            postcode: e.postcode,
            street: e.street,
        }
    }
}

impl From<GoodsReceiptEntity> for GoodsReceipt {
    fn from(e: GoodsReceiptEntity) -> Self {
        Self {
            post_date: normalize_date(e.post_date.as_ref()),
            entry_date: normalize_date(e.entry_date.as_ref()),
            material_doc: e.material_doc,
            doc_year: e.doc_year,
            po_number: e.po_number,
            po_item: e.po_item,
            material: e.material,
            quantity: e.quantity,
            unit: e.unit,
            vendor_id: e.vendor_id,
        }
    }
}

impl From<InvoiceEntity> for Invoice {
    fn from(e: InvoiceEntity) -> Self {
        Self {
            invoice_date: normalize_date(e.invoice_date.as_ref()),
            invoice_no: e.invoice_no,
            total_amount: e.total_amount,
            currency: e.currency,
            payment_terms: e.payment_terms,
            po_no: e.po_no,
            po_item: e.po_item,
            material_no: e.material_no,
            description: e.description,
            quantity: e.quantity,
            unit_price: e.unit_price,
            unit: e.unit,
        }
    }
}

impl From<MemoEntity> for Memo {
    fn from(e: MemoEntity) -> Self {
        Self {
            posting_date: normalize_date(e.posting_date.as_ref()),
            entry_date: normalize_date(e.entry_date.as_ref()),
            memo_doc: e.memo_doc,
            doc_year: e.doc_year,
            vendor_id: e.vendor_id,
            memo_type: e.memo_type,
            amount: e.amount,
            currency: e.currency,
            reference_doc_no: e.reference_doc_no,
            doc_type: e.doc_type,
            company_code: e.company_code,
        }
    }
}

impl From<PurchaseOrderEntity> for PurchaseOrder {
    fn from(e: PurchaseOrderEntity) -> Self {
        Self {
            delivery_date: normalize_date(e.delivery_date.as_ref()),
            doc_date: normalize_date(e.doc_date.as_ref()),
            vendor_id: e.vendor_id,
            material: e.material,
            unit: e.unit,
            po_number: e.po_number,
            item_number: e.item_number,
        }
    }
}

impl From<AgingEntity> for Aging {
    fn from(e: AgingEntity) -> Self {
        Self {
            payment_date: normalize_date(e.payment_date.as_ref()),
            entry_date: normalize_date(e.entry_date.as_ref()),
            due_date: normalize_date(e.due_date.as_ref()),
            payment_doc: e.payment_doc,
            doc_year: e.doc_year,
            vendor_id: e.vendor_id,
            amount_paid: e.amount_paid,
            currency: e.currency,
            aging: e.aging,
        }
    }
}

const PLACEHOLDER_RFQ_START: u64 = 6_000_000_000;
const PLACEHOLDER_RFQ_COUNT: u64 = 5;

// TODO: replace with a real ZATC_RFQSet mapping once product confirms the RFQ field list.
pub fn placeholder_rfqs() -> Vec<Rfq> {
    (0..PLACEHOLDER_RFQ_COUNT)
        .map(|offset| Rfq {
            rfq_number: (PLACEHOLDER_RFQ_START + offset).to_string(),
            material: "13".to_string(),
            description: "Wood".to_string(),
            created_date: "May 30, 2025".to_string(),
            target_date: "Nov 30, 2025".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_goods_receipt_mapping_normalizes_dates() {
        let entity: GoodsReceiptEntity = serde_json::from_value(json!({
            "MaterialDoc": "5000000001",
            "DocYear": "2025",
            "PostDate": "/Date(1748563200000)/",
            "EntryDate": "20250531",
            "PoNumber": "4500000010",
            "PoItem": "00010",
            "Material": "13",
            "Quantity": "10.000",
            "Unit": "EA",
            "VendorId": "0000012345"
        }))
        .unwrap();

        let record = GoodsReceipt::from(entity);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "materialDoc": "5000000001",
                "docYear": "2025",
                "postDate": "2025-05-30",
                "entryDate": "2025-05-31",
                "poNumber": "4500000010",
                "poItem": "00010",
                "material": "13",
                "quantity": "10.000",
                "unit": "EA",
                "vendorId": "0000012345"
            })
        );
    }

    #[test]
    fn test_unparseable_date_is_dropped() {
        let entity: AgingEntity = serde_json::from_value(json!({
            "PaymentDoc": "1500000001",
            "PaymentDate": "soon",
            "DueDate": "20250615",
            "Aging": 12
        }))
        .unwrap();

        let record = Aging::from(entity);
        assert_eq!(record.payment_date, None);
        assert_eq!(record.due_date.as_deref(), Some("2025-06-15"));
        assert_eq!(record.aging, Some(json!(12)));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"paymentDoc": "1500000001", "dueDate": "2025-06-15", "aging": 12})
        );
    }

    #[test]
    fn test_invoice_and_memo_field_names() {
        let invoice = Invoice::from(
            serde_json::from_value::<InvoiceEntity>(json!({
                "InvoiceNo": "5100000123",
                "InvoiceDate": "20250101",
                "PoNo": "4500000010",
                "UnitPrice": "2.50"
            }))
            .unwrap(),
        );
        assert_eq!(
            serde_json::to_value(&invoice).unwrap(),
            json!({
                "invoiceNo": "5100000123",
                "invoiceDate": "2025-01-01",
                "poNo": "4500000010",
                "unitPrice": "2.50"
            })
        );

        let memo = Memo::from(
            serde_json::from_value::<MemoEntity>(json!({
                "MemoDoc": "M1",
                "ReferenceDocNo": "R1",
                "CompanyCode": "1000"
            }))
            .unwrap(),
        );
        assert_eq!(
            serde_json::to_value(&memo).unwrap(),
            json!({"memoDoc": "M1", "referenceDocNo": "R1", "companyCode": "1000"})
        );
    }

    #[test]
    fn test_placeholder_rfqs() {
        let rfqs = placeholder_rfqs();
        assert_eq!(rfqs.len(), 5);
        assert_eq!(rfqs[0].rfq_number, "6000000000");
        assert_eq!(rfqs[4].rfq_number, "6000000004");
        assert_eq!(
            serde_json::to_value(&rfqs[0]).unwrap(),
            json!({
                "rfqNumber": "6000000000",
                "material": "13",
                "description": "Wood",
                "createdDate": "May 30, 2025",
                "targetDate": "Nov 30, 2025"
            })
        );
    }
}
