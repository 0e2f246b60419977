//! Invoices, the billing profile, and the billing statement view.
//!
//! The mock platform keeps a single billing profile shared by every
//! advertiser, and invoices are not linked to a ledger. A statement is
//! derived on request from whatever invoices are stored.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::filter::Filterable;
use super::labels::labelled_enum;
use super::record::{Record, RecordId, merge};

labelled_enum! {
    /// Settlement state of an invoice.
    pub enum InvoiceStatus {
        /// Settled.
        Paid => "paid",
        /// Issued, awaiting payment.
        Pending => "pending",
        /// Past its due date.
        Overdue => "overdue",
    }
}

/// A billed amount for a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Store identity, `invoice-*`.
    pub id: RecordId,
    /// Billing date.
    pub date: NaiveDate,
    /// Billed amount.
    pub amount: f64,
    /// Settlement state.
    pub status: InvoiceStatus,
    /// Campaign name the amount is billed for.
    pub campaign: String,
}

/// Fields supplied when creating an invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    /// Billed amount; never zero.
    pub amount: f64,
    /// Campaign name.
    pub campaign: String,
    /// Settlement state; defaults to pending.
    pub status: Option<InvoiceStatus>,
}

/// Partial update of an invoice.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePatch {
    /// New amount.
    pub amount: Option<f64>,
    /// New settlement state.
    pub status: Option<InvoiceStatus>,
    /// New campaign name.
    pub campaign: Option<String>,
}

impl Record for Invoice {
    const PREFIX: &'static str = "invoice";
    const LABEL: &'static str = "Invoice";

    type Draft = InvoiceDraft;
    type Patch = InvoicePatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: InvoiceDraft) -> Self {
        Self {
            id,
            date: created_at.date_naive(),
            amount: draft.amount,
            status: draft.status.unwrap_or(InvoiceStatus::Pending),
            campaign: draft.campaign,
        }
    }

    fn apply_patch(&mut self, patch: InvoicePatch) {
        merge(&mut self.amount, patch.amount);
        merge(&mut self.status, patch.status);
        merge(&mut self.campaign, patch.campaign);
    }
}

impl Filterable for Invoice {
    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.campaign]
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

/// A stored card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    /// Method identity, e.g. `pm-1`.
    pub id: String,
    /// Card network, e.g. `visa`.
    #[serde(rename = "type")]
    pub network: String,
    /// Last four digits.
    pub last4: String,
    /// Expiry as `MM/YY`.
    pub expiry: String,
    /// Whether charges use this method by default.
    pub is_default: bool,
}

/// Account-wide balance and payment methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillingProfile {
    /// Outstanding balance.
    pub current_balance: f64,
    /// Maximum unpaid balance.
    pub credit_limit: f64,
    /// Stored payment methods.
    pub payment_methods: Vec<PaymentMethod>,
}

/// Billing profile as seen by one advertiser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillingAccount {
    /// Advertiser the view is for.
    pub advertiser_id: RecordId,
    /// Outstanding balance.
    pub balance: f64,
    /// Maximum unpaid balance.
    pub credit_limit: f64,
    /// Stored payment methods.
    pub payment_methods: Vec<PaymentMethod>,
}

impl BillingProfile {
    /// Advertiser used when a request does not name one.
    pub const DEFAULT_ADVERTISER: &'static str = "adv-1";

    /// View of the profile for `advertiser_id`.
    #[must_use]
    pub fn account_for(&self, advertiser_id: RecordId) -> BillingAccount {
        BillingAccount {
            advertiser_id,
            balance: self.current_balance,
            credit_limit: self.credit_limit,
            payment_methods: self.payment_methods.clone(),
        }
    }

    /// View for [`Self::DEFAULT_ADVERTISER`].
    #[must_use]
    pub fn default_account(&self) -> BillingAccount {
        self.account_for(RecordId::new(Self::DEFAULT_ADVERTISER))
    }
}

/// Invoice totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillingSummary {
    /// Sum of paid invoices.
    pub total_paid: f64,
    /// Sum of pending invoices.
    pub total_pending: f64,
    /// Number of invoices.
    pub total_invoices: usize,
}

/// Billing account, invoices newest first, and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillingStatement {
    /// Account view.
    pub billing_info: BillingAccount,
    /// Invoices sorted by date, newest first.
    pub invoices: Vec<Invoice>,
    /// Totals over `invoices`.
    pub summary: BillingSummary,
}

impl BillingStatement {
    /// Assemble a statement. Invoices on the same date keep their stored order.
    #[must_use]
    pub fn build(billing_info: BillingAccount, mut invoices: Vec<Invoice>) -> Self {
        invoices.sort_by_key(|invoice| Reverse(invoice.date));
        let summary = BillingSummary {
            total_paid: sum_with_status(&invoices, InvoiceStatus::Paid),
            total_pending: sum_with_status(&invoices, InvoiceStatus::Pending),
            total_invoices: invoices.len(),
        };
        Self {
            billing_info,
            invoices,
            summary,
        }
    }
}

fn sum_with_status(invoices: &[Invoice], status: InvoiceStatus) -> f64 {
    invoices
        .iter()
        .filter(|invoice| invoice.status == status)
        .map(|invoice| invoice.amount)
        .sum()
}
