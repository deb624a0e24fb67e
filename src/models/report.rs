use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{EntityRef, Product, Region};
use super::user::User;
use super::{ProductId, RegionId, UserId};

// ---------------------------------------------------------------------------
// Report — A user-filed price discrepancy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    #[serde(rename = "EN_ATTENTE")]
    Pending,
    #[serde(rename = "VALIDE")]
    Validated,
    #[serde(rename = "REJETE")]
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    #[serde(rename = "utilisateur")]
    pub user: User,
    #[serde(rename = "produit")]
    pub product: Product,
    pub region: Region,
    #[serde(rename = "prixObserve")]
    pub observed_price: f64,
    #[serde(rename = "commentaire", default)]
    pub comment: String,
    #[serde(rename = "dateSignalement", with = "super::timestamp")]
    pub reported_at: DateTime<Utc>,
    #[serde(rename = "statut")]
    pub status: ReportStatus,
}

/// Body posted to create a report. Entities are referenced by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReport {
    #[serde(rename = "utilisateur")]
    pub user: EntityRef,
    #[serde(rename = "produit")]
    pub product: EntityRef,
    pub region: EntityRef,
    #[serde(rename = "prixObserve")]
    pub observed_price: f64,
    #[serde(rename = "commentaire")]
    pub comment: String,
    #[serde(rename = "dateSignalement", with = "super::timestamp")]
    pub reported_at: DateTime<Utc>,
    #[serde(rename = "statut")]
    pub status: ReportStatus,
}

/// Partial update for an existing report; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportUpdate {
    #[serde(rename = "prixObserve", skip_serializing_if = "Option::is_none")]
    pub observed_price: Option<f64>,
    #[serde(rename = "commentaire", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "statut", skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
}

/// What a user fills in on the report form.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceReportForm {
    pub product_id: ProductId,
    pub region_id: RegionId,
    pub user_id: UserId,
    pub observed_price: f64,
    pub comment: Option<String>,
}

impl PriceReportForm {
    /// Convert into a pending report stamped at `now`.
    ///
    /// Fails when the observed price is not a positive finite number.
    pub fn into_new_report(self, now: DateTime<Utc>) -> crate::Result<NewReport> {
        if !self.observed_price.is_finite() || self.observed_price <= 0.0 {
            return Err(crate::PriceTrackerError::InvalidArgument(format!(
                "observed price must be a positive number, got {}",
                self.observed_price
            )));
        }
        Ok(NewReport {
            user: self.user_id.into(),
            product: self.product_id.into(),
            region: self.region_id.into(),
            observed_price: self.observed_price,
            comment: self.comment.unwrap_or_default(),
            reported_at: now,
            status: ReportStatus::Pending,
        })
    }
}

// ---------------------------------------------------------------------------
// ReportStats — Counts over a report collection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total: usize,
    pub pending: usize,
    pub validated: usize,
    pub rejected: usize,
    pub by_product: BTreeMap<String, usize>,
    pub by_region: BTreeMap<String, usize>,
}

impl ReportStats {
    pub fn from_reports(reports: &[Report]) -> Self {
        let mut stats = Self {
            total: reports.len(),
            ..Self::default()
        };
        for report in reports {
            match report.status {
                ReportStatus::Pending => stats.pending += 1,
                ReportStatus::Validated => stats.validated += 1,
                ReportStatus::Rejected => stats.rejected += 1,
            }
            *stats
                .by_product
                .entry(report.product.name.clone())
                .or_default() += 1;
            *stats.by_region.entry(report.region.name.clone()).or_default() += 1;
        }
        stats
    }
}
