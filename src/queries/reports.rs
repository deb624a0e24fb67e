//! Price-discrepancy report queries against `/api/signalements`.

use chrono::Utc;
use tracing::info;

use crate::client::{ApiClient, Submission};
use crate::config::REPORTS_PATH;
use crate::error::Result;
use crate::models::{
    NewReport, PriceReportForm, ProductId, RegionId, Report, ReportStats, ReportStatus,
    ReportUpdate, UserId,
};

// ---------------------------------------------------------------------------
// ReportQuery
// ---------------------------------------------------------------------------

/// Query interface for user price reports.
pub struct ReportQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> ReportQuery<'a> {
    /// Create a new `ReportQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<Report>> {
        self.client.get(REPORTS_PATH)
    }

    pub fn get(&self, id: i64) -> Result<Report> {
        self.client.get(&format!("{REPORTS_PATH}/{id}"))
    }

    /// Post a fully formed report.
    pub fn create(&self, report: NewReport) -> Result<Report> {
        self.client.submit(&Submission::Report(report))
    }

    pub fn update(&self, id: i64, update: &ReportUpdate) -> Result<Report> {
        self.client.put(&format!("{REPORTS_PATH}/{id}"), update)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("{REPORTS_PATH}/{id}"))
    }

    pub fn by_user(&self, user_id: UserId) -> Result<Vec<Report>> {
        self.filtered(|r| r.user.id == user_id)
    }

    pub fn by_product(&self, product_id: ProductId) -> Result<Vec<Report>> {
        self.filtered(|r| r.product.id == product_id)
    }

    pub fn by_region(&self, region_id: RegionId) -> Result<Vec<Report>> {
        self.filtered(|r| r.region.id == region_id)
    }

    pub fn by_status(&self, status: ReportStatus) -> Result<Vec<Report>> {
        self.filtered(|r| r.status == status)
    }

    /// Counts by status, product name and region name.
    pub fn stats(&self) -> Result<ReportStats> {
        Ok(ReportStats::from_reports(&self.list()?))
    }

    /// Validate a report form and file it as pending, stamped now.
    ///
    /// Rejects non-positive observed prices before anything is sent.
    pub fn submit_price_report(&self, form: PriceReportForm) -> Result<Report> {
        let report = form.into_new_report(Utc::now())?;
        let created = self.create(report)?;
        info!(report_id = created.id, product_id = created.product.id, "price report filed");
        Ok(created)
    }

    fn filtered(&self, keep: impl Fn(&Report) -> bool) -> Result<Vec<Report>> {
        Ok(self.list()?.into_iter().filter(|r| keep(r)).collect())
    }
}
